//! Strategy core
//!
//! Streaming moving-average computation over admitted price samples:
//! time-gated admission, fixed-capacity rolling window, full-window
//! average, and price-vs-average signal generation.

mod admitter;
mod average;
mod pipeline;
mod signal;
mod window;

pub use admitter::SampleAdmitter;
pub use average::window_average;
pub use pipeline::{TickPipeline, TickReport, WindowStatus};
pub use signal::{generate_signal, Signal};
pub use window::RollingWindow;
