//! Moving-average calculation over a full window

use super::RollingWindow;
use rust_decimal::Decimal;

/// Arithmetic mean of the window contents, `None` until the window is full
///
/// The average is recomputed from the current values on every call; there
/// is no incremental running sum to drift out of sync with eviction.
pub fn window_average(window: &RollingWindow) -> Option<Decimal> {
    // A zero-capacity window is "full" while empty; its average is undefined
    if window.is_empty() || !window.is_full() {
        return None;
    }

    let sum: Decimal = window.values().sum();
    Some(sum / Decimal::from(window.len()))
}
