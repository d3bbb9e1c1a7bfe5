//! Prometheus metrics

use crate::strategy::Signal;
use metrics::{counter, gauge};

/// Count a raw feed update, admitted or not
pub fn record_update_received() {
    counter!("pythsignal_updates_received_total").increment(1);
}

/// Count a sample admitted into the rolling window
pub fn record_sample_admitted() {
    counter!("pythsignal_samples_admitted_total").increment(1);
}

/// Count an emitted signal by kind
pub fn record_signal(signal: Signal) {
    counter!("pythsignal_signals_total", "signal" => signal.label()).increment(1);
}

/// Latest scaled price
pub fn set_price(value: f64) {
    gauge!("pythsignal_price").set(value);
}

/// Latest moving average (only set once the window is full)
pub fn set_moving_average(value: f64) {
    gauge!("pythsignal_moving_average").set(value);
}

/// Current rolling window fill count
pub fn set_window_fill(filled: usize) {
    gauge!("pythsignal_window_fill").set(filled as f64);
}
