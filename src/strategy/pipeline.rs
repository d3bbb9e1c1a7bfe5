//! Per-event orchestration
//!
//! Wires admitter, window, average, and signal generation in fixed order.
//! Each feed event runs synchronously to completion; the pipeline owns all
//! rolling state, so it stays unit-testable without a live connection.

use super::{generate_signal, window_average, RollingWindow, SampleAdmitter, Signal};
use crate::config::StrategyConfig;
use crate::feed::PriceUpdate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Moving-average readiness for one processed event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowStatus {
    /// Window not yet at capacity; no average available
    Filling { filled: usize, capacity: usize },
    /// Window full; average and signal available
    Ready { average: Decimal, signal: Signal },
}

/// Outcome of processing one price update
#[derive(Debug, Clone, Serialize)]
pub struct TickReport {
    pub symbol: String,
    pub price: Decimal,
    /// Whether this event's sample entered the window
    pub admitted: bool,
    pub status: WindowStatus,
}

impl TickReport {
    /// Moving average, when the window is full
    pub fn average(&self) -> Option<Decimal> {
        match self.status {
            WindowStatus::Ready { average, .. } => Some(average),
            WindowStatus::Filling { .. } => None,
        }
    }

    /// Signal, when the window is full
    pub fn signal(&self) -> Option<Signal> {
        match self.status {
            WindowStatus::Ready { signal, .. } => Some(signal),
            WindowStatus::Filling { .. } => None,
        }
    }
}

impl std::fmt::Display for TickReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} price {}", self.symbol, self.price)?;
        match self.status {
            WindowStatus::Ready { average, signal } => {
                write!(f, " moving average {} signal {}", average, signal)
            }
            WindowStatus::Filling { filled, capacity } => {
                write!(f, " moving average not ready ({} of {})", filled, capacity)
            }
        }
    }
}

/// Streaming pipeline from decoded price updates to tick reports
#[derive(Debug)]
pub struct TickPipeline {
    admitter: SampleAdmitter,
    window: RollingWindow,
}

impl TickPipeline {
    /// Build a pipeline from strategy configuration
    pub fn new(config: &StrategyConfig) -> Self {
        Self {
            admitter: SampleAdmitter::new(config.min_sample_interval_secs),
            window: RollingWindow::new(config.window_capacity),
        }
    }

    /// Process one decoded price update
    ///
    /// Admitted samples enter the window; the report always carries the
    /// current price, plus the average and signal once the window is full.
    /// Readiness depends only on fill count, never on elapsed wall-clock
    /// time, so a slow feed stays "not ready" longer.
    pub fn on_update(&mut self, update: &PriceUpdate) -> TickReport {
        let admitted = self.admitter.admit(update.publish_time);
        if admitted {
            self.window.push(update.price);
        }

        let status = match window_average(&self.window) {
            Some(average) => WindowStatus::Ready {
                average,
                signal: generate_signal(update.price, average),
            },
            None => WindowStatus::Filling {
                filled: self.window.len(),
                capacity: self.window.capacity(),
            },
        };

        TickReport {
            symbol: update.symbol.clone(),
            price: update.price,
            admitted,
            status,
        }
    }

    /// Number of samples currently in the window
    pub fn sample_count(&self) -> usize {
        self.window.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn config(capacity: usize, interval: i64) -> StrategyConfig {
        StrategyConfig {
            window_capacity: capacity,
            min_sample_interval_secs: interval,
        }
    }

    fn update(price: Decimal, publish_time: i64) -> PriceUpdate {
        PriceUpdate {
            symbol: "SOL".to_string(),
            price,
            publish_time,
            received_at: Utc::now(),
        }
    }

    #[test]
    fn test_fills_then_signals_sell() {
        // Scenario: capacity 3, one event per second, rising prices
        let mut pipeline = TickPipeline::new(&config(3, 1));

        let r1 = pipeline.on_update(&update(dec!(100), 0));
        assert_eq!(
            r1.status,
            WindowStatus::Filling {
                filled: 1,
                capacity: 3
            }
        );

        let r2 = pipeline.on_update(&update(dec!(102), 1));
        assert!(r2.average().is_none());

        let r3 = pipeline.on_update(&update(dec!(104), 2));
        assert_eq!(r3.average(), Some(dec!(102)));
        assert_eq!(r3.signal(), Some(Signal::Sell));
        assert_eq!(r3.price, dec!(104));
    }

    #[test]
    fn test_rejected_sample_leaves_window_alone() {
        let mut pipeline = TickPipeline::new(&config(3, 1));

        pipeline.on_update(&update(dec!(100), 10));
        // Second event in the same second is rejected by the admitter
        let report = pipeline.on_update(&update(dec!(999), 10));

        assert_eq!(pipeline.sample_count(), 1);
        assert!(!report.admitted);
        assert_eq!(
            report.status,
            WindowStatus::Filling {
                filled: 1,
                capacity: 3
            }
        );
        // The rejected event's price is still reported
        assert_eq!(report.price, dec!(999));
    }

    #[test]
    fn test_not_ready_report_shows_progress() {
        let mut pipeline = TickPipeline::new(&config(10, 1));

        let mut last = None;
        for ts in 0..4 {
            last = Some(pipeline.on_update(&update(dec!(50), ts)));
        }

        let report = last.unwrap();
        assert_eq!(
            report.status,
            WindowStatus::Filling {
                filled: 4,
                capacity: 10
            }
        );
        assert_eq!(
            report.to_string(),
            "SOL price 50 moving average not ready (4 of 10)"
        );
    }

    #[test]
    fn test_hold_when_price_equals_average() {
        let mut pipeline = TickPipeline::new(&config(2, 1));

        pipeline.on_update(&update(dec!(100), 0));
        let report = pipeline.on_update(&update(dec!(100), 1));

        assert_eq!(report.average(), Some(dec!(100)));
        assert_eq!(report.signal(), Some(Signal::Hold));
    }

    #[test]
    fn test_steady_state_keeps_reporting() {
        let mut pipeline = TickPipeline::new(&config(3, 1));

        for ts in 0..3 {
            pipeline.on_update(&update(dec!(100), ts));
        }
        // Window full; every further admitted sample evicts the oldest
        let report = pipeline.on_update(&update(dec!(130), 3));
        assert_eq!(pipeline.sample_count(), 3);
        assert_eq!(report.average(), Some(dec!(110)));
        assert_eq!(report.signal(), Some(Signal::Sell));
    }

    #[test]
    fn test_zero_capacity_window_never_reports_average() {
        // Rejected at config load, but the pipeline itself must not divide
        // by zero if constructed this way
        let mut pipeline = TickPipeline::new(&config(0, 1));
        let report = pipeline.on_update(&update(dec!(100), 0));
        assert!(report.average().is_none());
        assert!(report.signal().is_none());
        assert_eq!(pipeline.sample_count(), 0);
    }

    #[test]
    fn test_ready_report_display() {
        let mut pipeline = TickPipeline::new(&config(2, 1));
        pipeline.on_update(&update(dec!(100), 0));
        let report = pipeline.on_update(&update(dec!(104), 1));
        assert_eq!(
            report.to_string(),
            "SOL price 104 moving average 102 signal SELL"
        );
    }
}
