//! pyth-signal: moving-average trading signal bot for Pyth price feeds
//!
//! This library provides the core components for:
//! - Real-time price updates from the Pyth Hermes WebSocket
//! - Time-gated admission of samples into a rolling window
//! - Moving-average computation once the window is full
//! - BUY/SELL/HOLD signal generation from price vs average
//! - Structured logging and Prometheus metrics

pub mod cli;
pub mod config;
pub mod feed;
pub mod strategy;
pub mod telemetry;
pub mod ws;
