//! Fixed-capacity rolling window of admitted prices

use rust_decimal::Decimal;
use std::collections::VecDeque;

/// FIFO buffer of the most recent admitted prices
///
/// Holds at most `capacity` values in chronological admission order.
/// Pushing onto a full window evicts the oldest value.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    prices: VecDeque<Decimal>,
    capacity: usize,
}

impl RollingWindow {
    /// Create an empty window with the given capacity
    pub fn new(capacity: usize) -> Self {
        Self {
            prices: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a price, evicting the oldest once over capacity
    pub fn push(&mut self, price: Decimal) {
        self.prices.push_back(price);
        while self.prices.len() > self.capacity {
            self.prices.pop_front();
        }
    }

    /// Whether the window has reached capacity
    pub fn is_full(&self) -> bool {
        self.prices.len() == self.capacity
    }

    /// Number of prices currently held
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the window holds no prices
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current prices in chronological admission order
    pub fn values(&self) -> impl Iterator<Item = &Decimal> {
        self.prices.iter()
    }
}
