//! Time-gated sample admission
//!
//! The feed can publish several updates per second; the rolling window
//! should reflect distinct time steps, not raw message frequency. The
//! admitter accepts at most one sample per configured interval, keyed on
//! the feed's publish timestamp.

/// Decides whether an incoming price may enter the rolling window
#[derive(Debug, Clone)]
pub struct SampleAdmitter {
    /// Minimum seconds between admitted samples
    min_interval_secs: i64,
    /// Publish time of the last admitted sample, None until the first
    last_admitted: Option<i64>,
}

impl SampleAdmitter {
    /// Create an admitter with the given minimum interval in seconds
    pub fn new(min_interval_secs: i64) -> Self {
        Self {
            min_interval_secs,
            last_admitted: None,
        }
    }

    /// Decide whether a sample with this publish time is admitted
    ///
    /// The first sample is always admitted. Afterwards a sample is admitted
    /// iff at least `min_interval_secs` have elapsed since the last admitted
    /// publish time. Rejection leaves the admitter state untouched.
    pub fn admit(&mut self, publish_time: i64) -> bool {
        let admitted = match self.last_admitted {
            None => true,
            Some(last) => publish_time - last >= self.min_interval_secs,
        };
        if admitted {
            self.last_admitted = Some(publish_time);
        }
        admitted
    }

    /// Publish time of the last admitted sample, if any
    pub fn last_admitted(&self) -> Option<i64> {
        self.last_admitted
    }
}
