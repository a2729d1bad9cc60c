/// Minimum interval throttle. Decides whether a sample arrived late enough after the previously
/// accepted one to be processed at all.
///
/// Timestamps are expected to be non-decreasing but this is not validated: an out-of-order
/// timestamp gives a negative gap, which is never larger than the interval, so the sample is
/// simply dropped.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateGate
{
    /// In milliseconds; a gap must be strictly larger than this to pass.
    min_interval_ms: u32,

    /// In milliseconds; timestamp of the last accepted sample, `None` if nothing passed yet.
    last_accepted: Option<i64>,
}

impl UpdateGate
{
    #[inline]
    pub const fn new(min_interval_ms: u32) -> Self {
        UpdateGate {
            min_interval_ms,
            last_accepted: None,
        }
    }

    /// Would a sample at `timestamp` pass the gate? Does not change the gate.
    ///
    /// Note the strict comparison: a sample landing exactly on the interval boundary does not
    /// pass.
    ///
    pub fn is_due(&self, timestamp: i64) -> bool {
        match self.last_accepted {
            None => true,
            Some(last) => timestamp.saturating_sub(last) > i64::from(self.min_interval_ms),
        }
    }

    /// Lets the sample through and remembers its timestamp if it is due, otherwise leaves the
    /// gate untouched.
    ///
    pub fn try_accept(&mut self, timestamp: i64) -> bool {
        if !self.is_due(timestamp) {
            return false;
        }
        self.last_accepted = Some(timestamp);
        true
    }

    #[inline]
    pub fn last_accepted(&self) -> Option<i64> {
        self.last_accepted
    }

    #[inline]
    pub fn min_interval_ms(&self) -> u32 {
        self.min_interval_ms
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}
