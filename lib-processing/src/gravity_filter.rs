use crate::*;
use cfg_if::cfg_if;

/// A single timestamped accelerometer reading.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample
{
    /// In milliseconds; monotonic time at which the reading was taken.
    pub timestamp: i64,

    /// In m/s^2; raw reading, gravity included.
    pub raw: Vector,
}

impl Sample {
    pub const fn new(timestamp: i64, raw: Vector) -> Self {
        Sample { timestamp, raw }
    }
}

/// Result of one accepted update.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOutput
{
    /// Gravity estimate after taking the sample into account.
    pub gravity: Vector,

    /// Raw reading minus the updated gravity estimate.
    pub linear: Vector,

    pub gravity_magnitude: f64,
    pub linear_magnitude: f64,
}

/// Separates the slowly changing gravity component of accelerometer readings from the linear
/// acceleration using a single pole low-pass filter on every axis:
///
/// ```text
/// gravity = gravity * (1 - alpha) + raw * alpha
/// linear  = raw - gravity
/// ```
///
/// Updates are throttled by an [`UpdateGate`] so the effective sample rate of the filter does
/// not depend on how fast the sensor delivers readings.
///
pub struct GravityFilter
{
    config: FilterConfig,

    gate: UpdateGate,

    /// In m/s^2; current gravity estimate, starts at zero.
    gravity: Vector,

    /// Number of samples that made it through the gate.
    #[cfg(feature = "debug")]
    pub accepted: u32,

    /// Number of samples dropped by the gate.
    #[cfg(feature = "debug")]
    pub dropped: u32,
}

impl GravityFilter
{
    #[inline]
    pub fn new(config: FilterConfig) -> Self {
        GravityFilter {
            config,
            gate: UpdateGate::new(config.min_update_interval_ms()),
            gravity: Vector::zero(),
            #[cfg(feature = "debug")]
            accepted: 0,
            #[cfg(feature = "debug")]
            dropped: 0,
        }
    }

    /// Feed one sample to the filter. Returns `None` when the sample arrived too soon after the
    /// previously accepted one, in which case the filter is left exactly as it was.
    ///
    pub fn update(&mut self, sample: Sample) -> Option<FilterOutput> {
        if !self.gate.try_accept(sample.timestamp) {
            log::trace!("Dropped sample at {}ms", sample.timestamp);
            cfg_if!{ if #[cfg(feature = "debug")] {
                self.dropped += 1;
            }}
            return None;
        }

        cfg_if!{ if #[cfg(feature = "debug")] {
            self.accepted += 1;
        }}

        // Give the gravity reading some inertia.
        let alpha = self.config.convergence_speed();
        self.gravity = self.gravity * (1.0 - alpha) + sample.raw * alpha;

        // That which isn't gravity is the acceleration. Must use the updated estimate.
        let linear = sample.raw - self.gravity;

        let output = FilterOutput {
            gravity: self.gravity,
            linear,
            gravity_magnitude: self.gravity.magnitude(),
            linear_magnitude: linear.magnitude(),
        };

        log::debug!(
            "t={}ms gravity={:.4} acceleration={:.4}",
            sample.timestamp, output.gravity_magnitude, output.linear_magnitude
        );

        Some(output)
    }

    /// Current gravity estimate.
    #[inline]
    pub fn gravity(&self) -> Vector {
        self.gravity
    }

    /// In milliseconds; timestamp of the last accepted sample, `None` if nothing was accepted yet.
    #[inline]
    pub fn last_accepted(&self) -> Option<i64> {
        self.gate.last_accepted()
    }

    #[inline]
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Forget everything, as if the filter was just constructed.
    ///
    pub fn reset(&mut self) {
        self.gate.reset();
        self.gravity = Vector::zero();
        cfg_if!{ if #[cfg(feature = "debug")] {
            self.accepted = 0;
            self.dropped = 0;
        }}
    }
}

impl Default for GravityFilter {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}
