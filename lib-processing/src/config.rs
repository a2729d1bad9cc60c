use core::{error::Error, fmt};

/// Blend weight given to a new reading when it is not configured explicitly.
pub const DEFAULT_CONVERGENCE_SPEED: f32 = 0.3;

/// In milliseconds; floor of the update interval when it is not configured explicitly.
pub const DEFAULT_MIN_UPDATE_INTERVAL_MS: u32 = 100;

/// Construction time settings of a [`GravityFilter`](crate::GravityFilter).
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig
{
    /// Weight of the newest reading in the gravity estimate, in `(0, 1]`. Values closer to 1.0
    /// follow the readings faster, lower values yield a more stable gravity estimate.
    convergence_speed: f32,

    /// In milliseconds; samples arriving this soon (or sooner) after the last accepted sample
    /// are dropped.
    min_update_interval_ms: u32,
}

impl FilterConfig
{
    pub fn new(convergence_speed: f32, min_update_interval_ms: u32) -> Result<Self, ConfigError> {
        // Written so that NaN fails the check as well.
        if !(convergence_speed > 0.0 && convergence_speed <= 1.0) {
            return Err(ConfigError::ConvergenceSpeedOutOfRange(convergence_speed));
        }
        Ok(FilterConfig { convergence_speed, min_update_interval_ms })
    }

    #[inline]
    pub fn convergence_speed(&self) -> f32 {
        self.convergence_speed
    }

    #[inline]
    pub fn min_update_interval_ms(&self) -> u32 {
        self.min_update_interval_ms
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            convergence_speed: DEFAULT_CONVERGENCE_SPEED,
            min_update_interval_ms: DEFAULT_MIN_UPDATE_INTERVAL_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError
{
    ConvergenceSpeedOutOfRange(f32),
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConvergenceSpeedOutOfRange(alpha) => {
                write!(f, "Convergence speed must be in (0, 1], got {}", alpha)
            },
        }
    }
}
