//! Arithmetic configuration.

use std::num::NonZeroU64;

use bigdecimal::RoundingMode;
use tracing::warn;

/// Largest supported division precision, in significant digits.
pub const MAX_PRECISION: u64 = 100;

/// Rounding and precision settings applied at the point of use.
///
/// Amounts and exchange rates each carry their own context; nothing is
/// configured globally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArithmeticContext {
    /// Rounding mode for unit projections and comparisons.
    pub rounding: RoundingMode,
    /// Significant digits kept by non-terminating divisions.
    pub precision: u64,
}

impl Default for ArithmeticContext {
    fn default() -> Self {
        Self {
            rounding: RoundingMode::HalfUp,
            precision: MAX_PRECISION,
        }
    }
}

impl ArithmeticContext {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(mode) = std::env::var("MONETARY_ROUNDING_MODE") {
            match parse_rounding_mode(&mode) {
                Some(rounding) => config.rounding = rounding,
                None => warn!(value = %mode, "Ignoring unknown MONETARY_ROUNDING_MODE"),
            }
        }

        if let Ok(precision) = std::env::var("MONETARY_DIVISION_PRECISION") {
            match precision.trim().parse::<u64>() {
                Ok(digits) if is_supported_precision(digits) => config.precision = digits,
                Ok(_) => warn!(
                    value = %precision,
                    max = MAX_PRECISION,
                    "Ignoring out-of-range MONETARY_DIVISION_PRECISION"
                ),
                Err(_) => {
                    warn!(value = %precision, "Ignoring invalid MONETARY_DIVISION_PRECISION")
                }
            }
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.precision == 0 {
            return Err("Division precision cannot be 0".to_string());
        }

        if self.precision > MAX_PRECISION {
            return Err(format!(
                "Division precision cannot exceed {MAX_PRECISION} digits"
            ));
        }

        Ok(())
    }

    /// Use a different rounding mode.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Use a different division precision.
    ///
    /// Values outside `1..=MAX_PRECISION` fail [`validate`](Self::validate)
    /// and are clamped by [`precision`](Self::precision).
    pub fn with_precision(mut self, precision: u64) -> Self {
        if !is_supported_precision(precision) {
            warn!(precision, max = MAX_PRECISION, "Division precision out of range, clamping");
        }
        self.precision = precision;
        self
    }

    /// Division precision, clamped into the supported range.
    pub fn precision(&self) -> NonZeroU64 {
        NonZeroU64::new(self.precision.min(MAX_PRECISION)).unwrap_or(NonZeroU64::MIN)
    }
}

fn is_supported_precision(precision: u64) -> bool {
    (1..=MAX_PRECISION).contains(&precision)
}

/// Parse a rounding mode name such as `half_up` or `HalfEven`.
pub fn parse_rounding_mode(name: &str) -> Option<RoundingMode> {
    let normalized: String = name
        .trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_lowercase();

    match normalized.as_str() {
        "up" => Some(RoundingMode::Up),
        "down" => Some(RoundingMode::Down),
        "ceiling" => Some(RoundingMode::Ceiling),
        "floor" => Some(RoundingMode::Floor),
        "halfup" => Some(RoundingMode::HalfUp),
        "halfdown" => Some(RoundingMode::HalfDown),
        "halfeven" => Some(RoundingMode::HalfEven),
        _ => None,
    }
}
