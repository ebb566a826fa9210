//! Typed slider configuration.
//!
//! ## Usage
//!
//! Build a [`SliderConfig`] from its `Default` with the chained setters, then
//! hand it to [`crate::RangeSlider::new`], which validates it once.

use derive_setters::Setters;

use crate::error::ConfigError;

/// Upper bound on displayed fractional digits.
pub const MAX_DECIMALS: usize = 20;

/// Where the thumb is drawn while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ThumbTracking {
    /// Follow the clamped pointer continuously. The displayed number is the
    /// quantized value, so the thumb may sit up to one step away from that
    /// value's ideal position.
    #[default]
    Pointer,
    /// Snap the thumb to the quantized value's position on every move.
    Step,
}

/// Arguments describing the numeric domain and label formatting of a slider.
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderConfig {
    /// Lower bound of the closed interval.
    pub min: f64,
    /// Upper bound of the closed interval.
    pub max: f64,
    /// Quantization step, measured from `min`.
    pub step: f64,
    /// Fractional digits shown in the labels.
    pub decimals: usize,
    /// Text placed before the formatted number.
    #[setters(into)]
    pub prefix: String,
    /// Text placed after the formatted number.
    #[setters(into)]
    pub postfix: String,
    /// Swap the inline thumb label for the floating bubble when the label
    /// gets too long, and while dragging.
    pub toggle_bubble: bool,
    /// Longest formatted label, in characters, that still fits on the thumb.
    pub toggle_limit: usize,
    /// Thumb placement during a drag.
    pub thumb_tracking: ThumbTracking,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            decimals: 0,
            prefix: String::new(),
            postfix: String::new(),
            toggle_bubble: false,
            toggle_limit: 3,
            thumb_tracking: ThumbTracking::Pointer,
        }
    }
}

impl SliderConfig {
    /// Checks the numeric invariants the mapping math relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("min", self.min), ("max", self.max), ("step", self.step)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        // A span that overflows leaves nothing to interpolate across.
        let span = self.max - self.min;
        if self.min >= self.max || !span.is_finite() {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.step <= 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if !(span / self.step).is_finite() {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ConfigError::TooManyDecimals(self.decimals));
        }
        Ok(())
    }

    /// Value used when the host supplies no initial value: the midpoint of
    /// the range.
    pub fn default_value(&self) -> f64 {
        (self.max - self.min) / 2.0 + self.min
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(SliderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_or_inverted_range() {
        let err = SliderConfig::default().min(10.0).max(10.0).validate();
        assert_eq!(
            err,
            Err(ConfigError::InvalidRange {
                min: 10.0,
                max: 10.0
            })
        );
        assert!(SliderConfig::default().min(5.0).max(1.0).validate().is_err());
    }

    #[test]
    fn rejects_zero_and_negative_step() {
        assert_eq!(
            SliderConfig::default().step(0.0).validate(),
            Err(ConfigError::InvalidStep(0.0))
        );
        assert_eq!(
            SliderConfig::default().step(-2.0).validate(),
            Err(ConfigError::InvalidStep(-2.0))
        );
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let err = SliderConfig::default().max(f64::INFINITY).validate();
        assert!(matches!(err, Err(ConfigError::NonFinite { field: "max", .. })));
        let err = SliderConfig::default().step(f64::NAN).validate();
        assert!(matches!(err, Err(ConfigError::NonFinite { field: "step", .. })));
    }

    #[test]
    fn rejects_range_whose_span_overflows() {
        let config = SliderConfig::default().min(-f64::MAX).max(f64::MAX);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidRange {
                min: -f64::MAX,
                max: f64::MAX
            })
        );
        assert!(crate::ValueMapper::new(-f64::MAX, f64::MAX, 1.0).is_err());
    }

    #[test]
    fn rejects_step_too_small_to_count_across_range() {
        let config = SliderConfig::default()
            .min(-1e300)
            .max(1e300)
            .step(f64::MIN_POSITIVE);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn wide_finite_range_maps_to_finite_values() {
        let mapper = crate::ValueMapper::new(-1e300, 1e300, 1e290).unwrap();
        let left = mapper.pixel_to_value(0.0, 220.0, 10.0, -1_000.0);
        let right = mapper.pixel_to_value(0.0, 220.0, 10.0, 1_000.0);
        assert_eq!(left, -1e300);
        assert_eq!(right, 1e300);
        assert!(SliderConfig::default().min(-1e300).max(1e300).default_value().is_finite());
    }

    #[test]
    fn rejects_excessive_decimals() {
        assert_eq!(
            SliderConfig::default().decimals(21).validate(),
            Err(ConfigError::TooManyDecimals(21))
        );
    }

    #[test]
    fn default_value_is_midpoint() {
        let config = SliderConfig::default().min(10.0).max(30.0);
        assert_eq!(config.default_value(), 20.0);
    }

    #[test]
    fn setters_accept_str_labels() {
        let config = SliderConfig::default().prefix("$").postfix(" USD");
        assert_eq!(config.prefix, "$");
        assert_eq!(config.postfix, " USD");
    }
}
