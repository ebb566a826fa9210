//! Visual customization: colors and scale factors.
//!
//! The host measures the unscaled element sizes ([`BaseMetrics`]) from its
//! stylesheet, the slider resolves them against a [`SliderStyle`] and hands
//! the result to [`crate::RenderSink::apply_style`].
//!
//! A scale of exactly `1.0` leaves the corresponding metrics untouched, and
//! margins or insets are only computed when some scale differs from it.

use derive_setters::Setters;

use crate::error::ConfigError;

/// Spacing between the track and each button, relative to button width.
const TRACK_INSET_RATIO: f64 = 1.2;

/// Colors and scale factors of one slider.
#[derive(Debug, Clone, PartialEq, Setters)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SliderStyle {
    /// Bubble and bubble arrow background.
    #[setters(strip_option, into)]
    pub bubble_color: Option<String>,
    /// Bubble text color.
    #[setters(strip_option, into)]
    pub bubble_font_color: Option<String>,
    /// Thumb background and button glyph color.
    #[setters(strip_option, into)]
    pub thumb_color: Option<String>,
    /// Thumb label color.
    #[setters(strip_option, into)]
    pub thumb_font_color: Option<String>,
    /// Track background and button border color.
    #[setters(strip_option, into)]
    pub track_color: Option<String>,
    /// Scales bubble text, corner radius and arrow.
    pub bubble_font_scale: f64,
    /// Scales the thumb's width and height.
    pub thumb_scale: f64,
    /// Scales the thumb label text.
    pub thumb_font_scale: f64,
    /// Scales the decrement/increment buttons.
    pub track_scale: f64,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            bubble_color: None,
            bubble_font_color: None,
            thumb_color: None,
            thumb_font_color: None,
            track_color: None,
            bubble_font_scale: 1.0,
            thumb_scale: 1.0,
            thumb_font_scale: 1.0,
            track_scale: 1.0,
        }
    }
}

impl SliderStyle {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("bubble_font_scale", self.bubble_font_scale),
            ("thumb_scale", self.thumb_scale),
            ("thumb_font_scale", self.thumb_font_scale),
            ("track_scale", self.track_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidScale { field, value });
            }
        }
        Ok(())
    }

    fn is_scaled(&self) -> bool {
        [
            self.bubble_font_scale,
            self.thumb_scale,
            self.thumb_font_scale,
            self.track_scale,
        ]
        .iter()
        .any(|&scale| scale != 1.0)
    }
}

/// Unscaled element sizes in pixels, as laid out by the host's stylesheet.
///
/// Button sizes are outer sizes (border included).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseMetrics {
    pub bubble_font_size: f64,
    pub bubble_border_radius: f64,
    pub bubble_height: f64,
    pub bubble_arrow_width: f64,
    pub bubble_arrow_height: f64,
    pub thumb_width: f64,
    pub thumb_height: f64,
    pub thumb_font_size: f64,
    pub button_width: f64,
    pub button_height: f64,
    pub button_font_size: f64,
}

impl Default for BaseMetrics {
    fn default() -> Self {
        Self {
            bubble_font_size: 14.0,
            bubble_border_radius: 4.0,
            bubble_height: 28.0,
            bubble_arrow_width: 10.0,
            bubble_arrow_height: 10.0,
            thumb_width: 30.0,
            thumb_height: 30.0,
            thumb_font_size: 11.0,
            button_width: 24.0,
            button_height: 24.0,
            button_font_size: 16.0,
        }
    }
}

/// Horizontal space reserved between the wrapper edges and the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackInsets {
    pub left: f64,
    pub right: f64,
}

/// Which element parts each configured color is applied to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorAssignments {
    pub bubble_background: Option<String>,
    pub bubble_arrow_background: Option<String>,
    pub bubble_text: Option<String>,
    pub thumb_background: Option<String>,
    pub thumb_text: Option<String>,
    pub button_text: Option<String>,
    pub button_border: Option<String>,
    pub track_background: Option<String>,
}

/// Style ready to be applied by a [`crate::RenderSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub metrics: BaseMetrics,
    /// Present only when the buttons are scaled.
    pub track_insets: Option<TrackInsets>,
    /// Vertical wrapper margin, present only when anything is scaled.
    pub wrapper_margin: Option<f64>,
    pub colors: ColorAssignments,
}

impl ResolvedStyle {
    pub fn resolve(base: &BaseMetrics, style: &SliderStyle) -> Self {
        let metrics = BaseMetrics {
            bubble_font_size: scale(base.bubble_font_size, style.bubble_font_scale),
            bubble_border_radius: scale(base.bubble_border_radius, style.bubble_font_scale),
            bubble_height: scale(base.bubble_height, style.bubble_font_scale),
            bubble_arrow_width: scale(base.bubble_arrow_width, style.bubble_font_scale),
            bubble_arrow_height: scale(base.bubble_arrow_height, style.bubble_font_scale),
            thumb_width: scale(base.thumb_width, style.thumb_scale),
            thumb_height: scale(base.thumb_height, style.thumb_scale),
            thumb_font_size: scale(base.thumb_font_size, style.thumb_font_scale),
            button_width: scale(base.button_width, style.track_scale),
            button_height: scale(base.button_height, style.track_scale),
            button_font_size: scale(base.button_font_size, style.track_scale),
        };

        let track_insets = (style.track_scale != 1.0).then(|| TrackInsets {
            left: metrics.button_width * TRACK_INSET_RATIO,
            right: metrics.button_width * TRACK_INSET_RATIO,
        });

        let wrapper_margin = style.is_scaled().then(|| {
            metrics.thumb_height.max(metrics.button_height) + metrics.bubble_height
        });

        let colors = ColorAssignments {
            bubble_background: style.bubble_color.clone(),
            bubble_arrow_background: style.bubble_color.clone(),
            bubble_text: style.bubble_font_color.clone(),
            thumb_background: style.thumb_color.clone(),
            thumb_text: style.thumb_font_color.clone(),
            button_text: style.thumb_color.clone(),
            button_border: style.track_color.clone(),
            track_background: style.track_color.clone(),
        };

        Self {
            metrics,
            track_insets,
            wrapper_margin,
            colors,
        }
    }
}

fn scale(value: f64, factor: f64) -> f64 {
    if factor == 1.0 { value } else { value * factor }
}
