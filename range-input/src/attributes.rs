//! Resolution of markup attributes into typed configuration.
//!
//! Hosts that build sliders from `<input>` elements read the element's
//! attributes through an [`AttributeSource`]. Every raw attribute has its
//! commas stripped, so `max="10,000"` reads as `10000`. Missing, empty or
//! unparsable attributes fall back to the supplied defaults.

use std::{collections::HashMap, hash::BuildHasher};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::{config::SliderConfig, error::ConfigError, style::SliderStyle};

pub const MIN: &str = "min";
pub const MAX: &str = "max";
pub const STEP: &str = "step";
pub const VALUE: &str = "value";
pub const DECIMALS: &str = "data-decimals";
pub const PREFIX: &str = "data-prefix";
pub const POSTFIX: &str = "data-postfix";
pub const TOGGLE_BUBBLE: &str = "data-toggle-bubble";
pub const TOGGLE_LIMIT: &str = "data-toggle-limit";
pub const BUBBLE_COLOR: &str = "data-bubble-color";
pub const BUBBLE_FONT_SCALE: &str = "data-bubble-font-scale";
pub const BUBBLE_FONT_COLOR: &str = "data-bubble-font-color";
pub const THUMB_SCALE: &str = "data-thumb-scale";
pub const THUMB_COLOR: &str = "data-thumb-color";
pub const THUMB_FONT_SCALE: &str = "data-thumb-font-scale";
pub const THUMB_FONT_COLOR: &str = "data-thumb-font-color";
pub const TRACK_SCALE: &str = "data-track-scale";
pub const TRACK_COLOR: &str = "data-track-color";

/// Attribute map keyed by attribute name.
pub type AttributeMap = FxHashMap<String, String>;

/// Read access to an element's attributes.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> AttributeSource for HashMap<String, String, S> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<T: AttributeSource + ?Sized> AttributeSource for &T {
    fn attribute(&self, name: &str) -> Option<&str> {
        (**self).attribute(name)
    }
}

/// Builds an [`AttributeMap`] from name/value pairs.
pub fn attribute_map<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> AttributeMap {
    pairs
        .into_iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Everything an element's attributes say about its slider.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedAttributes {
    pub config: SliderConfig,
    pub style: SliderStyle,
    /// Initial value, when the element carries a usable one.
    pub initial: Option<f64>,
}

/// Resolves and validates the slider described by `source`.
pub fn resolve(
    source: &impl AttributeSource,
    defaults: &SliderConfig,
    default_style: &SliderStyle,
) -> Result<ResolvedAttributes, ConfigError> {
    let reader = Reader { source };

    let config = SliderConfig {
        min: reader.number(MIN).unwrap_or(defaults.min),
        max: reader.number(MAX).unwrap_or(defaults.max),
        step: reader.number(STEP).unwrap_or(defaults.step),
        decimals: reader.count(DECIMALS).unwrap_or(defaults.decimals),
        prefix: reader.text(PREFIX).unwrap_or_else(|| defaults.prefix.clone()),
        postfix: reader.text(POSTFIX).unwrap_or_else(|| defaults.postfix.clone()),
        toggle_bubble: reader.flag(TOGGLE_BUBBLE).unwrap_or(defaults.toggle_bubble),
        toggle_limit: reader.count(TOGGLE_LIMIT).unwrap_or(defaults.toggle_limit),
        thumb_tracking: defaults.thumb_tracking,
    };
    config.validate()?;

    let style = SliderStyle {
        bubble_color: reader.text(BUBBLE_COLOR).or_else(|| default_style.bubble_color.clone()),
        bubble_font_color: reader
            .text(BUBBLE_FONT_COLOR)
            .or_else(|| default_style.bubble_font_color.clone()),
        thumb_color: reader.text(THUMB_COLOR).or_else(|| default_style.thumb_color.clone()),
        thumb_font_color: reader
            .text(THUMB_FONT_COLOR)
            .or_else(|| default_style.thumb_font_color.clone()),
        track_color: reader.text(TRACK_COLOR).or_else(|| default_style.track_color.clone()),
        bubble_font_scale: reader
            .number(BUBBLE_FONT_SCALE)
            .unwrap_or(default_style.bubble_font_scale),
        thumb_scale: reader.number(THUMB_SCALE).unwrap_or(default_style.thumb_scale),
        thumb_font_scale: reader
            .number(THUMB_FONT_SCALE)
            .unwrap_or(default_style.thumb_font_scale),
        track_scale: reader.number(TRACK_SCALE).unwrap_or(default_style.track_scale),
    };
    style.validate()?;

    Ok(ResolvedAttributes {
        config,
        style,
        initial: reader.number(VALUE),
    })
}

struct Reader<'a, A: ?Sized> {
    source: &'a A,
}

impl<A: AttributeSource + ?Sized> Reader<'_, A> {
    /// Attribute with commas removed; empty values count as missing.
    fn text(&self, name: &str) -> Option<String> {
        let raw = self.source.attribute(name)?;
        let cleaned: String = raw.chars().filter(|&c| c != ',').collect();
        (!cleaned.is_empty()).then_some(cleaned)
    }

    fn number(&self, name: &str) -> Option<f64> {
        let text = self.text(name)?;
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Some(value),
            _ => {
                debug!(attribute = name, value = %text, "ignoring non-numeric attribute");
                None
            }
        }
    }

    fn count(&self, name: &str) -> Option<usize> {
        let value = self.number(name)?;
        if value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64 {
            Some(value as usize)
        } else {
            debug!(attribute = name, value, "ignoring non-integral attribute");
            None
        }
    }

    fn flag(&self, name: &str) -> Option<bool> {
        let text = self.text(name)?;
        match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => {
                debug!(attribute = name, value = %text, "ignoring non-boolean attribute");
                None
            }
        }
    }
}
