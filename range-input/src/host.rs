//! Traits connecting the slider core to its host.
//!
//! The core never builds or styles elements itself. It asks a
//! [`GeometryProvider`] for layout and pushes every visual change into a
//! [`RenderSink`].

use crate::style::ResolvedStyle;

/// Horizontal extent of the track in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackBounds {
    /// Page-space x coordinate of the track's left edge.
    pub left: f64,
    /// Inner width of the track, thumb travel included.
    pub inner_width: f64,
}

impl TrackBounds {
    pub const fn new(left: f64, inner_width: f64) -> Self {
        Self { left, inner_width }
    }
}

/// Synchronous layout queries.
///
/// Answers are treated as authoritative for the event being handled and are
/// not cached across events, since layout may change in between.
pub trait GeometryProvider {
    /// Current bounds of the track.
    fn track_bounds(&self) -> TrackBounds;

    /// Rendered width of the thumb.
    fn thumb_width(&self) -> f64;
}

/// Visual side effects requested by the slider.
pub trait RenderSink {
    /// Moves the thumb's left edge to `px`, relative to the track's left edge.
    fn set_thumb_left(&mut self, px: f64);

    /// Text of the label drawn on the thumb.
    fn set_thumb_label(&mut self, text: &str);

    /// Text of the floating bubble above the thumb.
    fn set_bubble_label(&mut self, text: &str);

    fn set_thumb_label_visible(&mut self, visible: bool);

    fn set_bubble_visible(&mut self, visible: bool);

    /// Writes the committed value into the hidden form field.
    fn set_field_value(&mut self, value: &str);

    /// Applies resolved colors and scaled metrics. Called once, before the
    /// thumb width is measured.
    fn apply_style(&mut self, _style: &ResolvedStyle) {}
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for &G {
    fn track_bounds(&self) -> TrackBounds {
        (**self).track_bounds()
    }

    fn thumb_width(&self) -> f64 {
        (**self).thumb_width()
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn set_thumb_left(&mut self, px: f64) {
        (**self).set_thumb_left(px);
    }

    fn set_thumb_label(&mut self, text: &str) {
        (**self).set_thumb_label(text);
    }

    fn set_bubble_label(&mut self, text: &str) {
        (**self).set_bubble_label(text);
    }

    fn set_thumb_label_visible(&mut self, visible: bool) {
        (**self).set_thumb_label_visible(visible);
    }

    fn set_bubble_visible(&mut self, visible: bool) {
        (**self).set_bubble_visible(visible);
    }

    fn set_field_value(&mut self, value: &str) {
        (**self).set_field_value(value);
    }

    fn apply_style(&mut self, style: &ResolvedStyle) {
        (**self).apply_style(style);
    }
}
