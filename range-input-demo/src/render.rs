//! Text rendering of a slider for terminals.

use std::sync::Arc;

use parking_lot::Mutex;
use range_input::{GeometryProvider, RenderSink, TrackBounds};

/// Columns used to draw the track.
const TRACK_COLUMNS: usize = 41;
const THUMB_WIDTH: f64 = 20.0;

/// Track geometry that can be resized at runtime.
#[derive(Clone)]
pub struct TextTrack(Arc<Mutex<TrackBounds>>);

impl TextTrack {
    pub fn new(inner_width: f64) -> Self {
        Self(Arc::new(Mutex::new(TrackBounds::new(0.0, inner_width))))
    }

    pub fn resize(&self, inner_width: f64) {
        self.0.lock().inner_width = inner_width;
    }

    pub fn bounds(&self) -> TrackBounds {
        *self.0.lock()
    }
}

impl GeometryProvider for TextTrack {
    fn track_bounds(&self) -> TrackBounds {
        self.bounds()
    }

    fn thumb_width(&self) -> f64 {
        THUMB_WIDTH
    }
}

#[derive(Debug, Default)]
struct Frame {
    thumb_left: f64,
    thumb_label: String,
    bubble_label: String,
    thumb_label_visible: bool,
    bubble_visible: bool,
    field: String,
}

/// Sink collecting the latest visual state.
#[derive(Clone, Default)]
pub struct TextSink(Arc<Mutex<Frame>>);

impl TextSink {
    pub fn field(&self) -> String {
        self.0.lock().field.clone()
    }

    /// One line: the track with the thumb, then whichever labels are visible.
    pub fn render(&self, track: &TextTrack) -> String {
        let frame = self.0.lock();
        let travel = (track.bounds().inner_width - THUMB_WIDTH).max(0.0);
        let ratio = if travel > 0.0 {
            (frame.thumb_left / travel).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let thumb_column = (ratio * (TRACK_COLUMNS - 1) as f64).round() as usize;

        let mut line = String::with_capacity(TRACK_COLUMNS + 32);
        line.push_str("- [");
        for column in 0..TRACK_COLUMNS {
            line.push(if column == thumb_column { 'O' } else { '=' });
        }
        line.push_str("] +");

        if frame.thumb_label_visible {
            line.push_str(&format!("  thumb: {}", frame.thumb_label));
        }
        if frame.bubble_visible {
            line.push_str(&format!("  bubble: {}", frame.bubble_label));
        }
        line.push_str(&format!("  field={}", frame.field));
        line
    }
}

impl RenderSink for TextSink {
    fn set_thumb_left(&mut self, px: f64) {
        self.0.lock().thumb_left = px;
    }

    fn set_thumb_label(&mut self, text: &str) {
        self.0.lock().thumb_label = text.to_string();
    }

    fn set_bubble_label(&mut self, text: &str) {
        self.0.lock().bubble_label = text.to_string();
    }

    fn set_thumb_label_visible(&mut self, visible: bool) {
        self.0.lock().thumb_label_visible = visible;
    }

    fn set_bubble_visible(&mut self, visible: bool) {
        self.0.lock().bubble_visible = visible;
    }

    fn set_field_value(&mut self, value: &str) {
        self.0.lock().field = value.to_string();
    }
}
