//! Scripted interactions for the demo.

use std::{fmt, sync::Arc};

use parking_lot::Mutex;
use range_input::{
    DocumentEvent, GeometryProvider, PointerDispatcher, PointerInput, RangeSlider, RenderSink,
};
use serde::{Deserialize, Serialize};

use crate::render::TextTrack;

/// One scripted interaction.
///
/// ```json
/// [
///   { "action": "press" },
///   { "action": "document", "event": { "type": "pointer_move", "kind": "mouse", "page_x": 120.0, "page_y": 0.0 } },
///   { "action": "document", "event": { "type": "pointer_up" } },
///   { "action": "increment" },
///   { "action": "resize", "track_width": 600.0 }
/// ]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Step {
    /// Press the thumb.
    Press,
    Decrement,
    Increment,
    /// Commit a value directly.
    Set { value: f64 },
    /// Change the track width, then notify every slider.
    Resize { track_width: f64 },
    /// Deliver a document-level event through the dispatcher.
    Document { event: DocumentEvent },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Press => write!(f, "press thumb"),
            Self::Decrement => write!(f, "click -"),
            Self::Increment => write!(f, "click +"),
            Self::Set { value } => write!(f, "set {value}"),
            Self::Resize { track_width } => write!(f, "resize to {track_width}px"),
            Self::Document { event } => match event {
                DocumentEvent::PointerMove(PointerInput::Mouse { page_x, .. }) => {
                    write!(f, "mouse move x={page_x}")
                }
                DocumentEvent::PointerMove(input @ PointerInput::Touch { .. }) => {
                    match input.page_x() {
                        Some(x) => write!(f, "touch move x={x}"),
                        None => write!(f, "touch move (no touches)"),
                    }
                }
                DocumentEvent::PointerUp => write!(f, "release"),
                DocumentEvent::PointerCancel => write!(f, "cancel"),
                DocumentEvent::Resize => write!(f, "resize"),
            },
        }
    }
}

/// Buttons, drags to both ends and a resize round trip.
pub fn walkthrough(track_width: f64) -> Vec<Step> {
    let document = |event| Step::Document { event };
    vec![
        Step::Decrement,
        Step::Increment,
        Step::Increment,
        Step::Press,
        document(DocumentEvent::PointerMove(PointerInput::mouse(track_width * 0.3))),
        document(DocumentEvent::PointerMove(PointerInput::mouse(track_width + 100.0))),
        document(DocumentEvent::PointerUp),
        Step::Increment,
        Step::Press,
        document(DocumentEvent::PointerMove(PointerInput::touch(-50.0))),
        document(DocumentEvent::PointerCancel),
        Step::Set { value: 73.0 },
        Step::Resize {
            track_width: track_width * 1.5,
        },
        Step::Resize { track_width },
    ]
}

/// Applies `step` to `slider`. Document-level steps go through `dispatcher`,
/// so the slider lock must not be held by the caller.
pub fn apply<G, S>(
    step: &Step,
    slider: &Arc<Mutex<RangeSlider<G, S>>>,
    track: &TextTrack,
    dispatcher: &PointerDispatcher,
) where
    G: GeometryProvider,
    S: RenderSink,
{
    match step {
        Step::Press => {
            slider.lock().pointer_down();
        }
        Step::Decrement => {
            slider.lock().decrement();
        }
        Step::Increment => {
            slider.lock().increment();
        }
        Step::Set { value } => {
            slider.lock().set_value(*value);
        }
        Step::Resize { track_width } => {
            track.resize(*track_width);
            dispatcher.dispatch(&DocumentEvent::Resize);
        }
        Step::Document { event } => {
            dispatcher.dispatch(event);
        }
    }
}
