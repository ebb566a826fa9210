//! Core of a single-thumb range-input control.
//!
//! The crate turns pointer, button and resize notifications into a committed,
//! step-quantized value and the visual state that goes with it: thumb
//! position, label text and which label is visible. Anything host specific
//! (element construction, layout queries, painting) is reached through the
//! [`GeometryProvider`] and [`RenderSink`] traits.
//!
//! # Key Types
//!
//! - [`SliderConfig`] - validated numeric range, step and label formatting
//! - [`RangeSlider`] - one live widget instance and its drag state machine
//! - [`PointerDispatcher`] - forwards document-level pointer and resize events
//!   to every registered slider
//! - [`ValueMapper`] - pure pixel/value conversion
//!
//! # Example
//!
//! ```
//! use range_input::{
//!     GeometryProvider, PointerInput, RangeSlider, RenderSink, SliderConfig, TrackBounds,
//! };
//!
//! struct Fixed;
//!
//! impl GeometryProvider for Fixed {
//!     fn track_bounds(&self) -> TrackBounds {
//!         TrackBounds::new(0.0, 220.0)
//!     }
//!
//!     fn thumb_width(&self) -> f64 {
//!         20.0
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Field(String);
//!
//! impl RenderSink for Field {
//!     fn set_thumb_left(&mut self, _px: f64) {}
//!     fn set_thumb_label(&mut self, _text: &str) {}
//!     fn set_bubble_label(&mut self, _text: &str) {}
//!     fn set_thumb_label_visible(&mut self, _visible: bool) {}
//!     fn set_bubble_visible(&mut self, _visible: bool) {}
//!     fn set_field_value(&mut self, value: &str) {
//!         self.0 = value.to_string();
//!     }
//! }
//!
//! let config = SliderConfig::default().step(5.0);
//! let mut slider = RangeSlider::new(config, Some(50.0), Fixed, Field::default()).unwrap();
//! slider.decrement();
//! assert_eq!(slider.sink().0, "45");
//!
//! slider.pointer_down();
//! slider.pointer_move(&PointerInput::mouse(1_000.0));
//! slider.pointer_up();
//! assert_eq!(slider.value(), 100.0);
//! ```

pub mod attributes;
pub mod bubble;
pub mod config;
pub mod dispatch;
pub mod drag;
pub mod error;
pub mod format;
pub mod host;
pub mod mapper;
pub mod pointer;
pub mod slider;
pub mod style;

pub use bubble::{LabelVisibility, decide_visibility};
pub use config::{SliderConfig, ThumbTracking};
pub use dispatch::{DocumentEvent, DocumentListener, ListenerKey, PointerDispatcher};
pub use drag::{DragState, EventDisposition};
pub use error::ConfigError;
pub use format::format_value;
pub use host::{GeometryProvider, RenderSink, TrackBounds};
pub use mapper::ValueMapper;
pub use pointer::{PointerInput, TouchPoint};
pub use slider::RangeSlider;
pub use style::{BaseMetrics, ResolvedStyle, SliderStyle};
