//! A live range-input widget instance.
//!
//! ## Usage
//!
//! Create one [`RangeSlider`] per input element, route thumb presses and
//! button clicks to it directly, and register it with a
//! [`crate::PointerDispatcher`] so document-level moves, releases and
//! resizes reach it as well.

use tracing::{debug, trace, warn};

use crate::{
    bubble::{LabelVisibility, decide_visibility, label_len},
    config::{SliderConfig, ThumbTracking},
    dispatch::{DocumentEvent, DocumentListener},
    drag::{DragState, EventDisposition},
    error::ConfigError,
    format::format_value,
    host::{GeometryProvider, RenderSink},
    mapper::ValueMapper,
    pointer::PointerInput,
    style::{BaseMetrics, ResolvedStyle, SliderStyle},
};

/// One slider: configuration, committed value, drag state and the host
/// handles it renders through.
///
/// Every value change goes through [`RangeSlider::set_value`], so the value
/// observable from outside is always inside `[min, max]` and on a step.
pub struct RangeSlider<G, S> {
    config: SliderConfig,
    mapper: ValueMapper,
    geometry: G,
    sink: S,
    value: f64,
    drag: DragState,
    thumb_offset: f64,
    label: String,
    visibility: Option<LabelVisibility>,
}

impl<G, S> RangeSlider<G, S>
where
    G: GeometryProvider,
    S: RenderSink,
{
    /// Attaches a slider with the default look.
    ///
    /// `initial` falls back to the middle of the range when absent or not a
    /// number. Fails when the configuration cannot be mapped.
    pub fn new(
        config: SliderConfig,
        initial: Option<f64>,
        geometry: G,
        sink: S,
    ) -> Result<Self, ConfigError> {
        Self::attach(config, None, initial, geometry, sink)
    }

    /// Attaches a slider and applies `style` on top of the host's unscaled
    /// `base` metrics before the thumb is measured.
    pub fn with_style(
        config: SliderConfig,
        style: &SliderStyle,
        base: &BaseMetrics,
        initial: Option<f64>,
        geometry: G,
        sink: S,
    ) -> Result<Self, ConfigError> {
        style.validate()?;
        let resolved = ResolvedStyle::resolve(base, style);
        Self::attach(config, Some(resolved), initial, geometry, sink)
    }

    #[tracing::instrument(level = "debug", skip(style, geometry, sink))]
    fn attach(
        config: SliderConfig,
        style: Option<ResolvedStyle>,
        initial: Option<f64>,
        geometry: G,
        mut sink: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        if let Some(style) = style.as_ref() {
            sink.apply_style(style);
        }

        let thumb_width = geometry.thumb_width();
        let thumb_offset = if thumb_width.is_finite() {
            (thumb_width / 2.0).max(0.0)
        } else {
            0.0
        };
        let initial = initial
            .filter(|v| !v.is_nan())
            .unwrap_or_else(|| config.default_value());

        let mut slider = Self {
            mapper: ValueMapper::from_config(&config),
            value: config.min,
            config,
            geometry,
            sink,
            drag: DragState::Idle,
            thumb_offset,
            label: String::new(),
            visibility: None,
        };
        slider.set_value(initial);
        slider.position_thumb();
        debug!(value = slider.value, thumb_offset, "slider attached");
        Ok(slider)
    }

    /// Commits `raw` after quantizing and clamping it, then refreshes the
    /// hidden field, both labels and label visibility.
    ///
    /// Returns the committed value. `NaN` is rejected and leaves the value
    /// unchanged.
    pub fn set_value(&mut self, raw: f64) -> f64 {
        if raw.is_nan() {
            warn!("ignoring NaN slider value");
            return self.value;
        }

        self.value = self.mapper.quantize(raw);
        self.sink.set_field_value(&field_text(self.value));

        self.label = format_value(
            self.value,
            self.config.decimals,
            &self.config.prefix,
            &self.config.postfix,
        );
        self.sink.set_thumb_label(&self.label);
        self.sink.set_bubble_label(&self.label);
        self.refresh_visibility();

        debug!(raw, value = self.value, "slider value committed");
        self.value
    }

    /// Presses the thumb.
    ///
    /// Starts a drag from rest; a press during an active drag is ignored.
    pub fn pointer_down(&mut self) -> EventDisposition {
        if !self.drag.begin() {
            return EventDisposition::Ignored;
        }
        debug!(value = self.value, "drag started");
        self.refresh_visibility();
        EventDisposition::Consumed
    }

    /// Follows the pointer during a drag.
    ///
    /// The value is re-derived from the pointer on every move. Outside a drag
    /// the event is ignored.
    pub fn pointer_move(&mut self, input: &PointerInput) -> EventDisposition {
        if !self.drag.is_dragging() {
            return EventDisposition::Ignored;
        }
        let Some(page_x) = input.page_x() else {
            return EventDisposition::Consumed;
        };

        let track = self.geometry.track_bounds();
        let thumb_offset = self.thumb_offset;
        let value =
            self.mapper
                .pixel_to_value(track.left, track.inner_width, thumb_offset, page_x);
        self.set_value(value);

        let thumb_left = match self.config.thumb_tracking {
            ThumbTracking::Pointer => {
                ValueMapper::clamp_pointer(track, thumb_offset, page_x) - thumb_offset - track.left
            }
            ThumbTracking::Step => self
                .mapper
                .thumb_left_for_value(self.value, track, thumb_offset),
        };
        self.drag.track(thumb_left);
        self.sink.set_thumb_left(thumb_left);

        trace!(page_x, thumb_left, value = self.value, "drag moved");
        EventDisposition::Consumed
    }

    /// Releases the thumb.
    pub fn pointer_up(&mut self) -> EventDisposition {
        self.end_drag("released")
    }

    /// Aborts the drag, keeping the last committed value.
    pub fn pointer_cancel(&mut self) -> EventDisposition {
        self.end_drag("cancelled")
    }

    /// The committed value is the quantization of the last continuous offset,
    /// already computed by the move that produced it, so nothing is re-read
    /// from layout here.
    fn end_drag(&mut self, reason: &'static str) -> EventDisposition {
        let Some(last_offset) = self.drag.end() else {
            return EventDisposition::Ignored;
        };
        debug!(reason, ?last_offset, value = self.value, "drag ended");
        self.refresh_visibility();
        EventDisposition::Consumed
    }

    /// Decrement button: one step down, clamped at `min`.
    pub fn decrement(&mut self) -> f64 {
        let next = (self.value - self.config.step).max(self.config.min);
        self.commit_and_position(next)
    }

    /// Increment button: one step up, clamped at `max`.
    pub fn increment(&mut self) -> f64 {
        let next = (self.value + self.config.step).min(self.config.max);
        self.commit_and_position(next)
    }

    fn commit_and_position(&mut self, next: f64) -> f64 {
        self.set_value(next);
        self.position_thumb();
        self.value
    }

    /// Viewport changed: places the thumb at the committed value using fresh
    /// geometry. The value itself is never re-derived from pixels here.
    pub fn on_resize(&mut self) {
        let left = self.position_thumb();
        self.drag.track(left);
        trace!(thumb_left = left, value = self.value, "thumb resynchronized");
    }

    fn position_thumb(&mut self) -> f64 {
        let track = self.geometry.track_bounds();
        let left = self
            .mapper
            .thumb_left_for_value(self.value, track, self.thumb_offset);
        self.sink.set_thumb_left(left);
        left
    }

    fn refresh_visibility(&mut self) {
        let next = decide_visibility(
            label_len(&self.label),
            self.config.toggle_bubble,
            self.config.toggle_limit,
            self.drag.is_dragging(),
        );
        if self.visibility == Some(next) {
            return;
        }
        self.sink.set_thumb_label_visible(next.thumb_label_visible);
        self.sink.set_bubble_visible(next.bubble_visible);
        self.visibility = Some(next);
    }
}

impl<G, S> RangeSlider<G, S> {
    /// Committed value.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn mapper(&self) -> &ValueMapper {
        &self.mapper
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Half the thumb's rendered width, measured at construction.
    pub fn thumb_offset(&self) -> f64 {
        self.thumb_offset
    }

    /// Formatted label currently shown on the thumb and bubble.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn visibility(&self) -> LabelVisibility {
        self.visibility.unwrap_or(LabelVisibility::INLINE)
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Tears the slider down, handing back the host handles.
    pub fn into_parts(self) -> (G, S) {
        (self.geometry, self.sink)
    }
}

impl<G, S> DocumentListener for RangeSlider<G, S>
where
    G: GeometryProvider,
    S: RenderSink,
{
    fn on_document_event(&mut self, event: &DocumentEvent) -> EventDisposition {
        match event {
            DocumentEvent::PointerMove(input) => self.pointer_move(input),
            DocumentEvent::PointerUp => self.pointer_up(),
            DocumentEvent::PointerCancel => self.pointer_cancel(),
            DocumentEvent::Resize => {
                self.on_resize();
                EventDisposition::Ignored
            }
        }
    }
}

/// Hidden field representation: the shortest decimal that round-trips.
fn field_text(value: f64) -> String {
    // Adding zero folds -0.0 into 0.0.
    (value + 0.0).to_string()
}
