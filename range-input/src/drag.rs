//! Drag state machine.
//!
//! ```text
//! Idle --pointer down on thumb--> Dragging
//! Dragging --pointer move--> Dragging (continuous offset updated)
//! Dragging --pointer up / cancel--> Idle
//! ```
//!
//! While dragging, the thumb's continuous offset is authoritative and the
//! committed value is derived from it. At rest the committed value is.

/// Whether the host should suppress the default action of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The slider acted on the event; suppress text selection, scrolling and
    /// other default handling.
    Consumed,
    /// The event was not for this slider.
    Ignored,
}

impl EventDisposition {
    pub fn is_consumed(self) -> bool {
        matches!(self, Self::Consumed)
    }

    /// Combines the outcome of delivering one event to several sliders.
    pub fn or(self, other: Self) -> Self {
        if self.is_consumed() || other.is_consumed() {
            Self::Consumed
        } else {
            Self::Ignored
        }
    }
}

/// Drag state of a single slider.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Track-relative left edge of the thumb, once the pointer has moved.
        continuous_offset: Option<f64>,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Enters `Dragging`. Returns `false` when a drag is already active.
    pub fn begin(&mut self) -> bool {
        if self.is_dragging() {
            return false;
        }
        *self = Self::Dragging {
            continuous_offset: None,
        };
        true
    }

    /// Records the thumb's continuous offset. Returns `false` at rest.
    pub fn track(&mut self, offset: f64) -> bool {
        match self {
            Self::Dragging { continuous_offset } => {
                *continuous_offset = Some(offset);
                true
            }
            Self::Idle => false,
        }
    }

    /// Continuous offset of the active drag, if the pointer has moved.
    pub fn continuous_offset(&self) -> Option<f64> {
        match self {
            Self::Dragging { continuous_offset } => *continuous_offset,
            Self::Idle => None,
        }
    }

    /// Leaves `Dragging`, handing back the last continuous offset.
    ///
    /// Returns `None` when no drag was active.
    pub fn end(&mut self) -> Option<Option<f64>> {
        match std::mem::take(self) {
            Self::Dragging { continuous_offset } => Some(continuous_offset),
            Self::Idle => None,
        }
    }
}
