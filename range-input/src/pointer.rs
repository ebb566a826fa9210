//! Mouse and touch input normalized to a single horizontal coordinate.

use smallvec::SmallVec;

/// One active touch point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchPoint {
    pub id: u64,
    pub page_x: f64,
    pub page_y: f64,
}

/// A pointer sample delivered with a move event.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum PointerInput {
    /// Mouse cursor position.
    Mouse { page_x: f64, page_y: f64 },
    /// Active touch points, in the order the platform reported them.
    Touch { touches: SmallVec<[TouchPoint; 2]> },
}

impl PointerInput {
    /// Mouse sample at `page_x`; the vertical coordinate is irrelevant to a
    /// horizontal slider.
    pub fn mouse(page_x: f64) -> Self {
        Self::Mouse { page_x, page_y: 0.0 }
    }

    /// Single-finger touch sample at `page_x`.
    pub fn touch(page_x: f64) -> Self {
        let mut touches = SmallVec::new();
        touches.push(TouchPoint {
            id: 0,
            page_x,
            page_y: 0.0,
        });
        Self::Touch { touches }
    }

    /// Horizontal page coordinate driving the thumb.
    ///
    /// Touch input uses the first active touch point. Returns `None` for a
    /// touch sample without active points.
    pub fn page_x(&self) -> Option<f64> {
        match self {
            Self::Mouse { page_x, .. } => Some(*page_x),
            Self::Touch { touches } => touches.first().map(|t| t.page_x),
        }
    }
}
