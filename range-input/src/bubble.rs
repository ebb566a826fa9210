//! Chooses between the inline thumb label and the floating bubble.

/// Which of the two labels should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelVisibility {
    pub thumb_label_visible: bool,
    pub bubble_visible: bool,
}

impl LabelVisibility {
    /// Inline label only; the look of a slider without bubble toggling.
    pub const INLINE: Self = Self {
        thumb_label_visible: true,
        bubble_visible: false,
    };

    /// Floating bubble only.
    pub const BUBBLE: Self = Self {
        thumb_label_visible: false,
        bubble_visible: true,
    };

    /// Neither label.
    pub const HIDDEN: Self = Self {
        thumb_label_visible: false,
        bubble_visible: false,
    };
}

/// Decides label visibility from the formatted label length and drag state.
///
/// Without bubble toggling the inline label is always used. With it, a drag
/// always shows the bubble; at rest the inline label is shown while the text
/// fits within `toggle_limit` characters and nothing is shown otherwise.
pub fn decide_visibility(
    formatted_len: usize,
    toggle_bubble: bool,
    toggle_limit: usize,
    dragging: bool,
) -> LabelVisibility {
    if !toggle_bubble {
        return LabelVisibility::INLINE;
    }
    if dragging {
        return LabelVisibility::BUBBLE;
    }
    if formatted_len <= toggle_limit {
        LabelVisibility::INLINE
    } else {
        LabelVisibility::HIDDEN
    }
}

/// Character count used for the toggle limit comparison.
pub(crate) fn label_len(label: &str) -> usize {
    label.chars().count()
}
