//! Pure conversion between track pixels and slider values.
//!
//! A pointer coordinate is clamped to the thumb's travel, normalized to a
//! track ratio in `[0, 1]`, scaled into `[min, max]` and finally quantized to
//! the nearest step measured from `min`.

use crate::{config::SliderConfig, error::ConfigError, host::TrackBounds};

/// Bidirectional pixel/value mapping for one numeric domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueMapper {
    min: f64,
    max: f64,
    step: f64,
}

impl ValueMapper {
    /// Creates a mapper, rejecting domains that would divide by zero.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        SliderConfig::default()
            .min(min)
            .max(max)
            .step(step)
            .validate()?;
        Ok(Self { min, max, step })
    }

    /// Mapper for an already validated configuration.
    pub(crate) fn from_config(config: &SliderConfig) -> Self {
        Self {
            min: config.min,
            max: config.max,
            step: config.step,
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Snaps `raw` to the nearest step from `min` and clamps the result into
    /// `[min, max]`. Ties round away from zero.
    ///
    /// The bounds themselves are fixed points even when `step` does not
    /// divide the range, so quantizing a quantized value never moves it.
    pub fn quantize(&self, raw: f64) -> f64 {
        if raw >= self.max {
            return self.max;
        }
        if raw <= self.min {
            return self.min;
        }
        let steps = ((raw - self.min) / self.step).round();
        (steps * self.step + self.min).clamp(self.min, self.max)
    }

    /// Clamps a page-space pointer coordinate to the positions the thumb
    /// center can reach.
    pub fn clamp_pointer(track: TrackBounds, thumb_offset: f64, pointer_left: f64) -> f64 {
        let min_position = track.left + thumb_offset;
        let max_position = (track.left + track.inner_width - thumb_offset).max(min_position);
        pointer_left.clamp(min_position, max_position)
    }

    /// Converts a page-space pointer coordinate into a quantized value.
    pub fn pixel_to_value(
        &self,
        track_left: f64,
        track_inner_width: f64,
        thumb_offset: f64,
        pointer_left: f64,
    ) -> f64 {
        let track = TrackBounds::new(track_left, track_inner_width);
        let clamped = Self::clamp_pointer(track, thumb_offset, pointer_left);
        let thumb_left = clamped - thumb_offset - track_left;
        let ratio = normalize(thumb_left, travel(track, thumb_offset));
        self.quantize(self.ratio_to_value(ratio))
    }

    /// Track ratio for `value`, clamped to `[0, 1]`.
    pub fn value_to_ratio(&self, value: f64) -> f64 {
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }

    /// Unquantized value at `ratio`.
    pub fn ratio_to_value(&self, ratio: f64) -> f64 {
        ratio.clamp(0.0, 1.0) * (self.max - self.min) + self.min
    }

    /// Track-relative left edge of the thumb for `value`.
    pub fn thumb_left_for_value(&self, value: f64, track: TrackBounds, thumb_offset: f64) -> f64 {
        ratio_to_thumb_left(self.value_to_ratio(value), track, thumb_offset)
    }
}

/// Distance the thumb's left edge can travel inside the track.
pub fn travel(track: TrackBounds, thumb_offset: f64) -> f64 {
    (track.inner_width - thumb_offset * 2.0).max(0.0)
}

/// Track-relative left edge of the thumb at `ratio`.
pub fn ratio_to_thumb_left(ratio: f64, track: TrackBounds, thumb_offset: f64) -> f64 {
    ratio.clamp(0.0, 1.0) * travel(track, thumb_offset)
}

fn normalize(offset: f64, travel: f64) -> f64 {
    if travel <= 0.0 {
        return 0.0;
    }
    (offset / travel).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper(min: f64, max: f64, step: f64) -> ValueMapper {
        ValueMapper::new(min, max, step).unwrap()
    }

    #[test]
    fn rejects_degenerate_domains() {
        assert_eq!(
            ValueMapper::new(0.0, 10.0, 0.0),
            Err(ConfigError::InvalidStep(0.0))
        );
        assert!(ValueMapper::new(10.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn quantize_snaps_from_min() {
        let m = mapper(3.0, 23.0, 5.0);
        assert_eq!(m.quantize(3.0), 3.0);
        assert_eq!(m.quantize(5.4), 3.0);
        assert_eq!(m.quantize(5.5), 8.0);
        assert_eq!(m.quantize(21.0), 23.0);
    }

    #[test]
    fn quantize_clamps_overshoot_at_uneven_max() {
        // 0..10 in steps of 4 leaves a short last interval: 0, 4, 8, 10.
        let m = mapper(0.0, 10.0, 4.0);
        assert_eq!(m.quantize(9.9), 8.0);
        assert_eq!(m.quantize(9.0), 8.0);
        assert_eq!(m.quantize(10.0), 10.0);
        assert_eq!(m.quantize(-3.0), 0.0);
    }

    #[test]
    fn bounds_are_fixed_points_with_uneven_step() {
        // 3..40 in steps of 4: 40 - 3 = 37 is not a multiple of 4.
        let m = mapper(3.0, 40.0, 4.0);
        assert_eq!(m.quantize(40.0), 40.0);
        assert_eq!(m.quantize(m.quantize(40.0)), 40.0);
        assert_eq!(m.quantize(39.9), 39.0);
        assert_eq!(m.pixel_to_value(0.0, 100.0, 0.0, 100.0), 40.0);
    }

    #[test]
    fn pointer_outside_track_hits_bounds() {
        let m = mapper(0.0, 100.0, 5.0);
        assert_eq!(m.pixel_to_value(50.0, 220.0, 10.0, -1_000.0), 0.0);
        assert_eq!(m.pixel_to_value(50.0, 220.0, 10.0, 10_000.0), 100.0);
    }

    #[test]
    fn pointer_at_travel_edges_hits_bounds() {
        let m = mapper(0.0, 100.0, 5.0);
        // Travel is 200px starting at 50 + 10.
        assert_eq!(m.pixel_to_value(50.0, 220.0, 10.0, 60.0), 0.0);
        assert_eq!(m.pixel_to_value(50.0, 220.0, 10.0, 260.0), 100.0);
        assert_eq!(m.pixel_to_value(50.0, 220.0, 10.0, 160.0), 50.0);
    }

    #[test]
    fn pixel_to_value_quantizes_mid_travel() {
        let m = mapper(0.0, 100.0, 5.0);
        // 146px of 200 is 73%, which snaps to 75.
        assert_eq!(m.pixel_to_value(0.0, 220.0, 10.0, 156.0), 75.0);
    }

    #[test]
    fn zero_width_interior_maps_to_min() {
        let m = mapper(0.0, 100.0, 1.0);
        assert_eq!(m.pixel_to_value(0.0, 20.0, 10.0, 500.0), 0.0);
        assert_eq!(m.pixel_to_value(0.0, 0.0, 10.0, 500.0), 0.0);
    }

    #[test]
    fn value_to_ratio_is_clamped() {
        let m = mapper(-50.0, 50.0, 1.0);
        assert_eq!(m.value_to_ratio(0.0), 0.5);
        assert_eq!(m.value_to_ratio(-80.0), 0.0);
        assert_eq!(m.value_to_ratio(80.0), 1.0);
    }

    #[test]
    fn round_trip_through_pixels_stays_within_half_step() {
        let m = mapper(0.0, 1.0, 0.1);
        let track = TrackBounds::new(12.0, 317.0);
        let thumb_offset = 9.0;
        for i in 0..=10 {
            let value = m.quantize(i as f64 * 0.1);
            let pointer =
                track.left + thumb_offset + m.thumb_left_for_value(value, track, thumb_offset);
            let back = m.pixel_to_value(track.left, track.inner_width, thumb_offset, pointer);
            assert!((back - value).abs() <= m.step() / 2.0, "{value} -> {back}");
        }
    }

    #[test]
    fn thumb_left_spans_travel() {
        let m = mapper(0.0, 100.0, 5.0);
        let track = TrackBounds::new(0.0, 220.0);
        assert_eq!(m.thumb_left_for_value(0.0, track, 10.0), 0.0);
        assert_eq!(m.thumb_left_for_value(100.0, track, 10.0), 200.0);
        assert_eq!(m.thumb_left_for_value(75.0, track, 10.0), 150.0);
    }
}
