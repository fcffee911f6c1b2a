//! Box dimension state and the values derived from it.
//!
//! Only `width`, `height` and `depth` are stored. Everything else is a
//! method so a dimension change can never leave a stale derived value behind.

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
    Depth,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Width, Axis::Height, Axis::Depth];

    /// DOM id of the slider that drives this axis.
    pub fn slider_id(self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
            Axis::Depth => "depth",
        }
    }

    /// DOM id of the numeric readout next to the slider.
    pub fn readout_id(self) -> &'static str {
        match self {
            Axis::Width => "width-value",
            Axis::Height => "height-value",
            Axis::Depth => "depth-value",
        }
    }

    pub fn default_range(self) -> SliderRange {
        let [min, max] = match self {
            Axis::Width => WIDTH_RANGE,
            Axis::Height => HEIGHT_RANGE,
            Axis::Depth => DEPTH_RANGE,
        };
        SliderRange { min, max }
    }
}

/// Inclusive bounds of one slider.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
}

impl SliderRange {
    /// Build a range from page-provided bounds, keeping the fallback for
    /// anything missing or unusable.
    pub fn from_bounds(axis: Axis, min: Option<f32>, max: Option<f32>) -> Self {
        let fallback = axis.default_range();
        let min = min.filter(|v| v.is_finite() && *v > 0.0).unwrap_or(fallback.min);
        let max = max.filter(|v| v.is_finite() && *v >= min).unwrap_or(fallback.max.max(min));
        Self { min, max }
    }

    /// Confine `value` to the range. Non-finite input lands on `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.min
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            depth: DEFAULT_DEPTH,
        }
    }
}

impl Dimensions {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn get(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
            Axis::Depth => self.depth,
        }
    }

    /// Copy with one axis replaced.
    pub fn with(self, axis: Axis, value: f32) -> Self {
        let mut next = self;
        match axis {
            Axis::Width => next.width = value,
            Axis::Height => next.height = value,
            Axis::Depth => next.depth = value,
        }
        next
    }

    #[inline]
    pub fn wall_thickness(&self) -> f32 {
        WALL_THICKNESS
    }

    #[inline]
    pub fn flap_width(&self) -> f32 {
        self.depth * FLAP_WIDTH_RATIO
    }

    #[inline]
    pub fn flap_height(&self) -> f32 {
        self.height * FLAP_HEIGHT_RATIO
    }

    #[inline]
    pub fn lid_margin(&self) -> f32 {
        LID_MARGIN
    }

    #[inline]
    pub fn lid_thickness(&self) -> f32 {
        self.height * LID_THICKNESS_RATIO
    }

    #[inline]
    pub fn floor_y(&self) -> f32 {
        -self.height / 2.0
    }
}
