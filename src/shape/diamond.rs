#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{
    math::{Point, Rect},
    shape::{aspect_corrected_insets, InsettableShape, Outline, Path, PathBuilder},
};

/// A diamond (rhombus) whose vertices sit on the midpoints of its bounding
/// rectangle's sides.
///
/// With no inset, the diagonals equal the rectangle's width and height. The
/// inset is aspect-corrected with [`aspect_corrected_insets`] so a border
/// stroke keeps the same width along every edge.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Diamond {
    inset_amount: f32,
}

impl Diamond {
    /// Returns a diamond with no inset.
    #[must_use]
    pub const fn new() -> Self {
        Self { inset_amount: 0. }
    }

    /// Returns a diamond inset by `inset_amount`.
    #[must_use]
    pub const fn with_inset(inset_amount: f32) -> Self {
        Self { inset_amount }
    }

    /// The amount this diamond is inset from its bounding rectangle.
    #[must_use]
    pub const fn inset_amount(&self) -> f32 {
        self.inset_amount
    }
}

impl Outline for Diamond {
    fn path<S>(&self, rect: &Rect<f32, S>) -> Path<S> {
        let insets = aspect_corrected_insets(rect, self.inset_amount);
        let center = rect.center();
        let left = Point::new(rect.min_x() + insets.x, center.y);
        let top = Point::new(center.x, rect.min_y() + insets.y);
        let right = Point::new(rect.max_x() - insets.x, center.y);
        let bottom = Point::new(center.x, rect.max_y() - insets.y);

        PathBuilder::new(left)
            .line_to(top)
            .line_to(right)
            .line_to(bottom)
            .close()
            .build()
    }
}

impl InsettableShape for Diamond {
    fn inset(&self, amount: f32) -> Self {
        Self::with_inset(self.inset_amount + amount)
    }
}
