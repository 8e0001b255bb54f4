use std::f32::consts::FRAC_PI_3;

#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{
    math::{Point, Rect, Vector},
    shape::{InsettableShape, Outline, Path, PathBuilder},
};

/// A regular hexagon inscribed in the largest circle that fits its bounding
/// rectangle, with a vertex pointing along the positive x axis.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Hexagon {
    inset_amount: f32,
}

impl Hexagon {
    /// Returns a hexagon with no inset.
    #[must_use]
    pub const fn new() -> Self {
        Self { inset_amount: 0. }
    }

    /// Returns a hexagon inset by `inset_amount`.
    #[must_use]
    pub const fn with_inset(inset_amount: f32) -> Self {
        Self { inset_amount }
    }

    /// The amount this hexagon is inset from its bounding rectangle.
    #[must_use]
    pub const fn inset_amount(&self) -> f32 {
        self.inset_amount
    }
}

impl Outline for Hexagon {
    fn path<S>(&self, rect: &Rect<f32, S>) -> Path<S> {
        let center = rect.center();
        let radius = rect.size.width.min(rect.size.height) / 2. - self.inset_amount;
        let vertex = |index: u8| -> Point<f32, S> {
            let (sin, cos) = (FRAC_PI_3 * f32::from(index)).sin_cos();
            center + Vector::new(cos, sin) * radius
        };

        (1..6)
            .fold(PathBuilder::new(vertex(0)), |builder, index| {
                builder.line_to(vertex(index))
            })
            .close()
            .build()
    }
}

impl InsettableShape for Hexagon {
    fn inset(&self, amount: f32) -> Self {
        Self::with_inset(self.inset_amount + amount)
    }
}
