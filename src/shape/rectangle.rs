#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{
    math::{Point, Rect, Surround},
    shape::{InsettableShape, Outline, Path, PathBuilder},
};

// Distance from a cubic's endpoint to its control point when approximating a
// quarter circle of radius 1.
const QUARTER_CIRCLE_KAPPA: f32 = 0.552_284_8;

/// A rectangle filling its bounding rectangle.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Rectangle {
    inset_amount: f32,
}

impl Rectangle {
    /// Returns a rectangle with no inset.
    #[must_use]
    pub const fn new() -> Self {
        Self { inset_amount: 0. }
    }

    /// The amount this rectangle is inset from its bounding rectangle.
    #[must_use]
    pub const fn inset_amount(&self) -> f32 {
        self.inset_amount
    }
}

impl Outline for Rectangle {
    fn path<S>(&self, rect: &Rect<f32, S>) -> Path<S> {
        rect_path(&inset_rect(rect, self.inset_amount))
    }
}

impl InsettableShape for Rectangle {
    fn inset(&self, amount: f32) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
        }
    }
}

/// A rectangle with quarter-circle corners.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RoundedRectangle {
    corner_radius: f32,
    inset_amount: f32,
}

impl RoundedRectangle {
    /// Returns a rounded rectangle whose corners have `corner_radius`.
    #[must_use]
    pub const fn new(corner_radius: f32) -> Self {
        Self {
            corner_radius,
            inset_amount: 0.,
        }
    }

    /// The corner radius before any inset is applied.
    #[must_use]
    pub const fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// The amount this rectangle is inset from its bounding rectangle.
    #[must_use]
    pub const fn inset_amount(&self) -> f32 {
        self.inset_amount
    }
}

impl Outline for RoundedRectangle {
    fn path<S>(&self, rect: &Rect<f32, S>) -> Path<S> {
        rounded_rect_path(
            &inset_rect(rect, self.inset_amount),
            self.corner_radius - self.inset_amount,
        )
    }
}

impl InsettableShape for RoundedRectangle {
    fn inset(&self, amount: f32) -> Self {
        Self {
            corner_radius: self.corner_radius,
            inset_amount: self.inset_amount + amount,
        }
    }
}

/// A rectangle whose short sides are fully rounded into semicircles.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Capsule {
    inset_amount: f32,
}

impl Capsule {
    /// Returns a capsule with no inset.
    #[must_use]
    pub const fn new() -> Self {
        Self { inset_amount: 0. }
    }

    /// The amount this capsule is inset from its bounding rectangle.
    #[must_use]
    pub const fn inset_amount(&self) -> f32 {
        self.inset_amount
    }
}

impl Outline for Capsule {
    fn path<S>(&self, rect: &Rect<f32, S>) -> Path<S> {
        let rect = inset_rect(rect, self.inset_amount);
        rounded_rect_path(&rect, rect.size.width.min(rect.size.height) / 2.)
    }
}

impl InsettableShape for Capsule {
    fn inset(&self, amount: f32) -> Self {
        Self {
            inset_amount: self.inset_amount + amount,
        }
    }
}

/// Shrinks `rect` by `amount` on every side. A rectangle that would invert
/// collapses to zero size at its center instead.
fn inset_rect<S>(rect: &Rect<f32, S>, amount: f32) -> Rect<f32, S> {
    let max_inset = rect.size.width.min(rect.size.height) / 2.;
    let amount = amount.min(max_inset);
    rect.inner_rect(Surround::new_all_same(amount))
}

pub(crate) fn rect_path<S>(rect: &Rect<f32, S>) -> Path<S> {
    PathBuilder::new(Point::new(rect.min_x(), rect.min_y()))
        .line_to(Point::new(rect.max_x(), rect.min_y()))
        .line_to(Point::new(rect.max_x(), rect.max_y()))
        .line_to(Point::new(rect.min_x(), rect.max_y()))
        .close()
        .build()
}

/// Builds a clockwise rounded rectangle starting just after the top-left
/// corner. `radius` is clamped to `0..=min(width, height) / 2`.
pub(crate) fn rounded_rect_path<S>(rect: &Rect<f32, S>, radius: f32) -> Path<S> {
    let radius = radius.max(0.).min(rect.size.width.min(rect.size.height) / 2.);
    if radius <= 0. {
        return rect_path(rect);
    }

    let (x1, y1, x2, y2) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
    let k = radius * QUARTER_CIRCLE_KAPPA;

    PathBuilder::new(Point::new(x1 + radius, y1))
        .line_to(Point::new(x2 - radius, y1))
        .cubic_curve_to(
            Point::new(x2 - radius + k, y1),
            Point::new(x2, y1 + radius - k),
            Point::new(x2, y1 + radius),
        )
        .line_to(Point::new(x2, y2 - radius))
        .cubic_curve_to(
            Point::new(x2, y2 - radius + k),
            Point::new(x2 - radius + k, y2),
            Point::new(x2 - radius, y2),
        )
        .line_to(Point::new(x1 + radius, y2))
        .cubic_curve_to(
            Point::new(x1 + radius - k, y2),
            Point::new(x1, y2 - radius + k),
            Point::new(x1, y2 - radius),
        )
        .line_to(Point::new(x1, y1 + radius))
        .cubic_curve_to(
            Point::new(x1, y1 + radius - k),
            Point::new(x1 + radius - k, y1),
            Point::new(x1 + radius, y1),
        )
        .close()
        .build()
}
