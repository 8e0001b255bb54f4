#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{
    math::Rect,
    shape::{
        Capsule, Diamond, Hexagon, InsettableShape, Outline, Path, Rectangle, RoundedRectangle,
        Squiggle,
    },
};

/// Any of the insettable shapes this crate provides, for callers that pick a
/// shape at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum ShapeKind {
    /// A [`Diamond`].
    Diamond(Diamond),
    /// A [`Squiggle`].
    Squiggle(Squiggle),
    /// A [`Hexagon`].
    Hexagon(Hexagon),
    /// A [`Rectangle`].
    Rectangle(Rectangle),
    /// A [`RoundedRectangle`].
    RoundedRectangle(RoundedRectangle),
    /// A [`Capsule`].
    Capsule(Capsule),
}

impl Outline for ShapeKind {
    fn path<S>(&self, rect: &Rect<f32, S>) -> Path<S> {
        match self {
            Self::Diamond(shape) => shape.path(rect),
            Self::Squiggle(shape) => shape.path(rect),
            Self::Hexagon(shape) => shape.path(rect),
            Self::Rectangle(shape) => shape.path(rect),
            Self::RoundedRectangle(shape) => shape.path(rect),
            Self::Capsule(shape) => shape.path(rect),
        }
    }
}

impl InsettableShape for ShapeKind {
    fn inset(&self, amount: f32) -> Self {
        match self {
            Self::Diamond(shape) => Self::Diamond(shape.inset(amount)),
            Self::Squiggle(shape) => Self::Squiggle(shape.inset(amount)),
            Self::Hexagon(shape) => Self::Hexagon(shape.inset(amount)),
            Self::Rectangle(shape) => Self::Rectangle(shape.inset(amount)),
            Self::RoundedRectangle(shape) => Self::RoundedRectangle(shape.inset(amount)),
            Self::Capsule(shape) => Self::Capsule(shape.inset(amount)),
        }
    }
}

impl From<Diamond> for ShapeKind {
    fn from(shape: Diamond) -> Self {
        Self::Diamond(shape)
    }
}

impl From<Squiggle> for ShapeKind {
    fn from(shape: Squiggle) -> Self {
        Self::Squiggle(shape)
    }
}

impl From<Hexagon> for ShapeKind {
    fn from(shape: Hexagon) -> Self {
        Self::Hexagon(shape)
    }
}

impl From<Rectangle> for ShapeKind {
    fn from(shape: Rectangle) -> Self {
        Self::Rectangle(shape)
    }
}

impl From<RoundedRectangle> for ShapeKind {
    fn from(shape: RoundedRectangle) -> Self {
        Self::RoundedRectangle(shape)
    }
}

impl From<Capsule> for ShapeKind {
    fn from(shape: Capsule) -> Self {
        Self::Capsule(shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Point, Points, Size};

    #[test]
    fn dispatches_to_the_wrapped_shape() {
        let frame: Rect<f32, Points> = Rect::new(Point::origin(), Size::new(100., 66.));
        let kinds: Vec<ShapeKind> = vec![
            Diamond::new().into(),
            Squiggle::new().into(),
            Hexagon::new().into(),
            Rectangle::new().into(),
            RoundedRectangle::new(6.).into(),
            Capsule::new().into(),
        ];

        for kind in kinds {
            let inset = kind.inset(3.);
            let expected = match inset {
                ShapeKind::Diamond(shape) => shape.path(&frame),
                ShapeKind::Squiggle(shape) => shape.path(&frame),
                ShapeKind::Hexagon(shape) => shape.path(&frame),
                ShapeKind::Rectangle(shape) => shape.path(&frame),
                ShapeKind::RoundedRectangle(shape) => shape.path(&frame),
                ShapeKind::Capsule(shape) => shape.path(&frame),
            };
            assert_eq!(inset.path(&frame), expected);
            assert_ne!(kind.path(&frame), expected);
        }
    }

    #[test]
    fn inset_keeps_the_kind() {
        let kind = ShapeKind::from(Diamond::with_inset(1.)).inset(2.);
        assert_eq!(kind, ShapeKind::Diamond(Diamond::with_inset(3.)));
    }
}
