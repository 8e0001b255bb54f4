#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A type representing an x and y coordinate.
pub type Point<T = f32, Unit = Points> = euclid::Point2D<T, Unit>;
/// A type representing a width and height.
pub type Size<T = f32, Unit = Points> = euclid::Size2D<T, Unit>;
/// A type representing a [`Point`] and [`Size`].
pub type Rect<T = f32, Unit = Points> = euclid::Rect<T, Unit>;
/// A type representing a vector with magnitudes x and y.
pub type Vector<T = f32, Unit = Points> = euclid::Vector2D<T, Unit>;
/// Offsets on each side of a rectangle, in top, right, bottom, left order.
pub type Surround<T = f32, Unit = Points> = euclid::SideOffsets2D<T, Unit>;
pub use euclid::{Length, Scale};

/// The scale used to convert between [`Points`] and [`Pixels`].
pub type ScreenScale = Scale<f32, Points, Pixels>;

/// A unit representing physical pixels on a display.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Pixels;

/// A unit representing device-independent points. Drawing code works in this
/// unit and converts to [`Pixels`] with a [`ScreenScale`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Points;
