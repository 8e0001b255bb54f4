#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    math::{Point, Rect},
    shape::{Path, PathBuilder, Shape, Stroke},
};

/// Evenly spaced vertical stripes covering a rectangle. Each stripe is as wide
/// as the gap next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VerticalStripes {
    count: u16,
}

impl Default for VerticalStripes {
    fn default() -> Self {
        Self::new(8)
    }
}

impl VerticalStripes {
    /// Returns `count` stripes.
    #[must_use]
    pub const fn new(count: u16) -> Self {
        Self { count }
    }

    /// The number of stripes.
    #[must_use]
    pub const fn count(&self) -> u16 {
        self.count
    }

    fn step<S>(&self, rect: &Rect<f32, S>) -> f32 {
        if self.count == 0 {
            0.
        } else {
            rect.size.width / f32::from(self.count)
        }
    }

    /// The stroke width that makes stripes and gaps equally wide.
    #[must_use]
    pub fn line_width<S>(&self, rect: &Rect<f32, S>) -> f32 {
        self.step(rect) / 2.
    }

    /// The center lines of the stripes: one open vertical segment at each of
    /// `count + 1` evenly spaced positions from the left edge to the right
    /// edge. The outermost segments are half covered by the rectangle.
    #[must_use]
    pub fn path<S>(&self, rect: &Rect<f32, S>) -> Path<S> {
        if self.count == 0 {
            return Path::default();
        }

        let step = self.step(rect);
        let line = |index: u16| {
            let x = rect.min_x() + f32::from(index) * step;
            (Point::new(x, rect.min_y()), Point::new(x, rect.max_y()))
        };

        let (top, bottom) = line(0);
        (1..=self.count)
            .fold(PathBuilder::new(top).line_to(bottom), |builder, index| {
                let (top, bottom) = line(index);
                builder.move_to(top).line_to(bottom)
            })
            .build()
    }

    /// Returns the stripes stroked with `color`.
    #[must_use]
    pub fn shape<S>(&self, rect: &Rect<f32, S>, color: Color) -> Shape<S> {
        Shape::from(self.path(rect)).stroke(Stroke::new(color).line_width(self.line_width(rect)))
    }
}
