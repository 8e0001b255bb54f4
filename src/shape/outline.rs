use crate::{
    color::Color,
    math::Rect,
    shape::{Fill, Path, Shape, Stroke, VerticalStripes},
};

/// A shape that can produce its outline within a bounding rectangle.
///
/// The provided methods compose the outline into drawing instructions. Each
/// returns its layers back to front.
pub trait Outline {
    /// Returns the outline of this shape fitted to `rect`.
    fn path<S>(&self, rect: &Rect<f32, S>) -> Path<S>;

    /// Fills the outline with `fill` and strokes it, centered on the outline,
    /// with `stroke` on top.
    fn stroke_and_fill<S>(&self, rect: &Rect<f32, S>, stroke: Stroke, fill: Fill) -> Vec<Shape<S>> {
        let outline = self.path(rect);
        vec![
            Shape::from(outline.clone()).fill(fill),
            Shape::from(outline).stroke(stroke),
        ]
    }

    /// Fills the outline with half-transparent vertical stripes of `color`
    /// and strokes the outline with `color` on top.
    fn striped<S>(&self, rect: &Rect<f32, S>, line_width: f32, color: Color) -> Vec<Shape<S>> {
        let outline = self.path(rect);
        vec![
            VerticalStripes::default()
                .shape(rect, color.opacity(0.5))
                .clip(outline.clone()),
            Shape::from(outline).stroke(Stroke::new(color).line_width(line_width)),
        ]
    }
}

/// A shape whose outline can be pulled inward by an inset amount.
///
/// Insetting by half a stroke's width lets the stroke's outer edge land on
/// the original outline.
pub trait InsettableShape: Outline + Sized {
    /// Returns a copy of this shape with its inset amount increased by
    /// `amount`.
    #[must_use]
    fn inset(&self, amount: f32) -> Self;

    /// Strokes the outline so that the stroke lies entirely inside it.
    fn stroke_border<S>(&self, rect: &Rect<f32, S>, stroke: Stroke) -> Shape<S> {
        let border = self.inset(stroke.width() / 2.).path(rect);
        Shape::from(border).stroke(stroke)
    }

    /// Fills the outline with `fill` and strokes its border with `stroke` on
    /// top.
    fn stroke_border_and_fill<S>(
        &self,
        rect: &Rect<f32, S>,
        stroke: Stroke,
        fill: Fill,
    ) -> Vec<Shape<S>> {
        vec![
            Shape::from(self.path(rect)).fill(fill),
            self.stroke_border(rect, stroke),
        ]
    }
}
