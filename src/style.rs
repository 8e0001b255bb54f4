#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    math::{Points, Rect, Surround},
    shape::{Fill, Shape},
};

/// Colors and metrics for drawing a push button around a label.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ButtonStyle {
    /// The label color.
    pub foreground: Color,
    /// The background color while the button is not pressed.
    pub background: Color,
    /// The background color while the button is pressed.
    pub pressed: Color,
    /// Space between the label and the edge of the button.
    pub padding: Surround<f32, Points>,
    /// The radius of the background's corners.
    pub corner_radius: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::new(Color::WHITE, Color::CLEAR, Color::PINK)
    }
}

impl ButtonStyle {
    /// Returns a style using the given colors with the default padding and
    /// corner radius.
    #[must_use]
    pub fn new(foreground: Color, background: Color, pressed: Color) -> Self {
        Self {
            foreground,
            background,
            pressed,
            padding: Surround::new(5., 10., 5., 10.),
            corner_radius: 5.,
        }
    }

    /// The background color for the given pressed state.
    #[must_use]
    pub const fn background_for(&self, pressed: bool) -> Color {
        if pressed {
            self.pressed
        } else {
            self.background
        }
    }

    /// The label color.
    #[must_use]
    pub const fn label_color(&self) -> Color {
        self.foreground
    }

    /// Grows `label_bounds` by the padding.
    #[must_use]
    pub fn bounds_for<S>(&self, label_bounds: &Rect<f32, S>) -> Rect<f32, S> {
        let padding = &self.padding;
        label_bounds.outer_rect(Surround::new(
            padding.top,
            padding.right,
            padding.bottom,
            padding.left,
        ))
    }

    /// The rounded background drawn behind a label occupying `label_bounds`.
    #[must_use]
    pub fn background_shape<S>(&self, label_bounds: &Rect<f32, S>, pressed: bool) -> Shape<S> {
        Shape::rounded_rect(&self.bounds_for(label_bounds), self.corner_radius)
            .fill(Fill::new(self.background_for(pressed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Pixels, Point, Size};

    #[test]
    fn defaults() {
        let style = ButtonStyle::default();
        assert_eq!(style.label_color(), Color::WHITE);
        assert_eq!(style.background_for(false), Color::CLEAR);
        assert_eq!(style.background_for(true), Color::PINK);
        assert_eq!(style.padding, Surround::new(5., 10., 5., 10.));
    }

    #[test]
    fn bounds_grow_by_the_padding() {
        let label = Rect::<f32, Points>::new(Point::new(20., 30.), Size::new(60., 14.));
        let bounds = ButtonStyle::default().bounds_for(&label);
        assert_eq!(bounds.origin, Point::new(10., 25.));
        assert_eq!(bounds.size, Size::new(80., 24.));
    }

    #[test]
    fn bounds_keep_the_label_unit() {
        let label = Rect::<f32, Pixels>::new(Point::new(0., 0.), Size::new(40., 20.));
        let bounds = ButtonStyle::default().bounds_for(&label);
        assert_eq!(bounds, Rect::new(Point::new(-10., -5.), Size::new(60., 30.)));
    }

    #[test]
    fn pressed_background_is_filled() {
        let label = Rect::<f32, Points>::new(Point::new(20., 30.), Size::new(60., 14.));
        let style = ButtonStyle::new(Color::BLACK, Color::GRAY, Color::ORANGE);

        let shape = style.background_shape(&label, true);
        let fill = shape.fill_style().expect("background is filled");
        assert_eq!(fill.color, Color::ORANGE);
        assert!(shape.stroke_style().is_none());
        assert!(shape.path().is_closed());
        assert_eq!(shape.path().endpoints()[0], Point::new(15., 25.));
    }
}
