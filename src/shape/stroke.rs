use lyon_tessellation::StrokeOptions;

use crate::color::Color;

/// A shape stroke (outline) options.
#[derive(Default, Clone, Debug)]
pub struct Stroke {
    /// The color to stroke the shape's with.
    pub color: Color,
    /// The options for drawing the stroke.
    pub options: StrokeOptions,
}

impl Stroke {
    /// Creates a new instance using `color` with default options. The default
    /// line width is `1.0`.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            options: StrokeOptions::default(),
        }
    }

    /// Builder-style function. Sets `options.line_width` and return self.
    #[must_use]
    pub fn line_width(mut self, width: f32) -> Self {
        self.options.line_width = width;
        self
    }

    /// The width of the stroked line.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.options.line_width
    }
}
