use lyon_tessellation::{FillOptions, FillRule};

use crate::color::Color;

/// The interior paint of a [`Shape`](crate::shape::Shape).
///
/// Fills use the non-zero winding rule unless told otherwise, so overlapping
/// subpaths such as a [`Squiggle`](crate::shape::Squiggle)'s two curves are
/// painted solid instead of leaving holes where they cross.
#[derive(Clone, Debug)]
pub struct Fill {
    /// The color to fill.
    pub color: Color,
    /// The lyon options used when tessellating.
    pub options: FillOptions,
}

impl Default for Fill {
    fn default() -> Self {
        Self::new(Color::default())
    }
}

impl Fill {
    /// Returns a solid, non-zero fill of `color`.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            color,
            options: FillOptions::default().with_fill_rule(FillRule::NonZero),
        }
    }

    /// Builder-style function. Sets the winding rule and returns self.
    #[must_use]
    pub fn fill_rule(mut self, rule: FillRule) -> Self {
        self.options.fill_rule = rule;
        self
    }

    /// The winding rule deciding which regions are inside.
    #[must_use]
    pub const fn rule(&self) -> FillRule {
        self.options.fill_rule
    }
}
