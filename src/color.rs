use approx::relative_eq;
use palette::{rgb::Srgba, Component, IntoComponent, Srgb};
#[cfg(feature = "serialization")]
use serde::{Deserialize, Serialize};

/// A RGBA color with f32 components.
#[derive(Default, Clone, Debug, Copy, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

impl<U: Component + IntoComponent<f32>> From<Srgba<U>> for Color {
    fn from(color: Srgba<U>) -> Self {
        let color = color.into_format::<_, f32>();
        Self::new(
            color.color.red,
            color.color.green,
            color.color.blue,
            color.alpha,
        )
    }
}

impl<U: Component + IntoComponent<f32>> From<Srgb<U>> for Color {
    fn from(color: Srgb<U>) -> Self {
        let color = color.into_format::<f32>();
        Self::new(color.red, color.green, color.blue, 1.)
    }
}

impl From<Color> for Srgba {
    fn from(color: Color) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl Color {
    /// Creates a color from its red, green, blue and alpha components, each
    /// in the range `0.0..=1.0`.
    #[must_use]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color from 8-bit sRGB components, as written in CSS or a
    /// design tool.
    #[must_use]
    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::from(Srgba::new(red, green, blue, alpha))
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> f32 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> f32 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> f32 {
        self.blue
    }

    /// Returns the alpha component.
    #[must_use]
    pub const fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Returns the color as an f32 array.
    #[must_use]
    pub const fn rgba(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Returns if the color has a non-zero alpha value.
    #[must_use]
    pub fn visible(&self) -> bool {
        !relative_eq!(self.alpha, 0.)
    }

    /// Returns a new color using red, green, and blue from `self` and the
    /// parameter `alpha`.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Returns this color with its alpha multiplied by `opacity`.
    #[must_use]
    pub fn opacity(self, opacity: f32) -> Self {
        let alpha = self.alpha * opacity.clamp(0., 1.);
        self.with_alpha(alpha)
    }
}

impl Color {
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const BLACK: Self = Self::new(0., 0., 0., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const BLUE: Self = Self::new(0., 0., 1., 1.);
    /// Fully transparent black.
    pub const CLEAR: Self = Self::new(0., 0., 0., 0.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const GRAY: Self = Self::new(128. / 255., 128. / 255., 128. / 255., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const GREEN: Self = Self::new(0., 128. / 255., 0., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const ORANGE: Self = Self::new(1., 165. / 255., 0., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const PINK: Self = Self::new(1., 192. / 255., 203. / 255., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const RED: Self = Self::new(1., 0., 0., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const WHITE: Self = Self::new(1., 1., 1., 1.);
    /// Equivalent to the [CSS color keywords](https://developer.mozilla.org/en-US/docs/Web/CSS/color_value) of the same name.
    pub const YELLOW: Self = Self::new(1., 1., 0., 1.);
}
