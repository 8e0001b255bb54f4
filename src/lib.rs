//! Insettable vector shapes and the drawing helpers built on top of them.

#![forbid(unsafe_code)]
#![warn(
    clippy::cargo,
    missing_docs,
    clippy::nursery,
    clippy::pedantic,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
)]

mod color;
mod error;
/// Math types for 2d geometry.
pub mod math;
/// Shapes, paths and the drawing instructions built from them.
pub mod shape;
/// Visual styles for controls.
pub mod style;

// Re-exports
pub use euclid;
pub use lyon_tessellation;

pub use self::{color::Color, error::Error};

/// A collection of commonly used exports provided by this crate.
pub mod prelude {
    pub use super::{
        math::{Pixels, Point, Points, Rect, ScreenScale, Size, Vector},
        shape::*,
        style::ButtonStyle,
        Color,
    };
}

/// Alias for [`std::result::Result`] where the error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
