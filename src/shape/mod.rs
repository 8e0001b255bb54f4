mod diamond;
mod fill;
mod hexagon;
mod inset;
mod kind;
mod outline;
mod path;
mod rectangle;
mod squiggle;
mod stripes;
mod stroke;

use lyon_tessellation::{
    math::Point as LyonPoint, BuffersBuilder, FillTessellator, FillVertex, StrokeTessellator,
    StrokeVertex, VertexBuffers,
};
use tracing::instrument;

pub use self::{
    diamond::Diamond,
    fill::*,
    hexagon::Hexagon,
    inset::aspect_corrected_insets,
    kind::ShapeKind,
    outline::{InsettableShape, Outline},
    path::*,
    rectangle::{Capsule, Rectangle, RoundedRectangle},
    squiggle::Squiggle,
    stripes::VerticalStripes,
    stroke::*,
};
use crate::{math::Rect, Error};

/// A drawing instruction: a path with an optional fill, stroke and clip.
///
/// When both are present, the fill is drawn beneath the stroke.
#[derive(Clone, Debug)]
pub struct Shape<S> {
    path: Path<S>,
    stroke: Option<Stroke>,
    fill: Option<Fill>,
    clip: Option<Path<S>>,
}

impl<S> Shape<S> {
    /// Returns an unstroked, unfilled rectangle.
    #[must_use]
    pub fn rect(rect: &Rect<f32, S>) -> Self {
        Self::from(rectangle::rect_path(rect))
    }

    /// Returns an unstroked, unfilled rectangle with rounded corners.
    #[must_use]
    pub fn rounded_rect(rect: &Rect<f32, S>, corner_radius: f32) -> Self {
        Self::from(rectangle::rounded_rect_path(rect, corner_radius))
    }

    /// Builder-style function. Sets the fill and returns self.
    #[must_use]
    pub fn fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Builder-style function. Sets the stroke and returns self.
    #[must_use]
    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Builder-style function. Restricts drawing to the inside of `clip`.
    #[must_use]
    pub fn clip(mut self, clip: Path<S>) -> Self {
        self.clip = Some(clip);
        self
    }

    /// The outline to draw.
    #[must_use]
    pub const fn path(&self) -> &Path<S> {
        &self.path
    }

    /// The stroke, if any.
    #[must_use]
    pub const fn stroke_style(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }

    /// The fill, if any.
    #[must_use]
    pub const fn fill_style(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }

    /// The clipping path, if any.
    #[must_use]
    pub const fn clip_path(&self) -> Option<&Path<S>> {
        self.clip.as_ref()
    }

    /// Tessellates the fill and stroke into triangles. Layers whose color is
    /// invisible are skipped. The clipping path is not applied; it is left to
    /// whatever consumes the mesh.
    #[instrument(level = "trace", skip(self))]
    pub fn tessellate(&self) -> crate::Result<Mesh> {
        let path = self.path.as_lyon();
        let mut mesh = Mesh::default();

        if let Some(fill) = self.fill.as_ref().filter(|fill| fill.color.visible()) {
            FillTessellator::new()
                .tessellate_path(
                    &path,
                    &fill.options,
                    &mut BuffersBuilder::new(&mut mesh.fill, |vertex: FillVertex<'_>| {
                        vertex.position()
                    }),
                )
                .map_err(Error::Tessellation)?;
        }

        if let Some(stroke) = self.stroke.as_ref().filter(|stroke| stroke.color.visible()) {
            StrokeTessellator::new()
                .tessellate_path(
                    &path,
                    &stroke.options,
                    &mut BuffersBuilder::new(&mut mesh.stroke, |vertex: StrokeVertex<'_, '_>| {
                        vertex.position()
                    }),
                )
                .map_err(Error::Tessellation)?;
        }

        tracing::trace!(
            fill_vertices = mesh.fill.vertices.len(),
            stroke_vertices = mesh.stroke.vertices.len(),
            "tessellated shape"
        );
        Ok(mesh)
    }
}

impl<S> From<Path<S>> for Shape<S> {
    fn from(path: Path<S>) -> Self {
        Self {
            path,
            stroke: None,
            fill: None,
            clip: None,
        }
    }
}

/// Triangles produced by [`Shape::tessellate`].
pub struct Mesh {
    /// The triangles covering the fill.
    pub fill: VertexBuffers<LyonPoint, u16>,
    /// The triangles covering the stroke.
    pub stroke: VertexBuffers<LyonPoint, u16>,
}

impl Default for Mesh {
    fn default() -> Self {
        Self {
            fill: VertexBuffers::new(),
            stroke: VertexBuffers::new(),
        }
    }
}
