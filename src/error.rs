use lyon_tessellation::TessellationError;

/// All errors that `shapecraft` can return.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An error while tessellating a shape's fill or stroke.
    #[error("error tessellating shape: {0:?}")]
    Tessellation(TessellationError),
}
