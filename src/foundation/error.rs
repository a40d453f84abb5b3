/// Convenience result type used across cardforge.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ForgeError {
    /// Invalid field path, enum value, or argument.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding or encoding raster images.
    #[error("image error: {0}")]
    Image(String),

    /// Errors while parsing or rasterizing a preview scene.
    #[error("render error: {0}")]
    Render(String),

    /// Crop tool operation requested in a state that cannot serve it.
    #[error("crop error: {0}")]
    Crop(String),

    /// Errors when serializing or deserializing entity documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ForgeError {
    /// Build a [`ForgeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ForgeError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build a [`ForgeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ForgeError::Crop`] value.
    pub fn crop(msg: impl Into<String>) -> Self {
        Self::Crop(msg.into())
    }

    /// Build a [`ForgeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

impl From<image::ImageError> for ForgeError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
