//! Stylesheet errors.

/// A recoverable stylesheet problem. Render paths report these to the
/// diagnostic sink and substitute a safe fallback (`inherit` for values,
/// an empty format token for fonts); they never abort a render.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CssError {
    #[error("Missing palette value: {0}")]
    MissingPaletteValue(String),

    #[error("Invalid CSS value: {0}")]
    InvalidValue(String),

    #[error("Invalid font URL: {0}")]
    InvalidFontUrl(String),

    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),
}
