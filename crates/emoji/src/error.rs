#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid Variant: {0:?}, expected \"text_type\" or \"emoji_type\"")]
    InvalidVariant(String),

    #[error("Unknown Language: {0:?}")]
    UnknownLanguage(String),

    #[error("No Emoji Found")]
    NoEmojiFound,

    #[error("Invalid Delimiters: {0}")]
    InvalidDelimiters(#[from] regex::Error),
}
