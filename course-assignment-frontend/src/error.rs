use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("failed to encode form fields: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}
