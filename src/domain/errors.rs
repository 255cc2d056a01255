use derive_more::Display;

/// Failure taxonomy for the dashboard.
///
/// Network and decode failures are absorbed where the data is loaded; a
/// rendering failure only ever stops the background animation.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Network Error: {}", _0)]
    Network(String),
    #[display(fmt = "Decode Error: {}", _0)]
    Decode(String),
    #[display(fmt = "Rendering Error: {}", _0)]
    Rendering(String),
}

impl std::error::Error for AppError {}

pub type DecodeResult<T> = Result<T, AppError>;
