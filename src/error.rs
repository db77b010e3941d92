/// Result type for application actions.
pub(crate) type Result<T> = std::result::Result<T, AppError>;

/// Error codes for setup and input handling.
#[derive(Debug, PartialEq)]
pub enum AppError {
    Sdl(String),              // SDL context or subsystem failed.
    Window(String),           // Window could not be built.
    InvalidDirection(String), // Key does not map to a movement direction.
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Sdl(why) => write!(f, "SDL Error: {why}"),
            AppError::Window(why) => write!(f, "Window Error: {why}"),
            AppError::InvalidDirection(key) => write!(f, "Invalid direction key: {key}"),
        }
    }
}

impl std::error::Error for AppError {}
