//! Process-level error type.
//!
//! The dashboard distinguishes two failure classes at the exit-code level:
//!
//! - `usage` (exit 2): bad input from the operator — missing dataset file,
//!   malformed JSON, unwritable export path
//! - `runtime` (exit 4): environment failures — HTTP errors, terminal setup,
//!   chart rendering
//!
//! Dataset load failures inside the dashboard itself never surface here; the
//! pipeline degrades those to an empty record set with a diagnostic string.

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Operator/input problem (exit 2).
    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// Environment/runtime problem (exit 4).
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_exit_codes() {
        assert_eq!(AppError::usage("bad flag").exit_code(), 2);
        assert_eq!(AppError::runtime("no terminal").exit_code(), 4);
        assert_eq!(AppError::new(7, "custom").exit_code(), 7);
    }

    #[test]
    fn display_shows_only_the_message() {
        let err = AppError::usage("dataset missing");
        assert_eq!(err.to_string(), "dataset missing");
    }
}
