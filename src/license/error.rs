use thiserror::Error;

/// Rejected generator input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LicenseError {
    #[error("Invalid year '{input}': expected exactly 4 digits")]
    InvalidYear { input: String },

    #[error("Author name must not be empty")]
    EmptyAuthor,
}
