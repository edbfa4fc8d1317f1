//! License text generation: input validation and template rendering.

mod error;
mod form;
mod template;
mod validate;

pub use error::LicenseError;
pub use form::FormState;
pub use template::{render, LicenseText, LICENSE_NAME};
pub use validate::{is_ready, is_valid_author, is_valid_year};

/// Validate both fields and render, reporting which field is wrong.
///
/// Used by the non-interactive `--print` path; the interactive form
/// checks [`is_ready`] instead and never surfaces an error.
pub fn generate(year: &str, author: &str) -> Result<LicenseText, LicenseError> {
    if !is_valid_year(year) {
        return Err(LicenseError::InvalidYear {
            input: year.to_string(),
        });
    }
    if !is_valid_author(author) {
        return Err(LicenseError::EmptyAuthor);
    }
    Ok(render(year, author.trim()))
}
