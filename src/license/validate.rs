/// Exactly four ASCII decimal digits, nothing else.
pub fn is_valid_year(year: &str) -> bool {
    year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_valid_author(author: &str) -> bool {
    !author.trim().is_empty()
}

/// True when the form may be turned into license text.
pub fn is_ready(year: &str, author: &str) -> bool {
    is_valid_year(year) && is_valid_author(author)
}
