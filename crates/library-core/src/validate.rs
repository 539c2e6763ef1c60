use crate::book::whole_positive_u32;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static AUTHOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s\-'.]+$").expect("author pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill all fields!")]
    MissingFields,
    #[error(
        "Please enter a valid author name (letters, spaces, hyphens, apostrophes, and periods only)."
    )]
    InvalidAuthor,
    #[error("Please enter a valid whole number for pages.")]
    InvalidPages,
}

/// Check raw form input and return the parsed page count.
///
/// Inputs are trimmed before checking. Pages accept any base-10 number whose
/// value is a positive whole number, so `"42.0"` passes while `"1.5"` does not.
pub fn validate_book_input(title: &str, author: &str, pages: &str) -> Result<u32, ValidationError> {
    let (title, author, pages) = (title.trim(), author.trim(), pages.trim());
    if title.is_empty() || author.is_empty() || pages.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    if !AUTHOR_PATTERN.is_match(author) {
        return Err(ValidationError::InvalidAuthor);
    }
    parse_pages(pages).ok_or(ValidationError::InvalidPages)
}

fn parse_pages(pages: &str) -> Option<u32> {
    // f64 parsing also takes "inf" and "NaN"; only plain decimal notation is allowed.
    let is_decimal = pages
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !is_decimal {
        return None;
    }
    pages.parse::<f64>().ok().and_then(whole_positive_u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_is_missing() {
        assert_eq!(
            validate_book_input("", "Author", "100"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_book_input("T", "   ", "100"),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_book_input("T", "Author", ""),
            Err(ValidationError::MissingFields)
        );
    }

    #[test]
    fn author_with_digit_is_invalid() {
        assert_eq!(
            validate_book_input("T", "Auth0r", "100"),
            Err(ValidationError::InvalidAuthor)
        );
    }

    #[test]
    fn author_allows_punctuation_of_names() {
        assert_eq!(validate_book_input("T", "J.R.R. Tolkien", "10"), Ok(10));
        assert_eq!(validate_book_input("T", "Flannery O'Connor", "10"), Ok(10));
        assert_eq!(validate_book_input("T", "Jean-Paul Sartre", "10"), Ok(10));
    }

    #[test]
    fn fractional_zero_and_negative_pages_are_invalid() {
        for pages in ["1.5", "0", "-4", "abc", "NaN", "inf", "0x10", "99999999999"] {
            assert_eq!(
                validate_book_input("T", "Author", pages),
                Err(ValidationError::InvalidPages),
                "pages {pages:?}"
            );
        }
    }

    #[test]
    fn whole_pages_are_parsed() {
        assert_eq!(validate_book_input("T", "Author", "42"), Ok(42));
        assert_eq!(validate_book_input("T", "Author", " 42 "), Ok(42));
        assert_eq!(validate_book_input("T", "Author", "42.0"), Ok(42));
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "Please fill all fields!"
        );
        assert_eq!(
            ValidationError::InvalidPages.to_string(),
            "Please enter a valid whole number for pages."
        );
    }
}
