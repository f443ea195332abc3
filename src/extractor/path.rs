use axum::{
    async_trait,
    extract::{FromRequestParts, Path as AxumPath},
    http::request::Parts,
};

use crate::error::ApiError;

/// Extracts the `:id` path parameter as a book id.
///
/// Only the leading integer is read: `1abc` and `2.5` yield `1` and `2`.
/// A parameter without leading digits, a negative number or an overflow can never
/// match a book, so it rejects with [`ApiError::BookNotFound`].
#[derive(Debug, Clone, Copy)]
pub struct BookId(pub u64);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "book_id_extractor", skip_all)]
    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AxumPath(raw) = AxumPath::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::warn!(?rejection, "Rejection");

                ApiError::BookNotFound
            })?;

        match parse_leading_id(&raw) {
            Some(id) => {
                tracing::trace!(id, "Extracted");

                Ok(BookId(id))
            }
            None => {
                tracing::warn!(%raw, "Invalid book id");

                Err(ApiError::BookNotFound)
            }
        }
    }
}

/// Reads the integer at the start of `raw`, ignoring leading whitespace and anything
/// after the digits. `None` if there are no digits, the number is negative or it overflows.
fn parse_leading_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();

    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .bytes()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        return None;
    }

    let id = digits.parse::<u64>().ok()?;

    match negative && id != 0 {
        true => None,
        false => Some(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_plain_integers() {
        assert_eq!(parse_leading_id("1"), Some(1));
        assert_eq!(parse_leading_id("42"), Some(42));
        assert_eq!(parse_leading_id("007"), Some(7));
    }

    #[test]
    fn drops_trailing_text() {
        assert_eq!(parse_leading_id("1abc"), Some(1));
        assert_eq!(parse_leading_id("2.5"), Some(2));
        assert_eq!(parse_leading_id("3e2"), Some(3));
    }

    #[test]
    fn accepts_leading_whitespace_and_sign() {
        assert_eq!(parse_leading_id("  5"), Some(5));
        assert_eq!(parse_leading_id("+1"), Some(1));
        assert_eq!(parse_leading_id("-0"), Some(0));
    }

    #[test]
    fn rejects_missing_digits_negatives_and_overflow() {
        assert_eq!(parse_leading_id(""), None);
        assert_eq!(parse_leading_id("abc"), None);
        assert_eq!(parse_leading_id("-"), None);
        assert_eq!(parse_leading_id("+x1"), None);
        assert_eq!(parse_leading_id("-1"), None);
        assert_eq!(parse_leading_id("99999999999999999999999"), None);
    }
}
