use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::book::{BookChanges, NewBook};

pub mod app;
pub mod create_book;
pub mod delete_book;
pub mod get_book;
pub mod list_books;
pub mod update_book;

/// Request body of `POST /books` and `PUT /books/:id`.
///
/// A field is present only if it holds a non-empty string. Any other value counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct BookPayload {
    #[serde(default, deserialize_with = "non_empty_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub author: Option<String>,
}

impl BookPayload {
    /// `None` unless both `title` and `author` are present.
    pub fn into_new_book(self) -> Option<NewBook> {
        Some(NewBook {
            title: self.title?,
            author: self.author?,
        })
    }

    pub fn into_changes(self) -> BookChanges {
        BookChanges {
            title: self.title,
            author: self.author,
        }
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(value) if !value.is_empty() => Ok(Some(value)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> BookPayload {
        serde_json::from_value(value).expect("Payload is an object")
    }

    #[test]
    fn keeps_non_empty_strings() {
        let payload = parse(json!({ "title": "Dune", "author": "Frank Herbert" }));

        assert_eq!(payload.title.as_deref(), Some("Dune"));
        assert_eq!(payload.author.as_deref(), Some("Frank Herbert"));
    }

    #[test]
    fn treats_falsy_and_non_string_values_as_absent() {
        let payload = parse(json!({ "title": "", "author": null, "extra": 1 }));
        assert!(payload.title.is_none());
        assert!(payload.author.is_none());

        let payload = parse(json!({ "title": 0, "author": false }));
        assert!(payload.title.is_none());
        assert!(payload.author.is_none());
    }

    #[test]
    fn new_book_requires_both_fields() {
        assert!(parse(json!({ "title": "Only" })).into_new_book().is_none());
        assert!(parse(json!({ "author": "Only" })).into_new_book().is_none());

        let new_book = parse(json!({ "title": "T", "author": "A" }))
            .into_new_book()
            .expect("Both fields are present");

        assert_eq!(new_book.title, "T");
        assert_eq!(new_book.author, "A");
    }
}
