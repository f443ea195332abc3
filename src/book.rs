use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
}

/// A book that has not been assigned an id yet.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub title: String,
    pub author: String,
}

/// Fields to overwrite on an existing book. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Book {
    pub fn apply(&mut self, changes: BookChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }

        if let Some(author) = changes.author {
            self.author = author;
        }
    }
}

/// The records present at process start.
pub fn seed() -> Vec<Book> {
    [
        (1, "The Great Gatsby", "F. Scott Fitzgerald"),
        (2, "To Kill a Mockingbird", "Harper Lee"),
        (3, "1984", "George Orwell"),
    ]
    .into_iter()
    .map(|(id, title, author)| Book {
        id,
        title: title.to_string(),
        author: author.to_string(),
    })
    .collect()
}
