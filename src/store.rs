use tokio::sync::Mutex;

use crate::book::{self, Book, BookChanges, NewBook};

/// In-memory, insertion-ordered collection of books.
///
/// Every operation takes the lock exactly once, so each read or mutation is
/// atomic with respect to concurrent requests.
#[derive(Debug, Default)]
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Mutex::new(books),
        }
    }

    /// A store holding the seed records.
    pub fn seeded() -> Self {
        Self::new(book::seed())
    }

    pub async fn list(&self) -> Vec<Book> {
        self.books.lock().await.clone()
    }

    pub async fn get(&self, id: u64) -> Option<Book> {
        let books = self.books.lock().await;

        books.iter().find(|book| book.id == id).cloned()
    }

    #[tracing::instrument(skip_all)]
    pub async fn create(&self, new_book: NewBook) -> Book {
        let mut books = self.books.lock().await;

        let id = next_id(&books);
        let book = Book {
            id,
            title: new_book.title,
            author: new_book.author,
        };

        books.push(book.clone());
        tracing::debug!(id, "Created");

        book
    }

    #[tracing::instrument(skip(self, changes))]
    pub async fn update(&self, id: u64, changes: BookChanges) -> Option<Book> {
        let mut books = self.books.lock().await;

        let book = books.iter_mut().find(|book| book.id == id)?;
        book.apply(changes);
        tracing::debug!("Updated");

        Some(book.clone())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: u64) -> Option<Book> {
        let mut books = self.books.lock().await;

        let index = books.iter().position(|book| book.id == id)?;
        let book = books.remove(index);
        tracing::debug!("Deleted");

        Some(book)
    }
}

/// `max(ids) + 1`, or `1` for an empty collection.
fn next_id(books: &[Book]) -> u64 {
    books.iter().map(|book| book.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_book(title: &str, author: &str) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    fn ids(books: &[Book]) -> Vec<u64> {
        books.iter().map(|book| book.id).collect()
    }

    #[tokio::test]
    async fn seeded_store_holds_three_books_in_order() {
        let store = BookStore::seeded();

        let books = store.list().await;

        assert_eq!(ids(&books), vec![1, 2, 3]);
        assert_eq!(books[0].title, "The Great Gatsby");
        assert_eq!(books[2].author, "George Orwell");
    }

    #[tokio::test]
    async fn create_assigns_max_plus_one() {
        let store = BookStore::seeded();
        store.delete(2).await.expect("Seed book 2 exists");

        let book = store.create(new_book("Dune", "Frank Herbert")).await;

        assert_eq!(book.id, 4);
        assert_eq!(ids(&store.list().await), vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn create_on_empty_store_starts_at_one() {
        let store = BookStore::default();

        let first = store.create(new_book("A", "B")).await;
        let second = store.create(new_book("C", "D")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn emptied_store_restarts_ids_from_one() {
        let store = BookStore::seeded();
        for id in 1..=3 {
            store.delete(id).await.expect("Seed book exists");
        }

        let book = store.create(new_book("A", "B")).await;

        assert_eq!(book.id, 1);
    }

    #[tokio::test]
    async fn ids_stay_unique_across_creates_and_deletes() {
        let store = BookStore::seeded();

        for round in 0..10 {
            store.create(new_book("T", "A")).await;
            if round % 3 == 0 {
                store.delete(1 + round).await;
            }
        }

        let mut seen = ids(&store.list().await);
        let len = seen.len();
        seen.sort_unstable();
        seen.dedup();

        assert_eq!(seen.len(), len);
    }

    #[tokio::test]
    async fn update_only_touches_given_fields() {
        let store = BookStore::seeded();

        let book = store
            .update(
                3,
                BookChanges {
                    title: Some("Nineteen Eighty-Four".to_string()),
                    author: None,
                },
            )
            .await
            .expect("Seed book 3 exists");

        assert_eq!(book.title, "Nineteen Eighty-Four");
        assert_eq!(book.author, "George Orwell");
        assert_eq!(store.get(3).await, Some(book));
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_book_return_none() {
        let store = BookStore::seeded();

        assert!(store.update(42, BookChanges::default()).await.is_none());
        assert!(store.delete(42).await.is_none());
        assert_eq!(store.list().await.len(), 3);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one_and_keeps_order() {
        let store = BookStore::seeded();

        let deleted = store.delete(2).await.expect("Seed book 2 exists");

        assert_eq!(deleted.title, "To Kill a Mockingbird");
        assert_eq!(ids(&store.list().await), vec![1, 3]);
        assert!(store.get(2).await.is_none());
    }
}
