pub mod api;
pub mod books;
