//! Core of the book library: records, validation, persistence to a
//! string-keyed store, progress and the table model. No GUI types here.

pub mod book;
pub mod controller;
pub mod library;
pub mod persistence;
pub mod progress;
pub mod render;
pub mod store;
pub mod validate;

pub use book::{Book, BookKey, default_books};
pub use controller::{BookForm, Controller, ControllerError, ControllerOptions};
pub use library::{Library, LibraryError};
pub use persistence::{LoadOutcome, PersistError, STORAGE_KEY};
pub use progress::Progress;
pub use render::{BookRow, LibraryView, ReadLabel, RowOrder};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use validate::{ValidationError, validate_book_input};
