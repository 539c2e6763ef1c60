use crate::book::{Book, BookKey, default_books};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("This book is already in your library.")]
    Duplicate,
    #[error("That book is no longer in your library.")]
    NoSuchBook,
}

/// Ordered collection of books; insertion order is display order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Library {
    books: Vec<Book>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Book> {
        self.books.get(position)
    }

    pub fn contains(&self, title: &str, author: &str) -> bool {
        self.books.iter().any(|book| book.matches(title, author))
    }

    /// Append `book` unless one with the same trimmed title and author exists.
    pub fn add(&mut self, book: Book) -> Result<&Book, LibraryError> {
        if self.contains(&book.title, &book.author) {
            return Err(LibraryError::Duplicate);
        }
        self.books.push(book);
        Ok(&self.books[self.books.len() - 1])
    }

    /// Flip the read flag at `position` and return the new value.
    pub fn toggle_read(&mut self, position: usize) -> Result<bool, LibraryError> {
        let book = self
            .books
            .get_mut(position)
            .ok_or(LibraryError::NoSuchBook)?;
        book.read = !book.read;
        Ok(book.read)
    }

    /// Remove the book at `position`; later books shift down by one.
    pub fn remove(&mut self, position: usize) -> Result<Book, LibraryError> {
        if position >= self.books.len() {
            return Err(LibraryError::NoSuchBook);
        }
        Ok(self.books.remove(position))
    }

    pub fn clear(&mut self) {
        self.books.clear();
    }

    /// Swap in a new sequence, keeping this container.
    pub fn replace_all(&mut self, books: Vec<Book>) {
        self.books.clear();
        self.books.extend(books);
    }

    /// Add the default books when empty. Returns whether anything was added.
    pub fn seed_defaults_if_empty(&mut self) -> bool {
        if !self.books.is_empty() {
            return false;
        }
        self.books.extend(default_books());
        true
    }

    /// Current position of the book identified by `key`.
    ///
    /// `hint` is the position the caller last saw; it is only trusted when the
    /// book there still carries `key`.
    pub fn resolve(&self, key: &BookKey, hint: usize) -> Option<usize> {
        let matches_key = |book: &Book| book.matches(&key.title, &key.author);
        if self.books.get(hint).is_some_and(matches_key) {
            return Some(hint);
        }
        self.books.iter().position(matches_key)
    }
}
