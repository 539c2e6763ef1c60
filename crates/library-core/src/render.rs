//! Table model rebuilt from scratch on every render.

use crate::book::BookKey;
use crate::library::Library;
use crate::progress::Progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadLabel {
    Read,
    Unread,
}

impl ReadLabel {
    pub fn from_flag(read: bool) -> Self {
        if read { Self::Read } else { Self::Unread }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Unread => "Unread",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Same order as the library.
    InsertionOrder,
    /// Latest addition on top.
    #[default]
    NewestFirst,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    /// Position in the library when this row was built.
    pub position: usize,
    pub key: BookKey,
    pub title: String,
    pub author: String,
    pub pages: String,
    pub read: ReadLabel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryView {
    pub rows: Vec<BookRow>,
    pub progress: Progress,
}

impl LibraryView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn render(library: &Library, order: RowOrder) -> LibraryView {
    let mut rows: Vec<BookRow> = library
        .books()
        .iter()
        .enumerate()
        .map(|(position, book)| BookRow {
            position,
            key: book.key(),
            title: book.title.trim().to_string(),
            author: book.author.trim().to_string(),
            pages: book.pages.to_string(),
            read: ReadLabel::from_flag(book.read),
        })
        .collect();
    if order == RowOrder::NewestFirst {
        rows.reverse();
    }
    LibraryView {
        rows,
        progress: Progress::from_books(library.books()),
    }
}
