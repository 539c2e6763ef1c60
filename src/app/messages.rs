use iced::keyboard::{Key, Modifiers};
use library_core::BookKey;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    TitleChanged(String),
    AuthorChanged(String),
    PagesChanged(String),
    ReadChanged(bool),
    Submit,
    /// Row controls carry the book's key and the position the row was drawn at.
    ToggleRead {
        key: BookKey,
        position: usize,
    },
    RequestDelete {
        key: BookKey,
        position: usize,
    },
    RequestClearAll,
    Confirm,
    Cancel,
    DismissNotice,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
}

/// Inputs of the add-book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Author,
    Pages,
}
