use iced::widget::text_input::Id as InputId;
use once_cell::sync::Lazy;

pub(crate) static TITLE_INPUT_ID: Lazy<InputId> = Lazy::new(|| InputId::new("title-input"));
pub(crate) static AUTHOR_INPUT_ID: Lazy<InputId> = Lazy::new(|| InputId::new("author-input"));
pub(crate) static PAGES_INPUT_ID: Lazy<InputId> = Lazy::new(|| InputId::new("pages-input"));

pub(crate) const DELETE_PROMPT: &str = "Are you sure you want to delete this book?";
pub(crate) const CLEAR_PROMPT: &str = "Are you sure you want to clear all books?";
