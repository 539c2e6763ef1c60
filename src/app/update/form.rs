use super::super::messages::FormField;
use super::super::state::{App, Notice};
use super::Effect;
use library_core::{ControllerError, ValidationError};
use tracing::{info, warn};

impl App {
    /// Validate and add the form's book. The form is cleared only once the
    /// book is in the library; rejected input stays for correction.
    pub(super) fn handle_submit(&mut self, effects: &mut Vec<Effect>) {
        if self.pending.is_some() {
            return;
        }
        match self.controller.submit(&self.form) {
            Ok(book) => {
                info!(title = %book.title, "Book added from form");
                self.notice = None;
                self.form.clear();
                effects.push(Effect::Focus(FormField::Title));
            }
            Err(ControllerError::Invalid(err)) => {
                warn!(%err, "Form input rejected");
                effects.push(Effect::Focus(self.field_for_error(err)));
                self.notice = Some(Notice::error(err.to_string()));
            }
            Err(err @ ControllerError::Library(_)) => {
                self.notice = Some(Notice::error(err.to_string()));
            }
            Err(err @ ControllerError::Persist(_)) => {
                // The book is in the library even though the save failed.
                self.form.clear();
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }

    fn field_for_error(&self, err: ValidationError) -> FormField {
        match err {
            ValidationError::MissingFields => {
                if self.form.title.trim().is_empty() {
                    FormField::Title
                } else if self.form.author.trim().is_empty() {
                    FormField::Author
                } else {
                    FormField::Pages
                }
            }
            ValidationError::InvalidAuthor => FormField::Author,
            ValidationError::InvalidPages => FormField::Pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::PendingConfirmation;
    use super::super::library::tests::build_test_app;
    use super::*;

    fn fill(app: &mut App, title: &str, author: &str, pages: &str, read: bool) {
        app.reduce(Message::TitleChanged(title.to_string()));
        app.reduce(Message::AuthorChanged(author.to_string()));
        app.reduce(Message::PagesChanged(pages.to_string()));
        app.reduce(Message::ReadChanged(read));
    }

    #[test]
    fn valid_submit_adds_book_and_clears_form() {
        let mut app = build_test_app(false);
        fill(&mut app, " Dune ", "Frank Herbert", "412", true);

        let effects = app.reduce(Message::Submit);

        let books = app.controller.library().books();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
        assert_eq!(books[0].pages, 412);
        assert!(books[0].read);
        assert!(app.form.title.is_empty() && app.form.pages.is_empty() && !app.form.read);
        assert!(app.notice.is_none());
        assert_eq!(effects, vec![Effect::Focus(FormField::Title)]);
    }

    #[test]
    fn invalid_pages_keep_form_and_focus_pages() {
        let mut app = build_test_app(false);
        fill(&mut app, "Dune", "Frank Herbert", "1.5", false);

        let effects = app.reduce(Message::Submit);

        assert!(app.controller.library().is_empty());
        assert_eq!(app.form.pages, "1.5");
        assert_eq!(
            app.notice.as_ref().map(|n| n.text.as_str()),
            Some("Please enter a valid whole number for pages.")
        );
        assert_eq!(effects, vec![Effect::Focus(FormField::Pages)]);
    }

    #[test]
    fn missing_author_focuses_author() {
        let mut app = build_test_app(false);
        fill(&mut app, "Dune", "  ", "100", false);
        let effects = app.reduce(Message::Submit);
        assert_eq!(effects, vec![Effect::Focus(FormField::Author)]);
        assert_eq!(
            app.notice.as_ref().map(|n| n.text.as_str()),
            Some("Please fill all fields!")
        );
    }

    #[test]
    fn submit_is_ignored_while_prompt_is_open() {
        let mut app = build_test_app(true);
        app.reduce(Message::RequestClearAll);
        fill(&mut app, "Dune", "Frank Herbert", "412", false);

        let effects = app.reduce(Message::Submit);

        assert!(effects.is_empty());
        assert_eq!(app.controller.library().len(), 2);
        assert_eq!(app.form.title, "Dune");
        assert_eq!(app.pending, Some(PendingConfirmation::ClearAll));
    }

    #[test]
    fn duplicate_submit_warns_and_keeps_form() {
        let mut app = build_test_app(true);
        fill(&mut app, "Robinson Crusoe", "Daniel Defoe", "300", false);

        app.reduce(Message::Submit);

        assert_eq!(app.controller.library().len(), 2);
        assert_eq!(app.form.title, "Robinson Crusoe");
        assert_eq!(
            app.notice.as_ref().map(|n| n.text.as_str()),
            Some("This book is already in your library.")
        );
    }
}
