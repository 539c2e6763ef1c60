use super::super::state::{App, Notice, PendingConfirmation};
use library_core::BookKey;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_read(&mut self, key: &BookKey, position: usize) {
        if self.pending.is_some() {
            return;
        }
        if let Err(err) = self.controller.toggle_read(key, position) {
            self.notice = Some(Notice::error(err.to_string()));
        }
    }

    pub(super) fn handle_request_delete(&mut self, key: BookKey, position: usize) {
        if self.pending.is_some() {
            return;
        }
        if self.config.confirm_delete {
            debug!(title = %key.title, position, "Asking to confirm delete");
            self.pending = Some(PendingConfirmation::Delete { key, position });
        } else {
            self.delete_book(&key, position);
        }
    }

    pub(super) fn handle_request_clear_all(&mut self) {
        if self.pending.is_some() {
            return;
        }
        if self.config.confirm_clear {
            self.pending = Some(PendingConfirmation::ClearAll);
        } else {
            self.clear_library();
        }
    }

    pub(super) fn handle_confirm(&mut self) {
        match self.pending.take() {
            Some(PendingConfirmation::Delete { key, position }) => self.delete_book(&key, position),
            Some(PendingConfirmation::ClearAll) => self.clear_library(),
            None => {}
        }
    }

    fn delete_book(&mut self, key: &BookKey, position: usize) {
        self.notice = Some(match self.controller.delete(key, position) {
            Ok(book) => Notice::info(format!("You have deleted title: {}", book.title)),
            Err(err) => Notice::error(err.to_string()),
        });
    }

    fn clear_library(&mut self) {
        match self.controller.clear_all() {
            Ok(()) => {
                info!("All books cleared from the window");
                self.notice = Some(Notice::info("All books have been cleared."));
            }
            Err(err) => self.notice = Some(Notice::error(err.to_string())),
        }
    }
}

#[cfg(test)]
pub(in crate::app) mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::{AppStore, NoticeKind};
    use super::*;
    use crate::config::AppConfig;
    use library_core::{Controller, ControllerOptions, KeyValueStore, MemoryStore, STORAGE_KEY};

    pub(in crate::app) fn build_test_app(seed_defaults: bool) -> App {
        let store: AppStore = Box::new(MemoryStore::new());
        let controller = Controller::open(store, ControllerOptions { seed_defaults });
        let config = AppConfig {
            seed_defaults,
            ..AppConfig::default()
        };
        let (app, _task) = App::bootstrap(config, controller, None);
        app
    }

    fn titles(app: &App) -> Vec<String> {
        app.controller
            .library()
            .books()
            .iter()
            .map(|book| book.title.clone())
            .collect()
    }

    fn row_action(app: &App, title: &str) -> (BookKey, usize) {
        let row = app
            .library_view()
            .rows
            .into_iter()
            .find(|row| row.title == title)
            .expect("row for title");
        (row.key, row.position)
    }

    #[test]
    fn toggle_flips_only_clicked_row_and_persists() {
        let mut app = build_test_app(true);
        let (key, position) = row_action(&app, "Robinson Crusoe");

        app.reduce(Message::ToggleRead { key, position });

        let books = app.controller.library().books();
        assert!(!books[0].read);
        assert!(books[1].read);
        let stored = app.controller.store().get(STORAGE_KEY).unwrap().unwrap();
        assert!(stored.contains(r#""title":"Robinson Crusoe","author":"Daniel Defoe","pages":252,"check":false"#));
    }

    #[test]
    fn delete_waits_for_confirmation() {
        let mut app = build_test_app(true);
        let (key, position) = row_action(&app, "Robinson Crusoe");

        app.reduce(Message::RequestDelete { key, position });
        assert_eq!(app.controller.library().len(), 2);
        assert!(matches!(
            app.pending,
            Some(PendingConfirmation::Delete { position: 0, .. })
        ));

        app.reduce(Message::Confirm);
        assert_eq!(titles(&app), vec!["The Old Man and the Sea"]);
        assert!(app.pending.is_none());
        let notice = app.notice.clone().expect("delete notice");
        assert_eq!(notice.kind, NoticeKind::Info);
        assert_eq!(notice.text, "You have deleted title: Robinson Crusoe");
    }

    #[test]
    fn declined_delete_is_silent() {
        let mut app = build_test_app(true);
        let (key, position) = row_action(&app, "Robinson Crusoe");
        app.reduce(Message::RequestDelete { key, position });
        app.reduce(Message::Cancel);
        assert_eq!(app.controller.library().len(), 2);
        assert!(app.pending.is_none());
        assert!(app.notice.is_none());
    }

    #[test]
    fn delete_without_confirmation_when_disabled() {
        let mut app = build_test_app(true);
        app.config.confirm_delete = false;
        let (key, position) = row_action(&app, "The Old Man and the Sea");
        app.reduce(Message::RequestDelete { key, position });
        assert_eq!(titles(&app), vec!["Robinson Crusoe"]);
    }

    #[test]
    fn rows_drawn_before_a_delete_still_hit_their_book() {
        let mut app = build_test_app(true);
        app.config.confirm_delete = false;
        let stale_second = row_action(&app, "The Old Man and the Sea");
        let first = row_action(&app, "Robinson Crusoe");

        app.reduce(Message::RequestDelete {
            key: first.0,
            position: first.1,
        });
        app.reduce(Message::ToggleRead {
            key: stale_second.0,
            position: stale_second.1,
        });

        let books = app.controller.library().books();
        assert_eq!(books.len(), 1);
        assert!(!books[0].read);
    }

    #[test]
    fn clear_all_after_confirmation() {
        let mut app = build_test_app(true);
        app.reduce(Message::RequestClearAll);
        assert_eq!(app.controller.library().len(), 2);
        app.reduce(Message::Confirm);
        assert!(app.controller.library().is_empty());
        assert_eq!(
            app.controller.store().get(STORAGE_KEY).unwrap().as_deref(),
            Some("[]")
        );
        assert_eq!(app.library_view().progress.percent, 0);
    }

    #[test]
    fn row_actions_are_ignored_while_prompt_is_open() {
        let mut app = build_test_app(true);
        let (key, position) = row_action(&app, "Robinson Crusoe");
        app.reduce(Message::RequestClearAll);
        app.reduce(Message::ToggleRead {
            key: key.clone(),
            position,
        });
        app.reduce(Message::RequestDelete { key, position });
        assert_eq!(app.pending, Some(PendingConfirmation::ClearAll));
        assert!(app.controller.library().books()[0].read);
    }

    #[test]
    fn newest_first_puts_latest_book_on_top() {
        let app = build_test_app(true);
        let view = app.library_view();
        assert_eq!(view.rows[0].title, "The Old Man and the Sea");
        assert_eq!(view.progress.header(), "Read 2 out of 2 books");
    }
}
