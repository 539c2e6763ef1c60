mod constants;
mod ui;

use crate::config::AppConfig;
use iced::Task;
use library_core::{BookForm, Controller, KeyValueStore, LibraryView, RowOrder};
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use ui::{Notice, NoticeKind, PendingConfirmation};

/// Store behind the running app; file-backed normally, in-memory as fallback.
pub type AppStore = Box<dyn KeyValueStore>;

/// Core application state: the library controller plus form and dialog state.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) controller: Controller<AppStore>,
    pub(super) form: BookForm,
    pub(super) notice: Option<Notice>,
    pub(super) pending: Option<PendingConfirmation>,
}

impl App {
    pub(super) fn bootstrap(
        config: AppConfig,
        controller: Controller<AppStore>,
        startup_notice: Option<String>,
    ) -> (App, Task<Message>) {
        let notice = startup_notice
            .or_else(|| controller.startup_warning().map(str::to_string))
            .map(Notice::error);
        info!(
            books = controller.library().len(),
            newest_first = config.newest_first,
            "Library window ready"
        );
        let app = App {
            config,
            controller,
            form: BookForm::default(),
            notice,
            pending: None,
        };
        (app, iced::widget::text_input::focus(TITLE_INPUT_ID.clone()))
    }

    pub(super) fn row_order(&self) -> RowOrder {
        if self.config.newest_first {
            RowOrder::NewestFirst
        } else {
            RowOrder::InsertionOrder
        }
    }

    /// Rebuilt from the library on every call.
    pub(super) fn library_view(&self) -> LibraryView {
        self.controller.view(self.row_order())
    }
}
