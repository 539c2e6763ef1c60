use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use tracing::debug;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::TitleChanged(title) => self.form.title = title,
            Message::AuthorChanged(author) => self.form.author = author,
            Message::PagesChanged(pages) => self.form.pages = pages,
            Message::ReadChanged(read) => self.form.read = read,
            Message::Submit => self.handle_submit(&mut effects),
            Message::ToggleRead { key, position } => self.handle_toggle_read(&key, position),
            Message::RequestDelete { key, position } => self.handle_request_delete(key, position),
            Message::RequestClearAll => self.handle_request_clear_all(),
            Message::Confirm => self.handle_confirm(),
            Message::Cancel => {
                if let Some(pending) = self.pending.take() {
                    debug!(?pending, "Confirmation declined");
                }
            }
            Message::DismissNotice => self.notice = None,
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
        }

        effects
    }
}
