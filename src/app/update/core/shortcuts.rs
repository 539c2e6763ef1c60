use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    /// Enter confirms and Escape cancels a pending prompt; with nothing
    /// pending, Escape dismisses the notice.
    pub(super) fn shortcut_message_for_key(&self, key: Key, modifiers: Modifiers) -> Option<Message> {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }
        match (key.as_ref(), self.pending.is_some()) {
            (Key::Named(key::Named::Enter), true) => Some(Message::Confirm),
            (Key::Named(key::Named::Escape), true) => Some(Message::Cancel),
            (Key::Named(key::Named::Escape), false) if self.notice.is_some() => {
                Some(Message::DismissNotice)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::super::state::{Notice, PendingConfirmation};
    use super::super::super::library::tests::build_test_app;
    use super::*;

    #[test]
    fn enter_and_escape_drive_pending_prompt() {
        let mut app = build_test_app(true);
        app.pending = Some(PendingConfirmation::ClearAll);

        let enter = app.shortcut_message_for_key(Key::Named(key::Named::Enter), Modifiers::empty());
        assert!(matches!(enter, Some(Message::Confirm)));
        let escape =
            app.shortcut_message_for_key(Key::Named(key::Named::Escape), Modifiers::empty());
        assert!(matches!(escape, Some(Message::Cancel)));
    }

    #[test]
    fn escape_dismisses_notice_without_prompt() {
        let mut app = build_test_app(true);
        assert!(
            app.shortcut_message_for_key(Key::Named(key::Named::Escape), Modifiers::empty())
                .is_none()
        );
        app.notice = Some(Notice::info("hello"));
        let escape =
            app.shortcut_message_for_key(Key::Named(key::Named::Escape), Modifiers::empty());
        assert!(matches!(escape, Some(Message::DismissNotice)));
        assert!(
            app.shortcut_message_for_key(Key::Named(key::Named::Enter), Modifiers::empty())
                .is_none()
        );
    }
}
