use super::super::super::messages::{FormField, Message};
use super::super::super::state::{AUTHOR_INPUT_ID, App, PAGES_INPUT_ID, TITLE_INPUT_ID};
use super::super::Effect;
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::text_input;
use iced::window;

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Focus(field) => {
                let id = match field {
                    FormField::Title => TITLE_INPUT_ID.clone(),
                    FormField::Author => AUTHOR_INPUT_ID.clone(),
                    FormField::Pages => PAGES_INPUT_ID.clone(),
                };
                text_input::focus(id)
            }
        }
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
