use super::messages::Message;
use super::state::{AUTHOR_INPUT_ID, App, NoticeKind, PAGES_INPUT_ID, TITLE_INPUT_ID};
use iced::alignment::Vertical;
use iced::widget::{
    Column, Row, button, checkbox, column, container, horizontal_rule, horizontal_space,
    progress_bar, row, scrollable, text, text_input,
};
use iced::{Element, Length};
use library_core::{BookRow, LibraryView, ReadLabel};

const COLUMN_PORTIONS: [u16; 5] = [4, 3, 1, 1, 1];

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let library = self.library_view();

        let mut content: Column<'_, Message> = column![
            text("My Library").size(32),
            self.form_view(),
            self.progress_view(&library),
        ]
        .spacing(16);

        if let Some(prompt) = self.confirmation_view() {
            content = content.push(prompt);
        }
        if let Some(notice) = self.notice_view() {
            content = content.push(notice);
        }

        content = content.push(self.table_view(library));

        container(content)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn form_view(&self) -> Element<'_, Message> {
        let on_submit = self.pending.is_none().then_some(Message::Submit);
        let title = text_input("Title", &self.form.title)
            .id(TITLE_INPUT_ID.clone())
            .on_input(Message::TitleChanged)
            .on_submit_maybe(on_submit.clone())
            .width(Length::FillPortion(4));
        let author = text_input("Author", &self.form.author)
            .id(AUTHOR_INPUT_ID.clone())
            .on_input(Message::AuthorChanged)
            .on_submit_maybe(on_submit.clone())
            .width(Length::FillPortion(3));
        let pages = text_input("Pages", &self.form.pages)
            .id(PAGES_INPUT_ID.clone())
            .on_input(Message::PagesChanged)
            .on_submit_maybe(on_submit.clone())
            .width(Length::FillPortion(1));
        let read = checkbox("Read", self.form.read).on_toggle(Message::ReadChanged);
        let submit = button("Add book")
            .on_press_maybe(on_submit)
            .style(button::primary);

        row![title, author, pages, read, submit]
            .spacing(10)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .into()
    }

    fn progress_view(&self, library: &LibraryView) -> Element<'_, Message> {
        let progress = library.progress;
        let clear = button("Clear all books")
            .on_press_maybe(
                (self.pending.is_none() && !library.is_empty()).then_some(Message::RequestClearAll),
            )
            .style(button::danger);

        column![
            row![
                text(progress.header()),
                horizontal_space(),
                text(format!("{}%", progress.percent)),
                clear,
            ]
            .spacing(12)
            .align_y(Vertical::Center),
            progress_bar(0.0..=100.0, progress.percent as f32).height(Length::Fixed(12.0)),
        ]
        .spacing(6)
        .into()
    }

    fn confirmation_view(&self) -> Option<Element<'_, Message>> {
        let pending = self.pending.as_ref()?;
        let panel = row![
            text(pending.prompt()),
            horizontal_space(),
            button("Cancel")
                .on_press(Message::Cancel)
                .style(button::secondary),
            button("OK").on_press(Message::Confirm).style(button::danger),
        ]
        .spacing(10)
        .align_y(Vertical::Center);
        Some(
            container(panel)
                .padding(12)
                .width(Length::Fill)
                .style(container::rounded_box)
                .into(),
        )
    }

    fn notice_view(&self) -> Option<Element<'_, Message>> {
        let notice = self.notice.as_ref()?;
        let message = match notice.kind {
            NoticeKind::Info => text(notice.text.as_str()).style(text::success),
            NoticeKind::Error => text(notice.text.as_str()).style(text::danger),
        };
        Some(
            row![
                message,
                horizontal_space(),
                button("Dismiss")
                    .on_press(Message::DismissNotice)
                    .style(button::text),
            ]
            .align_y(Vertical::Center)
            .into(),
        )
    }

    fn table_view(&self, library: LibraryView) -> Element<'_, Message> {
        let header = table_row([
            text("Title").into(),
            text("Author").into(),
            text("Pages").into(),
            text("Status").into(),
            text("").into(),
        ]);

        let body: Column<'_, Message> = if library.is_empty() {
            column![text("No books yet. Add one above.")]
        } else {
            Column::with_children(library.rows.into_iter().map(|book| self.book_row(book)))
        };

        column![header, horizontal_rule(1), scrollable(body.spacing(6)).height(Length::Fill)]
            .spacing(8)
            .into()
    }

    /// Buttons carry the row's key and position; the controller resolves the
    /// live position when the message arrives.
    fn book_row(&self, book: BookRow) -> Element<'_, Message> {
        let idle = self.pending.is_none();
        let toggle = button(text(book.read.as_str()))
            .on_press_maybe(idle.then(|| Message::ToggleRead {
                key: book.key.clone(),
                position: book.position,
            }))
            .style(match book.read {
                ReadLabel::Read => button::success,
                ReadLabel::Unread => button::danger,
            });
        let delete = button("Delete")
            .on_press_maybe(idle.then(|| Message::RequestDelete {
                key: book.key.clone(),
                position: book.position,
            }))
            .style(button::secondary);

        table_row([
            text(book.title).into(),
            text(book.author).into(),
            text(book.pages).into(),
            toggle.into(),
            delete.into(),
        ])
    }
}

fn table_row<'a>(cells: [Element<'a, Message>; 5]) -> Element<'a, Message> {
    Row::with_children(
        cells
            .into_iter()
            .zip(COLUMN_PORTIONS)
            .map(|(cell, portion)| container(cell).width(Length::FillPortion(portion)).into()),
    )
    .spacing(10)
    .align_y(Vertical::Center)
    .into()
}
