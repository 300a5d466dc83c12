//! Add-player form: four text fields backed by `tui-input`.
//!
//! The form is cleared only when the synchronizer reports a successful
//! create. A rejected submit leaves the fields as typed.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};
use tui_input::{Input, InputRequest};

use pupbowl_core::PlayerForm;

use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Breed,
    Status,
    ImageUrl,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Breed, Self::Status, Self::ImageUrl];

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name *",
            Self::Breed => "Breed",
            Self::Status => "Status (field / bench)",
            Self::ImageUrl => "Image URL",
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Name => Self::Breed,
            Self::Breed => Self::Status,
            Self::Status => Self::ImageUrl,
            Self::ImageUrl => Self::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::ImageUrl,
            Self::Breed => Self::Name,
            Self::Status => Self::Breed,
            Self::ImageUrl => Self::Status,
        }
    }
}

/// What a key press did to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Editing,
    Submit(PlayerForm),
    Cancel,
}

#[derive(Debug, Default)]
pub struct AddForm {
    name: Input,
    breed: Input,
    status: Input,
    image_url: Input,
    active: Option<FormField>,
}

impl AddForm {
    pub fn active(&self) -> FormField {
        self.active.unwrap_or(FormField::Name)
    }

    pub fn value(&self, field: FormField) -> &str {
        self.input(field).value()
    }

    fn input(&self, field: FormField) -> &Input {
        match field {
            FormField::Name => &self.name,
            FormField::Breed => &self.breed,
            FormField::Status => &self.status,
            FormField::ImageUrl => &self.image_url,
        }
    }

    fn input_mut(&mut self, field: FormField) -> &mut Input {
        match field {
            FormField::Name => &mut self.name,
            FormField::Breed => &mut self.breed,
            FormField::Status => &mut self.status,
            FormField::ImageUrl => &mut self.image_url,
        }
    }

    /// Snapshot the fields as typed.
    pub fn to_player_form(&self) -> PlayerForm {
        PlayerForm {
            name: self.name.value().to_owned(),
            breed: self.breed.value().to_owned(),
            status: self.status.value().to_owned(),
            image_url: self.image_url.value().to_owned(),
            player_id: None,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        let field = self.active();
        let request = match (key.modifiers, key.code) {
            (_, KeyCode::Esc) => return FormOutcome::Cancel,
            (_, KeyCode::Enter) => return FormOutcome::Submit(self.to_player_form()),
            (_, KeyCode::Tab | KeyCode::Down) => {
                self.active = Some(field.next());
                return FormOutcome::Editing;
            }
            (_, KeyCode::BackTab | KeyCode::Up) => {
                self.active = Some(field.prev());
                return FormOutcome::Editing;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => InputRequest::DeleteLine,
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => InputRequest::DeletePrevWord,
            (_, KeyCode::Char(c)) => InputRequest::InsertChar(c),
            (_, KeyCode::Backspace) => InputRequest::DeletePrevChar,
            (_, KeyCode::Delete) => InputRequest::DeleteNextChar,
            (_, KeyCode::Left) => InputRequest::GoToPrevChar,
            (_, KeyCode::Right) => InputRequest::GoToNextChar,
            (_, KeyCode::Home) => InputRequest::GoToStart,
            (_, KeyCode::End) => InputRequest::GoToEnd,
            _ => return FormOutcome::Editing,
        };
        self.input_mut(field).handle(request);
        FormOutcome::Editing
    }

    /// Render as a centered popup over `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 60u16.min(area.width.saturating_sub(4));
        let height = 15u16.min(area.height.saturating_sub(2));
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let popup = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(" Add Player ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(ratatui::style::Style::default().bg(theme::BG_DARK));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let rows = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

        for (field, row) in FormField::ALL.iter().zip(rows.iter()) {
            self.render_field(frame, *row, *field);
        }

        if let Some(hint_area) = rows.get(4) {
            let hints = Line::from(vec![
                Span::styled(" Tab ", theme::key_hint_key()),
                Span::styled("next  ", theme::key_hint()),
                Span::styled("Enter ", theme::key_hint_key()),
                Span::styled("submit  ", theme::key_hint()),
                Span::styled("Esc ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ]);
            frame.render_widget(Paragraph::new(hints), *hint_area);
        }
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: FormField) {
        let active = field == self.active();
        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .title_style(if active { theme::title() } else { theme::label() })
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if active {
                theme::border_focused()
            } else {
                theme::border()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let input = self.input(field);
        let width = usize::from(inner.width.max(1).saturating_sub(1));
        let scroll = input.visual_scroll(width);
        let scroll_x = u16::try_from(scroll).unwrap_or(u16::MAX);
        frame.render_widget(
            Paragraph::new(input.value())
                .style(theme::value())
                .scroll((0, scroll_x)),
            inner,
        );

        if active {
            let cursor = input.visual_cursor().saturating_sub(scroll);
            let offset = u16::try_from(cursor).unwrap_or(inner.width);
            frame.set_cursor_position((inner.x + offset.min(inner.width), inner.y));
        }
    }
}
