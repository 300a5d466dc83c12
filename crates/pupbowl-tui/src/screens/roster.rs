//! Roster screen: player table, detail panel, delete confirmation, add form.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap,
};

use pupbowl_core::{DetailPanel, ItemAction, PlayerDetails, PlayerId, PlayerStatus, RosterItem};

use super::add_form::{AddForm, FormOutcome};
use crate::action::{Action, Intent};
use crate::component::Component;
use crate::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Browse,
    ConfirmDelete { id: PlayerId, name: String },
    Form,
}

pub struct RosterScreen {
    items: Vec<RosterItem>,
    table_state: TableState,
    mode: Mode,
    form: AddForm,
    loaded: bool,
}

impl Default for RosterScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterScreen {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            table_state: TableState::default(),
            mode: Mode::Browse,
            form: AddForm::default(),
            loaded: false,
        }
    }

    fn selected(&self) -> Option<&RosterItem> {
        self.table_state.selected().and_then(|i| self.items.get(i))
    }

    fn select(&mut self, idx: usize) {
        if self.items.is_empty() {
            self.table_state.select(None);
        } else {
            self.table_state.select(Some(idx.min(self.items.len() - 1)));
        }
    }

    fn move_by(&mut self, delta: isize) {
        let current = self.table_state.selected().unwrap_or(0);
        self.select(current.saturating_add_signed(delta));
    }

    /// Replace the rows, keeping the cursor on the same player when it survives.
    fn replace_items(&mut self, items: Vec<RosterItem>) {
        let keep = self.selected().map(|i| i.id.clone());
        let previous = self.table_state.selected().unwrap_or(0);
        self.items = items;
        self.loaded = true;

        let idx = keep
            .and_then(|id| self.items.iter().position(|i| i.id == id))
            .unwrap_or(previous);
        self.select(idx);

        if let Mode::ConfirmDelete { ref id, .. } = self.mode {
            if !self.items.iter().any(|i| &i.id == id) {
                self.mode = Mode::Browse;
            }
        }
    }

    fn set_panel(&mut self, id: &PlayerId, panel: &DetailPanel) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.id == id) {
            item.panel = panel.clone();
        }
    }

    fn intent_for(action: &ItemAction) -> Intent {
        match action {
            ItemAction::ShowDetails(id) => Intent::ShowDetails(id.clone()),
            ItemAction::Delete(id) => Intent::Delete(id.clone()),
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.move_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.move_by(-1),
            KeyCode::Char('g') | KeyCode::Home => self.select(0),
            KeyCode::Char('G') | KeyCode::End => self.select(usize::MAX),
            KeyCode::Enter => {
                let item = self.selected()?;
                return Some(Action::Request(Self::intent_for(&item.show_details)));
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let item = self.selected()?;
                self.mode = Mode::ConfirmDelete {
                    id: item.delete.id().clone(),
                    name: item.name.clone(),
                };
            }
            KeyCode::Char('a') => self.mode = Mode::Form,
            KeyCode::Char('r') => return Some(Action::Request(Intent::Refresh)),
            _ => {}
        }
        None
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render_table(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(format!(" Roster ({}) ", self.items.len()))
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused());

        if self.items.is_empty() {
            let msg = if self.loaded {
                "No players yet. Press a to add one."
            } else {
                "Loading roster..."
            };
            frame.render_widget(
                Paragraph::new(Span::styled(msg, theme::label())).block(block),
                area,
            );
            return;
        }

        let header = Row::new(["", "ID", "Name", "Breed", "Status"]).style(theme::table_header());
        let rows = self.items.iter().map(|item| {
            let marker = if item.panel.is_expanded() { "▾" } else { "▸" };
            let status = item.status.as_ref().map_or("-", PlayerStatus::as_str);
            Row::new(vec![
                Cell::from(marker),
                Cell::from(item.id.to_string()),
                Cell::from(item.name.as_str()),
                Cell::from(item.breed.as_deref().unwrap_or("-")),
                Cell::from(Span::styled(status, theme::status(item.status.as_ref()))),
            ])
            .style(theme::table_row())
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(1),
                Constraint::Length(8),
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(block)
        .row_highlight_style(theme::table_selected());

        let mut state = self.table_state.clone();
        frame.render_stateful_widget(table, area, &mut state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Details ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border());

        let lines = match self.selected() {
            None => vec![Line::from(Span::styled("Nothing selected", theme::label()))],
            Some(item) => match item.panel.details() {
                Some(details) => detail_lines(details),
                None => vec![
                    Line::from(Span::styled(item.name.as_str(), theme::title())),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("Enter ", theme::key_hint_key()),
                        Span::styled("to load details", theme::key_hint()),
                    ]),
                ],
            },
        };

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    fn render_confirm(frame: &mut Frame, area: Rect, name: &str) {
        let width = 50u16.min(area.width.saturating_sub(4));
        let height = 5u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let dialog = Rect::new(x, y, width, height);

        frame.render_widget(Clear, dialog);
        let block = Block::default()
            .title(" Confirm ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::YELLOW))
            .style(Style::default().bg(theme::BG_DARK));

        let text = vec![
            Line::from(Span::styled(format!("  Remove {name}?"), theme::value())),
            Line::from(""),
            Line::from(vec![
                Span::styled("  y ", theme::key_hint_key()),
                Span::styled("confirm    ", theme::key_hint()),
                Span::styled("n ", theme::key_hint_key()),
                Span::styled("cancel", theme::key_hint()),
            ]),
        ];
        frame.render_widget(Paragraph::new(text).block(block), dialog);
    }
}

fn detail_lines(d: &PlayerDetails) -> Vec<Line<'_>> {
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{label:<9}"), theme::label()),
            Span::styled(value, theme::value()),
        ])
    };
    let stamp = |t: Option<chrono::DateTime<chrono::Utc>>| {
        t.map_or_else(
            || "-".to_owned(),
            |t| t.with_timezone(&chrono::Local).format("%Y-%m-%d %H:%M").to_string(),
        )
    };

    vec![
        Line::from(Span::styled(d.name.as_str(), theme::title())),
        Line::from(""),
        field("Breed", d.breed.clone().unwrap_or_else(|| "-".into())),
        Line::from(vec![
            Span::styled(format!("{:<9}", "Status"), theme::label()),
            Span::styled(
                d.status.as_ref().map_or("-", PlayerStatus::as_str),
                theme::status(d.status.as_ref()),
            ),
        ]),
        field("Image", d.image_url.clone().unwrap_or_else(|| "-".into())),
        field("Created", stamp(d.created_at)),
        field("Updated", stamp(d.updated_at)),
    ]
}

impl Component for RosterScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match &self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::ConfirmDelete { id, .. } => match key.code {
                KeyCode::Char('y' | 'Y') => {
                    let intent = Intent::Delete(id.clone());
                    self.mode = Mode::Browse;
                    Some(Action::Request(intent))
                }
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    self.mode = Mode::Browse;
                    None
                }
                _ => None,
            },
            Mode::Form => match self.form.handle_key(key) {
                FormOutcome::Editing => None,
                FormOutcome::Cancel => {
                    self.mode = Mode::Browse;
                    None
                }
                FormOutcome::Submit(form) => Some(Action::Request(Intent::Create(form))),
            },
        };
        Ok(action)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::RosterRendered(items) => self.replace_items(items.clone()),
            Action::DetailsChanged(id, panel) => self.set_panel(id, panel),
            Action::FormReset => {
                self.form.clear();
                if self.mode == Mode::Form {
                    self.mode = Mode::Browse;
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn captures_input(&self) -> bool {
        self.mode != Mode::Browse
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let [table_area, detail_area] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(area);

        self.render_table(frame, table_area);
        self.render_detail(frame, detail_area);

        match &self.mode {
            Mode::Browse => {}
            Mode::ConfirmDelete { name, .. } => Self::render_confirm(frame, area, name),
            Mode::Form => self.form.render(frame, area),
        }
    }
}
