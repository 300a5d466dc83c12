//! Application core: event loop, action dispatch, status bar and overlays.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::action::{Action, Intent, Notification, NotificationLevel};
use crate::component::Component;
use crate::event::{Event, EventReader, Rates};
use crate::screens::roster::RosterScreen;
use crate::theme;
use crate::tui::Tui;

const NOTIFICATION_TTL: Duration = Duration::from_secs(3);

/// Top-level application state and event loop.
pub struct App {
    screen: RosterScreen,
    running: bool,
    help_visible: bool,
    notification: Option<(Notification, Instant)>,
    /// Intents sent to the bridge that have not finished yet. Starts at one
    /// for the refresh the bridge runs on its own at startup.
    pending: usize,
    last_update: Option<DateTime<Local>>,
    /// Where the roster comes from, shown in the status bar.
    source: String,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    intent_tx: mpsc::UnboundedSender<Intent>,
}

impl App {
    pub fn new(
        source: impl Into<String>,
        action_tx: mpsc::UnboundedSender<Action>,
        action_rx: mpsc::UnboundedReceiver<Action>,
        intent_tx: mpsc::UnboundedSender<Intent>,
    ) -> Self {
        Self {
            screen: RosterScreen::new(),
            running: true,
            help_visible: false,
            notification: None,
            pending: 1,
            last_update: None,
            source: source.into(),
            action_tx,
            action_rx,
            intent_tx,
        }
    }

    /// Run the main event loop until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        let mut events = EventReader::spawn(Rates::default());

        info!("TUI event loop started");

        while self.running {
            let Some(event) = events.next().await else {
                break;
            };

            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => self.action_tx.send(Action::Resize(w, h))?,
                Event::Tick => self.action_tx.send(Action::Tick)?,
                Event::Render => self.action_tx.send(Action::Render)?,
            }

            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if action == Action::Render {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        drop(events);
        info!("TUI event loop ended");
        Ok(())
    }

    /// Global keys first, unless the screen is capturing text input.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if self.help_visible {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('?') => Ok(Some(Action::ToggleHelp)),
                _ => Ok(None),
            };
        }

        if self.screen.captures_input() {
            return self.screen.handle_key_event(key);
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::NONE, KeyCode::Char('q')) => Ok(Some(Action::Quit)),
            (_, KeyCode::Char('?')) => Ok(Some(Action::ToggleHelp)),
            _ => self.screen.handle_key_event(key),
        }
    }

    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.running = false,

            Action::ToggleHelp => self.help_visible = !self.help_visible,

            Action::Tick => {
                if self
                    .notification
                    .as_ref()
                    .is_some_and(|(_, shown)| shown.elapsed() >= NOTIFICATION_TTL)
                {
                    self.notification = None;
                }
            }

            Action::Notify(note) => {
                self.notification = Some((note.clone(), Instant::now()));
            }

            Action::Request(intent) => {
                debug!(%intent, "queueing intent");
                if self.intent_tx.send(intent.clone()).is_ok() {
                    self.pending += 1;
                } else {
                    warn!(%intent, "roster bridge is gone");
                    self.notification = Some((
                        Notification::error("Roster connection closed"),
                        Instant::now(),
                    ));
                }
            }

            Action::IntentFinished => self.pending = self.pending.saturating_sub(1),

            Action::Render | Action::Resize(..) => {}

            other => {
                if matches!(other, Action::RosterRendered(_)) {
                    self.last_update = Some(Local::now());
                }
                if let Some(follow_up) = self.screen.update(other)? {
                    self.action_tx.send(follow_up)?;
                }
            }
        }

        Ok(())
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let [content_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        self.screen.render(frame, content_area);
        self.render_status_bar(frame, status_area);

        if let Some((note, _)) = &self.notification {
            Self::render_notification(frame, content_area, note);
        }
        if self.help_visible {
            Self::render_help_overlay(frame, area);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let activity = if self.pending > 0 {
            Span::styled("◐ syncing", Style::default().fg(theme::YELLOW))
        } else {
            Span::styled("● idle", Style::default().fg(theme::GREEN))
        };
        let updated = self.last_update.map_or_else(
            || "never".to_owned(),
            |t| t.format("%H:%M:%S").to_string(),
        );

        let line = Line::from(vec![
            Span::raw(" "),
            activity,
            Span::styled(format!(" │ {} ", self.source), theme::value()),
            Span::styled(format!("│ updated {updated} "), theme::label()),
            Span::styled("│ a add  d remove  r refresh  ? help  q quit", theme::key_hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }

    /// Toast in the top-right corner of the content area.
    fn render_notification(frame: &mut Frame, area: Rect, note: &Notification) {
        let (color, icon) = match note.level {
            NotificationLevel::Success => (theme::GREEN, "✓"),
            NotificationLevel::Error => (theme::RED, "✗"),
            NotificationLevel::Info => (theme::CYAN, "•"),
        };

        let text = format!(" {icon} {} ", note.message);
        let wanted = u16::try_from(text.chars().count() + 2).unwrap_or(u16::MAX);
        let width = wanted.min(area.width.saturating_sub(2));
        let toast = Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + 1,
            width,
            3u16.min(area.height),
        );

        frame.render_widget(Clear, toast);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(theme::BG_DARK));
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(color))).block(block),
            toast,
        );
    }

    fn render_help_overlay(frame: &mut Frame, area: Rect) {
        let help_width = 52u16.min(area.width.saturating_sub(4));
        let help_height = 19u16.min(area.height.saturating_sub(2));
        let help_area = Rect::new(
            area.x + area.width.saturating_sub(help_width) / 2,
            area.y + area.height.saturating_sub(help_height) / 2,
            help_width,
            help_height,
        );

        frame.render_widget(Clear, help_area);
        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_style(theme::title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::border_focused())
            .style(Style::default().bg(theme::BG_DARK));
        let inner = block.inner(help_area);
        frame.render_widget(block, help_area);

        let key = |k: &'static str, desc: &'static str| {
            Line::from(vec![
                Span::styled(format!("  {k:<10}"), theme::key_hint_key()),
                Span::styled(desc, theme::key_hint()),
            ])
        };
        let heading = |title: &'static str| {
            Line::from(Span::styled(
                format!("  {title}"),
                Style::default().fg(theme::CYAN),
            ))
        };

        let help_text = vec![
            Line::from(""),
            heading("Roster"),
            key("j/k ↑/↓", "Move up/down"),
            key("g/G", "Top / bottom"),
            key("Enter", "Show or hide details"),
            key("a", "Add a player"),
            key("d", "Remove the selected player"),
            key("r", "Refresh from the server"),
            Line::from(""),
            heading("Add form"),
            key("Tab", "Next field"),
            key("Enter", "Submit"),
            key("Esc", "Close"),
            Line::from(""),
            heading("Global"),
            key("?", "This help"),
            key("q", "Quit"),
        ];

        frame.render_widget(Paragraph::new(help_text), inner);
    }
}
