//! Non-interactive `RosterView` for one-shot commands.
//!
//! Commands drive the synchronizer, then print from what the view captured.

use pupbowl_core::{DetailPanel, PlayerId, RosterItem, RosterView};

#[derive(Debug, Default)]
pub struct CaptureView {
    items: Vec<RosterItem>,
    form_reset: bool,
}

impl CaptureView {
    /// Items from the most recent render.
    pub fn items(&self) -> &[RosterItem] {
        &self.items
    }

    /// Whether a create went through and reset the form.
    pub fn form_reset(&self) -> bool {
        self.form_reset
    }
}

impl RosterView for CaptureView {
    fn render(&mut self, items: &[RosterItem]) {
        self.items = items.to_vec();
    }

    // `show` prints the panel returned by the synchronizer.
    fn details_changed(&mut self, _id: &PlayerId, _panel: &DetailPanel) {}

    fn reset_form(&mut self) {
        self.form_reset = true;
    }
}
