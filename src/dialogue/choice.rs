//! Selection widget state nested inside the dialogue controller.
use crate::interactions::keys::GameEvent;

/// One selectable option: a label and the event it resolves to.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub event: GameEvent,
}

/// Ordered option list with a clamped selection index.
///
/// Visibility is tracked independently of the owning dialogue session so a
/// prompt can keep revealing behind an already-open menu.
#[derive(Debug, Default, Clone)]
pub struct ChoiceMenu {
    choices: Vec<Choice>,
    selected: usize,
    visible: bool,
    revision: u64,
}

impl ChoiceMenu {
    /// Replaces all options, resets the selection to the first entry, and
    /// shows the widget. Labels and events are parallel slices; handing in
    /// mismatched or empty slices is a caller bug and fails fast.
    pub fn set_options(&mut self, labels: &[&str], events: &[GameEvent]) {
        assert_eq!(
            labels.len(),
            events.len(),
            "choice labels and events must stay in lockstep"
        );
        assert!(!labels.is_empty(), "a choice menu needs at least one option");

        self.choices = labels
            .iter()
            .zip(events.iter())
            .map(|(label, event)| Choice {
                label: (*label).to_string(),
                event: event.clone(),
            })
            .collect();
        self.selected = 0;
        self.visible = true;
        self.revision = self.revision.wrapping_add(1);
    }

    /// Moves the selection up one entry; a no-op at the top.
    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Moves the selection down one entry; a no-op at the bottom.
    pub fn move_down(&mut self) {
        if self.selected + 1 < self.choices.len() {
            self.selected += 1;
        }
    }

    /// The currently highlighted option, if any options are set.
    pub fn current(&self) -> Option<&Choice> {
        self.choices.get(self.selected)
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Bumped on every `set_options`, letting the UI rebuild rows lazily.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
