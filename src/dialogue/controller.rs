//! Dialogue session state machine: pagination, reveal, choices, follow-ups.
use bevy::prelude::Resource;

use crate::interactions::keys::GameEvent;

use super::{
    choice::ChoiceMenu,
    paginate::{paginate, Page},
    reveal::ScrollReveal,
};

/// Observable state of the dialogue session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueState {
    Hidden,
    Revealing,
    PageComplete,
    ChoicePending,
}

/// Owns the single active dialogue session.
///
/// Confirm semantics: a pending choice resolves first, an in-progress reveal
/// is force-completed second, and a completed page either advances or closes
/// the session. The scheduled follow-up event fires at most once per `open`,
/// exactly when the final page is dismissed.
#[derive(Resource, Debug, Default)]
pub struct DialogueController {
    pages: Vec<Page>,
    page_index: usize,
    current_text: String,
    reveal: ScrollReveal,
    follow_up: Option<GameEvent>,
    visible: bool,
    menu: ChoiceMenu,
}

impl DialogueController {
    /// Opens a new session with the given text.
    pub fn open(&mut self, text: &str) {
        self.open_session(text, None);
    }

    /// Opens a new session and schedules `follow_up` to fire when the final
    /// page is dismissed.
    pub fn open_with_follow_up(&mut self, text: &str, follow_up: GameEvent) {
        self.open_session(text, Some(follow_up));
    }

    fn open_session(&mut self, text: &str, follow_up: Option<GameEvent>) {
        self.pages = paginate(text);
        self.page_index = 0;
        self.current_text = self.pages[0].text();
        self.reveal.begin();
        self.follow_up = follow_up;
        self.visible = true;
    }

    /// Current state; an open choice menu takes precedence over reveal state.
    pub fn state(&self) -> DialogueState {
        if !self.visible {
            DialogueState::Hidden
        } else if self.menu.is_visible() {
            DialogueState::ChoicePending
        } else if self.reveal.is_active() {
            DialogueState::Revealing
        } else {
            DialogueState::PageComplete
        }
    }

    /// Advances the reveal timer. Text keeps revealing even while a choice
    /// menu is open on top of it.
    pub fn tick(&mut self, delta_seconds: f32, chars_per_second: f32) {
        if self.visible {
            let len = self.current_len();
            self.reveal.tick(delta_seconds, chars_per_second, len);
        }
    }

    /// Handles a confirm press. Returns an event the dispatcher should run:
    /// the resolved choice, or the scheduled follow-up on session close.
    pub fn confirm(&mut self) -> Option<GameEvent> {
        if !self.visible {
            return None;
        }

        if self.menu.is_visible() {
            let event = self.menu.current().map(|choice| choice.event.clone());
            self.hide();
            return event;
        }

        if self.reveal.is_active() {
            let len = self.current_len();
            self.reveal.skip(len);
            return None;
        }

        if self.page_index + 1 < self.pages.len() {
            self.page_index += 1;
            self.current_text = self.pages[self.page_index].text();
            self.reveal.begin();
            None
        } else {
            self.hide();
            self.follow_up.take()
        }
    }

    /// Moves the choice selection up; ignored unless a choice is pending.
    pub fn navigate_up(&mut self) {
        if self.menu.is_visible() {
            self.menu.move_up();
        }
    }

    /// Moves the choice selection down; ignored unless a choice is pending.
    pub fn navigate_down(&mut self) {
        if self.menu.is_visible() {
            self.menu.move_down();
        }
    }

    /// Hides the session and its choice menu.
    pub fn hide(&mut self) {
        self.visible = false;
        self.menu.hide();
        self.reveal = ScrollReveal::default();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The revealed prefix of the current page, ready for the text label.
    pub fn visible_text(&self) -> String {
        let shown = self.reveal.visible_chars(self.current_len());
        self.current_text.chars().take(shown).collect()
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn menu(&self) -> &ChoiceMenu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut ChoiceMenu {
        &mut self.menu
    }

    fn current_len(&self) -> usize {
        self.current_text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAST: f32 = 10_000.0;

    fn controller_with(text: &str) -> DialogueController {
        let mut controller = DialogueController::default();
        controller.open(text);
        controller
    }

    #[test]
    fn open_starts_revealing_from_the_first_page() {
        let controller = controller_with("Hello!");
        assert_eq!(controller.state(), DialogueState::Revealing);
        assert_eq!(controller.page_index(), 0);
        assert_eq!(controller.visible_text(), "");
    }

    #[test]
    fn tick_completes_the_page() {
        let mut controller = controller_with("Hello!");
        controller.tick(1.0, FAST);
        assert_eq!(controller.state(), DialogueState::PageComplete);
        assert_eq!(controller.visible_text(), "Hello!");
    }

    #[test]
    fn confirm_during_reveal_snaps_to_the_full_page() {
        let mut controller = controller_with("Hello there, player!");
        assert!(controller.confirm().is_none());
        assert_eq!(controller.state(), DialogueState::PageComplete);
        assert_eq!(controller.visible_text(), "Hello there, player!");
    }

    #[test]
    fn confirm_advances_pages_then_closes() {
        let mut controller = controller_with("1\n2\n3\n4");
        assert_eq!(controller.page_count(), 2);

        controller.tick(1.0, FAST);
        assert!(controller.confirm().is_none());
        assert_eq!(controller.page_index(), 1);
        assert_eq!(controller.state(), DialogueState::Revealing);

        controller.tick(1.0, FAST);
        assert!(controller.confirm().is_none());
        assert_eq!(controller.state(), DialogueState::Hidden);
    }

    #[test]
    fn follow_up_fires_exactly_once_on_page_exhaustion() {
        let mut controller = DialogueController::default();
        controller.open_with_follow_up("Good night.", GameEvent::FadeFromBlack);

        controller.tick(1.0, FAST);
        assert_eq!(controller.confirm(), Some(GameEvent::FadeFromBlack));
        assert_eq!(controller.state(), DialogueState::Hidden);

        // Reopening without a follow-up must not resurrect the old one.
        controller.open("Morning.");
        controller.tick(1.0, FAST);
        assert_eq!(controller.confirm(), None);
    }

    #[test]
    fn choice_resolution_takes_precedence_and_hides_the_session() {
        let mut controller = controller_with("Interact?");
        controller
            .menu_mut()
            .set_options(&["Yes", "No"], &[GameEvent::Tree, GameEvent::Exit]);
        assert_eq!(controller.state(), DialogueState::ChoicePending);

        controller.navigate_down();
        assert_eq!(controller.confirm(), Some(GameEvent::Exit));
        assert_eq!(controller.state(), DialogueState::Hidden);
    }

    #[test]
    fn choice_resolution_does_not_consume_the_follow_up() {
        let mut controller = DialogueController::default();
        controller.open_with_follow_up("Pick one.", GameEvent::GameOver);
        controller
            .menu_mut()
            .set_options(&["Ok"], &[GameEvent::Exit]);

        assert_eq!(controller.confirm(), Some(GameEvent::Exit));
        // The follow-up only fires on natural page exhaustion, which the
        // forced choice path skipped; it must not leak out later either.
        controller.open("Another.");
        controller.tick(1.0, FAST);
        assert_eq!(controller.confirm(), None);
    }

    #[test]
    fn navigation_is_ignored_without_a_pending_choice() {
        let mut controller = controller_with("No menu here.");
        controller.navigate_up();
        controller.navigate_down();
        assert_eq!(controller.state(), DialogueState::Revealing);
    }

    #[test]
    fn hidden_controller_ignores_confirm() {
        let mut controller = DialogueController::default();
        assert_eq!(controller.state(), DialogueState::Hidden);
        assert!(controller.confirm().is_none());
    }
}
