//! Routes typed interaction events to their state-mutating handlers.
use bevy::log::debug;
use bevy::prelude::Resource;
use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::dialogue::controller::DialogueController;
use crate::player::components::{PlayerResources, RestState};
use crate::world::time::GameClock;

use super::{
    catalog::InteractionCatalog,
    keys::{GameEvent, StudyVenue},
    scheduler::{DeferredAction, FadeDirection, Guard, TransitionQueue, TransitionStep},
};

/// Interactions open up strictly after 8:00am.
const MORNING_GATE: f32 = 8.0 * 60.0;
/// Energy restored per hour slept, capped by the energy ceiling.
const ENERGY_PER_HOUR_SLEPT: u32 = 13;
/// How many chat topics the player gets to pick from.
const CHAT_TOPIC_CHOICES: usize = 3;
/// Study durations offered when no hour count was supplied.
const STUDY_HOUR_OPTIONS: [u32; 3] = [2, 3, 4];

const TALK_TOPICS: [&str; 9] = [
    "Dogs",
    "Cats",
    "Exams",
    "Celebrities",
    "Flatmates",
    "Video games",
    "Sports",
    "Food",
    "Fashion",
];

/// Signals surfaced to the surrounding systems after a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameSignal {
    GameOver,
}

/// Mutable collaborators a dispatch call works against.
///
/// Injected per call rather than stored, which keeps the dispatcher free of
/// back-references and lets tests assemble the whole context from plain
/// structs.
pub struct DispatchCtx<'a> {
    pub clock: &'a mut GameClock,
    pub resources: &'a mut PlayerResources,
    pub dialogue: &'a mut DialogueController,
    pub transitions: &'a mut TransitionQueue,
    pub rest: &'a mut RestState,
}

/// Owns the interaction catalog and all event handlers.
#[derive(Resource)]
pub struct EventDispatcher {
    catalog: InteractionCatalog,
    rng: SmallRng,
}

impl EventDispatcher {
    pub fn new(catalog: InteractionCatalog) -> Self {
        Self {
            catalog,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic variant used by tests.
    pub fn seeded(catalog: InteractionCatalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn catalog(&self) -> &InteractionCatalog {
        &self.catalog
    }

    /// Resets the catalog's per-day flags; called on every day rollover.
    pub fn advance_day(&mut self) {
        self.catalog.advance_day();
    }

    /// Entry point for raw map-authored trigger strings. Malformed
    /// parameters degrade to the generic flavor text instead of propagating.
    pub fn dispatch_trigger(
        &mut self,
        raw: &str,
        ctx: &mut DispatchCtx,
    ) -> Option<GameSignal> {
        match GameEvent::parse_trigger(raw) {
            Ok(event) => self.dispatch(event, ctx),
            Err(error) => {
                debug!("Trigger '{raw}' rejected ({error}); showing flavor text");
                self.dispatch(
                    GameEvent::Flavor {
                        name: error.key.clone(),
                    },
                    ctx,
                )
            }
        }
    }

    /// Runs one interaction event against the injected collaborators.
    pub fn dispatch(&mut self, event: GameEvent, ctx: &mut DispatchCtx) -> Option<GameSignal> {
        match event {
            GameEvent::FadeToBlack => {
                ctx.transitions
                    .schedule_sequence([TransitionStep::Fade(FadeDirection::ToBlack)]);
                None
            }
            GameEvent::FadeFromBlack => {
                self.fade_from_black(ctx);
                None
            }
            GameEvent::GameOver => {
                // Clearing the flag here invalidates any sleep callbacks
                // still pending in the transition queue.
                ctx.rest.sleeping = false;
                Some(GameSignal::GameOver)
            }
            GameEvent::Exit => {
                ctx.dialogue.hide();
                None
            }
            GameEvent::Tree => {
                ctx.dialogue.open("The tree doesn't say anything back.");
                None
            }
            GameEvent::Chest => {
                ctx.dialogue.open(
                    "Wow! This chest is full of so many magical items! I wonder how they \
                     will help you out on your journey! Boy, this is an awfully long piece \
                     of text, I wonder if someone is testing something?\n...\n...\n...\nHow cool!",
                );
                None
            }
            GameEvent::Chat { topic } => {
                self.chat(topic, ctx);
                None
            }
            GameEvent::Study { venue, hours } => {
                self.study(venue, hours, ctx);
                None
            }
            GameEvent::Eat => {
                self.shared_meal(
                    "eat",
                    "It's too early in the morning to eat food, go to bed!",
                    "You are too tired to eat right now!",
                    |meal, cost| format!("You took an hour to eat {meal}!\nYou lost {cost} energy!"),
                    ctx,
                );
                None
            }
            GameEvent::Cook => {
                self.shared_meal(
                    "cook",
                    "It's too early in the morning to cook a meal.",
                    "You are too tired to cook right now. You might burn the house down!",
                    |meal, cost| format!("You took an hour to cook {meal}.\nYou lost {cost} energy!"),
                    ctx,
                );
                None
            }
            GameEvent::Basketball => {
                self.hourly_recreation(
                    "basketball",
                    "It's too early in the morning to play basketball!",
                    "You are too tired to play basketball right now!",
                    "You played for an hour!",
                    ctx,
                );
                None
            }
            GameEvent::FeedDucks => {
                self.hourly_recreation(
                    "ducks",
                    "It's too early in the morning to feed the ducks, the ducks are asleep!",
                    "You are too tired to feed the ducks right now!",
                    "You fed the ducks for an hour!",
                    ctx,
                );
                None
            }
            GameEvent::Sleep => {
                self.sleep(ctx);
                None
            }
            GameEvent::Flavor { name } => {
                ctx.dialogue.open(&format!("This is a {name}!"));
                None
            }
        }
    }

    /// Applies a callback queued by the transition scheduler. Guards have
    /// already been checked by the queue at this point.
    pub fn apply_deferred(
        &mut self,
        action: DeferredAction,
        ctx: &mut DispatchCtx,
    ) -> Option<GameSignal> {
        match action {
            DeferredAction::CompleteSleep {
                seconds_slept,
                hours_slept,
            } => self.complete_sleep(seconds_slept, hours_slept, ctx),
            DeferredAction::WakeGreeting => self.wake_greeting(ctx),
        }
        None
    }

    fn chat(&mut self, topic: Option<String>, ctx: &mut DispatchCtx) {
        if ctx.clock.seconds_elapsed_today() <= MORNING_GATE {
            ctx.dialogue
                .open("It's too early in the morning to meet your friends, go to bed!");
            return;
        }

        let cost = self.catalog.energy_cost("chat");
        if ctx.resources.energy() < cost as i32 {
            ctx.dialogue
                .open("You are too tired to meet your friends right now!");
            return;
        }

        match topic {
            None => {
                let topics = self.random_topics(CHAT_TOPIC_CHOICES);
                ctx.dialogue.open("What do you want to chat about?");
                let labels: Vec<&str> = topics.iter().map(String::as_str).collect();
                let events: Vec<GameEvent> = topics
                    .iter()
                    .map(|topic| GameEvent::Chat {
                        topic: Some(topic.clone()),
                    })
                    .collect();
                ctx.dialogue.menu_mut().set_options(&labels, &events);
            }
            Some(topic) => {
                // The duration roll adds a light risk of overspending energy.
                let hours = self.rng.gen_range(1..=3u32);
                ctx.dialogue.open(&format!(
                    "You talked about {} for {} hours!",
                    topic.to_lowercase(),
                    hours
                ));
                ctx.resources.decrease_energy((cost * hours) as i32);
                self.pass_time(ctx, (hours * 60) as f32);
                ctx.resources.add_recreational_hours(hours);
                self.catalog.mark_performed("chat");
            }
        }
    }

    fn study(&mut self, venue: StudyVenue, hours: Option<u32>, ctx: &mut DispatchCtx) {
        let key = venue.catalog_key();
        if ctx.clock.seconds_elapsed_today() <= MORNING_GATE {
            ctx.dialogue
                .open("It's too early in the morning to study, go to bed!");
            return;
        }

        let cost = self.catalog.energy_cost(key);
        if ctx.resources.energy() < cost as i32 {
            ctx.dialogue.open("You are too tired to study right now!");
            return;
        }

        match hours {
            None => {
                ctx.dialogue.open("Study for how long?");
                let labels: Vec<String> = STUDY_HOUR_OPTIONS
                    .iter()
                    .map(|h| format!("{} Hours ({})", h, h * cost))
                    .collect();
                let label_refs: Vec<&str> = labels.iter().map(String::as_str).collect();
                let events: Vec<GameEvent> = STUDY_HOUR_OPTIONS
                    .iter()
                    .map(|h| GameEvent::Study {
                        venue,
                        hours: Some(*h),
                    })
                    .collect();
                ctx.dialogue.menu_mut().set_options(&label_refs, &events);
            }
            Some(hours) => {
                let total_cost = hours * cost;
                if ctx.resources.energy() < total_cost as i32 {
                    ctx.dialogue
                        .open("You don't have the energy to study for this long!");
                    return;
                }
                ctx.dialogue.open(&format!(
                    "You studied for {hours} hours!\nYou lost {total_cost} energy"
                ));
                ctx.resources.decrease_energy(total_cost as i32);
                ctx.resources.add_study_hours(hours);
                self.pass_time(ctx, (hours * 60) as f32);
                self.catalog.mark_performed(key);
            }
        }
    }

    /// Eat and cook share the same shape: an hour spent, a flat energy cost,
    /// and a meal named after the time of day.
    fn shared_meal(
        &mut self,
        key: &str,
        too_early: &str,
        too_tired: &str,
        describe: impl Fn(&str, u32) -> String,
        ctx: &mut DispatchCtx,
    ) {
        if ctx.clock.seconds_elapsed_today() <= MORNING_GATE {
            ctx.dialogue.open(too_early);
            return;
        }

        let cost = self.catalog.energy_cost(key);
        if ctx.resources.energy() < cost as i32 {
            ctx.dialogue.open(too_tired);
            return;
        }

        let meal = ctx.clock.meal_label();
        ctx.dialogue.open(&describe(meal, cost));
        ctx.resources.decrease_energy(cost as i32);
        self.pass_time(ctx, 60.0);
        self.catalog.mark_performed(key);
    }

    fn hourly_recreation(
        &mut self,
        key: &str,
        too_early: &str,
        too_tired: &str,
        done: &str,
        ctx: &mut DispatchCtx,
    ) {
        if ctx.clock.seconds_elapsed_today() <= MORNING_GATE {
            ctx.dialogue.open(too_early);
            return;
        }

        let cost = self.catalog.energy_cost(key);
        if ctx.resources.energy() < cost as i32 {
            ctx.dialogue.open(too_tired);
            return;
        }

        ctx.dialogue
            .open(&format!("{done}\nYou lost {cost} energy!"));
        ctx.resources.decrease_energy(cost as i32);
        self.pass_time(ctx, 60.0);
        ctx.resources.add_recreational_hours(1);
        self.catalog.mark_performed(key);
    }

    /// Puts the player to bed: fades out, then — only if the player is still
    /// sleeping when the fade lands — shows the sleep summary and applies it.
    fn sleep(&mut self, ctx: &mut DispatchCtx) {
        ctx.rest.sleeping = true;
        ctx.dialogue.hide();

        let seconds = ctx.clock.seconds_elapsed_today();
        let wake = ctx.clock.wake_threshold();
        // Before the alarm: sleep until it rings today. After it: the next
        // ring is tomorrow, one full day further out.
        let seconds_slept = if seconds < wake {
            wake - seconds
        } else {
            wake + GameClock::SECONDS_PER_DAY - seconds
        };
        let hours_slept = (seconds_slept / 60.0).round() as u32;

        ctx.transitions.schedule_sequence([
            TransitionStep::Fade(FadeDirection::ToBlack),
            TransitionStep::Invoke(
                Guard::PlayerSleeping,
                DeferredAction::CompleteSleep {
                    seconds_slept,
                    hours_slept,
                },
            ),
        ]);
    }

    fn complete_sleep(&mut self, seconds_slept: f32, hours_slept: u32, ctx: &mut DispatchCtx) {
        let restored = (hours_slept * ENERGY_PER_HOUR_SLEPT).min(100);
        ctx.dialogue.open_with_follow_up(
            &format!("You slept for {hours_slept} hours!\nYou recovered {restored} energy!"),
            GameEvent::FadeFromBlack,
        );
        ctx.resources
            .set_energy((hours_slept * ENERGY_PER_HOUR_SLEPT) as i32);
        self.pass_time(ctx, seconds_slept);
        ctx.resources.add_slept_hours(hours_slept);
    }

    /// Fades the screen back in; when the player was sleeping, chains the
    /// morning greeting behind the fade, guarded the same way as the sleep
    /// summary.
    fn fade_from_black(&mut self, ctx: &mut DispatchCtx) {
        if ctx.rest.sleeping {
            ctx.transitions.schedule_sequence([
                TransitionStep::Fade(FadeDirection::FromBlack),
                TransitionStep::Invoke(Guard::PlayerSleeping, DeferredAction::WakeGreeting),
            ]);
        } else {
            ctx.transitions
                .schedule_sequence([TransitionStep::Fade(FadeDirection::FromBlack)]);
        }
    }

    fn wake_greeting(&mut self, ctx: &mut DispatchCtx) {
        ctx.dialogue.open(&wake_up_message(ctx.clock));
        ctx.rest.sleeping = false;
    }

    fn pass_time(&mut self, ctx: &mut DispatchCtx, seconds: f32) {
        let rolled = ctx.clock.advance(seconds);
        if rolled > 0 {
            self.catalog.advance_day();
        }
    }

    fn random_topics(&mut self, amount: usize) -> Vec<String> {
        TALK_TOPICS
            .choose_multiple(&mut self.rng, amount)
            .map(|topic| (*topic).to_string())
            .collect()
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(InteractionCatalog::default())
    }
}

fn wake_up_message(clock: &GameClock) -> String {
    let days_left = clock.max_days().saturating_sub(clock.day());
    if days_left != 1 {
        format!(
            "You have {days_left} days left until your exam!\nRemember to eat, study and \
             have fun, but don't overwork yourself!"
        )
    } else {
        "Your exam is tomorrow! I hope you've been studying! Remember not to overwork \
         yourself and get enough sleep!"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::controller::DialogueState;
    use crate::world::time::ClockSettings;

    struct Harness {
        dispatcher: EventDispatcher,
        clock: GameClock,
        resources: PlayerResources,
        dialogue: DialogueController,
        transitions: TransitionQueue,
        rest: RestState,
    }

    impl Harness {
        fn at(seconds: f32) -> Self {
            let settings = ClockSettings {
                start_seconds: seconds,
                ..ClockSettings::default()
            };
            Self {
                dispatcher: EventDispatcher::seeded(InteractionCatalog::fallback(), 7),
                clock: GameClock::from_settings(&settings),
                resources: PlayerResources::default(),
                dialogue: DialogueController::default(),
                transitions: TransitionQueue::default(),
                rest: RestState::default(),
            }
        }

        fn dispatch(&mut self, event: GameEvent) -> Option<GameSignal> {
            let mut ctx = DispatchCtx {
                clock: &mut self.clock,
                resources: &mut self.resources,
                dialogue: &mut self.dialogue,
                transitions: &mut self.transitions,
                rest: &mut self.rest,
            };
            self.dispatcher.dispatch(event, &mut ctx)
        }

        fn dispatch_trigger(&mut self, raw: &str) -> Option<GameSignal> {
            let mut ctx = DispatchCtx {
                clock: &mut self.clock,
                resources: &mut self.resources,
                dialogue: &mut self.dialogue,
                transitions: &mut self.transitions,
                rest: &mut self.rest,
            };
            self.dispatcher.dispatch_trigger(raw, &mut ctx)
        }

        fn drain_transitions(&mut self) {
            let sleeping = self.rest.sleeping;
            let actions = self.transitions.tick(60.0, |guard| match guard {
                Guard::None => true,
                Guard::PlayerSleeping => sleeping,
            });
            for action in actions {
                let mut ctx = DispatchCtx {
                    clock: &mut self.clock,
                    resources: &mut self.resources,
                    dialogue: &mut self.dialogue,
                    transitions: &mut self.transitions,
                    rest: &mut self.rest,
                };
                self.dispatcher.apply_deferred(action, &mut ctx);
            }
        }

        fn shown_text(&mut self) -> String {
            self.dialogue.tick(60.0, 10_000.0);
            self.dialogue.visible_text()
        }
    }

    #[test]
    fn studying_before_eight_is_refused_without_side_effects() {
        let mut harness = Harness::at(7.0 * 60.0);
        harness.dispatch(GameEvent::Study {
            venue: StudyVenue::CompSci,
            hours: None,
        });

        assert!(harness.shown_text().contains("too early"));
        assert_eq!(harness.resources.energy(), 100);
        assert_eq!(harness.clock.seconds_elapsed_today(), 7.0 * 60.0);
        assert_eq!(harness.resources.hours_studied(), 0);
    }

    #[test]
    fn two_hour_study_applies_energy_clock_and_counter() {
        let mut harness = Harness::at(9.0 * 60.0);
        harness.dispatch(GameEvent::Study {
            venue: StudyVenue::CompSci,
            hours: Some(2),
        });

        assert_eq!(harness.resources.energy(), 60);
        assert_eq!(harness.clock.seconds_elapsed_today(), 11.0 * 60.0);
        assert_eq!(harness.resources.hours_studied(), 2);
        assert!(harness
            .dispatcher
            .catalog()
            .get("comp_sci")
            .unwrap()
            .performed_today());
        assert!(harness.shown_text().contains("You studied for 2 hours!"));
    }

    #[test]
    fn study_without_hours_offers_a_choice_that_reinvokes_the_event() {
        let mut harness = Harness::at(9.0 * 60.0);
        harness.dispatch(GameEvent::Study {
            venue: StudyVenue::CompSci,
            hours: None,
        });

        assert_eq!(harness.dialogue.state(), DialogueState::ChoicePending);
        let choices = harness.dialogue.menu().choices().to_vec();
        assert_eq!(choices.len(), 3);
        assert_eq!(
            choices[0].event,
            GameEvent::Study {
                venue: StudyVenue::CompSci,
                hours: Some(2),
            }
        );

        let picked = harness.dialogue.confirm().expect("choice should resolve");
        harness.dispatch(picked);
        assert_eq!(harness.resources.energy(), 60);
        assert_eq!(harness.resources.hours_studied(), 2);
    }

    #[test]
    fn over_committing_on_study_hours_is_refused() {
        let mut harness = Harness::at(9.0 * 60.0);
        harness.resources.set_energy(50);
        harness.dispatch(GameEvent::Study {
            venue: StudyVenue::CompSci,
            hours: Some(4),
        });

        assert!(harness.shown_text().contains("for this long"));
        assert_eq!(harness.resources.energy(), 50);
        assert_eq!(harness.resources.hours_studied(), 0);
    }

    #[test]
    fn exhausted_player_is_turned_away() {
        let mut harness = Harness::at(9.0 * 60.0);
        harness.resources.set_energy(5);
        harness.dispatch(GameEvent::Study {
            venue: StudyVenue::CompSci,
            hours: None,
        });

        assert!(harness.shown_text().contains("too tired"));
        assert_eq!(harness.resources.energy(), 5);
    }

    #[test]
    fn unknown_keys_show_flavor_text_and_mutate_nothing() {
        let mut harness = Harness::at(9.0 * 60.0);
        harness.dispatch_trigger("unknown_key");

        assert_eq!(harness.shown_text(), "This is a unknown_key!");
        assert_eq!(harness.resources.energy(), 100);
        assert_eq!(harness.clock.seconds_elapsed_today(), 9.0 * 60.0);
        assert_eq!(harness.resources.hours_recreational(), 0);
    }

    #[test]
    fn malformed_parameters_degrade_to_flavor_text() {
        let mut harness = Harness::at(9.0 * 60.0);
        harness.dispatch_trigger("comp_sci-lots");

        assert_eq!(harness.shown_text(), "This is a comp_sci!");
        assert_eq!(harness.resources.energy(), 100);
    }

    #[test]
    fn chat_without_topic_offers_three_distinct_topics() {
        let mut harness = Harness::at(9.0 * 60.0);
        harness.dispatch(GameEvent::Chat { topic: None });

        assert_eq!(harness.dialogue.state(), DialogueState::ChoicePending);
        let labels: Vec<String> = harness
            .dialogue
            .menu()
            .choices()
            .iter()
            .map(|choice| choice.label.clone())
            .collect();
        assert_eq!(labels.len(), 3);
        let mut deduped = labels.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 3, "topics must be distinct: {labels:?}");
    }

    #[test]
    fn chatting_spends_energy_and_time_per_rolled_hour() {
        let mut harness = Harness::at(9.0 * 60.0);
        harness.dispatch(GameEvent::Chat {
            topic: Some("Dogs".to_string()),
        });

        let hours = harness.resources.hours_recreational();
        assert!((1..=3).contains(&hours));
        assert_eq!(harness.resources.energy(), 100 - (10 * hours) as i32);
        assert_eq!(
            harness.clock.seconds_elapsed_today(),
            9.0 * 60.0 + (hours * 60) as f32
        );
        assert!(harness.shown_text().contains("You talked about dogs"));
    }

    #[test]
    fn eating_names_the_meal_after_the_clock() {
        let mut harness = Harness::at(12.0 * 60.0);
        harness.dispatch(GameEvent::Eat);

        assert!(harness.shown_text().contains("lunch"));
        assert_eq!(harness.resources.energy(), 90);
        assert_eq!(harness.clock.seconds_elapsed_today(), 13.0 * 60.0);
    }

    #[test]
    fn sleeping_at_eleven_pm_restores_full_energy_at_eight_am() {
        let mut harness = Harness::at(23.0 * 60.0);
        harness.resources.set_energy(10);
        harness.dispatch(GameEvent::Sleep);

        assert!(harness.rest.sleeping);
        assert!(!harness.dialogue.is_visible());

        // Resolve the fade-to-black and the guarded sleep summary.
        harness.drain_transitions();

        assert_eq!(harness.resources.energy(), 100);
        assert_eq!(harness.resources.hours_slept(), 9);
        assert_eq!(harness.clock.seconds_elapsed_today(), 8.0 * 60.0);
        assert_eq!(harness.clock.day(), 2);
        assert!(harness.shown_text().contains("You slept for 9 hours!"));
    }

    #[test]
    fn sleeping_before_the_alarm_only_sleeps_until_it_rings() {
        let mut harness = Harness::at(6.0 * 60.0);
        harness.dispatch(GameEvent::Sleep);
        harness.drain_transitions();

        assert_eq!(harness.resources.hours_slept(), 2);
        assert_eq!(harness.clock.seconds_elapsed_today(), 8.0 * 60.0);
        assert_eq!(harness.clock.day(), 1);
    }

    #[test]
    fn dismissing_the_sleep_summary_chains_the_wake_greeting() {
        let mut harness = Harness::at(23.0 * 60.0);
        harness.dispatch(GameEvent::Sleep);
        harness.drain_transitions();

        harness.dialogue.tick(60.0, 10_000.0);
        let follow_up = harness.dialogue.confirm().expect("follow-up should fire");
        assert_eq!(follow_up, GameEvent::FadeFromBlack);
        harness.dispatch(follow_up);
        harness.drain_transitions();

        assert!(!harness.rest.sleeping);
        assert!(harness.shown_text().contains("days left until your"));
    }

    #[test]
    fn stale_sleep_callbacks_are_dropped_after_a_game_over() {
        let mut harness = Harness::at(23.0 * 60.0);
        harness.resources.set_energy(10);
        harness.dispatch(GameEvent::Sleep);

        // Game over lands while the fade is still in flight.
        let signal = harness.dispatch(GameEvent::GameOver);
        assert_eq!(signal, Some(GameSignal::GameOver));
        assert!(!harness.rest.sleeping);

        harness.drain_transitions();

        // The guarded sleep summary never fired.
        assert_eq!(harness.resources.energy(), 10);
        assert_eq!(harness.resources.hours_slept(), 0);
        assert!(!harness.dialogue.is_visible());
    }

    #[test]
    fn exit_just_closes_the_dialogue() {
        let mut harness = Harness::at(9.0 * 60.0);
        harness.dialogue.open("Interact with the chest?");
        harness.dispatch(GameEvent::Exit);
        assert!(!harness.dialogue.is_visible());
    }
}
