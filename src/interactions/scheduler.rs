//! Deferred fade and callback choreography.
//!
//! The dispatcher never blocks: multi-step effects (sleep's
//! fade-to-black → wake dialogue → fade-from-black → morning greeting) are
//! queued here as explicit steps and resolved by the presentation layer one
//! frame at a time. Scheduled callbacks carry a guard that is checked
//! immediately before the action fires; a failed guard drops the callback
//! silently. There is no cancellation API.
use std::collections::VecDeque;

use bevy::prelude::Resource;

/// Seconds a fade step takes to complete.
pub const FADE_DURATION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeDirection {
    ToBlack,
    FromBlack,
}

/// Condition evaluated right before a scheduled callback runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    None,
    /// Only fire while the player is still in bed. Protects the sleep chain
    /// from firing after the session state changed underneath it.
    PlayerSleeping,
}

/// Work a scheduled callback performs once its guard passes.
#[derive(Debug, Clone, PartialEq)]
pub enum DeferredAction {
    /// Screen is black: show the sleep summary and apply its effects.
    CompleteSleep { seconds_slept: f32, hours_slept: u32 },
    /// Screen is visible again: greet the player with the morning message.
    WakeGreeting,
}

/// A callback waiting for its delay to elapse.
#[derive(Debug, Clone)]
pub struct ScheduledCallback {
    pub remaining: f32,
    pub guard: Guard,
    pub action: DeferredAction,
}

/// One step of a scheduled sequence.
#[derive(Debug, Clone)]
pub enum TransitionStep {
    Fade(FadeDirection),
    Invoke(Guard, DeferredAction),
}

#[derive(Debug)]
enum ActiveStep {
    Fade { direction: FadeDirection, remaining: f32 },
    Invoke(ScheduledCallback),
}

/// Ordered queue of fades and guarded callbacks, ticked once per frame.
///
/// Steps run strictly in order; the overlay alpha tracks the fade step in
/// progress and holds its final value between fades.
#[derive(Resource, Debug)]
pub struct TransitionQueue {
    steps: VecDeque<ActiveStep>,
    alpha: f32,
    fade_duration: f32,
}

impl Default for TransitionQueue {
    fn default() -> Self {
        Self {
            steps: VecDeque::new(),
            alpha: 0.0,
            fade_duration: FADE_DURATION,
        }
    }
}

impl TransitionQueue {
    /// Queues a callback to fire after `seconds` (clamped non-negative).
    pub fn schedule_delayed(&mut self, seconds: f32, guard: Guard, action: DeferredAction) {
        self.steps.push_back(ActiveStep::Invoke(ScheduledCallback {
            remaining: seconds.max(0.0),
            guard,
            action,
        }));
    }

    /// Queues fades and callbacks to run back to back.
    pub fn schedule_sequence(&mut self, steps: impl IntoIterator<Item = TransitionStep>) {
        for step in steps {
            match step {
                TransitionStep::Fade(direction) => self.steps.push_back(ActiveStep::Fade {
                    direction,
                    remaining: self.fade_duration,
                }),
                TransitionStep::Invoke(guard, action) => {
                    self.schedule_delayed(0.0, guard, action)
                }
            }
        }
    }

    /// Advances the queue and returns the actions whose guard passed.
    ///
    /// `guard_passes` is consulted immediately before each callback would
    /// fire; callbacks whose guard fails are dropped without effect.
    pub fn tick(
        &mut self,
        delta_seconds: f32,
        mut guard_passes: impl FnMut(Guard) -> bool,
    ) -> Vec<DeferredAction> {
        let mut ready = Vec::new();
        let mut unspent = delta_seconds.max(0.0);

        loop {
            let completed = match self.steps.front_mut() {
                None => break,
                Some(ActiveStep::Fade { direction, remaining }) => {
                    let spent = unspent.min(*remaining);
                    *remaining -= spent;
                    unspent -= spent;
                    self.alpha = fade_alpha(*direction, *remaining, self.fade_duration);
                    *remaining <= f32::EPSILON
                }
                Some(ActiveStep::Invoke(callback)) => {
                    let spent = unspent.min(callback.remaining);
                    callback.remaining -= spent;
                    unspent -= spent;
                    callback.remaining <= f32::EPSILON
                }
            };

            if !completed {
                break;
            }

            if let Some(ActiveStep::Invoke(callback)) = self.steps.pop_front() {
                if guard_passes(callback.guard) {
                    ready.push(callback.action);
                }
            }
        }

        ready
    }

    /// Current opacity of the black overlay, in `[0, 1]`.
    pub fn overlay_alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_idle(&self) -> bool {
        self.steps.is_empty()
    }
}

fn fade_alpha(direction: FadeDirection, remaining: f32, duration: f32) -> f32 {
    let progress = (1.0 - remaining / duration.max(f32::EPSILON)).clamp(0.0, 1.0);
    match direction {
        FadeDirection::ToBlack => progress,
        FadeDirection::FromBlack => 1.0 - progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always(_: Guard) -> bool {
        true
    }

    #[test]
    fn fade_ramps_alpha_and_completes() {
        let mut queue = TransitionQueue::default();
        queue.schedule_sequence([TransitionStep::Fade(FadeDirection::ToBlack)]);

        assert!(queue.tick(FADE_DURATION / 2.0, always).is_empty());
        assert!((queue.overlay_alpha() - 0.5).abs() < 1e-4);

        queue.tick(FADE_DURATION, always);
        assert_eq!(queue.overlay_alpha(), 1.0);
        assert!(queue.is_idle());
    }

    #[test]
    fn alpha_holds_between_fades() {
        let mut queue = TransitionQueue::default();
        queue.schedule_sequence([TransitionStep::Fade(FadeDirection::ToBlack)]);
        queue.tick(FADE_DURATION, always);

        queue.tick(10.0, always);
        assert_eq!(queue.overlay_alpha(), 1.0);

        queue.schedule_sequence([TransitionStep::Fade(FadeDirection::FromBlack)]);
        queue.tick(FADE_DURATION, always);
        assert_eq!(queue.overlay_alpha(), 0.0);
    }

    #[test]
    fn callbacks_wait_for_the_fade_in_front_of_them() {
        let mut queue = TransitionQueue::default();
        queue.schedule_sequence([
            TransitionStep::Fade(FadeDirection::ToBlack),
            TransitionStep::Invoke(Guard::None, DeferredAction::WakeGreeting),
        ]);

        assert!(queue.tick(FADE_DURATION * 0.9, always).is_empty());
        let ready = queue.tick(FADE_DURATION, always);
        assert_eq!(ready, vec![DeferredAction::WakeGreeting]);
    }

    #[test]
    fn failed_guard_drops_the_callback_silently() {
        let mut queue = TransitionQueue::default();
        queue.schedule_delayed(0.0, Guard::PlayerSleeping, DeferredAction::WakeGreeting);

        let ready = queue.tick(0.1, |_| false);
        assert!(ready.is_empty());
        assert!(queue.is_idle());
    }

    #[test]
    fn guard_is_evaluated_at_fire_time_not_schedule_time() {
        let mut queue = TransitionQueue::default();
        queue.schedule_delayed(1.0, Guard::PlayerSleeping, DeferredAction::WakeGreeting);

        let mut sleeping = true;
        assert!(queue.tick(0.5, |_| sleeping).is_empty());

        // State changed while the callback was pending.
        sleeping = false;
        assert!(queue.tick(1.0, |_| sleeping).is_empty());
        assert!(queue.is_idle());
    }

    #[test]
    fn zero_delay_callbacks_fire_on_the_next_tick() {
        let mut queue = TransitionQueue::default();
        queue.schedule_delayed(
            0.0,
            Guard::None,
            DeferredAction::CompleteSleep {
                seconds_slept: 540.0,
                hours_slept: 9,
            },
        );

        let ready = queue.tick(0.0, always);
        assert_eq!(ready.len(), 1);
    }
}
