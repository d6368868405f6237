//! Carousel engine shared by the image, portfolio and video carousels.

use std::rc::Rc;
use yew::Reducible;

/// What moves a carousel to its next item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceTrigger {
    /// Repeating timer, milliseconds between ticks.
    Interval(u32),
    /// The active video finished playing.
    PlaybackEnded,
}

/// Period of the auto-advance timer for `len` items, or `None` when no timer
/// should run. Selection is not an input: picking a slide never restarts it.
pub fn timer_period(trigger: AdvanceTrigger, len: usize) -> Option<u32> {
    match trigger {
        AdvanceTrigger::Interval(millis) if millis > 0 && len > 0 => Some(millis),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselAction {
    /// Timer tick.
    Tick,
    /// Indicator selected.
    Select(usize),
    TogglePlay,
    PlaybackStarted,
    /// `play()` was rejected by the browser. `epoch` is the slide epoch the
    /// call was made for; reports from an earlier slide are dropped.
    PlaybackFailed { epoch: u32 },
    PlaybackEnded,
    /// The media list was replaced with one of a different length.
    Resize(usize),
}

/// Index and play state of one carousel instance.
///
/// `epoch` bumps on every slide change, including a change to the same index
/// (a one-item list advancing onto itself), so effects keyed on it re-run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
    playing: bool,
    epoch: u32,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            playing: false,
            epoch: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn epoch(&self) -> u32 {
        self.epoch
    }

    fn go_to(&mut self, index: usize) {
        self.current = index;
        self.playing = false;
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn advance(&mut self) {
        if self.len > 0 {
            self.go_to((self.current + 1) % self.len);
        }
    }

    pub fn apply(&self, action: CarouselAction) -> Self {
        let mut next = self.clone();
        match action {
            CarouselAction::Tick | CarouselAction::PlaybackEnded => next.advance(),
            CarouselAction::Select(index) => {
                if index < next.len {
                    next.go_to(index);
                }
            }
            CarouselAction::TogglePlay => {
                if next.len > 0 {
                    next.playing = !next.playing;
                }
            }
            CarouselAction::PlaybackStarted => next.playing = next.len > 0,
            CarouselAction::PlaybackFailed { epoch } => {
                if epoch == next.epoch {
                    next.playing = false;
                }
            }
            CarouselAction::Resize(len) => {
                if len != next.len {
                    next.len = len;
                    if next.current >= len {
                        next.go_to(0);
                    }
                }
            }
        }
        next
    }
}

impl Reducible for CarouselState {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: CarouselState, actions: &[CarouselAction]) -> CarouselState {
        actions.iter().fold(state, |s, a| s.apply(*a))
    }

    #[test]
    fn new_starts_at_first_item_paused() {
        let state = CarouselState::new(3);
        assert_eq!(state.current(), 0);
        assert!(!state.is_playing());
    }

    #[test]
    fn three_ticks_over_three_items_wrap() {
        let mut state = CarouselState::new(3);
        let mut seen = Vec::new();
        for _ in 0..3 {
            state = state.apply(CarouselAction::Tick);
            seen.push(state.current());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn ticks_never_leave_bounds() {
        for len in 1..=7 {
            let mut state = CarouselState::new(len);
            for step in 1..=(len * 3) {
                state = state.apply(CarouselAction::Tick);
                assert!(state.current() < len);
                assert_eq!(state.current(), step % len);
            }
        }
    }

    #[test]
    fn select_jumps_immediately() {
        let state = run(CarouselState::new(3), &[CarouselAction::Tick]);
        let state = state.apply(CarouselAction::Select(2));
        assert_eq!(state.current(), 2);

        let state = state.apply(CarouselAction::Select(0));
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let state = CarouselState::new(3).apply(CarouselAction::Select(1));
        let after = state.apply(CarouselAction::Select(3));
        assert_eq!(after, state);
    }

    #[test]
    fn tick_after_select_continues_from_selection() {
        let state = run(
            CarouselState::new(5),
            &[CarouselAction::Select(3), CarouselAction::Tick],
        );
        assert_eq!(state.current(), 4);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let state = CarouselState::new(0);
        let after = run(
            state.clone(),
            &[
                CarouselAction::Tick,
                CarouselAction::PlaybackEnded,
                CarouselAction::Select(0),
                CarouselAction::TogglePlay,
                CarouselAction::PlaybackStarted,
            ],
        );
        assert_eq!(after, state);
    }

    #[test]
    fn playback_ended_advances_one_and_stops() {
        let state = run(
            CarouselState::new(3),
            &[CarouselAction::PlaybackStarted, CarouselAction::PlaybackEnded],
        );
        assert_eq!(state.current(), 1);
        assert!(!state.is_playing());
    }

    #[test]
    fn playback_ended_on_last_item_wraps() {
        let state = run(
            CarouselState::new(2),
            &[CarouselAction::Select(1), CarouselAction::PlaybackEnded],
        );
        assert_eq!(state.current(), 0);
    }

    #[test]
    fn single_video_replays_via_epoch() {
        let state = CarouselState::new(1).apply(CarouselAction::PlaybackStarted);
        let after = state.apply(CarouselAction::PlaybackEnded);
        assert_eq!(after.current(), 0);
        assert_ne!(after.epoch(), state.epoch());
    }

    #[test]
    fn toggle_play_keeps_index() {
        let state = run(
            CarouselState::new(3),
            &[CarouselAction::Select(2), CarouselAction::PlaybackStarted],
        );
        let paused = state.apply(CarouselAction::TogglePlay);
        assert!(!paused.is_playing());
        assert_eq!(paused.current(), 2);

        let resumed = paused.apply(CarouselAction::TogglePlay);
        assert!(resumed.is_playing());
        assert_eq!(resumed.current(), 2);
    }

    #[test]
    fn select_resets_play_state() {
        let state = CarouselState::new(3).apply(CarouselAction::PlaybackStarted);
        let state = state.apply(CarouselAction::Select(1));
        assert!(!state.is_playing());
    }

    #[test]
    fn failed_playback_keeps_index() {
        let state = run(
            CarouselState::new(3),
            &[CarouselAction::Select(1), CarouselAction::PlaybackStarted],
        );
        let failed = state.apply(CarouselAction::PlaybackFailed {
            epoch: state.epoch(),
        });
        assert!(!failed.is_playing());
        assert_eq!(failed.current(), 1);
    }

    #[test]
    fn stale_playback_failure_is_ignored() {
        let state = CarouselState::new(3).apply(CarouselAction::PlaybackStarted);
        let first_epoch = state.epoch();

        // Slide 0's play() is still pending when slide 1 is selected and starts
        let state = run(
            state,
            &[CarouselAction::Select(1), CarouselAction::PlaybackStarted],
        );
        let after = state.apply(CarouselAction::PlaybackFailed { epoch: first_epoch });
        assert_eq!(after.current(), 1);
        assert!(after.is_playing());
        assert_eq!(after, state);
    }

    #[test]
    fn timer_runs_only_for_positive_interval_and_items() {
        assert_eq!(timer_period(AdvanceTrigger::Interval(5000), 3), Some(5000));
        assert_eq!(timer_period(AdvanceTrigger::Interval(0), 3), None);
        assert_eq!(timer_period(AdvanceTrigger::Interval(5000), 0), None);
        assert_eq!(timer_period(AdvanceTrigger::PlaybackEnded, 3), None);
    }

    #[test]
    fn resize_clamps_out_of_range_index() {
        let state = CarouselState::new(5).apply(CarouselAction::Select(4));
        let shrunk = state.apply(CarouselAction::Resize(2));
        assert_eq!(shrunk.current(), 0);
        assert_eq!(shrunk.apply(CarouselAction::Tick).current(), 1);
        assert_eq!(shrunk.apply(CarouselAction::Select(2)), shrunk);

        let grown = CarouselState::new(2)
            .apply(CarouselAction::Select(1))
            .apply(CarouselAction::Resize(4));
        assert_eq!(grown.current(), 1);
    }

    #[test]
    fn reduce_returns_same_rc_on_noop() {
        let state = Rc::new(CarouselState::new(2));
        let next = state.clone().reduce(CarouselAction::Select(9));
        assert!(Rc::ptr_eq(&state, &next));

        let moved = state.clone().reduce(CarouselAction::Tick);
        assert!(!Rc::ptr_eq(&state, &moved));
        assert_eq!(moved.current(), 1);
    }
}
