//! Frame-driven timers for the countdown and the wrong-highlight revert.
//!
//! Both timers are cooperative deadlines polled at the top of each frame,
//! never preemptive threads. Due deadlines are converted into actions in
//! deadline order, so a tick and a revert can never interleave mid-handler.

use std::time::{Duration, Instant};

use numerush_core::TileIndex;
use numerush_game::SessionGeneration;

use crate::action::{Action, ActionRequestQueue};

/// Countdown granularity: one tick per second of wall clock.
pub(crate) const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// How long a rejected tile stays highlighted before reverting to idle.
pub(crate) const WRONG_REVERT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy)]
struct PendingRevert {
    due: Instant,
    generation: SessionGeneration,
    tile: TileIndex,
}

/// Deadlines owned by the UI, replaced wholesale when a new game starts.
#[derive(Debug, Default)]
pub(crate) struct ClockState {
    next_tick: Option<Instant>,
    pending_revert: Option<PendingRevert>,
}

impl ClockState {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Schedules the recurring countdown, replacing any previous one.
    pub(crate) fn start_countdown(&mut self, now: Instant) {
        self.next_tick = Some(now + TICK_INTERVAL);
    }

    /// Drops the recurring countdown.
    pub(crate) fn stop_countdown(&mut self) {
        self.next_tick = None;
    }

    /// Arms the one-shot revert for a freshly wrong-highlighted tile.
    ///
    /// A newer wrong click replaces the pending revert; the session keeps at
    /// most one tile highlighted, so one deadline suffices.
    pub(crate) fn arm_revert(
        &mut self,
        now: Instant,
        generation: SessionGeneration,
        tile: TileIndex,
    ) {
        self.pending_revert = Some(PendingRevert {
            due: now + WRONG_REVERT_DELAY,
            generation,
            tile,
        });
    }

    /// Drops the pending revert, if any.
    pub(crate) fn clear_revert(&mut self) {
        self.pending_revert = None;
    }

    /// Converts every deadline due at `now` into an action, in deadline
    /// order.
    ///
    /// When frames are delayed (window hidden, busy main thread) several
    /// ticks can be due at once; each is emitted separately so the session
    /// consumes the missed seconds one by one.
    pub(crate) fn poll(&mut self, now: Instant, queue: &mut ActionRequestQueue) {
        loop {
            let tick_due = self.next_tick.filter(|due| *due <= now);
            let revert_due = self.pending_revert.filter(|pending| pending.due <= now);

            match (tick_due, revert_due) {
                (Some(tick), Some(revert)) if revert.due <= tick => self.emit_revert(queue),
                (Some(tick), _) => {
                    queue.request(Action::Tick);
                    self.next_tick = Some(tick + TICK_INTERVAL);
                }
                (None, Some(_)) => self.emit_revert(queue),
                (None, None) => break,
            }
        }
    }

    fn emit_revert(&mut self, queue: &mut ActionRequestQueue) {
        if let Some(PendingRevert {
            generation, tile, ..
        }) = self.pending_revert.take()
        {
            queue.request(Action::RevertWrong { generation, tile });
        }
    }

    /// Time until the nearest deadline, for scheduling the next repaint.
    #[must_use]
    pub(crate) fn time_until_next_deadline(&self, now: Instant) -> Option<Duration> {
        let revert_due = self.pending_revert.map(|pending| pending.due);
        [self.next_tick, revert_due]
            .into_iter()
            .flatten()
            .min()
            .map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generation() -> SessionGeneration {
        SessionGeneration::FIRST
    }

    fn tile() -> TileIndex {
        TileIndex::ALL[3]
    }

    #[test]
    fn countdown_emits_one_tick_per_interval() {
        let t0 = Instant::now();
        let mut clock = ClockState::new();
        let mut queue = ActionRequestQueue::default();

        clock.start_countdown(t0);
        clock.poll(t0 + Duration::from_millis(900), &mut queue);
        assert!(queue.take_all().is_empty());

        clock.poll(t0 + Duration::from_millis(1100), &mut queue);
        assert_eq!(queue.take_all(), [Action::Tick]);
    }

    #[test]
    fn delayed_poll_catches_up_one_tick_at_a_time() {
        let t0 = Instant::now();
        let mut clock = ClockState::new();
        let mut queue = ActionRequestQueue::default();

        clock.start_countdown(t0);
        clock.poll(t0 + Duration::from_millis(3500), &mut queue);
        assert_eq!(queue.take_all(), [Action::Tick, Action::Tick, Action::Tick]);

        // The schedule stays aligned to the original start.
        clock.poll(t0 + Duration::from_millis(4000), &mut queue);
        assert_eq!(queue.take_all(), [Action::Tick]);
    }

    #[test]
    fn revert_fires_once_with_its_generation() {
        let t0 = Instant::now();
        let mut clock = ClockState::new();
        let mut queue = ActionRequestQueue::default();

        clock.arm_revert(t0, generation(), tile());
        clock.poll(t0 + WRONG_REVERT_DELAY, &mut queue);
        assert_eq!(
            queue.take_all(),
            [Action::RevertWrong {
                generation: generation(),
                tile: tile(),
            }]
        );

        clock.poll(t0 + Duration::from_secs(5), &mut queue);
        assert!(queue.take_all().is_empty());
    }

    #[test]
    fn due_deadlines_are_emitted_in_deadline_order() {
        let t0 = Instant::now();
        let mut clock = ClockState::new();
        let mut queue = ActionRequestQueue::default();

        // Tick due at 1.0s, revert armed at 0.7s so due at 1.2s, second
        // tick due at 2.0s.
        clock.start_countdown(t0);
        clock.arm_revert(t0 + Duration::from_millis(700), generation(), tile());
        clock.poll(t0 + Duration::from_secs(2), &mut queue);

        assert_eq!(
            queue.take_all(),
            [
                Action::Tick,
                Action::RevertWrong {
                    generation: generation(),
                    tile: tile(),
                },
                Action::Tick,
            ]
        );
    }

    #[test]
    fn stop_and_clear_drop_deadlines() {
        let t0 = Instant::now();
        let mut clock = ClockState::new();
        let mut queue = ActionRequestQueue::default();

        clock.start_countdown(t0);
        clock.arm_revert(t0, generation(), tile());
        clock.stop_countdown();
        clock.clear_revert();

        clock.poll(t0 + Duration::from_secs(10), &mut queue);
        assert!(queue.take_all().is_empty());
        assert_eq!(clock.time_until_next_deadline(t0), None);
    }

    #[test]
    fn next_deadline_is_the_nearest_of_both_timers() {
        let t0 = Instant::now();
        let mut clock = ClockState::new();

        clock.start_countdown(t0);
        assert_eq!(clock.time_until_next_deadline(t0), Some(TICK_INTERVAL));

        clock.arm_revert(t0, generation(), tile());
        assert_eq!(
            clock.time_until_next_deadline(t0),
            Some(WRONG_REVERT_DELAY)
        );
    }
}
