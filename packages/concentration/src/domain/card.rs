//! Card identity, face flags, and bonus-time accounting.

use std::time::Duration;

/// Stable card identifier, unique within one deck.
///
/// Ids are assigned as `2 * pair_index` and `2 * pair_index + 1`, so a
/// card's pair partner is always `id ^ 1`.
pub type CardId = u32;

/// A single card. Generic over the content type; the engine only ever
/// compares contents for equality.
#[derive(Debug, Clone, PartialEq)]
pub struct Card<C> {
    pub(crate) id: CardId,
    pub(crate) content: C,
    pub(crate) is_face_up: bool,
    /// Monotonic: once matched, a card never becomes unmatched.
    pub(crate) is_matched: bool,
    pub(crate) bonus_time_limit: Duration,
    /// Start of the currently open face-up interval, if one is being timed.
    pub(crate) last_face_up_at: Option<Duration>,
    /// Accumulated face-up time from closed intervals.
    pub(crate) past_face_up_time: Duration,
}

impl<C> Card<C> {
    pub(crate) fn new(id: CardId, content: C, bonus_time_limit: Duration) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
            bonus_time_limit,
            last_face_up_at: None,
            past_face_up_time: Duration::ZERO,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    pub fn is_matched(&self) -> bool {
        self.is_matched
    }

    pub fn bonus_time_limit(&self) -> Duration {
        self.bonus_time_limit
    }

    /// Total face-up time as of `now`: closed intervals plus the open one.
    ///
    /// All time-dependent accessors take `now` from the caller's clock; the
    /// card itself never samples time.
    pub fn face_up_time(&self, now: Duration) -> Duration {
        match self.last_face_up_at {
            Some(opened_at) => self.past_face_up_time + now.saturating_sub(opened_at),
            None => self.past_face_up_time,
        }
    }

    /// Bonus window left before this card stops earning, floored at zero.
    pub fn bonus_time_remaining(&self, now: Duration) -> Duration {
        self.bonus_time_limit.saturating_sub(self.face_up_time(now))
    }

    /// Remaining bonus as a fraction of the full window, in `0.0..=1.0`.
    pub fn bonus_fraction_remaining(&self, now: Duration) -> f64 {
        let remaining = self.bonus_time_remaining(now);
        if self.bonus_time_limit.is_zero() || remaining.is_zero() {
            0.0
        } else {
            remaining.as_secs_f64() / self.bonus_time_limit.as_secs_f64()
        }
    }

    /// Whether this card was matched while its bonus window was still open.
    pub fn has_earned_bonus(&self, now: Duration) -> bool {
        self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Whether the bonus window is currently being spent: face-up, not yet
    /// matched, and not yet exhausted.
    pub fn is_consuming_bonus_time(&self, now: Duration) -> bool {
        self.is_face_up && !self.is_matched && !self.bonus_time_remaining(now).is_zero()
    }

    /// Open a timed face-up interval, if the card is consuming bonus time
    /// and no interval is already open. Idempotent.
    pub fn start_using_bonus_time(&mut self, now: Duration) {
        if self.is_consuming_bonus_time(now) && self.last_face_up_at.is_none() {
            self.last_face_up_at = Some(now);
        }
    }

    /// Fold the open interval into the accumulated total and close it.
    /// Idempotent.
    pub fn stop_using_bonus_time(&mut self, now: Duration) {
        self.past_face_up_time = self.face_up_time(now);
        self.last_face_up_at = None;
    }
}
