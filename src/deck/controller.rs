use std::cell::RefCell;
use std::rc::Rc;

/// How long the deck stays locked after an accepted transition. Matches the
/// slide animation length plus a small settle margin.
pub const LOCK_MS: u32 = 700;
/// Shorter lock for touch devices so repeated swipes feel responsive.
pub const LOCK_MOBILE_MS: u32 = 500;

/// An accepted slide change, as handed to the renderer.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    /// `+1` when moving toward later slides, `-1` toward earlier ones.
    pub direction: i8,
}

/// The single writer of navigation state. Holds the current slide index,
/// the direction of the last accepted move, and the transition lock.
///
/// Invalid requests (out of range, same index, arriving while locked) are
/// absorbed silently: the deck simply does not move. There is no error
/// path out of this type.
pub struct DeckController {
    slide_count: usize,
    current: usize,
    direction: i8,
    locked: bool,
}

impl DeckController {
    pub fn new(slide_count: usize) -> Self {
        debug_assert!(slide_count > 0);
        Self {
            slide_count,
            current: 0,
            direction: 0,
            locked: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> i8 {
        self.direction
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Ask the deck to move to `target`. Targets outside the registry are
    /// clamped first; a clamped target equal to the current index is a
    /// no-op and does not engage the lock. Returns the accepted transition,
    /// or `None` when the request was dropped.
    pub fn request(&mut self, target: isize) -> Option<Transition> {
        if self.locked {
            return None;
        }
        let max = (self.slide_count - 1) as isize;
        let target = target.clamp(0, max) as usize;
        if target == self.current {
            return None;
        }
        let direction = if target > self.current { 1 } else { -1 };
        let accepted = Transition {
            from: self.current,
            to: target,
            direction,
        };
        self.current = target;
        self.direction = direction;
        self.locked = true;
        Some(accepted)
    }

    /// Release the transition lock. Called from the unlock timer; safe to
    /// call redundantly.
    pub fn release(&mut self) {
        self.locked = false;
    }
}

/// Timer-side unlock. The unlock timer is never cancelled, so it can fire
/// after the deck has been torn down; `alive` is cleared on teardown and
/// turns the late callback into a no-op. Returns whether the release
/// actually happened, so the caller knows if derived UI state may be
/// cleared.
pub fn release_if_alive(
    alive: &Rc<RefCell<bool>>,
    controller: &Rc<RefCell<DeckController>>,
) -> bool {
    if !*alive.borrow() {
        return false;
    }
    controller.borrow_mut().release();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_unlocked() {
        let deck = DeckController::new(7);
        assert_eq!(deck.current(), 0);
        assert_eq!(deck.direction(), 0);
        assert!(!deck.is_locked());
    }

    #[test]
    fn clamps_out_of_range_targets() {
        let mut deck = DeckController::new(7);
        let t = deck.request(99).unwrap();
        assert_eq!(t.to, 6);
        assert_eq!(deck.current(), 6);
        deck.release();
        let t = deck.request(-5).unwrap();
        assert_eq!(t.to, 0);
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn same_index_request_is_a_no_op() {
        let mut deck = DeckController::new(7);
        assert!(deck.request(0).is_none());
        assert_eq!(deck.direction(), 0);
        assert!(!deck.is_locked());
    }

    #[test]
    fn advance_past_last_slide_does_not_engage_lock() {
        let mut deck = DeckController::new(7);
        deck.request(6).unwrap();
        deck.release();
        // Clamped back onto the current index: dropped, still unlocked.
        assert!(deck.request(7).is_none());
        assert_eq!(deck.current(), 6);
        assert!(!deck.is_locked());
    }

    #[test]
    fn second_request_during_lock_window_is_dropped() {
        let mut deck = DeckController::new(7);
        assert!(deck.request(1).is_some());
        assert!(deck.is_locked());
        assert!(deck.request(2).is_none());
        assert_eq!(deck.current(), 1);
        deck.release();
        assert!(deck.request(2).is_some());
        assert_eq!(deck.current(), 2);
    }

    #[test]
    fn direction_follows_sign_of_index_change() {
        let mut deck = DeckController::new(7);
        let t = deck.request(4).unwrap();
        assert_eq!(t.direction, 1);
        assert_eq!(deck.direction(), 1);
        deck.release();
        let t = deck.request(2).unwrap();
        assert_eq!(t.direction, -1);
        assert_eq!(deck.direction(), -1);
    }

    #[test]
    fn dropped_requests_leave_no_trace() {
        let mut deck = DeckController::new(7);
        deck.request(3).unwrap();
        let dir = deck.direction();
        assert!(deck.request(5).is_none());
        assert_eq!(deck.current(), 3);
        assert_eq!(deck.direction(), dir);
    }

    #[test]
    fn wheel_scroll_sequence_respects_the_lock_window() {
        use crate::deck::gesture::{wheel_intent, Intent};

        fn drive(deck: &mut DeckController, delta_y: f64) {
            if let Some(intent) = wheel_intent(delta_y) {
                let target = match intent {
                    Intent::Advance => deck.current() as isize + 1,
                    Intent::Retreat => deck.current() as isize - 1,
                    Intent::Jump(i) => i as isize,
                };
                deck.request(target);
            }
        }

        let mut deck = DeckController::new(7);
        // Qualifying scroll: advances and locks.
        drive(&mut deck, 120.0);
        assert_eq!(deck.current(), 1);
        assert_eq!(deck.direction(), 1);
        // A second scroll inside the lock window is dropped.
        drive(&mut deck, 120.0);
        assert_eq!(deck.current(), 1);
        // Lock window elapses, next scroll advances again.
        deck.release();
        drive(&mut deck, 120.0);
        assert_eq!(deck.current(), 2);
        // Trackpad jitter below the deadzone moves nothing even unlocked.
        deck.release();
        drive(&mut deck, 2.0);
        assert_eq!(deck.current(), 2);
        assert!(!deck.is_locked());
        drive(&mut deck, 4.0);
        assert_eq!(deck.current(), 3);
    }

    #[test]
    fn late_unlock_timer_leaves_a_torn_down_deck_untouched() {
        let controller = Rc::new(RefCell::new(DeckController::new(7)));
        let alive = Rc::new(RefCell::new(true));
        controller.borrow_mut().request(1).unwrap();
        // Teardown races the pending timer: the flag drops first.
        *alive.borrow_mut() = false;
        assert!(!release_if_alive(&alive, &controller));
        assert!(controller.borrow().is_locked());
        assert_eq!(controller.borrow().current(), 1);
        assert_eq!(controller.borrow().direction(), 1);
        // With the deck still alive the same callback releases the lock.
        *alive.borrow_mut() = true;
        assert!(release_if_alive(&alive, &controller));
        assert!(!controller.borrow().is_locked());
    }

    #[test]
    fn release_is_idempotent() {
        let mut deck = DeckController::new(7);
        deck.request(1).unwrap();
        deck.release();
        deck.release();
        assert!(!deck.is_locked());
        assert!(deck.request(2).is_some());
    }
}
