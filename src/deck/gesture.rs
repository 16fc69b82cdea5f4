//! Classification of raw wheel and touch input into navigation intents.
//! Everything here is plain data so the policies are testable off the DOM;
//! the window plumbing lives in `deck::listeners`.

/// Wheel deltas below this are trackpad jitter, not a scroll.
pub const WHEEL_DEADZONE: f64 = 3.0;
/// Minimum vertical travel before a touch gesture counts as a swipe.
pub const SWIPE_MIN_PX: f64 = 50.0;
/// Total displacement at which a gesture commits to one axis.
pub const AXIS_LOCK_PX: f64 = 10.0;

/// A normalized navigation request.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Intent {
    Advance,
    Retreat,
    Jump(usize),
}

/// Wheel policy: positive delta scrolls forward, tiny deltas are dropped.
pub fn wheel_intent(delta_y: f64) -> Option<Intent> {
    if delta_y.abs() < WHEEL_DEADZONE {
        return None;
    }
    Some(if delta_y > 0.0 {
        Intent::Advance
    } else {
        Intent::Retreat
    })
}

#[derive(Clone, Copy, PartialEq, Debug)]
enum Axis {
    Horizontal,
    Vertical,
}

/// One in-flight touch interaction, created at touchstart and discarded at
/// touchend. Tracks enough geometry to decide, once, whether the gesture
/// was a deliberate vertical swipe.
pub struct GestureSample {
    start_x: f64,
    start_y: f64,
    last_x: f64,
    last_y: f64,
    /// Set true at touchstart when the finger landed inside a nested
    /// horizontal scroller (`.slide-carousel`).
    in_carousel: bool,
    axis: Option<Axis>,
    consumed: bool,
}

impl GestureSample {
    pub fn begin(x: f64, y: f64, in_carousel: bool) -> Self {
        Self {
            start_x: x,
            start_y: y,
            last_x: x,
            last_y: y,
            in_carousel,
            axis: None,
            consumed: false,
        }
    }

    /// Feed a touchmove. The gesture locks onto its dominant axis once the
    /// finger has travelled `AXIS_LOCK_PX` from the start point; after that
    /// the other axis can no longer claim it.
    pub fn track(&mut self, x: f64, y: f64) {
        self.last_x = x;
        self.last_y = y;
        if self.axis.is_none() {
            let dx = (x - self.start_x).abs();
            let dy = (y - self.start_y).abs();
            if dx.max(dy) >= AXIS_LOCK_PX {
                self.axis = Some(if dx > dy {
                    Axis::Horizontal
                } else {
                    Axis::Vertical
                });
            }
        }
    }

    /// Finalize at touchend. `carousel_mid_scroll` reports whether the
    /// nested scroller the gesture started in sat strictly between its
    /// edges when the finger lifted; if so the carousel owns the gesture.
    /// At most one intent is ever emitted per sample.
    pub fn finish(&mut self, x: f64, y: f64, carousel_mid_scroll: bool) -> Option<Intent> {
        self.track(x, y);
        if self.consumed {
            return None;
        }
        self.consumed = true;
        if self.in_carousel && carousel_mid_scroll {
            return None;
        }
        if self.axis == Some(Axis::Horizontal) {
            return None;
        }
        let dx = self.start_x - self.last_x;
        let dy = self.start_y - self.last_y;
        if dx.abs() > dy.abs() {
            return None;
        }
        if dy.abs() < SWIPE_MIN_PX {
            return None;
        }
        // Finger up means the content below should come into view.
        Some(if dy > 0.0 {
            Intent::Advance
        } else {
            Intent::Retreat
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_deadzone_drops_jitter() {
        assert_eq!(wheel_intent(2.0), None);
        assert_eq!(wheel_intent(-2.9), None);
        assert_eq!(wheel_intent(4.0), Some(Intent::Advance));
        assert_eq!(wheel_intent(-4.0), Some(Intent::Retreat));
    }

    #[test]
    fn upward_swipe_advances() {
        let mut g = GestureSample::begin(100.0, 400.0, false);
        g.track(100.0, 340.0);
        assert_eq!(g.finish(100.0, 340.0, false), Some(Intent::Advance));
    }

    #[test]
    fn downward_swipe_retreats() {
        let mut g = GestureSample::begin(100.0, 200.0, false);
        assert_eq!(g.finish(105.0, 280.0, false), Some(Intent::Retreat));
    }

    #[test]
    fn horizontal_swipe_never_navigates() {
        // deltaX 80 vs deltaY 20: horizontal wins, no intent.
        let mut g = GestureSample::begin(200.0, 300.0, false);
        g.track(150.0, 310.0);
        assert_eq!(g.finish(120.0, 320.0, false), None);
    }

    #[test]
    fn mostly_vertical_swipe_navigates() {
        // deltaX 10 vs deltaY 60.
        let mut g = GestureSample::begin(200.0, 300.0, false);
        g.track(205.0, 270.0);
        assert_eq!(g.finish(210.0, 240.0, false), Some(Intent::Advance));
    }

    #[test]
    fn short_swipe_is_a_tap() {
        let mut g = GestureSample::begin(100.0, 300.0, false);
        assert_eq!(g.finish(100.0, 270.0, false), None);
    }

    #[test]
    fn axis_lock_sticks_with_the_first_direction() {
        // Starts clearly horizontal, then drifts vertical: still owned by
        // the horizontal axis.
        let mut g = GestureSample::begin(100.0, 300.0, false);
        g.track(115.0, 302.0);
        g.track(120.0, 380.0);
        assert_eq!(g.finish(118.0, 390.0, false), None);
    }

    #[test]
    fn carousel_mid_scroll_owns_the_gesture() {
        let mut g = GestureSample::begin(100.0, 400.0, true);
        g.track(100.0, 320.0);
        assert_eq!(g.finish(100.0, 320.0, true), None);
    }

    #[test]
    fn carousel_at_edge_releases_the_gesture() {
        let mut g = GestureSample::begin(100.0, 400.0, true);
        g.track(100.0, 320.0);
        assert_eq!(g.finish(100.0, 320.0, false), Some(Intent::Advance));
    }

    #[test]
    fn one_intent_per_gesture() {
        let mut g = GestureSample::begin(100.0, 400.0, false);
        assert_eq!(g.finish(100.0, 320.0, false), Some(Intent::Advance));
        // touchcancel after touchend, or a duplicate end: nothing more.
        assert_eq!(g.finish(100.0, 200.0, false), None);
    }
}
