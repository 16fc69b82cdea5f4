//! Maps a transition direction onto the CSS classes driving the enter and
//! exit animations. The keyframes themselves live in `styles.css`; this
//! module only decides which pair applies and how long the pass runs.

use super::controller::{LOCK_MOBILE_MS, LOCK_MS};

/// Animation parameters for one slide change.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct AnimationSpec {
    /// Class applied to the incoming panel.
    pub enter_class: &'static str,
    /// Class applied to the outgoing panel.
    pub exit_class: &'static str,
    /// How long the pass runs, in ms. The deck holds its transition lock
    /// and keeps the outgoing panel mounted for exactly this long.
    pub duration_ms: u32,
}

/// Pure presenter: direction in, motion out. `reduced_motion` is set for
/// coarse-pointer or narrow viewports and swaps in the blur-free, shorter
/// variants.
pub fn slide_animation(direction: i8, reduced_motion: bool) -> AnimationSpec {
    let duration_ms = if reduced_motion { LOCK_MOBILE_MS } else { LOCK_MS };
    match direction {
        // Advancing: incoming rises from below, outgoing departs upward.
        1 => AnimationSpec {
            enter_class: if reduced_motion {
                "slide-enter-up slide-reduced"
            } else {
                "slide-enter-up"
            },
            exit_class: if reduced_motion {
                "slide-exit-up slide-reduced"
            } else {
                "slide-exit-up"
            },
            duration_ms,
        },
        // Retreating: the reverse travel.
        -1 => AnimationSpec {
            enter_class: if reduced_motion {
                "slide-enter-down slide-reduced"
            } else {
                "slide-enter-down"
            },
            exit_class: if reduced_motion {
                "slide-exit-down slide-reduced"
            } else {
                "slide-exit-down"
            },
            duration_ms,
        },
        // Initial mount: the first slide appears without travel.
        _ => AnimationSpec {
            enter_class: "",
            exit_class: "",
            duration_ms: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_and_retreat_travel_opposite_ways() {
        let fwd = slide_animation(1, false);
        let back = slide_animation(-1, false);
        assert_eq!(fwd.enter_class, "slide-enter-up");
        assert_eq!(fwd.exit_class, "slide-exit-up");
        assert_eq!(back.enter_class, "slide-enter-down");
        assert_eq!(back.exit_class, "slide-exit-down");
    }

    #[test]
    fn initial_mount_has_no_motion() {
        let spec = slide_animation(0, false);
        assert_eq!(spec.enter_class, "");
        assert_eq!(spec.duration_ms, 0);
    }

    #[test]
    fn duration_matches_the_lock_window() {
        assert_eq!(slide_animation(1, false).duration_ms, LOCK_MS);
        assert_eq!(slide_animation(-1, false).duration_ms, LOCK_MS);
        assert_eq!(slide_animation(1, true).duration_ms, LOCK_MOBILE_MS);
    }

    #[test]
    fn reduced_motion_shortens_and_tags_the_pass() {
        let spec = slide_animation(1, true);
        assert!(spec.enter_class.contains("slide-reduced"));
        assert!(spec.exit_class.contains("slide-reduced"));
        assert!(spec.duration_ms < slide_animation(1, false).duration_ms);
    }
}
