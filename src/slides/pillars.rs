//! The four-step method copy shared by the hero's process view and the
//! authority slide, plus the B2B/DTC toggle both of them render.

use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    B2b,
    Dtc,
}

pub struct Pillar {
    pub step: &'static str,
    pub title: &'static str,
    pub highlight: &'static str,
    pub text: &'static str,
}

const B2B_PILLARS: [Pillar; 4] = [
    Pillar {
        step: "Step 01",
        title: "Get the Economics Straight",
        highlight: "No ads before the math.",
        text: "We define revenue targets, ICP, and unit economics. This sets the only thing that matters: how much you can pay to win.",
    },
    Pillar {
        step: "Step 02",
        title: "Pick the Only Motion That Matters",
        highlight: "We focus, not spray.",
        text: "We choose the acquisition motion that matches how your buyers buy, whether search, paid social, or outbound, and ignore the rest.",
    },
    Pillar {
        step: "Step 03",
        title: "Build a System That Converts",
        highlight: "Traffic doesn't close deals.",
        text: "We design the positioning and landing experience so every click has a job: create qualified pipeline. No fluff.",
    },
    Pillar {
        step: "Step 04",
        title: "Scale What Proves Revenue",
        highlight: "Hard decisions. Fast execution.",
        text: "We launch and measure against revenue, kill what underperforms, and scale only what closes deals. No guesswork.",
    },
];

const DTC_PILLARS: [Pillar; 4] = [
    Pillar {
        step: "Step 01",
        title: "Unit Economics First",
        highlight: "Profit over vanity revenue.",
        text: "We analyze contribution margins and LTV to define your real scaling ceiling. Growth is worthless without bottom-line profit.",
    },
    Pillar {
        step: "Step 02",
        title: "Creative That Commands",
        highlight: "Creative is the new targeting.",
        text: "We build scroll-stopping authority through content that resonates. We don't just 'run ads'; we build a brand ecosystem.",
    },
    Pillar {
        step: "Step 03",
        title: "Conversion Infrastructure",
        highlight: "Frictionless path to purchase.",
        text: "We optimize your storefront for maximum conversion rate, ensuring every dollar spent on traffic works twice as hard.",
    },
    Pillar {
        step: "Step 04",
        title: "Surgical Scaling",
        highlight: "Aggressive testing, data scaling.",
        text: "We scale winners quickly and kill losers ruthlessly. No guesswork, just data-backed decisions to dominate your niche.",
    },
];

pub fn pillars(mode: Mode) -> &'static [Pillar; 4] {
    match mode {
        Mode::B2b => &B2B_PILLARS,
        Mode::Dtc => &DTC_PILLARS,
    }
}

/// The card strip. On narrow viewports it scrolls horizontally; the
/// `slide-carousel` class is the marker the input layer checks before
/// attributing a touch gesture to the deck.
pub fn pillar_cards(mode: Mode) -> Html {
    html! {
        <div class="slide-carousel pillar-strip">
            {
                pillars(mode).iter().enumerate().map(|(idx, pillar)| {
                    html! {
                        <div key={idx} class="pillar-card">
                            <span class="pillar-step">{pillar.step}</span>
                            <h3 class="pillar-title">{pillar.title}</h3>
                            <div class="pillar-divider"></div>
                            <p class="pillar-highlight">{pillar.highlight}</p>
                            <p class="pillar-text">{pillar.text}</p>
                        </div>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}

/// The pill-shaped B2B/DTC switch.
pub fn mode_toggle(mode: Mode, on_change: Callback<Mode>) -> Html {
    let pick = |m: Mode| {
        let on_change = on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(m))
    };
    html! {
        <div class="mode-toggle">
            <button
                class={classes!("mode-option", (mode == Mode::B2b).then_some("selected"))}
                onclick={pick(Mode::B2b)}
            >
                {"B2B"}
            </button>
            <button
                class={classes!("mode-option", (mode == Mode::Dtc).then_some("selected"))}
                onclick={pick(Mode::Dtc)}
            >
                {"DTC"}
            </button>
        </div>
    }
}
