use gloo_timers::callback::Timeout;
use web_sys::js_sys::Math;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::slides::pillars::{mode_toggle, pillar_cards, Mode};
use crate::PanelProps;

/// The noise-into-authority sequence: a scattered field of vanity-metric
/// words collapses to the center, then the method cards take over.
#[derive(Clone, Copy, PartialEq)]
enum Phase {
    Noise,
    Transforming,
    Authority,
}

const NOISE_WORDS: [&str; 10] = [
    "clicks", "impressions", "reach", "leads", "traffic", "activity", "noise", "likes", "shares",
    "volume",
];

struct Particle {
    x: f64,
    y: f64,
    word: Option<&'static str>,
}

fn scatter(compact: bool) -> Vec<Particle> {
    // Fewer particles on small screens; the field is pure decoration.
    let words = if compact { 5 } else { NOISE_WORDS.len() };
    let dots = if compact { 5 } else { 20 };
    let mut field = Vec::with_capacity(words + dots);
    for word in NOISE_WORDS.iter().take(words) {
        field.push(Particle {
            x: 10.0 + Math::random() * 80.0,
            y: 20.0 + Math::random() * 60.0,
            word: Some(word),
        });
    }
    for _ in 0..dots {
        field.push(Particle {
            x: Math::random() * 100.0,
            y: Math::random() * 100.0,
            word: None,
        });
    }
    field
}

fn narrow_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(|w| w < config::MOBILE_BREAKPOINT_PX)
        .unwrap_or(false)
}

#[function_component(Authority)]
pub fn authority(props: &PanelProps) -> Html {
    let phase = use_state(|| Phase::Noise);
    let mode = use_state(|| Mode::B2b);
    let particles = use_state(|| scatter(narrow_viewport()));

    let start_transformation = {
        let phase = phase.clone();
        let setter = phase.setter();
        Callback::from(move |_: MouseEvent| {
            if *phase != Phase::Noise {
                return;
            }
            phase.set(Phase::Transforming);
            let setter = setter.clone();
            Timeout::new(1200, move || setter.set(Phase::Authority)).forget();
        })
    };
    let set_mode = {
        let mode = mode.clone();
        Callback::from(move |m: Mode| mode.set(m))
    };
    let continue_next = {
        let go_to_next = props.go_to_next.clone();
        Callback::from(move |_: MouseEvent| go_to_next.emit(()))
    };

    let field = if *phase == Phase::Authority {
        html! {}
    } else {
        let collapsing = *phase == Phase::Transforming;
        html! {
            <div class="particle-field">
                {
                    particles.iter().enumerate().map(|(idx, p)| {
                        let style = if collapsing {
                            "left: 50%; top: 50%;".to_string()
                        } else {
                            format!("left: {:.1}%; top: {:.1}%;", p.x, p.y)
                        };
                        html! {
                            <span
                                key={idx}
                                class={classes!(
                                    "particle",
                                    p.word.is_none().then_some("particle-dot"),
                                    collapsing.then_some("collapsing"),
                                )}
                                {style}
                            >
                                { p.word.unwrap_or("") }
                            </span>
                        }
                    }).collect::<Html>()
                }
            </div>
        }
    };

    html! {
        <section class={classes!("slide", "authority-slide", props.is_active.then_some("active"))}>
            { field }
            {
                match *phase {
                    Phase::Noise => html! {
                        <div class="slide-inner authority-noise">
                            <h2>{"Targeted Precision"}<br/>{"for High Impact."}</h2>
                            <p class="authority-tagline">{"Activity is not authority."}</p>
                            <button class="cta-primary" onclick={start_transformation}>
                                {"See Our Method"}
                            </button>
                        </div>
                    },
                    Phase::Transforming => html! {
                        <div class="slide-inner authority-interlude">
                            <p>
                                {"Authority is not chased. "}
                                <span class="strong">{"It is built."}</span>
                            </p>
                        </div>
                    },
                    Phase::Authority => html! {
                        <div class="slide-inner authority-framework">
                            <span class="eyebrow">{"The Authority Framework"}</span>
                            { mode_toggle(*mode, set_mode.clone()) }
                            { pillar_cards(*mode) }
                            <p class="swipe-hint">{"Swipe to explore the pillars"}</p>
                            <h2 class="authority-outro">
                                {"This is "}<span class="underlined">{"Acelera"}</span>
                            </h2>
                            <p class="authority-detail">
                                {"Acquisition systems with direction and real weight."}
                            </p>
                            <button class="cta-dark" onclick={continue_next}>
                                {"Continue \u{2192}"}
                            </button>
                        </div>
                    },
                }
            }
        </section>
    }
}
