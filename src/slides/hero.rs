use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::slides::pillars::{mode_toggle, pillar_cards, Mode};
use crate::PanelProps;

#[derive(Clone, Copy, PartialEq)]
enum HeroView {
    Main,
    Process,
}

/// Opening slide. Local state only: the main/process view switch and the
/// B2B/DTC mode never leave this panel.
#[function_component(Hero)]
pub fn hero(props: &PanelProps) -> Html {
    let view = use_state(|| HeroView::Main);
    let mode = use_state(|| Mode::B2b);

    let show_process = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(HeroView::Process))
    };
    let show_main = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(HeroView::Main))
    };
    let set_mode = {
        let mode = mode.clone();
        Callback::from(move |m: Mode| mode.set(m))
    };

    let (headline_word, subtext, cta_label) = match *mode {
        Mode::B2b => (
            "authority",
            "We turn your digital presence into a system that generates real commercial conversations with the people who decide.",
            "See how we start commercial conversations",
        ),
        Mode::Dtc => (
            "performance",
            "We turn your brand into a consumer magnet that drives recurring high-ROAS revenue through creative authority.",
            "See how we attract consumers",
        ),
    };

    html! {
        <section class={classes!("slide", "hero-slide", props.is_active.then_some("active"))}>
            {
                match *view {
                    HeroView::Main => html! {
                        <div class="hero-main">
                            { mode_toggle(*mode, set_mode.clone()) }
                            <h1 class="hero-headline">
                                {"Acquisition driven by"}<br/>
                                <span class="accent-serif">{headline_word}</span>
                            </h1>
                            <p class="hero-subtext">{subtext}</p>
                            <div class="hero-cta-row">
                                <button class="cta-primary" onclick={show_process}>
                                    {cta_label}
                                </button>
                                <a
                                    class="cta-outline"
                                    href={config::BOOKING_URL}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    {"Book a strategy call"}
                                </a>
                            </div>
                        </div>
                    },
                    HeroView::Process => html! {
                        <div class="hero-process">
                            <div class="process-header">
                                <button class="back-link" onclick={show_main}>{"< BACK"}</button>
                                <span class="eyebrow">{"Our Method"}</span>
                            </div>
                            <h2 class="process-heading">
                                { if *mode == Mode::B2b { "How We Acquire Customers" } else { "How We Scale Brands" } }
                            </h2>
                            { pillar_cards(*mode) }
                            <p class="swipe-hint">{"Swipe to explore"}</p>
                            <a
                                class="cta-primary process-cta"
                                href={config::BOOKING_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                { if *mode == Mode::B2b { "Accelerate My Growth" } else { "Scale My Brand" } }
                            </a>
                        </div>
                    },
                }
            }
        </section>
    }
}
