use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::{slide_index, SLIDES};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active: usize,
    pub on_nav: Callback<usize>,
}

/// Intro sequence for the logo slot: a miniature race car drops in, tears
/// off across the bar, and the wordmark takes its place.
#[derive(Clone, Copy, PartialEq)]
enum RaceStage {
    Idle,
    Falling,
    Racing,
    Done,
}

fn race_car() -> Html {
    html! {
        <svg viewBox="0 0 220 80" class="race-car">
            <ellipse cx="115" cy="74" rx="85" ry="4" fill="#000" opacity="0.12"/>
            <path d="M2,60 L48,60 L48,56 L15,54 L10,50 L2,50 Z" fill="#1A1A1A"/>
            <path d="M40,56 L52,44 L68,38 L72,36 L72,56 Z" fill="#FF6B00"/>
            <path d="M72,36 L85,30 L98,26 Q105,20 115,18 Q122,16 128,18 L132,22 L135,26 L165,30 L178,38 L180,56 L72,56 Z" fill="#FF6B00"/>
            <path d="M98,28 Q105,20 115,18 Q120,17 124,18 L124,28 Z" fill="#1A1A1A"/>
            <path d="M100,28 C106,12 120,12 124,28" stroke="#999" stroke-width="3" fill="none" stroke-linecap="round"/>
            <path d="M126,18 L130,10 L136,10 L132,22 Z" fill="#1A1A1A"/>
            <rect x="186" y="12" width="32" height="5" rx="1.5" fill="#1A1A1A"/>
            <rect x="188" y="20" width="28" height="3.5" rx="1" fill="#FF6B00"/>
            <rect x="42" y="56" width="148" height="4" rx="1" fill="#333"/>
            <ellipse cx="55" cy="62" rx="12" ry="14" fill="#1A1A1A"/>
            <circle cx="55" cy="62" r="3.5" fill="#FF6B00"/>
            <ellipse cx="172" cy="62" rx="14" ry="16" fill="#1A1A1A"/>
            <circle cx="172" cy="62" r="4" fill="#FF6B00"/>
        </svg>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let stage = use_state(|| RaceStage::Idle);

    // Advance the staged animation; each leg hands over after its CSS
    // animation length.
    {
        let setter = stage.setter();
        use_effect_with_deps(
            move |&current| {
                match current {
                    RaceStage::Falling => {
                        Timeout::new(600, move || setter.set(RaceStage::Racing)).forget();
                    }
                    RaceStage::Racing => {
                        Timeout::new(800, move || setter.set(RaceStage::Done)).forget();
                    }
                    _ => {}
                }
                || ()
            },
            *stage,
        );
    }

    let start_race = {
        let stage = stage.clone();
        Callback::from(move |_: MouseEvent| {
            if *stage == RaceStage::Idle {
                stage.set(RaceStage::Falling);
            }
        })
    };
    let nav_to = |id: &'static str| {
        let on_nav = props.on_nav.clone();
        Callback::from(move |_: MouseEvent| on_nav.emit(slide_index(id)))
    };

    let section_link = |id: &'static str| {
        let selected = props.active == slide_index(id);
        html! {
            <button
                class={classes!("nav-section-link", selected.then_some("selected"))}
                onclick={nav_to(id)}
            >
                { SLIDES[slide_index(id)].label }
            </button>
        }
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo-slot">
                    {
                        match *stage {
                            RaceStage::Idle => html! {
                                <button class="race-start-button" onclick={start_race}>
                                    {"\u{25b6} START RACE"}
                                </button>
                            },
                            RaceStage::Falling => html! {
                                <div class="race-track"><div class="car-falling">{ race_car() }</div></div>
                            },
                            RaceStage::Racing => html! {
                                <div class="race-track"><div class="car-racing">{ race_car() }</div></div>
                            },
                            RaceStage::Done => html! {
                                <button class="nav-logo" onclick={nav_to("home")}>
                                    <span class="logo-mark"></span>
                                    <span class="logo-word">{"Acelera"}</span>
                                </button>
                            },
                        }
                    }
                </div>
                <div class="nav-sections">
                    { section_link("authority") }
                    { section_link("services") }
                    { section_link("philosophy") }
                </div>
                <a
                    class="nav-book-button"
                    href={config::BOOKING_URL}
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    {"Book Call"}
                </a>
            </div>
        </nav>
    }
}
