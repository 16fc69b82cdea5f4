use gloo_timers::callback::Timeout;
use log::{debug, info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

mod config;
mod deck {
    pub mod controller;
    pub mod gesture;
    pub mod listeners;
    pub mod transition;
}
mod components {
    pub mod navbar;
    pub mod rail;
}
mod slides {
    pub mod authority;
    pub mod hero;
    pub mod impact;
    pub mod mission;
    pub mod philosophy;
    pub mod pillars;
    pub mod problem;
    pub mod services;
}

use components::navbar::Navbar;
use components::rail::Rail;
use deck::controller::{release_if_alive, DeckController};
use deck::gesture::Intent;
use deck::listeners::InputSubscription;
use deck::transition::slide_animation;
use slides::authority::Authority;
use slides::hero::Hero;
use slides::impact::Impact;
use slides::mission::Mission;
use slides::philosophy::Philosophy;
use slides::problem::Problem;
use slides::services::Services;

/// One entry in the slide registry. Ordering is significant: it defines
/// the index space and the direction sign of every transition.
pub struct Slide {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SLIDES: [Slide; 7] = [
    Slide { id: "home", label: "Home" },
    Slide { id: "problem", label: "Problem" },
    Slide { id: "philosophy", label: "Philosophy" },
    Slide { id: "authority", label: "Our Method" },
    Slide { id: "services", label: "Services" },
    Slide { id: "impact", label: "Impact" },
    Slide { id: "mission", label: "Mission" },
];

pub fn slide_index(id: &str) -> usize {
    SLIDES.iter().position(|s| s.id == id).unwrap_or(0)
}

/// The full contract between the deck and a panel. Panels keep any richer
/// behavior local and reach the deck only through these two callbacks.
#[derive(Properties, PartialEq)]
pub struct PanelProps {
    pub is_active: bool,
    pub go_to_next: Callback<()>,
    pub go_to_slide: Callback<usize>,
}

fn render_slide(
    index: usize,
    is_active: bool,
    go_to_next: Callback<()>,
    go_to_slide: Callback<usize>,
) -> Html {
    match SLIDES[index].id {
        "home" => html! { <Hero {is_active} {go_to_next} {go_to_slide} /> },
        "problem" => html! { <Problem {is_active} {go_to_next} {go_to_slide} /> },
        "philosophy" => html! { <Philosophy {is_active} {go_to_next} {go_to_slide} /> },
        "authority" => html! { <Authority {is_active} {go_to_next} {go_to_slide} /> },
        "services" => html! { <Services {is_active} {go_to_next} {go_to_slide} /> },
        "impact" => html! { <Impact {is_active} {go_to_next} {go_to_slide} /> },
        _ => html! { <Mission {is_active} {go_to_next} {go_to_slide} /> },
    }
}

#[function_component]
fn App() -> Html {
    // Single writer of navigation state. Event handlers are registered
    // once and read the controller through this Rc at event time, so they
    // always see the current index.
    let controller = use_mut_ref(|| DeckController::new(SLIDES.len()));
    // Rendered (index, direction) pair, mirrored out of the controller.
    let view = use_state(|| (0usize, 0i8));
    // The departing slide, kept mounted while its exit animation runs.
    let outgoing = use_state(|| None::<usize>);
    // Narrow-viewport flag: the RefCell is read by event closures, the
    // state handle drives the reduced-motion presentation.
    let mobile = use_mut_ref(|| false);
    let reduced = use_state(|| false);
    // Cleared on teardown so a pending unlock timer never acts on a
    // controller whose component is gone.
    let alive = use_mut_ref(|| true);

    let navigate: Callback<isize> = {
        let controller = controller.clone();
        let view = view.setter();
        let outgoing = outgoing.setter();
        let mobile = mobile.clone();
        let alive = alive.clone();
        Callback::from(move |target: isize| {
            let accepted = controller.borrow_mut().request(target);
            let Some(t) = accepted else {
                debug!("navigation request to {} dropped", target);
                return;
            };
            info!("slide {} -> {} (direction {})", t.from, t.to, t.direction);
            view.set((t.to, t.direction));
            outgoing.set(Some(t.from));
            // The presenter owns the timing: the lock holds exactly as
            // long as the exit animation runs.
            let duration = slide_animation(t.direction, *mobile.borrow()).duration_ms;
            let controller = controller.clone();
            let outgoing = outgoing.clone();
            let alive = alive.clone();
            Timeout::new(duration, move || {
                if release_if_alive(&alive, &controller) {
                    outgoing.set(None);
                }
            })
            .forget();
        })
    };

    let on_intent: Callback<Intent> = {
        let controller = controller.clone();
        let navigate = navigate.clone();
        Callback::from(move |intent: Intent| {
            let current = controller.borrow().current() as isize;
            match intent {
                Intent::Advance => navigate.emit(current + 1),
                Intent::Retreat => navigate.emit(current - 1),
                Intent::Jump(i) => navigate.emit(i as isize),
            }
        })
    };

    // Window input subscription for the lifetime of the deck.
    {
        let on_intent = on_intent.clone();
        let alive = alive.clone();
        use_effect_with_deps(
            move |_| {
                let sub = InputSubscription::subscribe(on_intent);
                move || {
                    *alive.borrow_mut() = false;
                    drop(sub);
                }
            },
            (),
        );
    }

    // Mobile detection, rechecked on resize.
    {
        let mobile = mobile.clone();
        let reduced = reduced.setter();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let check = {
                    let window = window.clone();
                    move || {
                        let narrow = window
                            .inner_width()
                            .ok()
                            .and_then(|w| w.as_f64())
                            .map(|w| w < config::MOBILE_BREAKPOINT_PX)
                            .unwrap_or(false);
                        *mobile.borrow_mut() = narrow;
                        reduced.set(narrow);
                    }
                };
                check();
                let resize = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let go_to_slide: Callback<usize> = {
        let navigate = navigate.clone();
        Callback::from(move |i: usize| navigate.emit(i as isize))
    };
    let go_to_next: Callback<()> = {
        let controller = controller.clone();
        let navigate = navigate.clone();
        Callback::from(move |_| {
            let current = controller.borrow().current() as isize;
            navigate.emit(current + 1);
        })
    };

    let (current, direction) = *view;
    let spec = slide_animation(direction, *reduced);

    html! {
        <div class="deck-root">
            <Navbar active={current} on_nav={go_to_slide.clone()} />
            <main class="deck-stage">
                {
                    if let Some(from) = *outgoing {
                        html! {
                            <div key={from} class={classes!("deck-panel", spec.exit_class)}>
                                { render_slide(from, false, go_to_next.clone(), go_to_slide.clone()) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div key={current} class={classes!("deck-panel", spec.enter_class)}>
                    { render_slide(current, true, go_to_next.clone(), go_to_slide.clone()) }
                </div>
            </main>
            <Rail active={current} on_select={go_to_slide} />
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
