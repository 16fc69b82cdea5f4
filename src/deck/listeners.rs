//! Window-level input plumbing. `InputSubscription` owns the wheel/touch
//! listeners for the lifetime of the deck and tears them down on drop, so
//! the handlers never outlive the component that mounted them.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, TouchEvent, WheelEvent, Window};
use yew::Callback;

use super::gesture::{wheel_intent, GestureSample, Intent};

/// Structural marker for nested horizontal scrollers. A touch starting
/// inside one of these may belong to the carousel, not the deck.
pub const CAROUSEL_MARKER: &str = ".slide-carousel";

struct ActiveGesture {
    sample: GestureSample,
    carousel: Option<Element>,
}

/// A live set of window listeners feeding normalized intents into the
/// supplied callback. Construct on mount, drop on teardown.
pub struct InputSubscription {
    window: Window,
    wheel: Closure<dyn FnMut(WheelEvent)>,
    touch_start: Closure<dyn FnMut(TouchEvent)>,
    touch_move: Closure<dyn FnMut(TouchEvent)>,
    touch_end: Closure<dyn FnMut(TouchEvent)>,
}

impl InputSubscription {
    pub fn subscribe(on_intent: Callback<Intent>) -> Self {
        let window = web_sys::window().expect("no window");
        let gesture: Rc<RefCell<Option<ActiveGesture>>> = Rc::new(RefCell::new(None));

        let wheel = {
            let on_intent = on_intent.clone();
            Closure::wrap(Box::new(move |e: WheelEvent| {
                if let Some(intent) = wheel_intent(e.delta_y()) {
                    on_intent.emit(intent);
                }
            }) as Box<dyn FnMut(WheelEvent)>)
        };

        let touch_start = {
            let gesture = gesture.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(touch) = e.touches().get(0) else {
                    return;
                };
                let carousel = e
                    .target()
                    .and_then(|t| t.dyn_into::<Element>().ok())
                    .and_then(|el| el.closest(CAROUSEL_MARKER).ok().flatten());
                let sample = GestureSample::begin(
                    touch.client_x() as f64,
                    touch.client_y() as f64,
                    carousel.is_some(),
                );
                *gesture.borrow_mut() = Some(ActiveGesture { sample, carousel });
            }) as Box<dyn FnMut(TouchEvent)>)
        };

        let touch_move = {
            let gesture = gesture.clone();
            Closure::wrap(Box::new(move |e: TouchEvent| {
                if let Some(active) = gesture.borrow_mut().as_mut() {
                    if let Some(touch) = e.touches().get(0) {
                        active
                            .sample
                            .track(touch.client_x() as f64, touch.client_y() as f64);
                    }
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };

        let touch_end = {
            let gesture = gesture.clone();
            let on_intent = on_intent;
            Closure::wrap(Box::new(move |e: TouchEvent| {
                let Some(mut active) = gesture.borrow_mut().take() else {
                    return;
                };
                let Some(touch) = e.changed_touches().get(0) else {
                    return;
                };
                let mid_scroll = active
                    .carousel
                    .as_ref()
                    .map(carousel_mid_scroll)
                    .unwrap_or(false);
                if let Some(intent) = active.sample.finish(
                    touch.client_x() as f64,
                    touch.client_y() as f64,
                    mid_scroll,
                ) {
                    on_intent.emit(intent);
                }
            }) as Box<dyn FnMut(TouchEvent)>)
        };

        let _ = window
            .add_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
        let _ = window
            .add_event_listener_with_callback("touchstart", touch_start.as_ref().unchecked_ref());
        let _ = window
            .add_event_listener_with_callback("touchmove", touch_move.as_ref().unchecked_ref());
        let _ = window
            .add_event_listener_with_callback("touchend", touch_end.as_ref().unchecked_ref());

        Self {
            window,
            wheel,
            touch_start,
            touch_move,
            touch_end,
        }
    }
}

/// True when the carousel sits strictly between its scroll edges, i.e. the
/// user was actually panning it when the finger lifted.
fn carousel_mid_scroll(el: &Element) -> bool {
    let left = el.scroll_left();
    left != 0 && left != el.scroll_width() - el.client_width()
}

impl Drop for InputSubscription {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        let _ = self.window.remove_event_listener_with_callback(
            "touchstart",
            self.touch_start.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "touchmove",
            self.touch_move.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "touchend",
            self.touch_end.as_ref().unchecked_ref(),
        );
    }
}
