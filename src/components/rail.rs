use web_sys::MouseEvent;
use yew::prelude::*;

use crate::SLIDES;

#[derive(Properties, PartialEq)]
pub struct RailProps {
    pub active: usize,
    pub on_select: Callback<usize>,
}

/// Fixed side rail: one marker per slide, wired straight into the deck's
/// jump path.
#[function_component(Rail)]
pub fn rail(props: &RailProps) -> Html {
    html! {
        <div class="slide-rail">
            {
                SLIDES.iter().enumerate().map(|(i, slide)| {
                    let on_select = props.on_select.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit(i));
                    html! {
                        <button
                            key={slide.id}
                            aria-label={format!("Go to slide {}", i + 1)}
                            class={classes!("rail-marker", (i == props.active).then_some("selected"))}
                            {onclick}
                        />
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
