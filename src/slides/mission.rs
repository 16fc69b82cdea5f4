use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::{slide_index, PanelProps};

/// Closing slide: mission statement and the booking CTA card. The "See Our
/// Method" button is the one cross-slide jump issued from inside a panel.
#[function_component(Mission)]
pub fn mission(props: &PanelProps) -> Html {
    let see_method = {
        let go_to_slide = props.go_to_slide.clone();
        Callback::from(move |_: MouseEvent| go_to_slide.emit(slide_index("authority")))
    };

    html! {
        <section class={classes!("slide", "mission-slide", props.is_active.then_some("active"))}>
            <div class="slide-inner mission-split">
                <div class="mission-statement">
                    <span class="eyebrow">{"Our Mission"}</span>
                    <h2>
                        {"Amplifying brands that "}
                        <span class="brand-accent">{"actually matter"}</span>{"."}
                    </h2>
                    <p>
                        {"We ensure the most valuable solutions also have the most \
                          powerful voice in the market."}
                    </p>
                </div>
                <div class="mission-card">
                    <div class="mission-pulse"></div>
                    <h3>{"Ready to build "}<br/>{"your authority?"}</h3>
                    <a
                        class="cta-primary mission-cta"
                        href={config::BOOKING_URL}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Let's Talk \u{2192}"}
                    </a>
                    <button class="cta-outline" onclick={see_method}>
                        {"See Our Method"}
                    </button>
                    <div class="mission-footnote">
                        <span>{"Real Strategy"}</span>
                        <span class="footnote-dot"></span>
                        <span>{"Real Focus"}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
