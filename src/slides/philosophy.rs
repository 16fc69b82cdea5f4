use yew::prelude::*;

use crate::PanelProps;

#[function_component(Philosophy)]
pub fn philosophy(props: &PanelProps) -> Html {
    html! {
        <section class={classes!("slide", "philosophy-slide", props.is_active.then_some("active"))}>
            <div class="philosophy-card">
                <div class="philosophy-glow"></div>
                <div class="philosophy-copy">
                    <h2>{"Acquisition is not "}<br/>{"a numbers game"}</h2>
                    <p class="philosophy-lead">
                        {"At "}<span class="brand-accent">{"Acelera"}</span>
                        {", we don't believe in chasing empty clicks, impressions, or vanity metrics."}
                    </p>
                    <p class="philosophy-detail">
                        {"We believe in strategy, precision, and authority as the foundation \
                          for building acquisition systems that generate real opportunities, \
                          not just noise."}
                    </p>
                </div>
            </div>
        </section>
    }
}
