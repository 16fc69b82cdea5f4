use yew::prelude::*;

use crate::PanelProps;

const CLIENTS: [&str; 4] = ["Velocity", "DirectFlow", "ApexBrands", "Core_Growth"];

#[function_component(Impact)]
pub fn impact(props: &PanelProps) -> Html {
    html! {
        <section class={classes!("slide", "impact-slide", props.is_active.then_some("active"))}>
            <div class="slide-inner impact-center">
                <h2>{"Driven by "}<br/><span class="faded">{"real results"}</span></h2>
                <p class="impact-quote">
                    {"\u{201c}We transform marketing budgets into undeniable market leadership.\u{201d}"}
                </p>
                <p class="impact-detail">
                    {"When the strategy is precise, growth stops being an objective and \
                      starts being an inevitable outcome."}
                </p>
                <div class="impact-logos">
                    { CLIENTS.iter().map(|c| html! { <span key={*c} class="impact-logo">{*c}</span> }).collect::<Html>() }
                </div>
            </div>
        </section>
    }
}
