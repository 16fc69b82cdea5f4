use yew::prelude::*;

use crate::PanelProps;

#[function_component(Problem)]
pub fn problem(props: &PanelProps) -> Html {
    html! {
        <section class={classes!("slide", "problem-slide", props.is_active.then_some("active"))}>
            <div class="slide-inner">
                <h2 class="problem-headline">
                    {"Market attention moves "}<br/>
                    <span class="faded-accent">{"faster"}</span>{" than traditional "}<br/>
                    {"outreach"}
                </h2>
                <div class="problem-columns">
                    <p class="problem-lead">
                        {"Today, the winner isn't who has the best product, but who gets \
                          the market to understand their value with clarity."}
                    </p>
                    <p class="problem-detail">
                        {"Most B2B and DTC brands don't fail because of a lack of quality, \
                          but because their message doesn't cut through the noise to reach \
                          the right people."}
                    </p>
                </div>
            </div>
        </section>
    }
}
