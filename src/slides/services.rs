use yew::prelude::*;

use crate::PanelProps;

const SERVICES: [&str; 4] = [
    "Positioning Strategy",
    "B2B & DTC Acquisition Systems",
    "CRM Process Integration",
    "Direct Sales Advising",
];

#[function_component(Services)]
pub fn services(props: &PanelProps) -> Html {
    html! {
        <section class={classes!("slide", "services-slide", props.is_active.then_some("active"))}>
            <div class="slide-inner services-split">
                <div class="services-intro">
                    <h2>{"Every project is "}<span class="accent-serif">{"bespoke"}</span></h2>
                    <p>
                        {"We don't sell generic packages. We build the strategic \
                          infrastructure your brand needs to scale."}
                    </p>
                    <div class="services-slots">
                        <div class="slot-beacon"><span class="slot-dot"></span></div>
                        <p>{"Limited slots: 2 active projects max."}</p>
                    </div>
                </div>
                <div class="services-list">
                    {
                        SERVICES.iter().enumerate().map(|(idx, service)| {
                            html! {
                                <div key={idx} class="service-card">
                                    <span class="service-check">{"\u{2713}"}</span>
                                    <span class="service-name">{*service}</span>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
