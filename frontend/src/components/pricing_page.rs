use yew::prelude::*;
use shared::progress::fill_offset_for;
use shared::{PricingPlan, Theme, TickPlacement};
use super::progress_bar::ProgressBar;
use crate::hooks::use_element_width::use_element_width;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct PricingPageProps {
    #[prop_or_else(PricingPlan::default_ladder)]
    pub plans: Vec<PricingPlan>,
    #[prop_or_default]
    pub placement: TickPlacement,
}

/// Plan cards with a progress track showing how far up the ladder the selection is
#[function_component(PricingPage)]
pub fn pricing_page(props: &PricingPageProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let track_ref = use_node_ref();
    let full_width = use_element_width(&track_ref);
    let selected_tier = use_state(|| 1u32);

    let max_tier = props.plans.iter().map(|plan| plan.tier).max().unwrap_or(1);
    let selected_plan = props.plans.iter().find(|plan| plan.tier == *selected_tier);
    let tick = selected_plan.map(PricingPlan::achieved_ticks).unwrap_or(0);

    let on_range_click = {
        let selected_tier = selected_tier.clone();
        Callback::from(move |tier: u32| {
            let tier = tier.min(max_tier);
            Logger::info_with_component("pricing", &format!("Selected tier {}", tier));
            selected_tier.set(tier);
        })
    };

    html! {
        <section class="pricing">
            <div class="pricing-track" ref={track_ref} style="width: 100%; padding-top: 40px;">
                <ProgressBar
                    px={fill_offset_for(tick, full_width)}
                    tick={tick as i64}
                    full_width={full_width}
                    on_range_click={on_range_click.clone()}
                    placement={props.placement}
                />
            </div>
            <div class="pricing-plans" style="display: flex; gap: 16px; margin-top: 48px;">
                {for props.plans.iter().map(|plan| {
                    let is_selected = plan.tier == *selected_tier;
                    let onclick = {
                        let on_range_click = on_range_click.clone();
                        let tier = plan.tier;
                        Callback::from(move |_: MouseEvent| on_range_click.emit(tier))
                    };
                    let border = if is_selected { theme.green.clone() } else { theme.light_gray.clone() };

                    html! {
                        <div key={plan.tier} class={classes!("pricing-plan", is_selected.then_some("selected"))}
                             style={format!("flex: 1; border: 2px solid {}; border-radius: 10px; padding: 16px;", border)}>
                            <h3>{plan.name.clone()}</h3>
                            <p class="price">{format!("${}", plan.price)}</p>
                            <ul>
                                {for plan.features.iter().map(|feature| html! { <li>{feature.clone()}</li> })}
                            </ul>
                            <button {onclick} disabled={is_selected}>
                                {if is_selected { "Current plan" } else { "Choose" }}
                            </button>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}
