use yew::prelude::*;
use shared::{PricingTier, ProgressInput, ProgressLayout, Theme, TickPlacement};
use crate::services::logging::Logger;

const ACHIEVED_ICON: &str = "/images/progress-marker.svg";
const POTENTIAL_ICON: &str = "/images/progress-potential.svg";

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    /// Fill translation in pixels
    #[prop_or_default]
    pub px: f64,
    /// Number of achieved markers, clamped to [0, 3]
    #[prop_or_default]
    pub tick: i64,
    /// Track width in pixels, 0 before layout
    #[prop_or_default]
    pub full_width: f64,
    /// Receives the tier a marker activates; clicks are ignored without it
    #[prop_or_default]
    pub on_range_click: Option<Callback<u32>>,
    #[prop_or_default]
    pub placement: TickPlacement,
    #[prop_or_else(PricingTier::default_ladder)]
    pub tiers: Vec<PricingTier>,
}

/// Potential markers carry the bare price as alt text; the "$" form is the title
fn marker_alt(price: Option<u32>) -> String {
    price.map(|price| price.to_string()).unwrap_or_default()
}

fn marker_style(theme: &Theme, left: f64) -> String {
    format!(
        "cursor: pointer; width: {size}px; height: {size}px; position: relative; top: -13px; z-index: 1; left: {left}px;",
        size = theme.marker_size,
        left = left,
    )
}

fn label_style(theme: &Theme, left: f64, margin: f64) -> String {
    format!(
        "position: absolute; top: -32px; width: 32px; text-align: center; font-size: 12px; color: {}; left: {}px; margin-left: {}px;",
        theme.text_secondary, left, margin
    )
}

fn end_marker_style(theme: &Theme, right: f64) -> String {
    format!(
        "width: {size}px; height: {size}px; position: absolute; top: -13px; z-index: 1; right: {right}px;",
        size = theme.marker_size,
        right = right,
    )
}

fn fill_style(theme: &Theme, fill_offset: f64) -> String {
    format!(
        "position: relative; width: 100%; height: 100%; left: -100%; background: {}; transition-duration: 200ms; transform: translate3d({}px, 0, 0);",
        theme.green, fill_offset
    )
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let input = ProgressInput::new(props.px, props.tick, props.full_width);
    let layout = ProgressLayout::compute(&input, &props.placement, &props.tiers);

    let click_handler = |tier: u32| {
        let on_range_click = props.on_range_click.clone();
        Callback::from(move |_: MouseEvent| match &on_range_click {
            Some(callback) => callback.emit(tier),
            None => Logger::debug_with_component("progress-bar", &format!("Tier {} clicked without a handler", tier)),
        })
    };

    html! {
        <section class="progress-bar" style="position: relative; top: 15px; z-index: 0;">
            <span class="progress-cap" style={format!("display: block; position: absolute; background: {}; width: 5px; height: 15px; left: 0px; top: -5px;", theme.green)}></span>
            <span class="progress-cap" style="display: block; position: absolute; background: white; width: 5px; height: 15px; left: 5px; top: -5px;"></span>

            <div class="progress-track" style="width: 100%; height: 5px; overflow: hidden; background: transparent;">
                <div class="progress-future" style={format!("position: absolute; width: 75%; height: 5px; top: -5px; right: 0px; border-bottom: 4px dotted {};", theme.track_inactive)}></div>
                <div class="progress-inactive" style={format!("position: absolute; width: 75%; height: 5px; left: 0px; background: {};", theme.track_inactive)}></div>
                <div class="progress-active" style={fill_style(&theme, layout.fill_offset)}></div>
            </div>

            <div class="ticks potential" style="position: relative; width: 100%; height: 0px;">
                {for layout.potential.iter().map(|marker| html! {
                    <span key={marker.tier}>
                        <div class="marker-label" style={label_style(&theme, marker.left, marker.label_margin)}>
                            {marker.label.clone()}
                        </div>
                        <img
                            class="marker"
                            src={POTENTIAL_ICON}
                            alt={marker_alt(marker.price)}
                            title={marker.label.clone()}
                            style={marker_style(&theme, marker.left)}
                            onclick={click_handler(marker.tier)}
                        />
                    </span>
                })}
            </div>

            <div class="ticks achieved" style="position: relative; width: 100%; height: 0px;">
                {for layout.achieved.iter().map(|marker| html! {
                    <img
                        key={marker.tier}
                        class="marker"
                        src={ACHIEVED_ICON}
                        alt="+"
                        style={marker_style(&theme, marker.left)}
                        onclick={click_handler(marker.tier)}
                    />
                })}
                <img class="marker end" src={ACHIEVED_ICON} alt="+" style={end_marker_style(&theme, layout.end_marker_right)} />
            </div>
        </section>
    }
}
