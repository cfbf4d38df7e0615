use yew::prelude::*;
use shared::Theme;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
}

/// Visible marker for content that could not be rendered
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    html! {
        <span class="content-error" style={theme.error_banner_style()}>
            {format!(" {} ", props.message)}
        </span>
    }
}
