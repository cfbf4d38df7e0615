use yew::prelude::*;
use shared::SiteConfig;

#[function_component(BackLink)]
pub fn back_link() -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    html! {
        <a class="back-link" href={config.blog_path.clone()}>{"← Back to blog"}</a>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaLinkProps {
    pub text: String,
}

#[function_component(CtaLink)]
pub fn cta_link(props: &CtaLinkProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    html! {
        <a class="cta-link" href={config.cta_href.clone()}>{props.text.clone()}</a>
    }
}
