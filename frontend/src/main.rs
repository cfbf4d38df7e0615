use yew::prelude::*;
use shared::{Post, SiteConfig, Theme};

mod components;
mod hooks;
mod services;

use components::{ArticleList, BlogPost, PricingPage};
use services::fixtures::bundled_posts;
use services::logging::{init_tracing, Logger};

#[derive(Clone, PartialEq)]
enum View {
    Articles,
    Article(String),
    Pricing,
}

/// View for the article with `slug`, or the slug back when no bundled post has it
fn article_view(posts: &[Post], slug: String) -> Result<View, String> {
    if posts.iter().any(|post| post.slug == slug) {
        Ok(View::Article(slug))
    } else {
        Err(slug)
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_state(SiteConfig::default);
    let theme = use_state(Theme::default);
    let view = use_state(|| View::Articles);

    let posts = use_memo((), |_| match bundled_posts() {
        Ok(posts) => posts,
        Err(e) => {
            Logger::error_with_component("app", &format!("{:#}", e));
            Vec::<Post>::new()
        }
    });

    let show = |target: View| {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(target.clone()))
    };

    let on_select = {
        let view = view.clone();
        let posts = posts.clone();
        Callback::from(move |slug: String| match article_view(&posts, slug) {
            Ok(target) => view.set(target),
            Err(slug) => Logger::warn_with_component("app", &format!("No post with slug {}", slug)),
        })
    };

    let page = match &*view {
        View::Articles => html! { <ArticleList posts={(*posts).clone()} {on_select} /> },
        View::Article(slug) => match posts.iter().find(|post| &post.slug == slug) {
            Some(post) => html! { <BlogPost post={post.clone()} /> },
            None => html! { <p>{"Article not found."}</p> },
        },
        View::Pricing => html! { <PricingPage /> },
    };

    html! {
        <ContextProvider<SiteConfig> context={(*config).clone()}>
            <ContextProvider<Theme> context={(*theme).clone()}>
                <nav class="site-nav">
                    <button onclick={show(View::Articles)}>{"Blog"}</button>
                    <button onclick={show(View::Pricing)}>{"Pricing"}</button>
                </nav>
                <main class="container">
                    {page}
                </main>
            </ContextProvider<Theme>>
        </ContextProvider<SiteConfig>>
    }
}

fn main() {
    init_tracing(tracing::Level::DEBUG);
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_view_for_known_slug() {
        let posts = bundled_posts().unwrap();
        assert!(article_view(&posts, "release-checklist".to_string()) == Ok(View::Article("release-checklist".to_string())));
    }

    #[test]
    fn test_article_view_rejects_unknown_slug() {
        let posts = bundled_posts().unwrap();
        assert!(article_view(&posts, "missing".to_string()) == Err("missing".to_string()));
    }
}
