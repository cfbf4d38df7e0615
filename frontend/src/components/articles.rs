use yew::prelude::*;
use shared::{Author, ImageRef, Post, SiteConfig, Theme};
use super::tag::TagList;
use crate::services::logging::Logger;

const DEFAULT_AVATAR: &str = "/images/avatar@2x.png";

#[derive(Properties, PartialEq)]
pub struct ArticlePostedProps {
    pub author: Author,
    pub date: String,
}

/// "Posted by <author> on <date>"
#[function_component(ArticlePosted)]
pub fn article_posted(props: &ArticlePostedProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let theme = use_context::<Theme>().unwrap_or_default();
    let strong_style = format!("color: {};", theme.text_primary);

    html! {
        <div class="posted" style="padding: 8px 0; font-size: 14px;">
            {"Posted by "}
            <strong style={strong_style.clone()}>
                <a href={config.author_path(&props.author.slug)} style={strong_style.clone()}>
                    {props.author.name.clone()}
                </a>
            </strong>
            {" on "}
            <strong style={strong_style}>{props.date.clone()}</strong>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthorCardProps {
    pub author: Author,
}

#[function_component(AuthorCard)]
pub fn author_card(props: &AuthorCardProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let avatar = props
        .author
        .avatar
        .as_ref()
        .map(ImageRef::absolute_url)
        .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

    html! {
        <div class="author-card" style="display: flex;">
            <img
                class="author-avatar"
                src={avatar}
                alt={props.author.name.clone()}
                style="border-radius: 9999px; height: 60px; width: 60px; margin-right: 16px;"
            />
            <p>
                {"Author"}
                <br />
                <strong>
                    <a href={config.author_path(&props.author.slug)}>{props.author.name.clone()}</a>
                </strong>
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleCardProps {
    pub post: Post,
    /// Called with the post slug when the title is clicked
    #[prop_or_default]
    pub on_select: Option<Callback<String>>,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let theme = use_context::<Theme>().unwrap_or_default();
    let post = &props.post;

    let on_title_click = {
        let on_select = props.on_select.clone();
        let slug = post.slug.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(on_select) = &on_select {
                e.prevent_default();
                on_select.emit(slug.clone());
            }
        })
    };

    let posted = match post.primary_author() {
        Ok(author) => html! { <ArticlePosted author={author.clone()} date={post.display_date()} /> },
        Err(e) => {
            Logger::warn_with_component("article-card", &e.to_string());
            html! {}
        }
    };

    html! {
        <div class="article-card" style="width: 100%; display: flex; margin: 32px 0;">
            {if let Some(image) = &post.header_image {
                html! {
                    <img
                        class="article-image"
                        src={image.absolute_url()}
                        alt={post.title.clone()}
                        style="border-radius: 10px; min-width: 220px; margin-right: 16px;"
                    />
                }
            } else {
                html! {}
            }}
            <div class="article-preview" style="padding: 0 16px;">
                <a class="article-header-link" href={config.post_path(&post.slug)} onclick={on_title_click}>
                    <h4 style={format!("font-size: 22px; font-weight: 400; margin: 0; color: {};", theme.text_primary)}>
                        {post.title.clone()}
                    </h4>
                </a>
                {posted}
                <p class="excerpt" style={format!("font-size: 14px; margin: 0 0 10px 0; color: {};", theme.text_primary)}>
                    {post.excerpt.clone()}
                </p>
                <div class="article-footer" style="display: flex; justify-content: space-between; margin-top: 16px;">
                    <TagList tags={post.tags.clone()} />
                    <span class="reading-time">{format!("{} min read", post.reading_minutes(&config.locale))}</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleListProps {
    pub posts: Vec<Post>,
    #[prop_or_default]
    pub on_select: Option<Callback<String>>,
}

#[function_component(ArticleList)]
pub fn article_list(props: &ArticleListProps) -> Html {
    if props.posts.is_empty() {
        return html! { <p class="article-list-empty">{"No articles yet."}</p> };
    }

    html! {
        <div class="article-list">
            {for props.posts.iter().map(|post| html! {
                <ArticleCard key={post.slug.clone()} post={post.clone()} on_select={props.on_select.clone()} />
            })}
        </div>
    }
}
