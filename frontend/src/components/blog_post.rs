use yew::prelude::*;
use shared::{Post, SiteConfig, Theme};
use super::articles::{ArticlePosted, AuthorCard};
use super::error_banner::ErrorBanner;
use super::links::{BackLink, CtaLink};
use super::rich_text::RichText;
use super::tag::TagList;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct BlogPostProps {
    pub post: Post,
}

/// Full article page: header, rich-text body and author footer
#[function_component(BlogPost)]
pub fn blog_post(props: &BlogPostProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let theme = use_context::<Theme>().unwrap_or_default();
    let post = &props.post;

    let document = use_memo((post.clone(), config.locale.clone()), |(post, locale)| {
        post.document(locale)
    });

    let author = match post.primary_author() {
        Ok(author) => Some(author.clone()),
        Err(e) => {
            Logger::warn_with_component("blog-post", &e.to_string());
            None
        }
    };

    html! {
        <article class="blog-post">
            <BackLink />
            <div class="blog-content" style="margin-top: 32px;">
                {if let Some(url) = post.share_image_url() {
                    html! { <img class="header-image" src={url} alt={post.title.clone()} style="border-radius: 10px; width: 100%;" /> }
                } else {
                    html! {}
                }}

                <div class="blog-header" style="text-align: center;">
                    <h1 style="font-weight: 400; font-size: 40px; margin-bottom: 2px;">{post.title.clone()}</h1>
                    {match &author {
                        Some(author) => html! { <ArticlePosted author={author.clone()} date={post.display_date()} /> },
                        None => html! { <ErrorBanner message={format!("{} has no author", post.slug)} /> },
                    }}
                    <TagList tags={post.tags.clone()} />
                </div>

                <div class="blog-body" style={format!("margin-top: 32px; font-size: 16px; line-height: 24px; color: {};", theme.text_primary)}>
                    <RichText document={(*document).clone()} />
                </div>

                <div class="blog-footer" style="justify-content: space-between; margin-top: 16px;">
                    {if let Some(cta_text) = &post.cta_text {
                        html! {
                            <div style="position: relative; width: fit-content; margin: auto; margin-top: 40px;">
                                <CtaLink text={cta_text.clone()} />
                            </div>
                        }
                    } else {
                        html! {}
                    }}
                    <div style="display: flex; padding-top: 24px;">
                        <div style={format!("border-top: 1px solid {}; padding-top: 16px; margin-right: auto;", theme.light_gray)}>
                            {if let Some(author) = &author {
                                html! { <AuthorCard author={author.clone()} /> }
                            } else {
                                html! {}
                            }}
                        </div>
                        <div style="margin-left: auto; padding-top: 26px;">
                            <BackLink />
                        </div>
                    </div>
                </div>
            </div>
        </article>
    }
}
