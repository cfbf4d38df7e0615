use yew::prelude::*;
use shared::rich_text::{AssetKind, EmbeddedAsset, EmbeddedEntry, Hyperlink, Mark, Node, TextRun};
use shared::Document;
use super::code_snippet::CodeSnippetEditor;
use super::error_banner::ErrorBanner;

#[derive(Properties, PartialEq)]
pub struct RichTextProps {
    pub document: Document,
}

#[function_component(RichText)]
pub fn rich_text(props: &RichTextProps) -> Html {
    html! {
        <>
            {for props.document.content.iter().map(render_node)}
        </>
    }
}

fn render_children(children: &[Node]) -> Html {
    html! { {for children.iter().map(render_node)} }
}

fn render_node(node: &Node) -> Html {
    match node {
        Node::Document(children) => render_children(children),
        Node::Paragraph(children) => html! { <p>{render_children(children)}</p> },
        Node::Heading { level, children } => html! {
            <@{format!("h{}", level)}>{render_children(children)}</@>
        },
        Node::Text(run) => render_text(run),
        Node::UnorderedList(children) => html! { <ul>{render_children(children)}</ul> },
        Node::OrderedList(children) => html! { <ol>{render_children(children)}</ol> },
        Node::ListItem(children) => html! { <li>{render_children(children)}</li> },
        Node::Quote(children) => html! { <blockquote>{render_children(children)}</blockquote> },
        Node::Rule => html! { <hr /> },
        Node::Hyperlink(link) => render_hyperlink(link),
        Node::EmbeddedAsset(asset) => render_asset(asset),
        Node::EmbeddedEntry(EmbeddedEntry::CodeSnippet(snippet)) => html! {
            <CodeSnippetEditor snippet={snippet.clone()} />
        },
        Node::EmbeddedEntry(EmbeddedEntry::Other { content_type }) => html! {
            <ErrorBanner message={format!("{} embedded asset", content_type)} />
        },
        Node::Unsupported { node_type } => html! {
            <ErrorBanner message={format!("{} is not supported", node_type)} />
        },
        Node::Invalid { node_type, reason } => html! {
            <ErrorBanner message={format!("{}: {}", node_type, reason)} />
        },
    }
}

fn render_text(run: &TextRun) -> Html {
    let mut rendered = html! { {run.value.clone()} };
    for mark in &run.marks {
        rendered = match mark {
            Mark::Bold => html! { <b>{rendered}</b> },
            Mark::Italic => html! { <i>{rendered}</i> },
            Mark::Underline => html! { <u>{rendered}</u> },
            Mark::Code => html! {
                <code class="blog-code" style="display: block; white-space: pre-wrap;">{rendered}</code>
            },
        };
    }
    rendered
}

fn render_hyperlink(link: &Hyperlink) -> Html {
    match link {
        Hyperlink::Video { provider, uri, title } => html! {
            <span class="iframe-container" style="padding-bottom: 56.25%; position: relative; display: block; width: 100%;">
                <iframe
                    title={title.clone()}
                    src={uri.clone()}
                    allow={provider.allow()}
                    frameborder="0"
                    allowfullscreen=true
                    style="height: 100%; width: 100%; position: absolute; top: 0; left: 0;"
                ></iframe>
            </span>
        },
        Hyperlink::Link { uri, children } => html! {
            <a href={uri.clone()}>{render_children(children)}</a>
        },
    }
}

fn render_asset(asset: &EmbeddedAsset) -> Html {
    match asset.kind() {
        AssetKind::Image => html! {
            <img
                style="max-width: 100%; height: auto;"
                title={asset.title.clone()}
                alt={asset.description.clone()}
                src={asset.url.clone()}
            />
        },
        AssetKind::Application => html! {
            <a title={asset.description.clone()} href={asset.url.clone()}>
                {asset.link_text().to_string()}
            </a>
        },
        AssetKind::Other => html! {
            <ErrorBanner message={format!("{} embedded asset", asset.content_type)} />
        },
    }
}
