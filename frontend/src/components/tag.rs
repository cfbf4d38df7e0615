use yew::prelude::*;
use shared::{SiteConfig, Tag};

#[derive(Properties, PartialEq)]
pub struct TagChipProps {
    pub tag: Tag,
}

#[function_component(TagChip)]
pub fn tag_chip(props: &TagChipProps) -> Html {
    let config = use_context::<SiteConfig>().unwrap_or_default();

    html! {
        <a class="tag" href={config.tag_path(&props.tag.slug)}>{props.tag.name.clone()}</a>
    }
}

#[derive(Properties, PartialEq)]
pub struct TagListProps {
    pub tags: Vec<Tag>,
}

#[function_component(TagList)]
pub fn tag_list(props: &TagListProps) -> Html {
    html! {
        <div class="tags">
            {for props.tags.iter().map(|tag| html! {
                <span key={tag.id.clone()} style="margin-right: 8px;">
                    <TagChip tag={tag.clone()} />
                </span>
            })}
        </div>
    }
}
