use anyhow::Context;
use shared::Post;

const BUNDLED_POSTS: &str = include_str!("../../fixtures/posts.json");

/// Posts bundled with the app for rendering without a content source
pub fn bundled_posts() -> anyhow::Result<Vec<Post>> {
    let posts: Vec<Post> = serde_json::from_str(BUNDLED_POSTS).context("bundled posts are malformed")?;
    Ok(posts)
}
