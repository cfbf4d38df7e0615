pub mod articles;
pub mod blog_post;
pub mod code_snippet;
pub mod error_banner;
pub mod links;
pub mod pricing_page;
pub mod progress_bar;
pub mod rich_text;
pub mod tag;

pub use articles::ArticleList;
pub use blog_post::BlogPost;
pub use pricing_page::PricingPage;
