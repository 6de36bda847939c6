//! Pure mapping from (view, loaded records, site text) to an ordered list of
//! display blocks. Nothing in here touches the terminal, the clock, or any
//! other ambient state: the same inputs always produce the same blocks, which
//! is what makes the content pipeline testable without a TUI attached. Blocks
//! carry plain data only; how a block looks is the drawing layer's business.

use crate::models::{Post, Review};
use crate::site::{ContactChannel, SiteInfo};
use crate::view::View;

/// Placeholder copy for an empty review region.
pub const NO_REVIEWS_TEXT: &str = "No movie reviews yet.";
/// Placeholder copy for an empty post region.
pub const NO_POSTS_TEXT: &str = "No music posts yet.";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static panel content for the About and Contact views. Built solely from
/// [`SiteInfo`]; the loaded collections never leak into it.
pub struct InfoPanel {
    /// Panel heading. Empty when the panel has none (Contact).
    pub heading: String,
    /// Body paragraphs in display order.
    pub paragraphs: Vec<String>,
    /// Contact channels in display order. Empty for About.
    pub channels: Vec<ContactChannel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One unit of displayable content. The variants wrap the record types
/// unchanged so every field survives the render step verbatim; a block is the
/// record plus the knowledge of what kind of card it becomes.
pub enum DisplayBlock {
    /// A movie review card.
    Review(Review),
    /// A music post card.
    Post(Post),
    /// Stand-in for an empty content region, carrying its message.
    Placeholder(String),
    /// A static info panel.
    Info(InfoPanel),
}

/// Map the review collection to blocks in source order, or a single
/// placeholder when the collection is empty. Shared by `Home` and the
/// dedicated tab so the two can never drift apart.
pub fn review_blocks(reviews: &[Review]) -> Vec<DisplayBlock> {
    if reviews.is_empty() {
        return vec![DisplayBlock::Placeholder(NO_REVIEWS_TEXT.to_string())];
    }
    reviews
        .iter()
        .cloned()
        .map(DisplayBlock::Review)
        .collect()
}

/// Map the post collection to blocks in source order, or a single placeholder
/// when the collection is empty.
pub fn post_blocks(posts: &[Post]) -> Vec<DisplayBlock> {
    if posts.is_empty() {
        return vec![DisplayBlock::Placeholder(NO_POSTS_TEXT.to_string())];
    }
    posts.iter().cloned().map(DisplayBlock::Post).collect()
}

/// Produce the full ordered block list for a view. `Home` concatenates the
/// review region then the post region; the dedicated tabs use exactly one
/// region's mapping, so their output cannot depend on the other collection.
/// No sorting, filtering, or pagination happens at this layer or below it.
pub fn render(
    view: View,
    reviews: &[Review],
    posts: &[Post],
    site: &SiteInfo,
) -> Vec<DisplayBlock> {
    match view {
        View::Home => {
            let mut blocks = review_blocks(reviews);
            blocks.extend(post_blocks(posts));
            blocks
        }
        View::MovieReviews => review_blocks(reviews),
        View::MusicPosts => post_blocks(posts),
        View::About => vec![DisplayBlock::Info(InfoPanel {
            heading: site.about_heading.clone(),
            paragraphs: site.about_paragraphs.clone(),
            channels: Vec::new(),
        })],
        View::Contact => vec![DisplayBlock::Info(InfoPanel {
            heading: String::new(),
            paragraphs: Vec::new(),
            channels: site.contact_channels.clone(),
        })],
    }
}
