//! Record types loaded from the two content files and passed throughout the
//! TUI. These are plain data holders: every field arrives as raw text and
//! leaves as raw text, so presentation layers decide how (and whether) to
//! dress a value up.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// One movie review, mirroring a row of `reviews.csv`. Every field is kept as
/// the text found in the file; a column missing from the header or a blank
/// cell both land here as an empty string thanks to `serde(default)`.
pub struct Review {
    /// Movie title shown as the card heading.
    #[serde(default)]
    pub title: String,
    /// Full review body. Free-form prose, possibly multi-line.
    #[serde(default)]
    pub review: String,
    /// Rating as written by the author. Text rather than a number: values
    /// like "4.5" or "N/A" survive a load/render round trip untouched.
    #[serde(default)]
    pub rating: String,
    /// Publication date as written. No parsing, no reformatting.
    #[serde(default)]
    pub date: String,
    /// Estimated reading time in minutes, again carried as raw text.
    #[serde(default)]
    pub read_time: String,
    /// Outbound link to the full review. Kept as raw text so non-web
    /// references also work; blank means the card simply has no link.
    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// One music post, mirroring a row of `instagram_links.csv`.
pub struct Post {
    /// Short caption displayed on the card.
    #[serde(default)]
    pub caption: String,
    /// Permalink to the post. Doubles as the Enter-to-open target.
    #[serde(default)]
    pub url: String,
}

impl Post {
    /// Caption with a fallback so a row that only carried a URL still gets a
    /// readable card label.
    pub fn display_caption(&self) -> String {
        if self.caption.trim().is_empty() {
            "Untitled post".to_string()
        } else {
            self.caption.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_caption_falls_back_when_blank() {
        let post = Post {
            caption: "   ".to_string(),
            url: "https://example.com/p/1".to_string(),
        };
        assert_eq!(post.display_caption(), "Untitled post");
    }

    #[test]
    fn test_display_caption_uses_caption_verbatim() {
        let post = Post {
            caption: "Cover session #3".to_string(),
            url: String::new(),
        };
        assert_eq!(post.display_caption(), "Cover session #3");
    }
}
