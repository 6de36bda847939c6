use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::models::{Post, Review};
use crate::view::View;

/// Accent color shared by the banner, section titles, and the active tab.
pub(crate) const ACCENT: Color = Color::Magenta;

/// Compose the small meta line above a review heading. The canonical form is
/// `{date} | {read_time} min read`; blank fields drop out of the line instead
/// of leaving dangling separators.
pub(crate) fn review_meta_line(review: &Review) -> String {
    let date = review.date.trim();
    let read_time = review.read_time.trim();
    match (date.is_empty(), read_time.is_empty()) {
        (false, false) => format!("{} | {} min read", review.date, review.read_time),
        (true, false) => format!("{} min read", review.read_time),
        (false, true) => review.date.clone(),
        (true, true) => String::new(),
    }
}

/// Compose the card heading, `{title} ★ {rating}/5` when a rating exists and
/// the bare title otherwise. The rating text is whatever the author wrote.
pub(crate) fn review_heading(review: &Review) -> String {
    if review.rating.trim().is_empty() {
        review.title.clone()
    } else {
        format!("{} ★ {}/5", review.title, review.rating)
    }
}

/// Build the textual payload for one review card. The selected card gets a
/// marker on its heading; field slots that are blank simply do not produce a
/// line.
pub(crate) fn review_card_lines(review: &Review, selected: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let meta = review_meta_line(review);
    if !meta.is_empty() {
        lines.push(Line::from(Span::styled(
            meta,
            Style::default().fg(Color::Gray),
        )));
    }

    let heading = if selected {
        format!("▶ {}", review_heading(review))
    } else {
        review_heading(review)
    };
    lines.push(Line::from(Span::styled(
        heading,
        Style::default().add_modifier(Modifier::BOLD),
    )));

    if !review.review.trim().is_empty() {
        lines.push(Line::from(review.review.clone()));
    }

    if !review.link.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            "Read More →".to_string(),
            Style::default().fg(Color::Cyan),
        )));
    }

    lines
}

/// Build the textual payload for one music post card.
pub(crate) fn post_card_lines(post: &Post, selected: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let caption = if selected {
        format!("▶ ♫ {}", post.display_caption())
    } else {
        format!("♫ {}", post.display_caption())
    };
    lines.push(Line::from(Span::styled(
        caption,
        Style::default().add_modifier(Modifier::BOLD),
    )));

    if !post.url.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            post.url.trim().to_string(),
            Style::default().fg(Color::Cyan),
        )));
    }

    lines
}

/// Render the tab row with the active view highlighted.
pub(crate) fn tab_row(active: View) -> Line<'static> {
    let active_style = Style::default()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD);
    let inactive_style = Style::default().fg(Color::Gray);

    let mut spans = Vec::new();
    for (index, view) in View::ALL.into_iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if view == active {
            active_style
        } else {
            inactive_style
        };
        spans.push(Span::styled(format!(" {} ", view.label()), style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review_with(date: &str, read_time: &str, rating: &str) -> Review {
        Review {
            title: "Title".to_string(),
            date: date.to_string(),
            read_time: read_time.to_string(),
            rating: rating.to_string(),
            ..Review::default()
        }
    }

    #[test]
    fn test_meta_line_full_form() {
        let review = review_with("2024-03-01", "7", "4");
        assert_eq!(review_meta_line(&review), "2024-03-01 | 7 min read");
    }

    #[test]
    fn test_meta_line_drops_blank_parts() {
        assert_eq!(review_meta_line(&review_with("", "7", "")), "7 min read");
        assert_eq!(review_meta_line(&review_with("2024", "", "")), "2024");
        assert_eq!(review_meta_line(&review_with("", "", "")), "");
    }

    #[test]
    fn test_heading_keeps_rating_text_verbatim() {
        assert_eq!(review_heading(&review_with("", "", "4.5")), "Title ★ 4.5/5");
        assert_eq!(review_heading(&review_with("", "", "N/A")), "Title ★ N/A/5");
        assert_eq!(review_heading(&review_with("", "", "")), "Title");
    }

    #[test]
    fn test_card_lines_omit_blank_slots() {
        let full = Review {
            title: "Title".to_string(),
            review: "Body.".to_string(),
            rating: "4".to_string(),
            date: "2024".to_string(),
            read_time: "3".to_string(),
            link: "https://example.com".to_string(),
        };
        // Meta, heading, body, link.
        assert_eq!(review_card_lines(&full, false).len(), 4);

        let bare = Review {
            title: "Title".to_string(),
            ..Review::default()
        };
        // Only the heading survives; no dangling separators or empty lines.
        assert_eq!(review_card_lines(&bare, false).len(), 1);
    }
}
