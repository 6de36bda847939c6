use std::cmp::min;

use anyhow::Result;
use crossterm::event::KeyCode;
use open::that as open_link;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::models::{Post, Review};
use crate::render::{post_blocks, render, review_blocks, DisplayBlock, InfoPanel};
use crate::site::SiteInfo;
use crate::store::ContentStore;
use crate::view::View;

use super::helpers::{post_card_lines, review_card_lines, tab_row, ACCENT};

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;
/// Header space for the site banner: title, tagline, tab row, separator.
const HEADER_HEIGHT: u16 = 4;
/// Height allocation per review card in list-style views.
const REVIEW_CARD_HEIGHT: u16 = 7;
/// Height allocation per post card in list-style views.
const POST_CARD_HEIGHT: u16 = 4;
/// How far PageUp/PageDown jump the selection.
const PAGE_JUMP: isize = 5;

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

impl StatusKind {
    fn style(&self) -> Style {
        match self {
            StatusKind::Info => Style::default().fg(Color::Green),
            StatusKind::Error => Style::default().fg(Color::Red),
        }
    }
}

/// Central application state shared across the TUI. The content store is
/// loaded once before the app starts and never mutates afterwards, so every
/// draw works from the same records; the only moving parts are the active
/// view, the selection, and the footer status.
pub struct App {
    store: ContentStore,
    site: SiteInfo,
    view: View,
    selected: usize,
    status: Option<StatusMessage>,
}

impl App {
    /// Wrap the loaded content and start on `view`. Any advisory notes the
    /// store collected while loading surface once in the footer, so degraded
    /// sources are visible without being fatal.
    pub fn new(store: ContentStore, site: SiteInfo, view: View) -> Self {
        let status = if store.notes().is_empty() {
            None
        } else {
            Some(StatusMessage {
                text: store.notes().join(" "),
                kind: StatusKind::Info,
            })
        };

        Self {
            store,
            site,
            view,
            selected: 0,
            status,
        }
    }

    /// The currently active view.
    pub fn view(&self) -> View {
        self.view
    }

    /// The current selection index within the active view's openable items.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Process one key press. Returns `Ok(true)` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Tab | KeyCode::Right => self.switch_view(self.view.next()),
            KeyCode::BackTab | KeyCode::Left => self.switch_view(self.view.prev()),
            KeyCode::Char(c @ '1'..='5') => {
                let index = c as usize - '1' as usize;
                self.switch_view(View::ALL[index]);
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-PAGE_JUMP),
            KeyCode::PageDown => self.move_selection(PAGE_JUMP),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            KeyCode::Enter => self.open_selected(),
            _ => {}
        }
        Ok(false)
    }

    /// Activate a view. Selection is per view, so it resets on a real switch;
    /// a stale status message from the previous view is cleared with it.
    fn switch_view(&mut self, view: View) {
        if self.view != view {
            self.clear_status();
            self.selected = 0;
        }
        self.view = view;
    }

    /// Number of openable items on the active view. `Home` chains the review
    /// cards and the post cards into one selection sequence; the static About
    /// view has nothing to select.
    fn selection_len(&self) -> usize {
        match self.view {
            View::Home => self.store.reviews().len() + self.store.posts().len(),
            View::MovieReviews => self.store.reviews().len(),
            View::MusicPosts => self.store.posts().len(),
            View::About => 0,
            View::Contact => self.site.contact_channels.len(),
        }
    }

    fn move_selection(&mut self, offset: isize) {
        let len = self.selection_len();
        if len == 0 {
            return;
        }
        let len = len as isize;
        let mut new = self.selected as isize + offset;
        if new < 0 {
            new = 0;
        }
        if new >= len {
            new = len - 1;
        }
        self.selected = new as usize;
    }

    fn select_first(&mut self) {
        if self.selection_len() > 0 {
            self.selected = 0;
        }
    }

    fn select_last(&mut self) {
        let len = self.selection_len();
        if len > 0 {
            self.selected = len - 1;
        }
    }

    /// Open the selected item's link in the system handler and report the
    /// outcome in the footer. Items without a link get a friendly status, not
    /// an error popup; the content itself is already on screen.
    fn open_selected(&mut self) {
        if let Some((label, link)) = self.selected_target() {
            if link.is_empty() {
                self.set_status(format!("{label} does not have a link."), StatusKind::Error);
            } else if let Err(err) = open_link(&link) {
                self.set_status(format!("Failed to open link: {err}"), StatusKind::Error);
            } else {
                self.set_status(format!("Opened {label}."), StatusKind::Info);
            }
        } else {
            self.set_status("Nothing to open on this view.", StatusKind::Error);
        }
    }

    /// The selected item's display label and trimmed link target, if the
    /// active view has openable items at all.
    fn selected_target(&self) -> Option<(String, String)> {
        if self.selection_len() == 0 {
            return None;
        }
        match self.view {
            View::Home => {
                let reviews = self.store.reviews();
                if self.selected < reviews.len() {
                    Some(review_target(&reviews[self.selected]))
                } else {
                    self.store
                        .posts()
                        .get(self.selected - reviews.len())
                        .map(post_target)
                }
            }
            View::MovieReviews => self.store.reviews().get(self.selected).map(review_target),
            View::MusicPosts => self.store.posts().get(self.selected).map(post_target),
            View::About => None,
            View::Contact => self
                .site
                .contact_channels
                .get(self.selected)
                .map(|channel| (channel.value.clone(), channel.url.trim().to_string())),
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let footer_height = FOOTER_HEIGHT.min(area.height);

        let (content_area, footer_area) = if area.height > footer_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(footer_height)])
                .split(area);
            (chunks[0], chunks[1])
        } else {
            (area, area)
        };

        let header_height = HEADER_HEIGHT.min(content_area.height);
        let (header_area, body_area) = if content_area.height > header_height {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(header_height), Constraint::Min(0)])
                .split(content_area);
            (chunks[0], chunks[1])
        } else {
            (content_area, content_area)
        };

        self.draw_header(frame, header_area);

        match self.view {
            View::Home => self.draw_home(frame, body_area),
            View::MovieReviews => self.draw_reviews_tab(frame, body_area),
            View::MusicPosts => self.draw_posts_tab(frame, body_area),
            View::About | View::Contact => self.draw_info_tab(frame, body_area),
        }

        if area.height >= footer_height {
            self.draw_footer(frame, footer_area);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::BOTTOM);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let lines = vec![
            Line::from(Span::styled(
                self.site.title.clone(),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.site.tagline.clone(),
                Style::default().fg(Color::Gray),
            )),
            tab_row(self.view),
        ];

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }

    /// The landing view: review cards on the left at roughly twice the width
    /// of the post cards on the right, matching the original two-column page.
    /// One selection sequence runs down the left column and continues into
    /// the right one.
    fn draw_home(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
            .split(area);

        let review_region = review_blocks(self.store.reviews());
        let post_region = post_blocks(self.store.posts());

        let review_count = self.store.reviews().len();
        let (left_selected, right_selected) = if self.selection_len() == 0 {
            (None, None)
        } else if self.selected < review_count {
            (Some(self.selected), None)
        } else {
            (None, Some(self.selected - review_count))
        };

        self.draw_block_column(
            frame,
            columns[0],
            "Latest Movie Reviews",
            &review_region,
            left_selected,
        );
        self.draw_block_column(frame, columns[1], "Music Posts", &post_region, right_selected);
    }

    fn draw_reviews_tab(&self, frame: &mut Frame, area: Rect) {
        let blocks = render(
            View::MovieReviews,
            self.store.reviews(),
            self.store.posts(),
            &self.site,
        );
        let selected = (self.selection_len() > 0).then_some(self.selected);
        self.draw_block_column(frame, area, "Movie Reviews", &blocks, selected);
    }

    fn draw_posts_tab(&self, frame: &mut Frame, area: Rect) {
        let blocks = render(
            View::MusicPosts,
            self.store.reviews(),
            self.store.posts(),
            &self.site,
        );
        let selected = (self.selection_len() > 0).then_some(self.selected);
        self.draw_block_column(frame, area, "Music Posts", &blocks, selected);
    }

    fn draw_info_tab(&self, frame: &mut Frame, area: Rect) {
        let blocks = render(
            self.view,
            self.store.reviews(),
            self.store.posts(),
            &self.site,
        );
        let title = match self.view {
            View::Contact => "Contact",
            _ => "About Me",
        };
        if let Some(DisplayBlock::Info(panel)) = blocks.first() {
            self.draw_info_panel(frame, area, title, panel);
        }
    }

    /// A section title above a vertical run of content blocks. A region whose
    /// only block is the placeholder renders as a centered message instead of
    /// a card list.
    fn draw_block_column(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        blocks: &[DisplayBlock],
        selected: Option<usize>,
    ) {
        if area.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let heading = Paragraph::new(Span::styled(
            title.to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(heading, chunks[0]);

        if let [DisplayBlock::Placeholder(text)] = blocks {
            let message = Paragraph::new(text.clone())
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(message, chunks[1]);
            return;
        }

        self.render_cards(frame, chunks[1], blocks, selected);
    }

    /// Render a window of cards around the selection. Only whole cards are
    /// drawn: the window starts so the selected card is visible and never
    /// scrolls past the end of the list.
    fn render_cards(
        &self,
        frame: &mut Frame,
        area: Rect,
        blocks: &[DisplayBlock],
        selected: Option<usize>,
    ) {
        if blocks.is_empty() || area.height == 0 {
            return;
        }

        let card_height = match blocks.first() {
            Some(DisplayBlock::Post(_)) => POST_CARD_HEIGHT,
            _ => REVIEW_CARD_HEIGHT,
        };

        let capacity = ((area.height as usize) / card_height as usize).max(1);
        let len = blocks.len();
        let anchor = selected.unwrap_or(0);
        let mut start = if anchor >= capacity {
            anchor + 1 - capacity
        } else {
            0
        };
        if start + capacity > len {
            start = len.saturating_sub(capacity);
        }
        let end = min(start + capacity, len);
        let visible_len = end.saturating_sub(start);
        if visible_len == 0 {
            return;
        }

        let constraints: Vec<Constraint> = (0..visible_len)
            .map(|_| Constraint::Length(card_height))
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (idx, chunk) in rows.iter().enumerate() {
            if chunk.height == 0 {
                continue;
            }

            let block_index = start + idx;
            if block_index >= len {
                break;
            }

            let is_selected = selected == Some(block_index);
            let mut card = Block::default().borders(Borders::ALL);
            let mut paragraph_style = Style::default();
            if is_selected {
                card = card.style(Style::default().fg(Color::Yellow));
                paragraph_style = Style::default().fg(Color::Yellow);
            }

            let lines = match &blocks[block_index] {
                DisplayBlock::Review(review) => review_card_lines(review, is_selected),
                DisplayBlock::Post(post) => post_card_lines(post, is_selected),
                DisplayBlock::Placeholder(text) => vec![Line::from(text.clone())],
                DisplayBlock::Info(panel) => vec![Line::from(panel.heading.clone())],
            };

            let paragraph = Paragraph::new(lines)
                .block(card)
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Left)
                .style(paragraph_style);

            frame.render_widget(paragraph, *chunk);
        }
    }

    fn draw_info_panel(&self, frame: &mut Frame, area: Rect, title: &str, panel: &InfoPanel) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ACCENT))
            .title(title.to_string());

        let mut lines = Vec::new();
        if !panel.heading.is_empty() {
            lines.push(Line::from(Span::styled(
                panel.heading.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
        }

        for paragraph in &panel.paragraphs {
            lines.push(Line::from(paragraph.clone()));
            lines.push(Line::from(""));
        }

        for (index, channel) in panel.channels.iter().enumerate() {
            let is_selected = self.view == View::Contact && index == self.selected;
            let marker = if is_selected { "▶ " } else { "" };
            lines.push(Line::from(vec![
                Span::raw(marker.to_string()),
                Span::styled(
                    format!("{}: ", channel.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(channel.value.clone()),
            ]));
            lines.push(Line::from(Span::styled(
                format!("   {}", channel.url),
                Style::default().fg(Color::Cyan),
            )));
            lines.push(Line::from(""));
        }

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
        frame.render_widget(paragraph, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::TOP);
        frame.render_widget(block.clone(), area);
        let inner = block.inner(area);

        let status_line = if let Some(status) = &self.status {
            Line::from(vec![Span::styled(status.text.clone(), status.kind.style())])
        } else {
            Line::from("")
        };

        let instructions = self.footer_instructions();

        let paragraph = Paragraph::new(vec![status_line, instructions]).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
    }

    fn footer_instructions(&self) -> Line<'static> {
        let key_style = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);
        match self.view {
            View::About => Line::from(vec![
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Tab   "),
                Span::styled("[1-5]", key_style),
                Span::raw(" Jump   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            View::Contact => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open Link   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Tab   "),
                Span::styled("[1-5]", key_style),
                Span::raw(" Jump   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
            _ => Line::from(vec![
                Span::styled("[↑↓]", key_style),
                Span::raw(" Navigate   "),
                Span::styled("[PgUp/PgDn]", key_style),
                Span::raw(" Page   "),
                Span::styled("[Enter]", key_style),
                Span::raw(" Open Link   "),
                Span::styled("[Tab]", key_style),
                Span::raw(" Switch Tab   "),
                Span::styled("[1-5]", key_style),
                Span::raw(" Jump   "),
                Span::styled("[q]", key_style),
                Span::raw(" Quit"),
            ]),
        }
    }

    fn set_status<S: Into<String>>(&mut self, text: S, kind: StatusKind) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
        });
    }

    fn clear_status(&mut self) {
        self.status = None;
    }

    #[cfg(test)]
    fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|status| status.text.as_str())
    }
}

/// Label and trimmed link for a review card's open action.
fn review_target(review: &Review) -> (String, String) {
    let label = if review.title.trim().is_empty() {
        "This review".to_string()
    } else {
        review.title.clone()
    };
    (label, review.link.trim().to_string())
}

/// Label and trimmed link for a post card's open action.
fn post_target(post: &Post) -> (String, String) {
    (post.display_caption(), post.url.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    use crate::store::ContentPaths;

    fn review(title: &str) -> Review {
        Review {
            title: title.to_string(),
            ..Review::default()
        }
    }

    fn post(caption: &str) -> Post {
        Post {
            caption: caption.to_string(),
            url: String::new(),
        }
    }

    fn app_with(reviews: usize, posts: usize) -> App {
        let reviews = (0..reviews).map(|i| review(&format!("r{i}"))).collect();
        let posts = (0..posts).map(|i| post(&format!("p{i}"))).collect();
        App::new(
            ContentStore::from_parts(reviews, posts),
            SiteInfo::default(),
            View::Home,
        )
    }

    #[test]
    fn test_q_and_esc_request_exit() {
        let mut app = app_with(0, 0);
        assert!(app.handle_key(KeyCode::Char('q')).unwrap());
        assert!(app.handle_key(KeyCode::Esc).unwrap());
    }

    #[test]
    fn test_tab_cycles_through_all_views_and_wraps() {
        let mut app = app_with(0, 0);
        let mut seen = Vec::new();
        for _ in 0..View::ALL.len() {
            app.handle_key(KeyCode::Tab).unwrap();
            seen.push(app.view());
        }
        assert_eq!(
            seen,
            vec![
                View::MovieReviews,
                View::MusicPosts,
                View::About,
                View::Contact,
                View::Home,
            ]
        );

        app.handle_key(KeyCode::BackTab).unwrap();
        assert_eq!(app.view(), View::Contact);
    }

    #[test]
    fn test_number_keys_jump_straight_to_a_tab() {
        let mut app = app_with(0, 0);
        app.handle_key(KeyCode::Char('4')).unwrap();
        assert_eq!(app.view(), View::About);
        app.handle_key(KeyCode::Char('1')).unwrap();
        assert_eq!(app.view(), View::Home);
    }

    #[test]
    fn test_selection_clamps_and_resets_on_switch() {
        let mut app = app_with(3, 2);
        for _ in 0..10 {
            app.handle_key(KeyCode::Down).unwrap();
        }
        // Home chains 3 reviews + 2 posts into one sequence of 5.
        assert_eq!(app.selected(), 4);

        app.handle_key(KeyCode::Char('2')).unwrap();
        assert_eq!(app.selected(), 0);
        app.handle_key(KeyCode::End).unwrap();
        assert_eq!(app.selected(), 2);
        app.handle_key(KeyCode::Up).unwrap();
        app.handle_key(KeyCode::Up).unwrap();
        app.handle_key(KeyCode::Up).unwrap();
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_selection_does_not_move_on_static_view() {
        let mut app = app_with(2, 2);
        app.handle_key(KeyCode::Char('4')).unwrap();
        app.handle_key(KeyCode::Down).unwrap();
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_unknown_keys_change_nothing() {
        let mut app = app_with(1, 1);
        let before = app.view();
        assert!(!app.handle_key(KeyCode::Char('x')).unwrap());
        assert_eq!(app.view(), before);
        assert_eq!(app.selected(), 0);
    }

    #[test]
    fn test_load_notes_surface_once_as_footer_status() {
        let dir = TempDir::new().unwrap();
        let store = ContentStore::load(&ContentPaths::in_dir(dir.path()));
        let mut app = App::new(store, SiteInfo::default(), View::Home);

        let text = app.status_text().expect("startup status missing");
        assert!(text.contains("reviews.csv"));
        assert!(text.contains("instagram_links.csv"));

        // Navigating away clears the advisory like any other status.
        app.handle_key(KeyCode::Tab).unwrap();
        assert_eq!(app.status_text(), None);
    }

    #[test]
    fn test_contact_channels_are_selectable() {
        let mut app = app_with(0, 0);
        app.handle_key(KeyCode::Char('5')).unwrap();
        app.handle_key(KeyCode::Down).unwrap();
        assert_eq!(app.selected(), 1);
        app.handle_key(KeyCode::Down).unwrap();
        assert_eq!(app.selected(), 1);
    }
}
