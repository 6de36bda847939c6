//! Static site text: the banner, the about panel, and the contact channels.
//! This is configuration, not content. It never comes from the tabular
//! sources, so the renderer can build the About and Contact views even when
//! both content files are missing or broken.

#[derive(Debug, Clone, PartialEq, Eq)]
/// One way to reach the author, shown on the Contact view. `url` is the
/// Enter-to-open target and may use any scheme the system handler knows
/// (`mailto:` included).
pub struct ContactChannel {
    /// Channel name, e.g. "Email".
    pub label: String,
    /// Human-readable address or handle.
    pub value: String,
    /// Link opened when the channel is activated.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Site-wide fixed text. A single value of this struct is threaded through
/// rendering so tests can substitute their own copy without touching global
/// state.
pub struct SiteInfo {
    /// Site name shown in the header banner.
    pub title: String,
    /// One-line subtitle under the site name.
    pub tagline: String,
    /// Greeting heading on the About view.
    pub about_heading: String,
    /// About body, one entry per paragraph.
    pub about_paragraphs: Vec<String>,
    /// Ways to reach the author, in display order.
    pub contact_channels: Vec<ContactChannel>,
}

impl Default for SiteInfo {
    /// The production text for Harshita's blog corner.
    fn default() -> Self {
        Self {
            title: "Harshita's Corner".to_string(),
            tagline: "Follow my journey as a DU student sharing movie reviews and music!"
                .to_string(),
            about_heading: "Hi, I'm Harshita Kesarwani".to_string(),
            about_paragraphs: vec![
                "A Delhi University student passionate about singing and movies. This blog \
                 is my space to share honest movie reviews, musical experiments, and slices \
                 from student life."
                    .to_string(),
                "I aim to connect with people who care about authenticity, storytelling, \
                 and creative expression."
                    .to_string(),
            ],
            contact_channels: vec![
                ContactChannel {
                    label: "Email".to_string(),
                    value: "harshita@example.com".to_string(),
                    url: "mailto:harshita@example.com".to_string(),
                },
                ContactChannel {
                    label: "Instagram".to_string(),
                    value: "@harshita.music".to_string(),
                    url: "https://instagram.com/harshita.music".to_string(),
                },
            ],
        }
    }
}
