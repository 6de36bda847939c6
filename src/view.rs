//! The closed set of views the site can show and the logic that maps free-form
//! tokens onto it. Navigation state is exactly one value of this enum; there is
//! no history and no hidden routing table, so reasoning about "where can the
//! user be" starts and ends here.

/// High-level navigation states. The set is closed: retired tabs from earlier
/// revisions do not linger as dead variants, they simply stop resolving and
/// fall back to `Home`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing view combining both content regions.
    #[default]
    Home,
    /// All movie reviews, full width.
    MovieReviews,
    /// All music posts, full width.
    MusicPosts,
    /// Static introduction panel.
    About,
    /// Static contact panel.
    Contact,
}

impl View {
    /// Every view in tab order. Drives the tab row, number-key jumps, and
    /// cyclic navigation, so the ordering here is the one users see.
    pub const ALL: [View; 5] = [
        View::Home,
        View::MovieReviews,
        View::MusicPosts,
        View::About,
        View::Contact,
    ];

    /// Canonical label shown on the tab row.
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::MovieReviews => "Movie Reviews",
            View::MusicPosts => "Music Posts",
            View::About => "About",
            View::Contact => "Contact",
        }
    }

    /// Map an arbitrary token (CLI argument, stored label, anything external)
    /// onto a view. Matching tolerates case, surrounding whitespace, and
    /// `-`/`_` standing in for spaces so shell-friendly spellings like
    /// `movie-reviews` work. Anything unrecognized, the empty string included,
    /// clamps to `Home`; resolution never fails.
    pub fn resolve(token: &str) -> View {
        let wanted = normalize(token);
        View::ALL
            .into_iter()
            .find(|view| normalize(view.label()) == wanted)
            .unwrap_or(View::Home)
    }

    /// Position within [`View::ALL`]. Used for tab highlighting and wrap math.
    pub fn index(self) -> usize {
        View::ALL
            .iter()
            .position(|view| *view == self)
            .unwrap_or(0)
    }

    /// The tab to the right, wrapping from the last back to the first.
    pub fn next(self) -> View {
        View::ALL[(self.index() + 1) % View::ALL.len()]
    }

    /// The tab to the left, wrapping from the first to the last.
    pub fn prev(self) -> View {
        View::ALL[(self.index() + View::ALL.len() - 1) % View::ALL.len()]
    }
}

/// Lowercase the token, treat `-`/`_` as spaces, and collapse whitespace runs
/// so `" Movie  reviews "` and `"movie-reviews"` compare equal to the label.
fn normalize(token: &str) -> String {
    token
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
