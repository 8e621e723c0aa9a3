use crate::navigation::destination::{Destination, DestinationKind};
use crate::navigation::router::{self, RouteError, RouteToken};

/// Back stack of destinations, rooted at [`Destination::Search`].
///
/// Only the host navigation component mutates the stack; screens ask
/// questions about it through [`NavigationStack::current_is`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationStack {
    entries: Vec<Destination>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self {
            entries: vec![Destination::Search],
        }
    }

    /// Rebuild a stack from persisted tokens.
    ///
    /// An empty list yields a fresh stack. A list that does not start at
    /// the search screen gets it inserted as root.
    pub fn restore<T: AsRef<str>>(tokens: &[T]) -> Result<Self, RouteError> {
        let mut entries = tokens
            .iter()
            .map(|t| router::decode(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        if entries.first() != Some(&Destination::Search) {
            entries.insert(0, Destination::Search);
        }
        Ok(Self { entries })
    }

    /// Tokens for every entry, root first.
    pub fn tokens(&self) -> Vec<RouteToken> {
        self.entries.iter().map(router::encode).collect()
    }

    pub fn current(&self) -> &Destination {
        // The root is never popped.
        &self.entries[self.entries.len() - 1]
    }

    pub fn current_is(&self, kinds: &[DestinationKind]) -> bool {
        router::matches(self.current(), kinds)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// Push a destination. Navigating to the current destination again is a no-op.
    pub fn navigate(&mut self, destination: Destination) {
        if self.current() == &destination {
            return;
        }
        tracing::debug!(route = destination.kind().as_str(), "navigate");
        self.entries.push(destination);
    }

    /// Pop the top entry. The root stays in place and `None` is returned.
    pub fn pop(&mut self) -> Option<Destination> {
        if self.entries.len() <= 1 {
            return None;
        }
        self.entries.pop()
    }

    /// Switch to a top-level tab, dropping everything above the root.
    pub fn select_tab(&mut self, tab: BottomTab) {
        self.entries.truncate(1);
        let destination = tab.destination();
        if destination != Destination::Search {
            self.entries.push(destination);
        }
    }

    /// The tab highlighted for the current destination.
    pub fn selected_tab(&self) -> BottomTab {
        BottomTab::all()
            .iter()
            .copied()
            .find(|tab| tab.is_selected(self.current()))
            .unwrap_or(BottomTab::Search)
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level tabs of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BottomTab {
    Search,
    Favourites,
    Settings,
}

impl BottomTab {
    pub fn all() -> &'static [BottomTab] {
        &[Self::Search, Self::Favourites, Self::Settings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Favourites => "Favourites",
            Self::Settings => "Settings",
        }
    }

    pub fn destination(&self) -> Destination {
        match self {
            Self::Search => Destination::Search,
            Self::Favourites => Destination::Favourites,
            Self::Settings => Destination::Settings,
        }
    }

    /// Destination kinds that keep this tab highlighted.
    ///
    /// Browsing results and images stays under the search tab.
    pub fn highlight_kinds(&self) -> &'static [DestinationKind] {
        match self {
            Self::Search => &[
                DestinationKind::Search,
                DestinationKind::Results,
                DestinationKind::ImageView,
            ],
            Self::Favourites => &[DestinationKind::Favourites],
            Self::Settings => &[DestinationKind::Settings],
        }
    }

    pub fn is_selected(&self, current: &Destination) -> bool {
        router::matches(current, self.highlight_kinds())
    }
}
