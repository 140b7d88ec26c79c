//! The fixed set of sections the console can show.

use std::fmt;

/// One entry of the navigation bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    Guests,
    Rooms,
    Bookings,
    Payments,
    Maintenance,
}

impl Section {
    /// In navigation-bar order.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Guests,
        Self::Rooms,
        Self::Bookings,
        Self::Payments,
        Self::Maintenance,
    ];

    /// Resolve a selection; anything unrecognised shows the dashboard.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|section| section.slug().eq_ignore_ascii_case(raw))
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Guests => "guests",
            Self::Rooms => "rooms",
            Self::Bookings => "bookings",
            Self::Payments => "payments",
            Self::Maintenance => "maintenance",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Guests => "Guests",
            Self::Rooms => "Rooms",
            Self::Bookings => "Bookings",
            Self::Payments => "Payments",
            Self::Maintenance => "Maintenance",
        }
    }

    /// URL path rendering this section.
    #[must_use]
    pub fn path(self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            other => format!("/{}", other.slug()),
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
