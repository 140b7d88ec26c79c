//! Property-wide summary shown on the landing page.

use pgdesk_domain::booking::Booking;
use pgdesk_domain::error::BackendError;
use pgdesk_domain::guest::Guest;
use pgdesk_domain::room::{self, OccupancyCounts, Room};

use crate::fetch::{self, FetchState, MountGuard, Remote, describe_load_failure};
use crate::ports::Backend;

/// Headline counts derived from guests, rooms and bookings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_guests: usize,
    pub total_rooms: usize,
    pub available_rooms: usize,
    pub occupied_rooms: usize,
    pub active_bookings: usize,
    pub total_bookings: usize,
}

impl DashboardStats {
    pub fn from_collections(guests: &[Guest], rooms: &[Room], bookings: &[Booking]) -> Self {
        let counts = OccupancyCounts::tally(rooms);
        Self {
            total_guests: guests.len(),
            total_rooms: counts.total,
            available_rooms: counts.available,
            occupied_rooms: counts.occupied,
            active_bookings: bookings.iter().filter(|b| b.is_active()).count(),
            total_bookings: bookings.len(),
        }
    }

    /// Occupied share of all rooms: `75.0%`, or `0%` with no rooms.
    pub fn occupancy_rate(&self) -> String {
        room::occupancy_rate(self.occupied_rooms, self.total_rooms)
    }
}

/// The dashboard's remote state.
#[derive(Debug, Default)]
pub struct Dashboard {
    remote: Remote<DashboardStats>,
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<DashboardStats> {
        self.remote.state()
    }

    pub fn mount_guard(&self) -> MountGuard {
        self.remote.guard()
    }

    /// Fetch guests, rooms and bookings together and derive the stats.
    #[tracing::instrument(skip_all)]
    pub async fn load<B: Backend>(&mut self, backend: &B) {
        let request = async {
            let (guests, rooms, bookings) =
                fetch::join3::<B, Guest, Room, Booking>(backend).await?;
            Ok::<_, BackendError>(DashboardStats::from_collections(&guests, &rooms, &bookings))
        };
        self.remote.run(request, describe_load_failure).await;
    }
}
