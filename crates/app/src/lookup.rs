//! Id-indexed collections for resolving cross-entity references.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use pgdesk_domain::booking::Booking;
use pgdesk_domain::guest::Guest;
use pgdesk_domain::id::{BookingId, GuestId, PaymentId, RequestId, RoomId};
use pgdesk_domain::maintenance::MaintenanceRequest;
use pgdesk_domain::payment::Payment;
use pgdesk_domain::room::Room;

/// A record carrying its own backend identifier.
pub trait Keyed {
    type Key: Copy + Eq + Hash + Debug;

    fn key(&self) -> Self::Key;
}

impl Keyed for Guest {
    type Key = GuestId;

    fn key(&self) -> GuestId {
        self.guest_id
    }
}

impl Keyed for Room {
    type Key = RoomId;

    fn key(&self) -> RoomId {
        self.room_id
    }
}

impl Keyed for Booking {
    type Key = BookingId;

    fn key(&self) -> BookingId {
        self.booking_id
    }
}

impl Keyed for Payment {
    type Key = PaymentId;

    fn key(&self) -> PaymentId {
        self.payment_id
    }
}

impl Keyed for MaintenanceRequest {
    type Key = RequestId;

    fn key(&self) -> RequestId {
        self.request_id
    }
}

/// Records in backend order plus an index by id.
///
/// When the backend returns duplicate ids the first occurrence wins lookups.
#[derive(Debug, Clone)]
pub struct Collection<T: Keyed> {
    items: Vec<T>,
    index: HashMap<T::Key, usize>,
}

impl<T: Keyed> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> From<Vec<T>> for Collection<T> {
    fn from(items: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(items.len());
        for (pos, item) in items.iter().enumerate() {
            index.entry(item.key()).or_insert(pos);
        }
        Self { items, index }
    }
}

impl<T: Keyed> Collection<T> {
    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.index.get(&key).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, key: T::Key) -> bool {
        self.index.contains_key(&key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
