//! In-memory backend and record builders shared by the unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use pgdesk_domain::booking::Booking;
use pgdesk_domain::error::BackendError;
use pgdesk_domain::guest::Guest;
use pgdesk_domain::id::RequestId;
use pgdesk_domain::maintenance::{MaintenanceRequest, StatusUpdate};
use pgdesk_domain::payment::Payment;
use pgdesk_domain::room::Room;
use serde::Serialize;
use serde_json::{Value, json};

use crate::fetch::MountGuard;
use crate::ports::{Backend, Resource};

const CREATED_AT: &str = "2024-06-01T09:30:00";

fn id_field(path: &str) -> &'static str {
    match path {
        "/api/guests" => "guest_id",
        "/api/rooms" => "room_id",
        "/api/bookings" => "booking_id",
        "/api/payments" => "payment_id",
        _ => "request_id",
    }
}

#[derive(Default)]
struct Inner {
    collections: HashMap<&'static str, Vec<Value>>,
    list_failures: HashMap<&'static str, u16>,
    create_failures: HashMap<&'static str, (u16, Option<String>)>,
    unmount_on_list: Option<MountGuard>,
    created: Vec<(&'static str, Value)>,
    patches: Vec<(RequestId, StatusUpdate)>,
    lists: usize,
}

/// A [`Backend`] keeping JSON rows per collection path.
#[derive(Default)]
pub struct FakeBackend {
    inner: Mutex<Inner>,
}

impl FakeBackend {
    pub fn insert<R: Resource + Serialize>(&self, record: &R) {
        let value = serde_json::to_value(record).unwrap();
        self.inner
            .lock()
            .unwrap()
            .collections
            .entry(R::PATH)
            .or_default()
            .push(value);
    }

    pub fn fail_path(&self, path: &'static str, status: u16) {
        self.inner.lock().unwrap().list_failures.insert(path, status);
    }

    pub fn fail_create(&self, path: &'static str, status: u16, detail: Option<&str>) {
        self.inner
            .lock()
            .unwrap()
            .create_failures
            .insert(path, (status, detail.map(str::to_string)));
    }

    /// Unmount `guard` while the next list request is in flight.
    pub fn unmount_during_list(&self, guard: MountGuard) {
        self.inner.lock().unwrap().unmount_on_list = Some(guard);
    }

    pub fn created(&self) -> Vec<(&'static str, Value)> {
        self.inner.lock().unwrap().created.clone()
    }

    pub fn patches(&self) -> Vec<(RequestId, StatusUpdate)> {
        self.inner.lock().unwrap().patches.clone()
    }

    /// Number of list requests served so far.
    pub fn lists(&self) -> usize {
        self.inner.lock().unwrap().lists
    }

    pub fn count(&self, path: &str) -> usize {
        self.inner
            .lock()
            .unwrap()
            .collections
            .get(path)
            .map_or(0, Vec::len)
    }
}

impl Backend for FakeBackend {
    async fn list<R: Resource>(&self) -> Result<Vec<R>, BackendError> {
        let rows = {
            let mut inner = self.inner.lock().unwrap();
            inner.lists += 1;
            if let Some(guard) = inner.unmount_on_list.take() {
                guard.unmount();
            }
            if let Some(&status) = inner.list_failures.get(R::PATH) {
                return Err(BackendError::Status {
                    status,
                    detail: None,
                });
            }
            inner.collections.get(R::PATH).cloned().unwrap_or_default()
        };
        rows.into_iter()
            .map(|row| serde_json::from_value(row).map_err(|err| BackendError::Decode(err.into())))
            .collect()
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> Result<R, BackendError> {
        let mut inner = self.inner.lock().unwrap();
        if let Some((status, detail)) = inner.create_failures.get(R::PATH).cloned() {
            return Err(BackendError::Status { status, detail });
        }
        let mut row = serde_json::to_value(draft).map_err(|err| BackendError::Decode(err.into()))?;
        let rows = inner.collections.entry(R::PATH).or_default();
        let next_id = rows.len() + 1;
        if let Value::Object(map) = &mut row {
            map.insert(id_field(R::PATH).to_string(), json!(next_id));
            map.insert("created_at".to_string(), json!(CREATED_AT));
        }
        rows.push(row.clone());
        inner.created.push((R::PATH, row.clone()));
        serde_json::from_value(row).map_err(|err| BackendError::Decode(err.into()))
    }

    async fn update_maintenance_status(
        &self,
        id: RequestId,
        update: StatusUpdate,
    ) -> Result<MaintenanceRequest, BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.patches.push((id, update));
        let rows = inner
            .collections
            .entry(MaintenanceRequest::PATH)
            .or_default();
        let row = rows
            .iter_mut()
            .find(|row| row["request_id"] == json!(id.get()))
            .ok_or(BackendError::Status {
                status: 404,
                detail: Some("Maintenance request not found".to_string()),
            })?;
        row["status"] = json!(update.status.as_str());
        if let Some(date) = update.resolved_date {
            row["resolved_date"] = json!(date.to_string());
        }
        serde_json::from_value(row.clone()).map_err(|err| BackendError::Decode(err.into()))
    }
}

pub fn sample_guest(id: i64, name: &str) -> Guest {
    serde_json::from_value(json!({
        "guest_id": id,
        "full_name": name,
        "phone_number": format!("98765{id:05}"),
        "email": null,
        "id_proof_type": "Aadhar",
        "id_proof_number": null,
        "address": null,
        "created_at": CREATED_AT,
    }))
    .unwrap()
}

pub fn sample_room(id: i64, number: &str, status: &str) -> Room {
    serde_json::from_value(json!({
        "room_id": id,
        "room_number": number,
        "room_type": "Single",
        "monthly_rent": "5000.00",
        "occupancy_status": status,
        "created_at": CREATED_AT,
    }))
    .unwrap()
}

pub fn sample_booking(id: i64, guest: i64, room: i64, status: &str) -> Booking {
    serde_json::from_value(json!({
        "booking_id": id,
        "guest_id": guest,
        "room_id": room,
        "check_in_date": "2024-06-01",
        "check_out_date": null,
        "booking_status": status,
        "created_at": CREATED_AT,
    }))
    .unwrap()
}

pub fn sample_payment(id: i64, booking: i64, amount: &str, date: &str) -> Payment {
    serde_json::from_value(json!({
        "payment_id": id,
        "booking_id": booking,
        "amount_paid": amount,
        "payment_date": date,
        "payment_method": "UPI",
        "remarks": null,
        "created_at": CREATED_AT,
    }))
    .unwrap()
}

pub fn sample_request(id: i64, room: i64, guest: Option<i64>, status: &str) -> MaintenanceRequest {
    serde_json::from_value(json!({
        "request_id": id,
        "room_id": room,
        "guest_id": guest,
        "issue_description": "Leaking tap",
        "reported_date": "2024-06-02",
        "status": status,
        "resolved_date": null,
    }))
    .unwrap()
}
