//! # pgdesk-adapter-backend-reqwest
//!
//! Driven adapter implementing the `Backend` port over HTTP with
//! [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - `GET` and `POST` JSON against each resource collection
//! - `PATCH /api/maintenance/{id}` with the new status as query parameters
//! - Map transport failures, non-2xx answers (including the `detail` field of
//!   the error body) and undecodable bodies into `BackendError`
//!
//! ## Dependency rule
//! Depends on `pgdesk-app` (for the port traits) and `pgdesk-domain`.

mod client;
mod response;

pub use client::ReqwestBackend;
