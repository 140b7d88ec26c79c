//! # pgdesk-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **server-side-rendered management console**: one page per
//!   navigation section, rendered with askama templates and working with
//!   **zero JavaScript**
//! - Map form posts onto the application screens and answer with
//!   POST/redirect/GET on success, or the same page with an alert and the
//!   form still filled in on failure
//! - Expose `/health` for liveness checks
//!
//! ## Dependency rule
//! Depends on `pgdesk-app` (for the backend port and the screens) and
//! `pgdesk-domain` (for form and row types). Never leaks axum types into the
//! domain.

pub mod pages;
pub mod router;
pub mod state;
