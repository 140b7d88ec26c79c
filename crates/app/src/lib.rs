//! # pgdesk-app
//!
//! Application layer: screen use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Backend`: list / create / patch against the external REST service
//!   - `Resource`: ties an entity shape to its collection path and draft body
//! - Provide the guarded **remote fetch** capability: concurrent fan-out of
//!   collection reads, all-or-nothing fan-in, and a mount guard that discards
//!   responses arriving after the consumer went away
//! - Implement the generic **screen state machine**
//!   (`Loading → Ready | Error`, `Ready ⇄ FormOpen`) once, and the five
//!   list+create views on top of it
//! - Derive display rows, selector options and aggregate counts
//! - Define the **dashboard** aggregate and the **navigation** sections
//!
//! ## Dependency rule
//! Depends on `pgdesk-domain` only (plus `tokio` macros for joining futures).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod dashboard;
pub mod fetch;
pub mod lookup;
pub mod navigation;
pub mod ports;
pub mod screen;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;
