//! RepVision client core.
//!
//! The session and synchronized-state layer of the RepVision mobile
//! client: credential storage, the authenticated request executor, the
//! focus-triggered refetch policy, the optimistic notification feed,
//! and the device push registration handshake. Screens and navigation
//! consume this crate; they are not part of it.

pub mod adapters;
pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod logging;
pub mod media;
pub mod models;
pub mod push;
pub mod sync;
pub mod traits;
