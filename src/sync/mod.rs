//! Screen-facing state synchronization.
//!
//! Two policies live here: the focus-triggered refetch every
//! data-bearing screen applies ([`FocusSync`]), and the optimistic
//! mark-read with full-resync reconciliation of the unread notification
//! list ([`NotificationFeed`]).

pub mod focus;
pub mod notifications;

pub use focus::{FocusSync, ViewState};
pub use notifications::{AckOutcome, NotificationFeed};
