//! Authentication: the session pair, its durable storage, and the
//! sign-in/sign-out flow.

pub mod flow;
pub mod session;

pub use flow::AuthFlow;
pub use session::{Session, SessionFile, UserProfile};
