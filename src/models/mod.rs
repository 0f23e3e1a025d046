//! Data Models
//!
//! Entities map 1:1 to table rows. `*Create` / `*Update` are the request
//! payloads, carrying their declarative validation rules.

pub mod member;
pub mod workout_session;

pub use member::{Member, MemberCreate, MemberUpdate};
pub use workout_session::{WorkoutSession, WorkoutSessionCreate, WorkoutSessionUpdate};
