//! Domain types for the campus guidance client.
//!
//! The backend is inconsistent about envelopes (`students`, `data.students`,
//! `items`, ...) and about number encoding (`"12"` vs `12`). Everything that
//! copes with that lives here, once per DTO, so resource modules and the CLI
//! only ever see canonical types.

pub mod envelope;
pub mod error;
pub mod lenient;
pub mod models;
pub mod token;

#[cfg(test)]
mod tests;

pub use envelope::{
    Decode, ListShape, apply_fallbacks, classify_list, extract_array, extract_object, lookup_path,
};
pub use error::{CoreError, Result as CoreResult};
pub use models::analytics::{AnalyticsSummary, MonthlyCount};
pub use models::appointment::Appointment;
pub use models::intake_request::{IntakeRequest, NewIntakeRequest};
pub use models::manual_score::{ManualScore, NewManualScore};
pub use models::message::{Message, NewMessage, UnreadCount};
pub use models::referral::{NewReferral, Referral};
pub use models::role::{Role, extract_roles, is_staff_role, normalize_role};
pub use models::session::{AuthResponse, Credentials, Registration, Session};
pub use models::status_update::StatusUpdate;
pub use models::student::StudentSummary;
pub use models::user::User;
pub use token::{bearer_header_value, normalize_token};
