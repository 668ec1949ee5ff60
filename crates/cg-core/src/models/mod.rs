pub mod analytics;
pub mod appointment;
pub mod intake_request;
pub mod manual_score;
pub mod message;
pub mod referral;
pub mod role;
pub mod session;
pub mod status_update;
pub mod student;
pub mod user;
