pub mod activities;
pub mod activity_participants;
pub mod api;
pub mod catalog;

pub use activities::ActivitiesRow;
pub use activity_participants::ActivityParticipantsRow;
pub use api::{CancelSignupQuery, ErrorResponse, MessageResponse, SignupRequest};
pub use catalog::{Activity, ActivityCatalog};
