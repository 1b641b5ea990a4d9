//! The activities signup page: view models, message banner and the
//! controller that drives them against the API.

pub mod controller;
pub mod message;
pub mod view;

pub use controller::{ActivitiesList, Confirm, PageController, SignupForm, SubmitOutcome};
pub use message::{Message, MessageBox, MessageKind, MESSAGE_DISPLAY};
pub use view::{ActivityCardView, SelectOptionView};
