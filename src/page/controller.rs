use tracing::error;

use crate::client::{ActivitiesClient, ClientError};
use crate::page::message::{Message, MessageBox, MessageKind};
use crate::page::view::{build_cards, build_select_options, ActivityCardView, SelectOptionView};
use crate::services::email::validate_email;

pub const LOAD_ERROR: &str = "Failed to load activities. Please try again later.";
pub const INVALID_EMAIL: &str = "Please enter a valid @mergington.edu email address";
pub const EMAIL_FIELD_HINT: &str = "Must be a @mergington.edu email address";
pub const NO_ACTIVITY_SELECTED: &str = "Please select an activity";
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// Blocking yes/no prompt shown before a signup is sent.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

pub fn confirm_prompt(activity: &str) -> String {
    format!("Are you sure you want to sign up for {}?", activity)
}

/// Feedback for the email field when it loses focus. Empty input gets none.
pub fn email_feedback(input: &str) -> Option<&'static str> {
    let email = input.trim();
    if !email.is_empty() && !validate_email(email) {
        Some(EMAIL_FIELD_HINT)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivitiesList {
    Loading,
    Loaded(Vec<ActivityCardView>),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    InvalidEmail,
    NoActivity,
    Declined,
    SignedUp,
    Rejected,
    Failed,
}

/// State and behaviour of the signup page: the activity cards, the activity
/// select list, the signup form and the message banner.
pub struct PageController<C> {
    client: ActivitiesClient,
    confirm: C,
    list: ActivitiesList,
    select_options: Vec<SelectOptionView>,
    form: SignupForm,
    message: MessageBox,
}

impl<C: Confirm> PageController<C> {
    pub fn new(client: ActivitiesClient, confirm: C) -> Self {
        Self {
            client,
            confirm,
            list: ActivitiesList::Loading,
            select_options: vec![SelectOptionView::placeholder()],
            form: SignupForm::default(),
            message: MessageBox::new(),
        }
    }

    /// Reloads the catalog. A failure replaces the cards with [`LOAD_ERROR`]
    /// and leaves the select list as it was.
    pub async fn fetch_activities(&mut self) {
        match self.client.fetch_activities().await {
            Ok(catalog) => {
                self.list = ActivitiesList::Loaded(build_cards(&catalog));
                self.select_options = build_select_options(&catalog);
            }
            Err(e) => {
                error!(error = %e, "Error fetching activities");
                self.list = ActivitiesList::Failed(LOAD_ERROR.to_string());
            }
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.email = email.into();
    }

    pub fn select_activity(&mut self, activity: impl Into<String>) {
        self.form.activity = activity.into();
    }

    pub fn email_feedback(&self) -> Option<&'static str> {
        email_feedback(&self.form.email)
    }

    /// Runs the signup flow for the current form values.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let email = self.form.email.trim().to_string();
        let activity = self.form.activity.clone();

        if !validate_email(&email) {
            self.message.show(INVALID_EMAIL, MessageKind::Error);
            return SubmitOutcome::InvalidEmail;
        }

        if activity.is_empty() {
            self.message.show(NO_ACTIVITY_SELECTED, MessageKind::Error);
            return SubmitOutcome::NoActivity;
        }

        if !self.confirm.confirm(&confirm_prompt(&activity)) {
            return SubmitOutcome::Declined;
        }

        match self.client.signup(&activity, &email.to_lowercase()).await {
            Ok(message) => {
                self.message.show(message, MessageKind::Success);
                self.form = SignupForm::default();
                self.fetch_activities().await;
                SubmitOutcome::SignedUp
            }
            Err(ClientError::Rejected { detail, .. }) => {
                let text = detail.unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_string());
                self.message.show(text, MessageKind::Error);
                SubmitOutcome::Rejected
            }
            Err(e) => {
                error!(error = %e, activity = %activity, "Error signing up");
                self.message.show(SIGNUP_FAILED, MessageKind::Error);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn activities(&self) -> &ActivitiesList {
        &self.list
    }

    pub fn select_options(&self) -> &[SelectOptionView] {
        &self.select_options
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn message(&self) -> Option<Message> {
        self.message.visible()
    }

    pub fn message_box(&self) -> &MessageBox {
        &self.message
    }
}
