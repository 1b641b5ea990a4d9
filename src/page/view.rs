use std::fmt;

use crate::models::ActivityCatalog;

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub participants: Vec<String>,
    pub participants_count: usize,
    pub max_participants: u32,
    pub spots_left: i64,
    pub is_full: bool,
}

impl ActivityCardView {
    pub fn capacity_label(&self) -> String {
        format!(
            "{}/{} students enrolled",
            self.participants_count, self.max_participants
        )
    }

    pub fn status_label(&self) -> String {
        if self.is_full {
            "FULL".to_string()
        } else {
            format!("{} spots left", self.spots_left)
        }
    }

    pub fn status_class(&self) -> &'static str {
        if self.is_full {
            "status-full"
        } else {
            "status-available"
        }
    }
}

impl fmt::Display for ActivityCardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f, "  Schedule: {}", self.schedule)?;
        writeln!(f, "  Capacity: {}", self.capacity_label())?;
        writeln!(f, "  Status: {}", self.status_label())?;
        if self.participants.is_empty() {
            writeln!(f, "  Participants: Be the first to sign up!")
        } else {
            writeln!(f, "  Participants:")?;
            for email in &self.participants {
                writeln!(f, "    - {}", email)?;
            }
            Ok(())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOptionView {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOptionView {
    pub fn placeholder() -> Self {
        SelectOptionView {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
            disabled: false,
        }
    }
}

pub fn build_cards(catalog: &ActivityCatalog) -> Vec<ActivityCardView> {
    catalog
        .iter()
        .map(|(name, details)| ActivityCardView {
            name: name.to_string(),
            description: details.description.clone(),
            schedule: details.schedule.clone(),
            participants: details.participants.clone(),
            participants_count: details.participants.len(),
            max_participants: details.max_participants,
            spots_left: details.spots_left(),
            is_full: details.is_full(),
        })
        .collect()
}

/// Placeholder first, then one option per activity. Full activities stay
/// listed but cannot be picked.
pub fn build_select_options(catalog: &ActivityCatalog) -> Vec<SelectOptionView> {
    let mut options = Vec::with_capacity(catalog.len() + 1);
    options.push(SelectOptionView::placeholder());
    for (name, details) in catalog.iter() {
        let is_full = details.is_full();
        options.push(SelectOptionView {
            value: name.to_string(),
            label: if is_full {
                format!("{} (FULL)", name)
            } else {
                name.to_string()
            },
            disabled: is_full,
        });
    }
    options
}
