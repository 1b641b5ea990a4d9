use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Catalog entry as it travels over the wire, keyed by activity name in
/// [`ActivityCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// `max_participants - participants.len()`. Negative when the server
    /// reports more participants than seats.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    /// Exactly at capacity. Over-capacity data is shown as is.
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}

/// Activity name -> details, in catalog order.
///
/// Encodes as a plain JSON object. Decoding keeps the key order of the
/// document, so cards render in the order the server defined them.
pub type ActivityCatalog = IndexMap<String, Activity>;
