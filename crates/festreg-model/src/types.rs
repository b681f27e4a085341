//! Read-only entity views over the registration database.

/// Number of participant-name slots on a participation record.
pub const NAME_SLOTS: usize = 6;

/// A registrable activity, owned by the external database.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub event_type: String,
    pub department: String,
    pub fees: f64,
}

/// One registration record tied to an event.
///
/// Carries up to [`NAME_SLOTS`] optional participant names; unset slots are
/// empty strings once they leave the database layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Participation {
    pub receipt_no: String,
    pub event: String,
    pub names: [String; NAME_SLOTS],
    pub mobile: String,
    pub year: String,
}

impl Participation {
    /// The first (primary) participant name.
    pub fn primary_name(&self) -> &str {
        &self.names[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_name_is_first_slot() {
        let mut participation = Participation::default();
        participation.names[0] = "Alice".to_string();
        assert_eq!(participation.primary_name(), "Alice");
    }

    #[test]
    fn default_participation_has_empty_slots() {
        let participation = Participation::default();
        assert_eq!(participation.names.len(), NAME_SLOTS);
        assert!(participation.names.iter().all(String::is_empty));
    }
}
