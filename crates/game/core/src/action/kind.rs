//! Action identifier enumeration - every activity the player can trigger.

use super::error::DispatchError;

/// Player-triggered activities.
///
/// The snake_case name is the identifier external callers send. Parsing is
/// exact and case-sensitive; anything else is an unrecognized action.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum ActionId {
    /// Have a meal.
    Eat,
    /// Hit the books: smarter, but less happy.
    Study,
    /// Have some fun at the expense of health.
    Happi,
    /// Get some rest.
    Sleep,
}

impl ActionId {
    /// Parses an externally supplied identifier.
    ///
    /// Unknown strings map to [`DispatchError::UnrecognizedAction`] carrying
    /// the offending value.
    pub fn parse(raw: &str) -> Result<Self, DispatchError> {
        raw.parse()
            .map_err(|_| DispatchError::UnrecognizedAction(raw.to_owned()))
    }

    /// Default key binding in the frontends.
    pub const fn hotkey(self) -> char {
        match self {
            Self::Eat => 'e',
            Self::Study => 's',
            Self::Happi => 'h',
            Self::Sleep => 'z',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_every_known_identifier() {
        for action in ActionId::iter() {
            assert_eq!(ActionId::parse(action.as_ref()), Ok(action));
        }
        assert_eq!(ActionId::parse("happi"), Ok(ActionId::Happi));
    }

    #[test]
    fn rejects_unknown_and_miscased_identifiers() {
        for raw in ["dance", "", "Eat", " eat", "happiness"] {
            assert_eq!(
                ActionId::parse(raw),
                Err(DispatchError::UnrecognizedAction(raw.to_owned()))
            );
        }
    }

    #[test]
    fn hotkeys_are_distinct() {
        let mut keys: Vec<_> = ActionId::iter().map(ActionId::hotkey).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 4);
    }
}
