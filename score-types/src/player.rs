use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;
use uuid::Uuid;

pub type PlayerId = Uuid;

/// One entry in a player's turn history: points added, or the "X" marker
/// recorded for a zero-value turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEntry {
    Points(u32),
    Mark,
}

impl TurnEntry {
    pub fn points(&self) -> Option<u32> {
        match self {
            TurnEntry::Points(points) => Some(*points),
            TurnEntry::Mark => None,
        }
    }
}

impl fmt::Display for TurnEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnEntry::Points(points) => write!(f, "{}", points),
            TurnEntry::Mark => f.write_str("X"),
        }
    }
}

// Persisted exactly as the UI renders it: a bare number, or the literal
// string "X".
impl Serialize for TurnEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TurnEntry::Points(points) => serializer.serialize_u32(*points),
            TurnEntry::Mark => serializer.serialize_str("X"),
        }
    }
}

impl<'de> Deserialize<'de> for TurnEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TurnEntryVisitor;

        impl Visitor<'_> for TurnEntryVisitor {
            type Value = TurnEntry;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a point total or the marker \"X\"")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<TurnEntry, E> {
                u32::try_from(value)
                    .map(TurnEntry::Points)
                    .map_err(|_| E::custom(format!("point total out of range: {}", value)))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<TurnEntry, E> {
                u32::try_from(value)
                    .map(TurnEntry::Points)
                    .map_err(|_| E::custom(format!("point total out of range: {}", value)))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<TurnEntry, E> {
                if value == "X" {
                    Ok(TurnEntry::Mark)
                } else {
                    Err(E::custom(format!("unknown turn marker: {:?}", value)))
                }
            }
        }

        deserializer.deserialize_any(TurnEntryVisitor)
    }
}

/// A participant in the active session. Owned by the session; archived games
/// hold immutable copies.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    #[ts(type = "Array<number | \"X\">")]
    pub history: Vec<TurnEntry>,
    pub color: String,
}

impl Player {
    /// History line as shown under each player card, e.g. "5 - X - 12".
    pub fn history_label(&self) -> String {
        self.history
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_entry_wire_shape() {
        let history = vec![TurnEntry::Points(5), TurnEntry::Mark, TurnEntry::Points(12)];
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"[5,"X",12]"#);

        let back: Vec<TurnEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }

    #[test]
    fn test_turn_entry_rejects_unknown_marker() {
        assert!(serde_json::from_str::<TurnEntry>(r#""Y""#).is_err());
        assert!(serde_json::from_str::<TurnEntry>("-3").is_err());
    }

    #[test]
    fn test_history_label() {
        let player = Player {
            id: Uuid::new_v4(),
            name: "Ana".to_string(),
            score: 17,
            history: vec![TurnEntry::Points(5), TurnEntry::Mark, TurnEntry::Points(12)],
            color: "blue".to_string(),
        };
        assert_eq!(player.history_label(), "5 - X - 12");
    }
}
