use serde::{Deserialize, Serialize};
use serde_json::Value;

// ── GraphQL response envelope ────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    pub data: Option<PokemonData>,
    /// Raw entries, so one odd entry cannot hide the others.
    pub errors: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct PokemonData {
    /// Kept raw so that a wrong shape can be told apart from a missing entry.
    #[serde(default)]
    pub pokemon: Option<Value>,
}

/// What the `data.pokemon` field held.
#[derive(Debug)]
pub enum PokemonLookup {
    Found(Creature),
    /// Absent, or explicitly null.
    Missing,
    /// Present but not shaped like a creature.
    Malformed(String),
}

impl GraphQLResponse {
    /// Keep only the `errors` array of a failure body, whatever else it holds.
    pub fn from_failure_body(mut body: Value) -> Self {
        let errors = match body.get_mut("errors").map(Value::take) {
            Some(Value::Array(entries)) => Some(entries),
            _ => None,
        };
        Self { data: None, errors }
    }

    pub fn into_lookup(self) -> PokemonLookup {
        match self.data.and_then(|d| d.pokemon) {
            None => PokemonLookup::Missing,
            Some(raw) => match serde_json::from_value(raw) {
                Ok(creature) => PokemonLookup::Found(creature),
                Err(e) => PokemonLookup::Malformed(e.to_string()),
            },
        }
    }

    /// Error messages joined by newlines, in server order.
    pub fn error_message(&self) -> String {
        let messages: Vec<&str> = self
            .errors
            .iter()
            .flatten()
            .filter_map(|e| e.get("message").and_then(Value::as_str))
            .collect();
        if messages.is_empty() {
            "unknown".to_string()
        } else {
            messages.join("\n")
        }
    }
}

// ── Creature records ─────────────────────────────────────────────

/// A creature exactly as the GraphQL service describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: String,
    pub number: String,
    pub name: String,
    pub image: String,
    pub attacks: Attacks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attacks {
    pub special: Vec<Attack>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub damage: u32,
}

/// A creature plus the local time it was received.
///
/// `fetched_at` is informational only. It differs between otherwise
/// identical responses and must not be used as an identity or cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    #[serde(flatten)]
    pub creature: Creature,
    #[serde(rename = "fetchedAt")]
    pub fetched_at: String,
}
