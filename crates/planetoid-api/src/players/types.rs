use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A player as returned by the players service.
///
/// The service lists players as bare name strings and echoes stored players
/// as objects. Both shapes land here; object fields other than `name` are
/// kept untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPlayer")]
pub struct PlayerRecord {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Numeric id assigned by the service, when it sent one.
    pub fn id(&self) -> Option<u64> {
        self.extra.get("id").and_then(Value::as_u64)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlayer {
    Name(String),
    Record {
        name: String,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl From<RawPlayer> for PlayerRecord {
    fn from(raw: RawPlayer) -> Self {
        match raw {
            RawPlayer::Name(name) => Self::new(name),
            RawPlayer::Record { name, extra } => Self { name, extra },
        }
    }
}

/// Body of a store request.
#[derive(Debug, Serialize)]
pub(crate) struct NewPlayer<'a> {
    pub name: &'a str,
}
