use super::rarity::Rarity;
use serde::{Deserialize, Serialize};

/// One drawn item. Never mutated after the draw that created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub rarity: Rarity,
    pub name: String,
    pub image: String,
    /// Milliseconds since the Unix epoch.
    pub obtained_at: i64,
}
