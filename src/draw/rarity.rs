use serde::{Deserialize, Serialize};

/// Rarity tiers in declaration order. This order is the scan order of the
/// weighted draw, so it also decides which tier wins at a weight boundary.
///
/// The serialized form is the tier label written by earlier versions of the
/// save format; the lowercase English names are accepted on input as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[serde(rename = "基础款", alias = "basic")]
    Basic = 0,
    #[serde(rename = "稀有款", alias = "rare")]
    Rare = 1,
    #[serde(rename = "典藏款", alias = "epic")]
    Epic = 2,
    #[serde(rename = "隐藏款", alias = "hidden")]
    Hidden = 3,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [Rarity::Basic, Rarity::Rare, Rarity::Epic, Rarity::Hidden];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Basic => "Basic",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Hidden => "Hidden",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
