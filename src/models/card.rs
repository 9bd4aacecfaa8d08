use serde::{Deserialize, Serialize};

/// The three card categories the game defines
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Spirit,
    Beyonder,
    Evocation,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Spirit => "Spirit",
            CardType::Beyonder => "Beyonder",
            CardType::Evocation => "Evocation",
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog card. Seeded at startup and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card code, e.g. "OOF-01". Older data may carry the legacy
    /// "OFF" prefix; codes are normalized at comparison time, never in place.
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub element: String,
    pub species: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Numeric stats. Not every card carries all three.
    pub soul_cost: Option<u32>,
    pub edge: Option<u32>,
    pub shield: Option<u32>,
}

impl Card {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        card_type: CardType,
        element: impl Into<String>,
        species: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            card_type,
            element: element.into(),
            species: species.into(),
            keywords: Vec::new(),
            soul_cost: None,
            edge: None,
            shield: None,
        }
    }
}
