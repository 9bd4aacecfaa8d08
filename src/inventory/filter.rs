use crate::models::card::Card;

/// Display filter over the owned-card list. An empty field matches
/// everything, so the default filter passes every card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardFilter {
    pub element: String,
    pub card_type: String,
    pub species: String,
}

impl CardFilter {
    pub fn matches(&self, card: &Card) -> bool {
        (self.element.is_empty() || card.element == self.element)
            && (self.card_type.is_empty() || card.card_type.as_str() == self.card_type)
            && (self.species.is_empty() || card.species == self.species)
    }

    pub fn is_empty(&self) -> bool {
        self.element.is_empty() && self.card_type.is_empty() && self.species.is_empty()
    }
}

/// Sorted distinct values for the three filter dropdowns, derived from
/// the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub elements: Vec<String>,
    pub card_types: Vec<String>,
    pub species: Vec<String>,
}

pub fn filter_options(cards: &[Card]) -> FilterOptions {
    let mut options = FilterOptions {
        elements: cards.iter().map(|c| c.element.clone()).collect(),
        card_types: cards.iter().map(|c| c.card_type.as_str().to_string()).collect(),
        species: cards.iter().map(|c| c.species.clone()).collect(),
    };
    for list in [
        &mut options.elements,
        &mut options.card_types,
        &mut options.species,
    ] {
        list.sort();
        list.dedup();
    }
    options
}
