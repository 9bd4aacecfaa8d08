use std::collections::{HashMap, HashSet};

use crate::inventory::codes::{normalize_code, owned_codes};
use crate::inventory::filter::CardFilter;
use crate::models::card::{Card, CardType};
use crate::models::user::InventoryEntry;

/// One displayable owned copy: the inventory entry joined with its
/// catalog card. Two copies of the same card become two of these,
/// each keeping its own rarity.
#[derive(Clone, Debug, PartialEq)]
pub struct OwnedCard {
    pub entry_id: u64,
    pub rarity: String,
    pub card: Card,
}

/// Counts over a displayed card list, broken down by card type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollectionStats {
    pub total: usize,
    pub spirits: usize,
    pub beyonders: usize,
    pub evocations: usize,
}

impl CollectionStats {
    pub fn tally(cards: &[OwnedCard]) -> Self {
        let mut stats = Self::default();
        for owned in cards {
            stats.total += 1;
            match owned.card.card_type {
                CardType::Spirit => stats.spirits += 1,
                CardType::Beyonder => stats.beyonders += 1,
                CardType::Evocation => stats.evocations += 1,
            }
        }
        stats
    }
}

/// An inventory reconciled against the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct Reconciliation {
    /// Owned copies in inventory order, restricted to catalog members
    /// that pass the display filter
    pub cards: Vec<OwnedCard>,
    /// Collection progress, unaffected by the display filter
    pub completion_percent: u8,
    /// Counts over `cards`
    pub stats: CollectionStats,
}

/// Share of the catalog the inventory covers, as a rounded percentage.
///
/// Both sides are compared as distinct normalized codes: duplicate
/// copies count once, and entries naming codes outside the catalog
/// count for nothing. An empty catalog is 0, never a division error.
pub fn completion_percent(catalog: &[Card], entries: &[InventoryEntry]) -> u8 {
    let catalog_codes: HashSet<String> = catalog
        .iter()
        .map(|card| normalize_code(&card.code))
        .collect();
    if catalog_codes.is_empty() {
        return 0;
    }

    let owned = owned_codes(entries);
    let matched = owned.intersection(&catalog_codes).count();
    ((matched as f64 / catalog_codes.len() as f64) * 100.0).round() as u8
}

/// Join an inventory with the catalog: expand each entry into its
/// displayable card, apply the display filter, and compute completion
/// and stats. Entries whose code has no catalog card are dropped.
pub fn reconcile(
    catalog: &[Card],
    entries: &[InventoryEntry],
    filter: &CardFilter,
) -> Reconciliation {
    let mut by_code: HashMap<String, &Card> = HashMap::new();
    for card in catalog {
        by_code.entry(normalize_code(&card.code)).or_insert(card);
    }

    let mut cards = Vec::new();
    for entry in entries {
        let Some(card) = by_code.get(normalize_code(entry.code()).as_str()) else {
            continue;
        };
        if filter.matches(card) {
            cards.push(OwnedCard {
                entry_id: entry.entry_id(),
                rarity: entry.rarity().to_string(),
                card: (*card).clone(),
            });
        }
    }

    Reconciliation {
        completion_percent: completion_percent(catalog, entries),
        stats: CollectionStats::tally(&cards),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Card> {
        vec![
            Card::new("OOF-01", "Ember Wisp", CardType::Spirit, "Fire", "Wisp"),
            Card::new("OOF-02", "Tide Caller", CardType::Evocation, "Water", "Naiad"),
            Card::new("OOF-03", "Cinder Hound", CardType::Beyonder, "Fire", "Hound"),
            Card::new("OOF-04", "Gale Shade", CardType::Spirit, "Wind", "Shade"),
        ]
    }

    #[test]
    fn test_completion_half_owned() {
        let entries = vec![
            InventoryEntry::new(1, "OOF-01", "C"),
            InventoryEntry::new(2, "OOF-02", "R"),
        ];
        assert_eq!(completion_percent(&catalog(), &entries), 50);
    }

    #[test]
    fn test_completion_counts_duplicates_once() {
        let entries = vec![
            InventoryEntry::new(1, "OOF-01", "UR"),
            InventoryEntry::new(2, "OOF-01", "SR"),
            InventoryEntry::new(3, "OOF-01", "C"),
        ];
        assert_eq!(completion_percent(&catalog(), &entries), 25);
    }

    #[test]
    fn test_completion_accepts_legacy_codes() {
        let entries = vec![InventoryEntry::new(1, "OFF-01", "C")];
        assert_eq!(completion_percent(&catalog(), &entries), 25);
    }

    #[test]
    fn test_legacy_entry_in_two_card_catalog() {
        let catalog = vec![
            Card::new("OOF-01", "Ember Wisp", CardType::Spirit, "Fire", "Wisp"),
            Card::new("OOF-02", "Tide Caller", CardType::Evocation, "Water", "Naiad"),
        ];
        let entries = vec![InventoryEntry::new(1, "OFF-01", "C")];

        let result = reconcile(&catalog, &entries, &CardFilter::default());
        assert_eq!(result.cards.len(), 1);
        assert_eq!(result.cards[0].card.code, "OOF-01");
        assert_eq!(result.completion_percent, 50);
    }

    #[test]
    fn test_completion_ignores_codes_outside_catalog() {
        let entries = vec![
            InventoryEntry::new(1, "OOF-01", "C"),
            InventoryEntry::new(2, "OOF-99", "UR"),
            InventoryEntry::new(3, "ZZZ-01", "R"),
        ];
        assert_eq!(completion_percent(&catalog(), &entries), 25);
    }

    #[test]
    fn test_completion_empty_catalog_is_zero() {
        let entries = vec![InventoryEntry::new(1, "OOF-01", "C")];
        assert_eq!(completion_percent(&[], &entries), 0);
    }

    #[test]
    fn test_completion_empty_inventory_is_zero() {
        assert_eq!(completion_percent(&catalog(), &[]), 0);
    }

    #[test]
    fn test_completion_full_collection_is_hundred() {
        let entries: Vec<_> = catalog()
            .iter()
            .enumerate()
            .map(|(i, card)| InventoryEntry::new(i as u64 + 1, card.code.clone(), "C"))
            .collect();
        assert_eq!(completion_percent(&catalog(), &entries), 100);
    }

    #[test]
    fn test_completion_rounds_to_nearest() {
        let three = &catalog()[..3];
        let one = vec![InventoryEntry::new(1, "OOF-01", "C")];
        let two = vec![
            InventoryEntry::new(1, "OOF-01", "C"),
            InventoryEntry::new(2, "OOF-02", "C"),
        ];
        // 1/3 and 2/3 land on opposite sides of the half point
        assert_eq!(completion_percent(three, &one), 33);
        assert_eq!(completion_percent(three, &two), 67);
    }

    #[test]
    fn test_completion_never_decreases_as_inventory_grows() {
        let cards = catalog();
        let mut entries = Vec::new();
        let mut last = completion_percent(&cards, &entries);

        let additions = ["OOF-99", "OOF-01", "OFF-01", "OOF-03", "OOF-02", "OOF-04"];
        for (i, code) in additions.iter().enumerate() {
            entries.push(InventoryEntry::new(i as u64 + 1, *code, "C"));
            let now = completion_percent(&cards, &entries);
            assert!(now >= last, "completion dropped from {last} to {now}");
            last = now;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_reconcile_expands_each_entry() {
        let entries = vec![
            InventoryEntry::new(1, "OOF-01", "UR"),
            InventoryEntry::new(2, "OOF-01", "C"),
            InventoryEntry::new(3, "OFF-03", "R"),
        ];

        let result = reconcile(&catalog(), &entries, &CardFilter::default());
        assert_eq!(result.cards.len(), 3);

        // Inventory order, per-entry rarity, shared catalog card
        assert_eq!(result.cards[0].entry_id, 1);
        assert_eq!(result.cards[0].rarity, "UR");
        assert_eq!(result.cards[0].card.code, "OOF-01");
        assert_eq!(result.cards[1].entry_id, 2);
        assert_eq!(result.cards[1].rarity, "C");
        assert_eq!(result.cards[1].card.code, "OOF-01");
        assert_eq!(result.cards[2].card.code, "OOF-03");

        assert_eq!(result.completion_percent, 50);
        assert_eq!(result.stats.total, 3);
        assert_eq!(result.stats.spirits, 2);
        assert_eq!(result.stats.beyonders, 1);
        assert_eq!(result.stats.evocations, 0);
    }

    #[test]
    fn test_reconcile_drops_unknown_codes() {
        let entries = vec![
            InventoryEntry::new(1, "OOF-99", "UR"),
            InventoryEntry::new(2, "OOF-02", "R"),
        ];

        let result = reconcile(&catalog(), &entries, &CardFilter::default());
        assert_eq!(result.cards.len(), 1);
        assert_eq!(result.cards[0].card.code, "OOF-02");
        assert_eq!(result.completion_percent, 25);
    }

    #[test]
    fn test_reconcile_filter_narrows_display_not_completion() {
        let entries = vec![
            InventoryEntry::new(1, "OOF-01", "C"),
            InventoryEntry::new(2, "OOF-02", "R"),
            InventoryEntry::new(3, "OOF-03", "SR"),
        ];
        let filter = CardFilter {
            element: "Fire".into(),
            ..Default::default()
        };

        let unfiltered = reconcile(&catalog(), &entries, &CardFilter::default());
        let filtered = reconcile(&catalog(), &entries, &filter);

        assert_eq!(unfiltered.cards.len(), 3);
        assert_eq!(filtered.cards.len(), 2);
        assert!(filtered.cards.iter().all(|o| o.card.element == "Fire"));

        assert_eq!(unfiltered.completion_percent, 75);
        assert_eq!(filtered.completion_percent, 75);

        assert_eq!(filtered.stats.total, 2);
        assert_eq!(filtered.stats.spirits, 1);
        assert_eq!(filtered.stats.beyonders, 1);
    }

    #[test]
    fn test_reconcile_empty_inventory() {
        let result = reconcile(&catalog(), &[], &CardFilter::default());
        assert!(result.cards.is_empty());
        assert_eq!(result.completion_percent, 0);
        assert_eq!(result.stats, CollectionStats::default());
    }
}
