use super::card::Card;
use super::category::Category;
use std::collections::BTreeMap;

/// immutable description of the categories and cards in play.
///
/// built once from configuration and never mutated; ordered maps keep
/// every enumeration deterministic across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: BTreeMap<String, Category>,
    cards: BTreeMap<String, Card>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, cards: Vec<Card>) -> anyhow::Result<Self> {
        let mut this = Self {
            categories: BTreeMap::new(),
            cards: BTreeMap::new(),
        };
        for category in categories {
            if category.id.is_empty() {
                anyhow::bail!("category with empty id");
            }
            if this.categories.insert(category.id.clone(), category).is_some() {
                anyhow::bail!("duplicate category id");
            }
        }
        for card in cards {
            if card.id.is_empty() {
                anyhow::bail!("card with empty id");
            }
            if !this.categories.contains_key(&card.category) {
                anyhow::bail!("card '{}' has unknown category '{}'", card.id, card.category);
            }
            if this.cards.insert(card.id.clone(), card).is_some() {
                anyhow::bail!("duplicate card id");
            }
        }
        Ok(this)
    }

    /// the standard 21-card catalog: 6 suspects, 6 weapons, 9 rooms
    pub fn standard() -> Self {
        let categories = vec![
            Category::new("suspect", "suspect", "Suspects", "", ""),
            Category::new("weapon", "weapon", "Weapons", "the ", "with "),
            Category::new("room", "room", "Rooms", "the ", "in "),
        ];
        let cards = vec![
            Card::new("mustard", "Colonel Mustard", "suspect"),
            Card::new("white", "Mrs. White", "suspect"),
            Card::new("plum", "Professor Plum", "suspect"),
            Card::new("peacock", "Mrs. Peacock", "suspect"),
            Card::new("green", "Mr. Green", "suspect"),
            Card::new("scarlet", "Miss Scarlet", "suspect"),
            Card::new("revolver", "Revolver", "weapon"),
            Card::new("knife", "Knife", "weapon"),
            Card::new("rope", "Rope", "weapon"),
            Card::new("pipe", "Lead pipe", "weapon"),
            Card::new("wrench", "Wrench", "weapon"),
            Card::new("candlestick", "Candlestick", "weapon"),
            Card::new("dining", "Dining room", "room"),
            Card::new("conservatory", "Conservatory", "room"),
            Card::new("kitchen", "Kitchen", "room"),
            Card::new("study", "Study", "room"),
            Card::new("library", "Library", "room"),
            Card::new("billiard", "Billiard room", "room"),
            Card::new("lounge", "Lounge", "room"),
            Card::new("ballroom", "Ballroom", "room"),
            Card::new("hall", "Hall", "room"),
        ];
        Self::new(categories, cards).expect("standard catalog is well formed")
    }

    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.get(id)
    }
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }
    pub fn type_of(&self, card: &str) -> Option<&str> {
        self.cards.get(card).map(|c| c.category.as_str())
    }
    pub fn contains_card(&self, id: &str) -> bool {
        self.cards.contains_key(id)
    }
    pub fn contains_category(&self, id: &str) -> bool {
        self.categories.contains_key(id)
    }
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.values()
    }
    pub fn cards_of(&self, category: &str) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_shape() {
        let catalog = Catalog::standard();
        assert!(catalog.categories().count() == 3);
        assert!(catalog.cards().count() == 21);
        assert!(catalog.cards_of("suspect").count() == 6);
        assert!(catalog.cards_of("weapon").count() == 6);
        assert!(catalog.cards_of("room").count() == 9);
    }

    #[test]
    fn lookup() {
        let catalog = Catalog::standard();
        assert!(catalog.type_of("knife") == Some("weapon"));
        assert!(catalog.type_of("scarlet") == Some("suspect"));
        assert!(catalog.type_of("baton") == None);
        assert!(catalog.card("kitchen").map(|c| c.name.as_str()) == Some("Kitchen"));
        assert!(catalog.contains_category("room"));
        assert!(!catalog.contains_category("motive"));
    }

    #[test]
    fn rejects_unknown_category() {
        let categories = vec![Category::new("suspect", "suspect", "Suspects", "", "")];
        let cards = vec![Card::new("knife", "Knife", "weapon")];
        assert!(Catalog::new(categories, cards).is_err());
    }

    #[test]
    fn rejects_duplicate_card() {
        let categories = vec![Category::new("weapon", "weapon", "Weapons", "the ", "with ")];
        let cards = vec![
            Card::new("knife", "Knife", "weapon"),
            Card::new("knife", "Dagger", "weapon"),
        ];
        assert!(Catalog::new(categories, cards).is_err());
    }
}
