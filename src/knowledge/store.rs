use super::contradiction::Contradiction;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// the mutable knowledge: for each player, the cards they might still hold;
/// for each card, the players who might still hold it.
///
/// the two mappings are dual and every mutation goes through assign/retract,
/// which update both sides together. a player's possibility set contains a
/// card iff the card's holder set contains the player, always.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    players: BTreeMap<String, BTreeSet<String>>,
    cards: BTreeMap<String, BTreeSet<String>>,
}

impl Store {
    /// everyone might hold everything
    pub fn new(players: &[String], cards: &[String]) -> Self {
        let full_hand: BTreeSet<String> = cards.iter().cloned().collect();
        let full_table: BTreeSet<String> = players.iter().cloned().collect();
        Self {
            players: players
                .iter()
                .map(|p| (p.clone(), full_hand.clone()))
                .collect(),
            cards: cards
                .iter()
                .map(|c| (c.clone(), full_table.clone()))
                .collect(),
        }
    }

    pub fn contains_player(&self, player: &str) -> bool {
        self.players.contains_key(player)
    }
    pub fn contains_card(&self, card: &str) -> bool {
        self.cards.contains_key(card)
    }
    pub fn might_hold(&self, player: &str, card: &str) -> bool {
        self.holders(card).contains(player)
    }
    pub fn definitely_holds(&self, player: &str, card: &str) -> bool {
        let holders = self.holders(card);
        holders.len() == 1 && holders.contains(player)
    }
    pub fn holders(&self, card: &str) -> &BTreeSet<String> {
        self.cards.get(card).expect("known card")
    }
    pub fn possibilities(&self, player: &str) -> &BTreeSet<String> {
        self.players.get(player).expect("known player")
    }
    pub fn players(&self) -> impl Iterator<Item = &String> {
        self.players.keys()
    }
    pub fn cards(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.cards.iter()
    }

    /// record that the player holds the card. every other candidate holder
    /// is removed from the card and the card from them. no-op when the
    /// player is already the sole holder. returns whether anything changed.
    pub fn assign(&mut self, player: &str, card: &str) -> Result<bool, Contradiction> {
        let holders = self.cards.get(card).expect("known card");
        if !holders.contains(player) {
            return match holders.iter().next() {
                Some(holder) if holders.len() == 1 => Err(Contradiction::HeldElsewhere {
                    card: card.to_string(),
                    holder: holder.clone(),
                }),
                _ => Err(Contradiction::KnownNotHeld {
                    player: player.to_string(),
                    card: card.to_string(),
                }),
            };
        }
        if holders.len() == 1 {
            return Ok(false);
        }
        let others = holders
            .iter()
            .filter(|p| p.as_str() != player)
            .cloned()
            .collect::<Vec<String>>();
        for other in others {
            self.players
                .get_mut(&other)
                .expect("known player")
                .remove(card);
            self.cards.get_mut(card).expect("known card").remove(&other);
        }
        Ok(true)
    }

    /// record that the player does not hold the card. no-op when already
    /// ruled out. returns whether anything changed.
    pub fn retract(&mut self, player: &str, card: &str) -> Result<bool, Contradiction> {
        let holders = self.cards.get(card).expect("known card");
        if !holders.contains(player) {
            return Ok(false);
        }
        if holders.len() == 1 {
            return Err(Contradiction::LastHolder {
                player: player.to_string(),
                card: card.to_string(),
            });
        }
        self.players
            .get_mut(player)
            .expect("known player")
            .remove(card);
        self.cards.get_mut(card).expect("known card").remove(player);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        let players = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let cards = vec!["knife".to_string(), "rope".to_string()];
        Store::new(&players, &cards)
    }

    fn dual(store: &Store) -> bool {
        store.players().all(|p| {
            store
                .possibilities(p)
                .iter()
                .all(|c| store.holders(c).contains(p))
        }) && store.cards().all(|(c, holders)| {
            holders.iter().all(|p| store.possibilities(p).contains(c))
        })
    }

    #[test]
    fn starts_full() {
        let store = store();
        assert!(store.might_hold("a", "knife"));
        assert!(store.might_hold("c", "rope"));
        assert!(!store.definitely_holds("a", "knife"));
        assert!(dual(&store));
    }

    #[test]
    fn assign_displaces_others() {
        let mut store = store();
        assert!(store.assign("a", "knife").unwrap() == true);
        assert!(store.definitely_holds("a", "knife"));
        assert!(!store.might_hold("b", "knife"));
        assert!(!store.might_hold("c", "knife"));
        assert!(store.might_hold("b", "rope"));
        assert!(dual(&store));
    }

    #[test]
    fn assign_twice_is_noop() {
        let mut store = store();
        assert!(store.assign("a", "knife").unwrap() == true);
        assert!(store.assign("a", "knife").unwrap() == false);
    }

    #[test]
    fn assign_after_retract_contradicts() {
        let mut store = store();
        assert!(store.retract("a", "knife").unwrap() == true);
        let err = store.assign("a", "knife").unwrap_err();
        assert!(
            err == Contradiction::KnownNotHeld {
                player: "a".to_string(),
                card: "knife".to_string(),
            }
        );
    }

    #[test]
    fn assign_over_other_holder_contradicts() {
        let mut store = store();
        assert!(store.assign("a", "knife").unwrap() == true);
        let err = store.assign("b", "knife").unwrap_err();
        assert!(
            err == Contradiction::HeldElsewhere {
                card: "knife".to_string(),
                holder: "a".to_string(),
            }
        );
    }

    #[test]
    fn retract_twice_is_noop() {
        let mut store = store();
        assert!(store.retract("b", "rope").unwrap() == true);
        assert!(store.retract("b", "rope").unwrap() == false);
        assert!(dual(&store));
    }

    #[test]
    fn retract_last_holder_contradicts() {
        let mut store = store();
        assert!(store.retract("a", "knife").unwrap());
        assert!(store.retract("b", "knife").unwrap());
        let err = store.retract("c", "knife").unwrap_err();
        assert!(
            err == Contradiction::LastHolder {
                player: "c".to_string(),
                card: "knife".to_string(),
            }
        );
    }
}
