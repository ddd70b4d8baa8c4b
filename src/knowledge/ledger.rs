use super::contradiction::Contradiction;
use std::collections::BTreeMap;

/// the monotone record of established atomic facts, plus the per-event
/// discoveries log delivered to the caller.
///
/// facts are append-only: recording the same fact again is suppressed,
/// recording the opposite sign is a contradiction. the discoveries log
/// holds the human-readable messages for facts newly learned since the
/// current event began.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    facts: BTreeMap<(String, String), bool>,
    discoveries: Vec<String>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// clears the discoveries log. called at the start of each event.
    pub fn begin(&mut self) {
        self.discoveries.clear();
    }

    /// record that the player holds (or does not hold) the card.
    /// returns whether the fact is new.
    pub fn record(&mut self, player: &str, card: &str, holds: bool) -> Result<bool, Contradiction> {
        let key = (player.to_string(), card.to_string());
        match self.facts.get(&key) {
            None => {
                self.facts.insert(key, holds);
                Ok(true)
            }
            Some(known) if *known == holds => Ok(false),
            Some(_) => Err(Contradiction::Reversed {
                player: player.to_string(),
                card: card.to_string(),
            }),
        }
    }

    pub fn note(&mut self, message: String) {
        self.discoveries.push(message);
    }

    pub fn holds(&self, player: &str, card: &str) -> Option<bool> {
        self.facts
            .get(&(player.to_string(), card.to_string()))
            .copied()
    }

    pub fn discoveries(&self) -> &[String] {
        &self.discoveries
    }

    pub fn facts(&self) -> impl Iterator<Item = (&(String, String), &bool)> {
        self.facts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_is_new() {
        let mut ledger = Ledger::new();
        assert!(ledger.record("a", "knife", true).unwrap() == true);
        assert!(ledger.holds("a", "knife") == Some(true));
        assert!(ledger.holds("a", "rope") == None);
    }

    #[test]
    fn same_sign_is_suppressed() {
        let mut ledger = Ledger::new();
        assert!(ledger.record("a", "knife", false).unwrap() == true);
        assert!(ledger.record("a", "knife", false).unwrap() == false);
    }

    #[test]
    fn opposite_sign_contradicts() {
        let mut ledger = Ledger::new();
        assert!(ledger.record("a", "knife", true).unwrap());
        let err = ledger.record("a", "knife", false).unwrap_err();
        assert!(
            err == Contradiction::Reversed {
                player: "a".to_string(),
                card: "knife".to_string(),
            }
        );
    }

    #[test]
    fn begin_clears_discoveries_not_facts() {
        let mut ledger = Ledger::new();
        ledger.record("a", "knife", true).unwrap();
        ledger.note("a holds the Knife: revealed".to_string());
        assert!(ledger.discoveries().len() == 1);
        ledger.begin();
        assert!(ledger.discoveries().is_empty());
        assert!(ledger.holds("a", "knife") == Some(true));
    }
}
