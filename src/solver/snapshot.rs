use super::record::Accusation;
use super::record::Suggestion;
use super::solver::Solver;
use serde::Serialize;
use std::collections::BTreeMap;

/// a structured dump of the current knowledge, stable enough for test
/// assertions and external inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// card id -> players who might still hold it
    pub cards: BTreeMap<String, Vec<String>>,
    /// player id -> cards they might still hold
    pub players: BTreeMap<String, Vec<String>>,
    pub suggestions: Vec<Suggestion>,
    pub accusations: Vec<Accusation>,
}

impl From<&Solver> for Snapshot {
    fn from(solver: &Solver) -> Self {
        Self {
            cards: solver
                .store()
                .cards()
                .map(|(card, holders)| (card.clone(), holders.iter().cloned().collect()))
                .collect(),
            players: solver
                .store()
                .players()
                .map(|player| {
                    (
                        player.clone(),
                        solver.store().possibilities(player).iter().cloned().collect(),
                    )
                })
                .collect(),
            suggestions: solver.suggestions().to_vec(),
            accusations: solver.accusations().to_vec(),
        }
    }
}
