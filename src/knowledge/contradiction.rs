/// an inference that cannot be reconciled with the established knowledge.
///
/// contradictions indicate buggy inputs or a buggy rule. they are never
/// recovered within the engine; the instance must be discarded and rebuilt
/// from trusted events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contradiction {
    /// assigning a card to a player already ruled out as its holder
    KnownNotHeld { player: String, card: String },
    /// assigning a card that some other player definitively holds
    HeldElsewhere { card: String, holder: String },
    /// retracting a card from the only player who might still hold it
    LastHolder { player: String, card: String },
    /// overwriting a ledger fact with the opposite sign
    Reversed { player: String, card: String },
    /// a responder showed a card yet can hold none of the suggested ones
    NothingToShow { player: String, suggestion: usize },
    /// no card of a category is left for the answer envelope
    Exhausted { category: String },
    /// an accusation came back incorrect but the answer holds every accused card
    AllHeld { accusation: usize },
}

impl Display for Contradiction {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Contradiction::KnownNotHeld { player, card } => {
                write!(f, "{} is known to not hold {}", player, card)
            }
            Contradiction::HeldElsewhere { card, holder } => {
                write!(f, "{} is already held by {}", card, holder)
            }
            Contradiction::LastHolder { player, card } => {
                write!(f, "{} is the only remaining holder of {}", player, card)
            }
            Contradiction::Reversed { player, card } => {
                write!(f, "established fact about {} holding {} reversed", player, card)
            }
            Contradiction::NothingToShow { player, suggestion } => {
                write!(f, "{} showed a card in suggestion #{} but can hold none of them", player, suggestion)
            }
            Contradiction::Exhausted { category } => {
                write!(f, "no {} left for the answer", category)
            }
            Contradiction::AllHeld { accusation } => {
                write!(f, "accusation #{} was incorrect but the answer holds all of it", accusation)
            }
        }
    }
}

impl std::error::Error for Contradiction {}

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
