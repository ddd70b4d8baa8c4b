use crate::knowledge::Contradiction;

/// what can go wrong while taking in an event.
///
/// validation errors reject the event and leave the knowledge untouched;
/// the caller may skip and continue. contradictions poison the engine
/// instance and are not recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Validation(Validation),
    Contradiction(Contradiction),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    UnknownPlayer(String),
    UnknownCard(String),
    /// the reserved ANSWER id used as a real player
    ReservedPlayer,
    DuplicatePlayer(String),
    EmptyId,
    EmptySuggestion,
    /// two suggested cards of the same category
    RepeatedCategory(String),
    DuplicateResponder(String),
    /// empty responder list under master rules
    NobodyShowed,
    /// an accusation must name exactly one card of each category
    IncompleteAccusation,
}

impl Error {
    /// contradictions are fatal to the engine instance; validation
    /// errors are not
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Contradiction(_))
    }
}

impl From<Contradiction> for Error {
    fn from(contradiction: Contradiction) -> Self {
        Error::Contradiction(contradiction)
    }
}

impl From<Validation> for Error {
    fn from(validation: Validation) -> Self {
        Error::Validation(validation)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Error::Validation(validation) => write!(f, "invalid event: {}", validation),
            Error::Contradiction(contradiction) => write!(f, "contradiction: {}", contradiction),
        }
    }
}

impl Display for Validation {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Validation::UnknownPlayer(id) => write!(f, "unknown player '{}'", id),
            Validation::UnknownCard(id) => write!(f, "unknown card '{}'", id),
            Validation::ReservedPlayer => write!(f, "ANSWER is not a real player"),
            Validation::DuplicatePlayer(id) => write!(f, "duplicate player '{}'", id),
            Validation::EmptyId => write!(f, "empty id"),
            Validation::EmptySuggestion => write!(f, "suggestion names no cards"),
            Validation::RepeatedCategory(id) => {
                write!(f, "more than one card of category '{}'", id)
            }
            Validation::DuplicateResponder(id) => write!(f, "duplicate responder '{}'", id),
            Validation::NobodyShowed => {
                write!(f, "master rules suggestion with no responders")
            }
            Validation::IncompleteAccusation => {
                write!(f, "accusation must name one card of each category")
            }
        }
    }
}

impl std::error::Error for Error {}

use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
