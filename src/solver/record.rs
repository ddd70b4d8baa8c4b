use serde::Serialize;

/// a suggestion as it was observed. retained forever: new knowledge can
/// make a historical suggestion decidable, so the saturation driver keeps
/// re-applying these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: usize,
    pub player: String,
    pub cards: Vec<String>,
    pub showed: Vec<String>,
}

/// an accusation and its outcome as it was observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accusation {
    pub id: usize,
    pub player: String,
    pub cards: Vec<String>,
    pub correct: bool,
}
