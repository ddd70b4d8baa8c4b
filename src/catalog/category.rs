/// a partition of the card catalog, e.g. suspects, weapons, rooms.
/// only the id participates in deduction; the rest is display dressing
/// for narration ("with the Knife", "in the Kitchen").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub preposition: String,
}

impl Category {
    pub fn new(id: &str, name: &str, title: &str, article: &str, preposition: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            title: title.to_string(),
            article: article.to_string(),
            preposition: preposition.to_string(),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.name)
    }
}

use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;
