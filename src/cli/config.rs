use crate::catalog::Card;
use crate::catalog::Catalog;
use crate::catalog::Category;
use crate::catalog::Rules;
use crate::catalog::Variant;
use serde::Deserialize;
use std::path::Path;

/// on-disk configuration: the rules variant plus the full card catalog.
///
/// ```json
/// {
///     "rules": "classic",
///     "types": [ { "id": "suspect", "name": "suspect", "title": "Suspects",
///                  "article": "", "preposition": "" } ],
///     "cards": [ { "id": "mustard", "name": "Colonel Mustard", "type": "suspect" } ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub rules: String,
    pub types: Vec<Category>,
    pub cards: Vec<Card>,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = std::fs::File::open(path)?;
        let config = serde_json::from_reader(std::io::BufReader::new(file))?;
        Ok(config)
    }
}

impl TryFrom<Config> for Rules {
    type Error = anyhow::Error;
    fn try_from(config: Config) -> Result<Self, Self::Error> {
        Ok(Rules {
            variant: Variant::try_from(config.rules.as_str())?,
            catalog: Catalog::new(config.types, config.cards)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_configuration() {
        let json = r#"{
            "rules": "master",
            "types": [
                { "id": "suspect", "name": "suspect", "title": "Suspects", "article": "", "preposition": "" },
                { "id": "weapon", "name": "weapon", "title": "Weapons", "article": "the ", "preposition": "with " }
            ],
            "cards": [
                { "id": "mustard", "name": "Colonel Mustard", "type": "suspect" },
                { "id": "knife", "name": "Knife", "type": "weapon" }
            ]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let rules = Rules::try_from(config).unwrap();
        assert!(rules.variant == Variant::Master);
        assert!(rules.catalog.cards().count() == 2);
        assert!(rules.catalog.type_of("knife") == Some("weapon"));
    }

    #[test]
    fn rejects_unknown_variant() {
        let json = r#"{ "rules": "grandmaster", "types": [], "cards": [] }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(Rules::try_from(config).is_err());
    }
}
