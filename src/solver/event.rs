use serde::Deserialize;
use serde::Serialize;

/// a single observation from the table, as decoded from the input stream.
/// one JSON object per line, keyed by the event kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    /// a player's full hand became known
    Hand { player: String, cards: Vec<String> },
    /// a player revealed a single card
    Show { player: String, card: String },
    /// a suggestion and the responders who showed a card
    Suggest {
        player: String,
        cards: Vec<String>,
        showed: Vec<String>,
    },
    /// an accusation and its outcome
    Accuse {
        player: String,
        cards: Vec<String>,
        correct: bool,
    },
}

#[cfg(test)]
impl crate::Arbitrary for Event {
    fn random() -> Self {
        use rand::Rng;
        let catalog = crate::catalog::Catalog::standard();
        let players = ["a", "b", "c", "d"];
        let cards = catalog
            .cards()
            .map(|card| card.id.clone())
            .collect::<Vec<String>>();
        let mut rng = rand::rng();
        let player = players[rng.random_range(0..players.len())].to_string();
        let triple = catalog
            .categories()
            .map(|category| {
                let of = catalog
                    .cards_of(&category.id)
                    .map(|card| card.id.clone())
                    .collect::<Vec<String>>();
                of[rng.random_range(0..of.len())].clone()
            })
            .collect::<Vec<String>>();
        match rng.random_range(0..4) {
            0 => Event::Hand {
                player,
                cards: (0..3)
                    .map(|_| cards[rng.random_range(0..cards.len())].clone())
                    .collect(),
            },
            1 => Event::Show {
                player,
                card: cards[rng.random_range(0..cards.len())].clone(),
            },
            2 => Event::Suggest {
                player,
                cards: triple,
                showed: players[..rng.random_range(0..players.len())]
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
            },
            _ => Event::Accuse {
                player,
                cards: triple,
                correct: rng.random(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_stream_lines() {
        let hand: Event =
            serde_json::from_str(r#"{"hand":{"player":"a","cards":["mustard","revolver"]}}"#)
                .unwrap();
        let show: Event = serde_json::from_str(r#"{"show":{"player":"b","card":"knife"}}"#).unwrap();
        let suggest: Event = serde_json::from_str(
            r#"{"suggest":{"player":"a","cards":["white","knife","kitchen"],"showed":["b"]}}"#,
        )
        .unwrap();
        let accuse: Event = serde_json::from_str(
            r#"{"accuse":{"player":"c","cards":["plum","rope","hall"],"correct":false}}"#,
        )
        .unwrap();
        assert!(
            hand == Event::Hand {
                player: "a".to_string(),
                cards: vec!["mustard".to_string(), "revolver".to_string()],
            }
        );
        assert!(
            show == Event::Show {
                player: "b".to_string(),
                card: "knife".to_string(),
            }
        );
        assert!(matches!(suggest, Event::Suggest { ref showed, .. } if showed.len() == 1));
        assert!(matches!(accuse, Event::Accuse { correct: false, .. }));
    }

    #[test]
    fn rejects_unknown_tag() {
        let bad = serde_json::from_str::<Event>(r#"{"wager":{"player":"a"}}"#);
        assert!(bad.is_err());
    }
}
