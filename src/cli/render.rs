use crate::catalog::Catalog;
use crate::catalog::Rules;
use crate::catalog::Variant;
use colored::*;
use std::io::Result;
use std::io::Write;

/// session header: rules id, category listing, cards per category, players
pub fn banner(out: &mut dyn Write, rules: &Rules, players: &[String]) -> Result<()> {
    writeln!(out, "Rules: {}", rules.variant)?;
    let types = rules
        .catalog
        .categories()
        .map(|category| category.name.clone())
        .collect::<Vec<String>>();
    writeln!(out, "Types: {}", types.join(", "))?;
    for category in rules.catalog.categories() {
        let cards = rules
            .catalog
            .cards_of(&category.id)
            .map(|card| card.name.clone())
            .collect::<Vec<String>>();
        writeln!(out, "{}: {}", category.title, cards.join(", "))?;
    }
    writeln!(out)?;
    let players = serde_json::to_string(players).expect("serializable");
    writeln!(out, "players = {}", players)?;
    writeln!(out)
}

pub fn hand(out: &mut dyn Write, catalog: &Catalog, player: &str, cards: &[String]) -> Result<()> {
    let names = cards
        .iter()
        .map(|card| plain(catalog, card))
        .collect::<Vec<String>>();
    writeln!(
        out,
        "{} {} has this hand: {}",
        "****".white(),
        player,
        names.join(", ")
    )
}

pub fn show(out: &mut dyn Write, catalog: &Catalog, player: &str, card: &str) -> Result<()> {
    writeln!(
        out,
        "{} {} showed {}",
        "----".white(),
        player,
        named(catalog, card)
    )
}

pub fn suggestion(
    out: &mut dyn Write,
    rules: &Rules,
    id: usize,
    player: &str,
    cards: &[String],
    showed: &[String],
) -> Result<()> {
    let mut line = format!("({:>2}) {} suggested", id, player);
    for card in cards {
        line.push(' ');
        line.push_str(&titled(&rules.catalog, card));
    }
    line.push_str(" ==> ");
    if showed.is_empty() {
        line.push_str("nobody has them");
    } else {
        match rules.variant {
            Variant::Master => {
                line.push_str(&showed.join(", "));
                line.push_str(" showed a card");
            }
            Variant::Classic => {
                if showed.len() > 1 {
                    line.push_str(&showed[..showed.len() - 1].join(", "));
                    line.push_str(" had nothing, but ");
                }
                line.push_str(showed.last().expect("nonempty"));
                line.push_str(" showed a card");
            }
        }
    }
    writeln!(out, "{}", line)
}

pub fn accusation(
    out: &mut dyn Write,
    catalog: &Catalog,
    id: usize,
    player: &str,
    cards: &[String],
    correct: bool,
) -> Result<()> {
    let mut line = format!("({:>2}) {} accused", id, player);
    for card in cards {
        line.push(' ');
        line.push_str(&titled(catalog, card));
    }
    let outcome = if correct {
        "correct".green()
    } else {
        "wrong".red()
    };
    writeln!(out, "{} ==> {}", line, outcome)
}

pub fn discoveries(out: &mut dyn Write, discoveries: &[String]) -> Result<()> {
    for discovery in discoveries {
        writeln!(out, "     {} {}", "->".yellow(), discovery)?;
    }
    Ok(())
}

pub fn answer(out: &mut dyn Write, possible: &[String]) -> Result<()> {
    let possible = serde_json::to_string(possible).expect("serializable");
    writeln!(out, "ANSWER: {}", possible)?;
    writeln!(out)
}

/// "with the Knife", for suggestion and accusation lines
fn titled(catalog: &Catalog, card: &str) -> String {
    match catalog.card(card) {
        None => card.to_string(),
        Some(card) => match catalog.category(&card.category) {
            None => card.name.clone(),
            Some(category) => format!("{}{}{}", category.preposition, category.article, card.name),
        },
    }
}

/// "the Knife", for show lines
fn named(catalog: &Catalog, card: &str) -> String {
    match catalog.card(card) {
        None => card.to_string(),
        Some(card) => match catalog.category(&card.category) {
            None => card.name.clone(),
            Some(category) => format!("{}{}", category.article, card.name),
        },
    }
}

fn plain(catalog: &Catalog, card: &str) -> String {
    catalog
        .card(card)
        .map(|card| card.name.clone())
        .unwrap_or_else(|| card.to_string())
}
