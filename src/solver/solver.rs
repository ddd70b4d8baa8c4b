use super::error::Error;
use super::error::Validation;
use super::event::Event;
use super::record::Accusation;
use super::record::Suggestion;
use super::snapshot::Snapshot;
use crate::ANSWER;
use crate::catalog::Catalog;
use crate::catalog::Rules;
use crate::catalog::Variant;
use crate::knowledge::Contradiction;
use crate::knowledge::Ledger;
use crate::knowledge::Store;
use std::collections::BTreeSet;

/// the deduction engine.
///
/// ingests a stream of events and maintains a minimal consistent set of
/// facts about who holds what, with the reserved ANSWER pseudo-player
/// standing in for the solution envelope. after every event the engine
/// saturates: global constraints and every logged suggestion and
/// accusation are re-applied until the knowledge reaches a fixed point,
/// so a historical suggestion can pay out long after it was seen.
#[derive(Debug, Clone)]
pub struct Solver {
    rules: Rules,
    store: Store,
    ledger: Ledger,
    suggestions: Vec<Suggestion>,
    accusations: Vec<Accusation>,
    rational: bool,
}

impl Solver {
    pub fn new(rules: Rules, players: &[String]) -> Result<Self, Error> {
        let mut seen = BTreeSet::new();
        for player in players {
            if player.is_empty() {
                return Err(Validation::EmptyId.into());
            }
            if player == ANSWER {
                return Err(Validation::ReservedPlayer.into());
            }
            if !seen.insert(player.clone()) {
                return Err(Validation::DuplicatePlayer(player.clone()).into());
            }
        }
        let mut table = players.to_vec();
        table.push(ANSWER.to_string());
        let cards = rules
            .catalog
            .cards()
            .map(|c| c.id.clone())
            .collect::<Vec<String>>();
        Ok(Self {
            store: Store::new(&table, &cards),
            ledger: Ledger::new(),
            suggestions: Vec::new(),
            accusations: Vec::new(),
            rational: true,
            rules,
        })
    }

    /// whether an accuser is assumed to never accuse a card they hold.
    /// on by default.
    pub fn rational_accusers(mut self, rational: bool) -> Self {
        self.rational = rational;
        self
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }
    pub fn catalog(&self) -> &Catalog {
        &self.rules.catalog
    }
    pub fn store(&self) -> &Store {
        &self.store
    }
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }
    pub fn accusations(&self) -> &[Accusation] {
        &self.accusations
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    // queries

    pub fn might_be_held_by(&self, player: &str) -> Result<Vec<String>, Error> {
        if !self.store.contains_player(player) {
            return Err(Validation::UnknownPlayer(player.to_string()).into());
        }
        Ok(self.store.possibilities(player).iter().cloned().collect())
    }

    pub fn might_hold(&self, card: &str) -> Result<Vec<String>, Error> {
        if !self.store.contains_card(card) {
            return Err(Validation::UnknownCard(card.to_string()).into());
        }
        Ok(self.store.holders(card).iter().cloned().collect())
    }

    /// messages for the facts newly learned during the most recent event
    pub fn discoveries(&self) -> &[String] {
        self.ledger.discoveries()
    }

    pub fn is_player(&self, id: &str) -> bool {
        id != ANSWER && self.store.contains_player(id)
    }
    pub fn is_card(&self, id: &str) -> bool {
        self.rules.catalog.contains_card(id)
    }
    pub fn is_category(&self, id: &str) -> bool {
        self.rules.catalog.contains_category(id)
    }

    // event handlers

    pub fn apply(&mut self, event: &Event) -> Result<(), Error> {
        match event {
            Event::Hand { player, cards } => self.hand(player, cards),
            Event::Show { player, card } => self.show(player, card),
            Event::Suggest {
                player,
                cards,
                showed,
            } => self.suggest(player, cards, showed),
            Event::Accuse {
                player,
                cards,
                correct,
            } => self.accuse(player, cards, *correct),
        }
    }

    /// the player holds exactly these cards and no others
    pub fn hand(&mut self, player: &str, cards: &[String]) -> Result<(), Error> {
        self.validate_real_player(player)?;
        self.validate_cards(cards)?;
        self.ledger.begin();
        let mut changed = false;
        let all = self
            .rules
            .catalog
            .cards()
            .map(|c| c.id.clone())
            .collect::<Vec<String>>();
        for card in all {
            if cards.contains(&card) {
                self.confirm(player, &card, Some("hand"), &mut changed)?;
            } else {
                self.eliminate(player, &card, Some("hand"), &mut changed)?;
            }
        }
        self.saturate()?;
        Ok(())
    }

    /// the player revealed a single card
    pub fn show(&mut self, player: &str, card: &str) -> Result<(), Error> {
        self.validate_real_player(player)?;
        self.validate_card(card)?;
        self.ledger.begin();
        let mut changed = false;
        self.confirm(player, card, Some("revealed"), &mut changed)?;
        self.saturate()?;
        Ok(())
    }

    pub fn suggest(
        &mut self,
        player: &str,
        cards: &[String],
        showed: &[String],
    ) -> Result<(), Error> {
        self.validate_suggest(player, cards, showed)?;
        self.ledger.begin();
        let suggestion = Suggestion {
            id: self.suggestions.len(),
            player: player.to_string(),
            cards: cards.to_vec(),
            showed: showed.to_vec(),
        };
        self.suggestions.push(suggestion.clone());
        let mut changed = false;
        self.deduce_suggestion(&suggestion, &mut changed)?;
        self.saturate()?;
        Ok(())
    }

    pub fn accuse(&mut self, player: &str, cards: &[String], correct: bool) -> Result<(), Error> {
        self.validate_accuse(player, cards)?;
        self.ledger.begin();
        let accusation = Accusation {
            id: self.accusations.len(),
            player: player.to_string(),
            cards: cards.to_vec(),
            correct,
        };
        self.accusations.push(accusation.clone());
        let mut changed = false;
        self.deduce_accusation(&accusation, &mut changed)?;
        self.saturate()?;
        Ok(())
    }

    // validation. runs to completion before any mutation, so a rejected
    // event leaves the knowledge untouched.

    fn validate_real_player(&self, player: &str) -> Result<(), Validation> {
        if player == ANSWER {
            return Err(Validation::ReservedPlayer);
        }
        if !self.store.contains_player(player) {
            return Err(Validation::UnknownPlayer(player.to_string()));
        }
        Ok(())
    }

    fn validate_card(&self, card: &str) -> Result<(), Validation> {
        if !self.rules.catalog.contains_card(card) {
            return Err(Validation::UnknownCard(card.to_string()));
        }
        Ok(())
    }

    fn validate_cards(&self, cards: &[String]) -> Result<(), Validation> {
        for card in cards {
            self.validate_card(card)?;
        }
        Ok(())
    }

    fn validate_suggest(
        &self,
        player: &str,
        cards: &[String],
        showed: &[String],
    ) -> Result<(), Validation> {
        self.validate_real_player(player)?;
        if cards.is_empty() {
            return Err(Validation::EmptySuggestion);
        }
        self.validate_cards(cards)?;
        let mut categories = BTreeSet::new();
        for card in cards {
            let category = self.type_of(card).to_string();
            if !categories.insert(category.clone()) {
                return Err(Validation::RepeatedCategory(category));
            }
        }
        let mut responders = BTreeSet::new();
        for responder in showed {
            self.validate_real_player(responder)?;
            if !responders.insert(responder.clone()) {
                return Err(Validation::DuplicateResponder(responder.clone()));
            }
        }
        if self.rules.variant == Variant::Master && showed.is_empty() {
            return Err(Validation::NobodyShowed);
        }
        Ok(())
    }

    fn validate_accuse(&self, player: &str, cards: &[String]) -> Result<(), Validation> {
        self.validate_real_player(player)?;
        self.validate_cards(cards)?;
        let mut categories = BTreeSet::new();
        for card in cards {
            let category = self.type_of(card).to_string();
            if !categories.insert(category.clone()) {
                return Err(Validation::RepeatedCategory(category));
            }
        }
        if categories.len() != self.rules.catalog.categories().count() {
            return Err(Validation::IncompleteAccusation);
        }
        Ok(())
    }

    // deduction rules

    fn deduce_suggestion(
        &mut self,
        suggestion: &Suggestion,
        changed: &mut bool,
    ) -> Result<(), Contradiction> {
        match self.rules.variant {
            Variant::Classic => self.deduce_classic(suggestion, changed),
            Variant::Master => self.deduce_master(suggestion, changed),
        }
    }

    /// classic rules: responders were queried in seating order until one
    /// showed a card. everyone before the last showed nothing; only the
    /// last responder (if any) holds a suggested card.
    fn deduce_classic(
        &mut self,
        suggestion: &Suggestion,
        changed: &mut bool,
    ) -> Result<(), Contradiction> {
        if suggestion.showed.is_empty() {
            let players = self.store.players().cloned().collect::<Vec<String>>();
            for player in players {
                if player != ANSWER && player != suggestion.player {
                    let reason = format!("did not show a card in suggestion #{}", suggestion.id);
                    self.eliminate_each(&player, &suggestion.cards, &reason, changed)?;
                }
            }
        } else {
            for player in &suggestion.showed[..suggestion.showed.len() - 1] {
                let reason = format!("did not show a card in suggestion #{}", suggestion.id);
                self.eliminate_each(player, &suggestion.cards, &reason, changed)?;
            }
            let last = suggestion.showed.last().expect("nonempty").clone();
            self.forced_show(&last, suggestion, changed)?;
        }
        Ok(())
    }

    /// master rules: the showed list is the set of every responder who
    /// showed some suggested card, in no particular order.
    fn deduce_master(
        &mut self,
        suggestion: &Suggestion,
        changed: &mut bool,
    ) -> Result<(), Contradiction> {
        let players = self.store.players().cloned().collect::<Vec<String>>();
        for player in players {
            if suggestion.showed.contains(&player) {
                self.forced_show(&player, suggestion, changed)?;
            } else if player != ANSWER && player != suggestion.player {
                let reason = format!("did not show a card in suggestion #{}", suggestion.id);
                self.eliminate_each(&player, &suggestion.cards, &reason, changed)?;
            } else if suggestion.showed.len() == suggestion.cards.len() {
                let reason = format!(
                    "all cards were shown by other players in suggestion #{}",
                    suggestion.id
                );
                self.eliminate_each(&player, &suggestion.cards, &reason, changed)?;
            }
        }
        Ok(())
    }

    /// the responder holds at least one of the suggested cards. if all but
    /// one are already ruled out for them, the remaining one is forced.
    /// evaluated against the current store, so a replay may decide a
    /// suggestion that was open when first seen.
    fn forced_show(
        &mut self,
        player: &str,
        suggestion: &Suggestion,
        changed: &mut bool,
    ) -> Result<(), Contradiction> {
        let candidates = suggestion
            .cards
            .iter()
            .filter(|card| self.store.might_hold(player, card))
            .cloned()
            .collect::<Vec<String>>();
        match candidates.as_slice() {
            [] => Err(Contradiction::NothingToShow {
                player: player.to_string(),
                suggestion: suggestion.id,
            }),
            [card] => {
                let card = card.clone();
                let reason = format!(
                    "showed a card in suggestion #{}, and does not hold the others",
                    suggestion.id
                );
                self.confirm(player, &card, Some(&reason), changed)
            }
            _ => Ok(()),
        }
    }

    fn deduce_accusation(
        &mut self,
        accusation: &Accusation,
        changed: &mut bool,
    ) -> Result<(), Contradiction> {
        if self.rational {
            let reason = format!("made accusation #{}", accusation.id);
            self.eliminate_each(&accusation.player, &accusation.cards, &reason, changed)?;
        }
        if accusation.correct {
            for card in accusation.cards.clone() {
                let reason = format!("named in correct accusation #{}", accusation.id);
                self.confirm(ANSWER, &card, Some(&reason), changed)?;
            }
        } else {
            let unheld = accusation
                .cards
                .iter()
                .filter(|card| !self.store.definitely_holds(ANSWER, card))
                .cloned()
                .collect::<Vec<String>>();
            match unheld.as_slice() {
                [] => {
                    return Err(Contradiction::AllHeld {
                        accusation: accusation.id,
                    });
                }
                [card] => {
                    let card = card.clone();
                    let reason = format!("holds the other cards in accusation #{}", accusation.id);
                    self.eliminate(ANSWER, &card, Some(&reason), changed)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    // saturation driver. after any event, keep applying the global
    // constraints and re-running every logged event until the store
    // stops changing. terminates because possibility sets only shrink.

    fn saturate(&mut self) -> Result<(), Contradiction> {
        loop {
            let mut changed = false;
            self.unique_holders()?;
            self.answer_unique(&mut changed)?;
            self.answer_exists(&mut changed)?;
            for suggestion in self.suggestions.clone() {
                self.deduce_suggestion(&suggestion, &mut changed)?;
            }
            for accusation in self.accusations.clone() {
                self.deduce_accusation(&accusation, &mut changed)?;
            }
            if !changed {
                return Ok(());
            }
        }
    }

    /// a card whose holder set has shrunk to one player is definitively
    /// held by that player
    fn unique_holders(&mut self) -> Result<(), Contradiction> {
        let sole = self
            .store
            .cards()
            .filter(|(_, holders)| holders.len() == 1)
            .map(|(card, holders)| {
                let holder = holders.iter().next().expect("nonempty").clone();
                (holder, card.clone())
            })
            .collect::<Vec<(String, String)>>();
        for (player, card) in sole {
            if self.ledger.record(&player, &card, true)? {
                let message = self.message(&player, &card, true, "nobody else holds it");
                self.ledger.note(message);
            }
        }
        Ok(())
    }

    /// the answer holds exactly one card per category, so a definite hold
    /// rules out every other card of that category
    fn answer_unique(&mut self, changed: &mut bool) -> Result<(), Contradiction> {
        let possible = self
            .store
            .possibilities(ANSWER)
            .iter()
            .cloned()
            .collect::<Vec<String>>();
        let held = possible
            .iter()
            .filter(|card| self.store.definitely_holds(ANSWER, card))
            .map(|card| (self.type_of(card).to_string(), card.clone()))
            .collect::<Vec<(String, String)>>();
        for (category, held_card) in held {
            let others = possible
                .iter()
                .filter(|card| card.as_str() != held_card)
                .filter(|card| self.type_of(card) == category)
                .cloned()
                .collect::<Vec<String>>();
            for card in others {
                let reason = format!("ANSWER can only hold one {}", category);
                self.eliminate(ANSWER, &card, Some(&reason), changed)?;
            }
        }
        Ok(())
    }

    /// dually, when only one card of a category is left for the answer,
    /// the answer must hold it. running out of candidates entirely means
    /// the inputs were inconsistent.
    fn answer_exists(&mut self, changed: &mut bool) -> Result<(), Contradiction> {
        let categories = self
            .rules
            .catalog
            .categories()
            .map(|category| category.id.clone())
            .collect::<Vec<String>>();
        for category in categories {
            let candidates = self
                .store
                .possibilities(ANSWER)
                .iter()
                .filter(|card| self.type_of(card) == category)
                .cloned()
                .collect::<Vec<String>>();
            match candidates.as_slice() {
                [] => return Err(Contradiction::Exhausted { category }),
                [card] => {
                    let card = card.clone();
                    let reason = format!("only {} that ANSWER can hold", category);
                    self.confirm(ANSWER, &card, Some(&reason), changed)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    // primitive mutations. every store change lands in the ledger; a
    // reason produces a discovery message the first time the fact is
    // learned, and displaced holders get silent facts.

    fn confirm(
        &mut self,
        player: &str,
        card: &str,
        reason: Option<&str>,
        changed: &mut bool,
    ) -> Result<(), Contradiction> {
        if self.ledger.record(player, card, true)? {
            if let Some(reason) = reason {
                let message = self.message(player, card, true, reason);
                self.ledger.note(message);
            }
        }
        let others = self
            .store
            .holders(card)
            .iter()
            .filter(|holder| holder.as_str() != player)
            .cloned()
            .collect::<Vec<String>>();
        if self.store.assign(player, card)? {
            for other in others {
                self.ledger.record(&other, card, false)?;
            }
            *changed = true;
        }
        Ok(())
    }

    fn eliminate(
        &mut self,
        player: &str,
        card: &str,
        reason: Option<&str>,
        changed: &mut bool,
    ) -> Result<(), Contradiction> {
        if self.ledger.record(player, card, false)? {
            if let Some(reason) = reason {
                let message = self.message(player, card, false, reason);
                self.ledger.note(message);
            }
        }
        if self.store.retract(player, card)? {
            *changed = true;
        }
        Ok(())
    }

    fn eliminate_each(
        &mut self,
        player: &str,
        cards: &[String],
        reason: &str,
        changed: &mut bool,
    ) -> Result<(), Contradiction> {
        for card in cards {
            self.eliminate(player, card, Some(reason), changed)?;
        }
        Ok(())
    }

    fn type_of(&self, card: &str) -> &str {
        self.rules.catalog.type_of(card).expect("known card")
    }

    fn message(&self, player: &str, card: &str, holds: bool, reason: &str) -> String {
        let card = self.rules.catalog.card(card).expect("known card");
        let article = self
            .rules
            .catalog
            .category(&card.category)
            .map(|category| category.article.as_str())
            .unwrap_or("");
        format!(
            "{} {} {}{}: {}",
            player,
            if holds { "holds" } else { "does not hold" },
            article,
            card.name,
            reason
        )
    }
}
