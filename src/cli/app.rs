use super::config::Config;
use super::render;
use crate::ANSWER;
use crate::catalog::Rules;
use crate::solver::Event;
use crate::solver::Solver;
use clap::Parser;
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;

const BAD_CONFIG: i32 = 1;
const BAD_INPUT: i32 = 2;
const BAD_OUTPUT: i32 = 3;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// JSON configuration with rules, types, and cards
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// event stream, one JSON object per line (defaults to stdin)
    pub input: Option<PathBuf>,
    /// write the session transcript here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// command-line front end: streams game events from a file or stdin
/// through the solver, narrating each event, the discoveries it
/// unlocked, and what the answer envelope might still contain.
pub struct App;

impl App {
    pub fn run() {
        let args = Args::parse();
        let rules = match &args.config {
            None => Rules::classic(),
            Some(path) => match Config::load(path).and_then(Rules::try_from) {
                Ok(rules) => rules,
                Err(e) => {
                    log::error!("cannot load configuration from '{}': {}", path.display(), e);
                    std::process::exit(BAD_CONFIG);
                }
            },
        };
        let input: Box<dyn BufRead> = match &args.input {
            None => Box::new(std::io::stdin().lock()),
            Some(path) => match std::fs::File::open(path) {
                Ok(file) => Box::new(std::io::BufReader::new(file)),
                Err(e) => {
                    log::error!("cannot open '{}' for reading: {}", path.display(), e);
                    std::process::exit(BAD_INPUT);
                }
            },
        };
        let mut output: Box<dyn Write> = match &args.output {
            None => Box::new(std::io::stdout()),
            Some(path) => match std::fs::File::create(path) {
                // transcripts on disk stay free of color escapes
                Ok(file) => {
                    colored::control::set_override(false);
                    Box::new(file)
                }
                Err(e) => {
                    log::error!("cannot open '{}' for writing: {}", path.display(), e);
                    std::process::exit(BAD_OUTPUT);
                }
            },
        };
        if let Err(e) = Self::stream(rules, input, &mut output) {
            log::error!("{}", e);
            std::process::exit(BAD_INPUT);
        }
    }

    /// first line is the player list; every further line is one event.
    /// undecodable or invalid events are skipped; contradictions end the
    /// session, since the engine instance cannot recover.
    pub fn stream(
        rules: Rules,
        input: Box<dyn BufRead>,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let mut lines = input.lines();
        let first = lines
            .next()
            .ok_or_else(|| anyhow::anyhow!("missing player list"))??;
        let players = serde_json::from_str::<Vec<String>>(&first)?;
        render::banner(out, &rules, &players)?;
        let mut solver = Solver::new(rules, &players)?;
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let event = match serde_json::from_str::<Event>(&line) {
                Ok(event) => event,
                Err(e) => {
                    log::warn!("skipping undecodable event '{}': {}", line.trim(), e);
                    continue;
                }
            };
            match solver.apply(&event) {
                Ok(()) => {}
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    log::warn!("skipping event '{}': {}", line.trim(), e);
                    continue;
                }
            }
            Self::narrate(&solver, &event, out)?;
        }
        Ok(())
    }

    fn narrate(solver: &Solver, event: &Event, out: &mut dyn Write) -> std::io::Result<()> {
        match event {
            Event::Hand { player, cards } => render::hand(out, solver.catalog(), player, cards)?,
            Event::Show { player, card } => render::show(out, solver.catalog(), player, card)?,
            Event::Suggest {
                player,
                cards,
                showed,
            } => render::suggestion(
                out,
                solver.rules(),
                solver.suggestions().len() - 1,
                player,
                cards,
                showed,
            )?,
            Event::Accuse {
                player,
                cards,
                correct,
            } => render::accusation(
                out,
                solver.catalog(),
                solver.accusations().len() - 1,
                player,
                cards,
                *correct,
            )?,
        }
        render::discoveries(out, solver.discoveries())?;
        let answer = solver.might_be_held_by(ANSWER).expect("ANSWER is always known");
        render::answer(out, &answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streams_events_end_to_end() {
        colored::control::set_override(false);
        let input = concat!(
            "[\"a\",\"b\",\"c\",\"d\"]\n",
            "{\"hand\":{\"player\":\"a\",\"cards\":[\"mustard\",\"revolver\",\"dining\"]}}\n",
            "{\"suggest\":{\"player\":\"a\",\"cards\":[\"white\",\"knife\",\"conservatory\"],\"showed\":[]}}\n",
        );
        let mut out = Vec::new();
        App::stream(Rules::classic(), Box::new(input.as_bytes()), &mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Rules: classic"));
        assert!(transcript.contains("players = [\"a\",\"b\",\"c\",\"d\"]"));
        assert!(transcript.contains("**** a has this hand: Colonel Mustard, Revolver, Dining room"));
        assert!(transcript.contains(
            "( 0) a suggested Mrs. White with the Knife in the Conservatory ==> nobody has them"
        ));
        assert!(transcript.contains("ANSWER:"));
    }

    #[test]
    fn skips_invalid_events() {
        colored::control::set_override(false);
        let input = concat!(
            "[\"a\",\"b\"]\n",
            "{\"show\":{\"player\":\"z\",\"card\":\"knife\"}}\n",
            "{\"show\":{\"player\":\"a\",\"card\":\"garrote\"}}\n",
            "not even json\n",
            "{\"show\":{\"player\":\"a\",\"card\":\"knife\"}}\n",
        );
        let mut out = Vec::new();
        App::stream(Rules::classic(), Box::new(input.as_bytes()), &mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();
        assert!(!transcript.contains("z showed"));
        assert!(transcript.contains("---- a showed the Knife"));
    }

    #[test]
    fn contradictions_end_the_session() {
        colored::control::set_override(false);
        let input = concat!(
            "[\"a\",\"b\"]\n",
            "{\"hand\":{\"player\":\"a\",\"cards\":[\"mustard\"]}}\n",
            "{\"show\":{\"player\":\"a\",\"card\":\"knife\"}}\n",
        );
        let mut out = Vec::new();
        let result = App::stream(Rules::classic(), Box::new(input.as_bytes()), &mut out);
        assert!(result.is_err());
    }
}
