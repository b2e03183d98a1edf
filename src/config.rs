//! Command-line configuration
//!
//! The dictionary location comes from `--dictionary`, then the
//! `KIRSTIFY_DICTIONARY` environment variable, then `./dictionary.json`.

use crate::error::{LoadError, LoadResult};
use crate::random::RandomPolicy;
use crate::transform::Options;
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

pub const DEFAULT_DICTIONARY: &str = "./dictionary.json";
pub const DICTIONARY_ENV: &str = "KIRSTIFY_DICTIONARY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File path or HTTP(S) URL of the dictionary
    pub dictionary: String,
    pub options: Options,
    pub interactive: bool,
    pub verbose: bool,
    /// Text given on the command line; stdin is read when absent
    pub text: Option<String>,
}

pub fn command() -> Command {
    Command::new("kirstify")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Swap words for longer synonyms, keeping their case")
        .arg(
            Arg::new("text")
                .help("Text to transform (default: read stdin)")
                .index(1),
        )
        .arg(
            Arg::new("dictionary")
                .long("dictionary")
                .short('d')
                .env(DICTIONARY_ENV)
                .help("Dictionary JSON file or http(s) URL")
                .default_value(DEFAULT_DICTIONARY),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Use a fixed random seed instead of seeding from the text")
                .value_parser(value_parser!(u64))
                .conflicts_with("random"),
        )
        .arg(
            Arg::new("random")
                .long("random")
                .help("Pick synonyms non-deterministically")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-expand")
                .long("no-expand")
                .help("Do not expand contractions and slang")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("whole-text")
                .long("whole-text")
                .help("Treat the input as one unit instead of line by line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-apostrophes")
                .long("no-apostrophes")
                .help("Split words at apostrophes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("interactive")
                .long("interactive")
                .short('i')
                .help("Read text repeatedly; an empty line transforms it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log each substitution")
                .action(ArgAction::SetTrue),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> LoadResult<Self> {
        let dictionary = matches
            .get_one::<String>("dictionary")
            .cloned()
            .ok_or_else(|| LoadError::Config("no dictionary location".to_string()))?;

        let random = if matches.get_flag("random") {
            RandomPolicy::Ambient
        } else if let Some(seed) = matches.get_one::<u64>("seed") {
            RandomPolicy::Fixed(*seed)
        } else {
            RandomPolicy::Seeded
        };

        let options = Options::new()
            .with_random_policy(random)
            .with_expansion(!matches.get_flag("no-expand"))
            .with_line_aware(!matches.get_flag("whole-text"))
            .with_apostrophes(!matches.get_flag("no-apostrophes"));

        Ok(Config {
            dictionary,
            options,
            interactive: matches.get_flag("interactive"),
            verbose: matches.get_flag("verbose"),
            text: matches.get_one::<String>("text").cloned(),
        })
    }

    pub fn from_args<I, T>(args: I) -> Result<Self, Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_args(["kirstify", "hello"]).unwrap();
        assert_eq!(config.text.as_deref(), Some("hello"));
        assert_eq!(config.options, Options::default());
        assert!(!config.interactive);
        assert!(!config.verbose);
    }

    #[test]
    fn test_flags() {
        let config = Config::from_args([
            "kirstify",
            "--dictionary",
            "https://example.org/d.json",
            "--seed",
            "42",
            "--no-expand",
            "--whole-text",
            "--no-apostrophes",
            "-i",
            "-v",
        ])
        .unwrap();
        assert_eq!(config.dictionary, "https://example.org/d.json");
        assert_eq!(config.options.random, RandomPolicy::Fixed(42));
        assert!(!config.options.expand);
        assert!(!config.options.line_aware);
        assert!(!config.options.apostrophes);
        assert!(config.interactive);
        assert!(config.verbose);
        assert_eq!(config.text, None);
    }

    #[test]
    fn test_random_policy() {
        let config = Config::from_args(["kirstify", "--random"]).unwrap();
        assert_eq!(config.options.random, RandomPolicy::Ambient);
    }

    #[test]
    fn test_seed_conflicts_with_random() {
        assert!(Config::from_args(["kirstify", "--random", "--seed", "1"]).is_err());
    }

    #[test]
    fn test_bad_seed() {
        assert!(Config::from_args(["kirstify", "--seed", "abc"]).is_err());
    }
}
