//! Configuration and CLI arguments

use std::path::PathBuf;

/// Default word difficulty file, resolved against the working directory
pub const DEFAULT_DICTIONARY: &str = "word_difficulty.txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// Word difficulty file (default: "word_difficulty.txt")
    pub dictionary_path: PathBuf,
    /// Show help
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY),
            show_help: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-d" | "--dict" => {
                    config.dictionary_path =
                        PathBuf::from(args_iter.next().ok_or("--dict requires a value")?);
                }
                _ => {
                    if arg.starts_with('-') {
                        return Err(format!("unknown option: {}", arg));
                    }
                    return Err(format!("unexpected argument: {}", arg));
                }
            }
        }

        Ok(config)
    }

    pub fn print_help() {
        println!(
            r#"sentence-rater - Lexical complexity rater

USAGE:
    sentence-rater [OPTIONS]

The sentence to analyze is read from standard input after the prompt.

OPTIONS:
    -h, --help           Show this help
    -d, --dict <FILE>    Word difficulty file (default: word_difficulty.txt)

DICTIONARY FORMAT:
    easy: the, and, of, to
    medium: analyze, complex, pattern
    hard: epistemology, heuristic"#
        );
    }
}
