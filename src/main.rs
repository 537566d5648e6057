use std::io::{self, BufRead, Write};
use std::process;

use sentence_rater::{Config, Rater};

fn main() {
    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    let rater = match Rater::new(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("Enter a sentence to analyze:");
    let _ = io::stdout().flush();

    let sentence = match read_sentence() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    println!("{}", rater.rate(&sentence));
}

/// Reads one line from standard input, without its terminator
fn read_sentence() -> Result<String, String> {
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| format!("could not read the sentence: {}", e))?;

    if read == 0 {
        return Err("no sentence was entered".to_string());
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }

    Ok(line)
}
