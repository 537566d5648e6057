//! Word difficulty file loading

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::tiers::WordTiers;

/// Reads a text file into an ordered list of lines.
///
/// Line terminators are stripped; the content is not interpreted and
/// in-line whitespace is preserved.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, String> {
    let file =
        File::open(path.as_ref()).map_err(|e| format!("could not open the file: {}", e))?;

    let reader = BufReader::new(file);
    let mut lines = Vec::new();

    for line_result in reader.lines() {
        let line = line_result.map_err(|e| format!("error reading: {}", e))?;
        lines.push(line);
    }

    Ok(lines)
}

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Loads the tiered vocabulary from a word difficulty file.
    ///
    /// Expected format, one tier declaration per line:
    /// `<tag>: <w1>, <w2>, ...` with tags `easy`, `medium` and `hard`.
    /// Unrecognized lines are ignored.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordTiers, String> {
        let lines = read_lines(path)?;
        Ok(WordTiers::parse(&lines))
    }
}
