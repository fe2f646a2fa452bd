use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("wordlist {0} does not exist or is not a regular file")]
    NotAFile(String),
    #[error("could not read wordlist {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Load a newline-delimited wordlist: one trimmed entry per line, in file
/// order. Duplicates and empty-after-trim lines are kept: every line is a
/// word to probe.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>, WordlistError> {
    let display = path.display().to_string();

    let is_file = fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(WordlistError::NotAFile(display));
    }

    let raw = fs::read_to_string(path).map_err(|source| WordlistError::Unreadable {
        path: display,
        source,
    })?;
    Ok(raw.lines().map(str::trim).map(ToOwned::to_owned).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_lines_in_order_keeping_empties_and_duplicates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "admin\n  login \n\nadmin\n").unwrap();

        let words = load_wordlist(file.path()).unwrap();
        assert_eq!(words, vec!["admin", "login", "", "admin"]);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_wordlist(Path::new("/no/such/wordlist.txt")).unwrap_err();
        assert!(matches!(err, WordlistError::NotAFile(_)));
    }

    #[test]
    fn a_directory_is_not_a_wordlist() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_wordlist(dir.path()).unwrap_err();
        assert!(matches!(err, WordlistError::NotAFile(_)));
    }
}
