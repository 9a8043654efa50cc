// logdiff - app/prompt.rs
//
// Interactive yes/no question asking whether to save the report.
// Generic over reader/writer so it can be driven from tests.

use crate::util::constants;
use std::io::{self, BufRead, Write};

/// True for `y` / `yes` in any case, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Show the save prompt on `output` and read one answer line from `input`.
///
/// End of input counts as "no".
pub fn ask_save<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<bool> {
    output.write_all(constants::SAVE_PROMPT.as_bytes())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let save = is_affirmative(&answer);
    tracing::debug!(answer = answer.trim(), save, "Save prompt answered");
    Ok(save)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_affirmative_answers() {
        for answer in ["y", "Y", "yes", "YES", " Yes \n"] {
            assert!(is_affirmative(answer), "{answer:?} should be yes");
        }
    }

    #[test]
    fn test_everything_else_is_no() {
        for answer in ["", "n", "no", "yep", "ye s", "1"] {
            assert!(!is_affirmative(answer), "{answer:?} should be no");
        }
    }

    #[test]
    fn test_ask_save_writes_prompt_and_reads_answer() {
        let mut shown = Vec::new();
        let save = ask_save(Cursor::new("yes\n"), &mut shown).unwrap();
        assert!(save);
        assert_eq!(
            String::from_utf8(shown).unwrap(),
            "Do you want to save the output messages to a file? (y/n): "
        );
    }

    #[test]
    fn test_ask_save_eof_is_no() {
        let save = ask_save(Cursor::new(""), io::sink()).unwrap();
        assert!(!save);
    }
}
