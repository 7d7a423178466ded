use crate::error::{CatalogError, Result};
use crate::text::trim;
use std::io::{BufRead, Write};

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `question` and reads one line, without its line ending.
    /// `None` means the input is exhausted.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let answer = line.trim_end_matches(['\r', '\n']).to_string();
        Ok(Some(answer))
    }

    /// Like [`ask`](Self::ask), but end of input is an `EmptyInput` error for `field`.
    pub fn require(&mut self, question: &str, field: &'static str) -> Result<String> {
        self.ask(question)?.ok_or(CatalogError::EmptyInput(field))
    }

    /// `yes` or `y`, in any case, confirms. Anything else, including end of
    /// input, declines.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self
            .ask(question)?
            .map(|answer| {
                let answer = trim(&answer);
                answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y")
            })
            .unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_strips_line_endings_only() {
        let mut p = prompter("  csci100 \r\n");
        assert_eq!(p.ask("? ").unwrap().as_deref(), Some("  csci100 "));
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "? ");
    }

    #[test]
    fn ask_reports_end_of_input() {
        let mut p = prompter("");
        assert_eq!(p.ask("? ").unwrap(), None);
    }

    #[test]
    fn require_turns_end_of_input_into_empty_input() {
        let mut p = prompter("");
        assert!(matches!(
            p.require("Title: ", "Course title"),
            Err(CatalogError::EmptyInput("Course title"))
        ));
    }

    #[test]
    fn confirm_accepts_yes_variants() {
        let mut p = prompter("YES\n y \nno\nyess\n");
        assert!(p.confirm("?").unwrap());
        assert!(p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
        assert!(!p.confirm("?").unwrap());
    }
}
