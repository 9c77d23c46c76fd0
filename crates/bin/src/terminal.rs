//! Terminal input for values not given on the command line.

use std::io::{self, BufRead, Write};
use thirteenf::output::{Prompt, is_affirmative};

/// Free-text questions, on top of the yes/no [`Prompt`].
pub(crate) trait Terminal: Prompt {
    /// Print `question` and read one line, without its line terminator.
    fn ask(&mut self, question: &str) -> io::Result<String>;

    /// First filing type, then more until a blank line.
    fn ask_filing_types(&mut self) -> io::Result<Vec<String>> {
        let mut types =
            vec![self.ask("Enter the filing type (e.g. 13F) you want included: ")?];
        loop {
            let more = self.ask(
                "Enter another filing type if desired (just hit enter if you want to skip): ",
            )?;
            if more.is_empty() {
                break;
            }
            types.push(more);
        }
        Ok(types)
    }
}

/// Reads answers from stdin, printing questions to stdout.
#[derive(Debug, Default)]
pub(crate) struct TerminalPrompt;

impl Terminal for TerminalPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(question.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(is_affirmative(&self.ask(question)?))
    }
}
