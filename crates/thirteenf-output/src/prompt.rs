//! Yes/no questions asked while resolving file conflicts.

use std::collections::VecDeque;
use std::io;

/// Capability to ask the user a yes/no question.
pub trait Prompt {
    /// Ask `question` and report whether the answer was affirmative.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        (**self).confirm(question)
    }
}

/// Whether a typed answer means yes (`y` or `yes`, any case).
///
/// ```
/// # use thirteenf_output::is_affirmative;
/// assert!(is_affirmative(" Yes\n"));
/// assert!(!is_affirmative("yep"));
/// ```
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prompt answering from a fixed script; answers `no` once the script runs out.
///
/// Questions asked are kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Answer with `answers`, in order.
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.asked.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or(false))
    }
}
