//! Container locators.
//!
//! EDGAR pages are not always well formed: the filing detail page repeats the
//! same `id` on several containers. A [`Locator`] names both the element to look
//! for and which of several matches is authoritative.

use crate::error::{EdgarError, Result};
use scraper::Selector;
use std::fmt;

/// What to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Elements whose `id` attribute equals the value.
    Id(String),
    /// Elements with the given tag name.
    Tag(String),
}

/// Which match wins when several elements qualify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// First match in document order.
    First,
    /// Last match in document order.
    Last,
    /// Zero-based match in document order.
    Nth(usize),
}

/// Target plus tie-break rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locator {
    /// Element to match.
    pub target: Target,
    /// Rule applied when more than one element matches.
    pub selection: Selection,
}

impl Locator {
    /// First element with the given id.
    pub fn first_id(id: impl Into<String>) -> Self {
        Self {
            target: Target::Id(id.into()),
            selection: Selection::First,
        }
    }

    /// Last element with the given id.
    pub fn last_id(id: impl Into<String>) -> Self {
        Self {
            target: Target::Id(id.into()),
            selection: Selection::Last,
        }
    }

    /// Last element with the given tag.
    pub fn last_tag(tag: impl Into<String>) -> Self {
        Self {
            target: Target::Tag(tag.into()),
            selection: Selection::Last,
        }
    }

    /// Same target, different tie-break rule.
    pub const fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub(crate) fn selector(&self) -> Result<Selector> {
        let source = match &self.target {
            Target::Id(id) => format!("[id=\"{}\"]", id.replace('"', "\\\"")),
            Target::Tag(tag) => tag.clone(),
        };
        Selector::parse(&source).map_err(|e| EdgarError::Selector {
            selector: source.clone(),
            reason: e.to_string(),
        })
    }

    /// Pick the authoritative element out of all matches.
    pub fn pick<I: Iterator>(&self, mut matches: I) -> Option<I::Item> {
        match self.selection {
            Selection::First => matches.next(),
            Selection::Last => matches.last(),
            Selection::Nth(n) => matches.nth(n),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self.selection {
            Selection::First => "first".to_string(),
            Selection::Last => "last".to_string(),
            Selection::Nth(n) => format!("#{n}"),
        };
        match &self.target {
            Target::Id(id) => write!(f, "{rule} element with id {id:?}"),
            Target::Tag(tag) => write!(f, "{rule} <{tag}> element"),
        }
    }
}
