//! # Commands
//!
//! Parses one line of customer input into an [`Action`] and its argument.
//!
//! ```text
//! "add_item Shopping Cart 1"
//!   │        └──────────────── argument: "Shopping Cart 1"
//!   └───────────────────────── action:   Action::AddItem
//! ```
//!
//! The action is everything before the first space and the argument is
//! everything after it, spacing preserved. The session matches on the
//! parsed [`Action`] instead of looking methods up by name.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Everything a customer can ask the store to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SearchByName,
    SearchByHashtag,
    AddItem,
    RemoveItem,
    /// Report the total and end the session.
    Checkout,
    /// End the session without checking out.
    Exit,
}

impl Action {
    /// All actions, in the order the session's help text lists them.
    pub const ALL: [Action; 6] = [
        Action::SearchByName,
        Action::SearchByHashtag,
        Action::AddItem,
        Action::RemoveItem,
        Action::Checkout,
        Action::Exit,
    ];

    /// The keyword typed at the prompt.
    pub const fn keyword(self) -> &'static str {
        match self {
            Action::SearchByName => "search_by_name",
            Action::SearchByHashtag => "search_by_hashtag",
            Action::AddItem => "add_item",
            Action::RemoveItem => "remove_item",
            Action::Checkout => "checkout",
            Action::Exit => "exit",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The first word of a line was not a known action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("No such action: {0}")]
pub struct ParseCommandError(pub String);

impl FromStr for Action {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.keyword() == s)
            .ok_or_else(|| ParseCommandError(s.to_string()))
    }
}

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub argument: String,
}

impl Command {
    /// Splits a raw input line into action and argument.
    ///
    /// A trailing line ending is ignored. A line with no space has an empty
    /// argument.
    pub fn parse(line: &str) -> Result<Self, ParseCommandError> {
        let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let (keyword, argument) = line.split_once(' ').unwrap_or((line, ""));

        Ok(Command {
            action: keyword.parse()?,
            argument: argument.to_string(),
        })
    }
}
