//! # Session
//!
//! The customer dialogue: prompt, read a line, run it against the store,
//! print the outcome.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Session Loop                                    │
//! │                                                                         │
//! │  banner ──► prompt ──► read line ──► Command::parse                    │
//! │               ▲                          │                              │
//! │               │            ┌─────────────┼──────────────┐               │
//! │               │            ▼             ▼              ▼               │
//! │               │       unknown       search / add /   checkout / exit    │
//! │               │       action        remove           (or end of input) │
//! │               │            │             │              │               │
//! │               │            ▼             ▼              ▼               │
//! │               └──── "No such action..."  result or   print total /     │
//! │               └──────────────────────── StoreError   goodbye, return   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store errors are printed and the loop continues. Only terminal I/O
//! failures end the session early.

use std::io::{self, BufRead, Write};

use shelf_core::{Action, Command, Item, Store, StoreError};
use tracing::{debug, info};

const PROMPT: &str = "What would you like to do? ";

const BANNER: &[&str] = &[
    "Welcome to our store!",
    "You can search for items by name or hashtag, add or remove items from your cart, and checkout.",
    "To search for an item by name, type: search_by_name <item_name>",
    "To search for an item by hashtag, type: search_by_hashtag <hashtag>",
    "To add an item to your cart, type: add_item <item_name>",
    "To remove an item from your cart, type: remove_item <item_name>",
    "To finish and pay, type: checkout",
    "To leave without buying, type: exit",
];

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The customer checked out; `total` is what they paid.
    CheckedOut { total: u64 },
    /// The customer typed `exit` or input ran out.
    Exited,
}

/// One customer's visit.
pub struct Session<R, W> {
    store: Store,
    input: R,
    output: W,
    show_banner: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, input: R, output: W) -> Self {
        Session {
            store,
            input,
            output,
            show_banner: true,
        }
    }

    /// Turns the welcome banner on or off.
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Runs until checkout, exit or end of input.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        if self.show_banner {
            for line in BANNER {
                writeln!(self.output, "{}", line)?;
            }
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("End of input");
                writeln!(self.output)?;
                return self.leave();
            }

            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    debug!(error = %e, "Rejected input");
                    writeln!(self.output, "No such action...")?;
                    continue;
                }
            };

            if let Some(end) = self.execute(command.action, &command.argument)? {
                return Ok(end);
            }
        }
    }

    /// Gives back the store and the output stream.
    pub fn into_parts(self) -> (Store, W) {
        (self.store, self.output)
    }

    /// Runs one command. Returns `Some` when the command ends the session.
    fn execute(&mut self, action: Action, argument: &str) -> io::Result<Option<SessionEnd>> {
        debug!(%action, argument = %argument, "Running command");

        match action {
            Action::SearchByName => {
                let results = self.store.search_by_name(argument);
                print_items(&mut self.output, &results)?;
            }
            Action::SearchByHashtag => {
                let results = self.store.search_by_hashtag(argument);
                print_items(&mut self.output, &results)?;
            }
            Action::AddItem => match self.store.add(argument) {
                Ok(item) => writeln!(self.output, "{} was added to your cart.", item.name())?,
                Err(e) => print_error(&mut self.output, &e)?,
            },
            Action::RemoveItem => match self.store.remove(argument) {
                Ok(item) => writeln!(self.output, "{} was removed from your cart.", item.name())?,
                Err(e) => print_error(&mut self.output, &e)?,
            },
            Action::Checkout => {
                let total = self.store.checkout();
                writeln!(self.output, "The total of the purchase is {}.", total)?;
                writeln!(self.output, "Thank you for shopping with us!")?;
                info!(total, items = self.store.cart().len(), "Checked out");
                return Ok(Some(SessionEnd::CheckedOut { total }));
            }
            Action::Exit => return self.leave().map(Some),
        }

        Ok(None)
    }

    fn leave(&mut self) -> io::Result<SessionEnd> {
        writeln!(self.output, "Goodbye!")?;
        info!(items = self.store.cart().len(), "Left without checking out");
        Ok(SessionEnd::Exited)
    }
}

fn print_items<W: Write>(output: &mut W, items: &[&Item]) -> io::Result<()> {
    if items.is_empty() {
        return writeln!(output, "No matching items.");
    }

    for item in items {
        writeln!(output, "{}", item)?;
        writeln!(output)?;
    }
    Ok(())
}

fn print_error<W: Write>(output: &mut W, error: &StoreError) -> io::Result<()> {
    debug!(error = %error, subject = %error.subject(), "Command failed");
    writeln!(output, "{}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Store {
        Store::new(vec![
            Item::new("Aaaa", 1, Vec::<String>::new(), "First"),
            Item::new("Bbbb", 2, ["H1"], "Second"),
            Item::new("Shopping Cart 1", 3, ["H1"], "Cart"),
        ])
    }

    /// Runs a quiet session over `input` and returns how it ended plus the transcript.
    fn run(input: &str) -> (SessionEnd, String) {
        let mut session = Session::new(store(), input.as_bytes(), Vec::new()).with_banner(false);
        let end = session.run().unwrap();
        let (_, output) = session.into_parts();
        (end, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_checkout_reports_total_and_ends() {
        let (end, out) = run("add_item Bbbb\nadd_item Shopping\ncheckout\nadd_item Aaaa\n");
        assert_eq!(end, SessionEnd::CheckedOut { total: 5 });
        assert!(out.contains("Bbbb was added to your cart."));
        assert!(out.contains("Shopping Cart 1 was added to your cart."));
        assert!(out.contains("The total of the purchase is 5.\nThank you for shopping with us!\n"));
        assert!(!out.contains("Aaaa was added"));
    }

    #[test]
    fn test_checkout_untouched_store_is_zero() {
        let (end, out) = run("checkout\n");
        assert_eq!(end, SessionEnd::CheckedOut { total: 0 });
        assert!(out.contains("The total of the purchase is 0."));
    }

    #[test]
    fn test_unknown_action_continues() {
        let (end, out) = run("dance\nexit\n");
        assert_eq!(end, SessionEnd::Exited);
        assert!(out.contains("No such action...\n"));
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_store_errors_do_not_end_session() {
        let (end, out) =
            run("add_item \nremove_item Aaaa\nadd_item Aaaa\nadd_item Aaaa\ncheckout\n");
        assert!(out.contains("Too many matches for the item name \"\"."));
        assert!(out.contains("Item Aaaa does not exist in the shopping cart."));
        assert!(out.contains("Item Aaaa already exists in the shopping cart."));
        assert_eq!(end, SessionEnd::CheckedOut { total: 1 });
    }

    #[test]
    fn test_search_prints_ranked_items() {
        let (_, out) = run("add_item Shopping Cart 1\nsearch_by_name \nexit\n");
        let bbbb = out.find("Name:\t\t\tBbbb").unwrap();
        let aaaa = out.find("Name:\t\t\tAaaa").unwrap();
        assert!(bbbb < aaaa);
        assert!(!out.contains("Name:\t\t\tShopping Cart 1"));
    }

    #[test]
    fn test_search_by_hashtag_without_results() {
        let (_, out) = run("search_by_hashtag H2\nexit\n");
        assert!(out.contains("No matching items."));
    }

    #[test]
    fn test_remove_item() {
        let (end, out) = run("add_item Aaaa\nremove_item Aa\ncheckout\n");
        assert!(out.contains("Aaaa was removed from your cart."));
        assert_eq!(end, SessionEnd::CheckedOut { total: 0 });
    }

    #[test]
    fn test_end_of_input_exits() {
        let (end, out) = run("add_item Aaaa\n");
        assert_eq!(end, SessionEnd::Exited);
        assert!(out.ends_with("Goodbye!\n"));
    }

    #[test]
    fn test_banner() {
        let mut session = Session::new(store(), "exit\n".as_bytes(), Vec::new());
        session.run().unwrap();
        let (_, output) = session.into_parts();
        let out = String::from_utf8(output).unwrap();
        assert!(out.starts_with("Welcome to our store!\n"));
        assert!(out.contains(PROMPT));
    }
}
