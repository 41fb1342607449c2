// src/system/console.rs

use colored::Colorize;

/// The kind of a user-facing message. Decides styling and the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Title,
    Info,
    Success,
    Warning,
    Hint,
    Plain,
}

/// Stateless sink for user-facing output.
///
/// Only `report` is required; the helpers exist so call sites read naturally.
pub trait Reporter {
    fn report(&self, level: Level, message: &str);

    fn title(&self, message: &str) {
        self.report(Level::Title, message);
    }

    fn info(&self, message: &str) {
        self.report(Level::Info, message);
    }

    fn success(&self, message: &str) {
        self.report(Level::Success, message);
    }

    fn warn(&self, message: &str) {
        self.report(Level::Warning, message);
    }

    fn hint(&self, message: &str) {
        self.report(Level::Hint, message);
    }

    fn plain(&self, message: &str) {
        self.report(Level::Plain, message);
    }
}

/// Prints to the terminal. Warnings go to stderr, everything else to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalReporter;

impl Reporter for TerminalReporter {
    fn report(&self, level: Level, message: &str) {
        match level {
            Level::Title => println!("{}", message.bold()),
            Level::Info => println!("{}", message.blue()),
            Level::Success => println!("{}", message.green()),
            Level::Warning => eprintln!("{}", message.yellow()),
            Level::Hint => println!("{}", message.dimmed()),
            Level::Plain => println!("{}", message),
        }
    }
}

/// Keeps every message in memory so tests can assert on what the user would see.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    messages: std::cell::RefCell<Vec<(Level, String)>>,
}

#[cfg(test)]
impl RecordingReporter {
    pub(crate) fn messages_at(&self, level: Level) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub(crate) fn warnings(&self) -> Vec<String> {
        self.messages_at(Level::Warning)
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn report(&self, level: Level, message: &str) {
        self.messages.borrow_mut().push((level, message.to_string()));
    }
}
