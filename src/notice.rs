use std::fmt;

/// Which remote collection a fetch was loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Games,
    Bets,
}

impl Resource {
    /// Generic notice for failures that carry no usable server message.
    pub fn unknown_error(self) -> &'static str {
        match self {
            Resource::Games => "An unknown error occurred while fetching the games!",
            Resource::Bets => "An unknown error occurred while fetching the bets!",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Games => f.write_str("games"),
            Resource::Bets => f.write_str("bets"),
        }
    }
}

/// Sink for blocking, user-visible notices. Notices are not remembered.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Writes notices to stderr, for the command line front end.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
