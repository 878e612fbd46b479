/// A single instruction from a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Service,
    Put(String),
    CoinReturn,
    Get(String),
    Unrecognized(String),
}

impl Command {
    /// Parses one normalised (trimmed, upper-case) token.
    pub fn parse(token: &str) -> Self {
        if token == "SERVICE" {
            Command::Service
        } else if let Some(denomination) = token.strip_prefix("PUT-") {
            Command::Put(denomination.to_string())
        } else if token == "COIN-RETURN" {
            Command::CoinReturn
        } else if let Some(item) = token.strip_prefix("GET-") {
            Command::Get(item.to_string())
        } else {
            Command::Unrecognized(token.to_string())
        }
    }
}

/// Splits a line into commands, in the order given.
///
/// Only segments that are empty before trimming are dropped, and only at the
/// end of the line. A blank or whitespace-only segment anywhere else is kept
/// and comes out as [`Command::Unrecognized`]; so does an entirely empty
/// line. Kept segments are trimmed and upper-cased.
pub fn parse_batch(line: &str) -> Vec<Command> {
    if line.is_empty() {
        return vec![Command::Unrecognized(String::new())];
    }
    let mut segments: Vec<&str> = line.split(',').collect();
    while segments.last().is_some_and(|segment| segment.is_empty()) {
        segments.pop();
    }
    segments
        .iter()
        .map(|segment| Command::parse(&segment.trim().to_uppercase()))
        .collect()
}
