use crate::error::Result;
use async_trait::async_trait;

/// Supplies command lines to a session, one batch per line.
#[async_trait]
pub trait CommandSource: Send {
    /// Returns `None` once the source is exhausted.
    async fn next_line(&mut self) -> Result<Option<String>>;
}

/// Receives each command line together with the response it produced.
#[async_trait]
pub trait ResponseSink: Send {
    async fn emit(&mut self, line: &str, response: &str) -> Result<()>;
}

pub type CommandSourceBox = Box<dyn CommandSource>;
pub type ResponseSinkBox = Box<dyn ResponseSink>;
