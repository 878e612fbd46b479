use crate::domain::ports::{CommandSource, ResponseSink};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A command source backed by a fixed list of lines.
///
/// Useful for tests and for replaying a recorded script.
#[derive(Debug, Default, Clone)]
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl CommandSource for ScriptedSource {
    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// A sink that keeps every `(line, response)` pair in memory.
///
/// Clones share the same storage, so a test can hand one clone to a session
/// and read the records back through another.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    records: Arc<RwLock<Vec<(String, String)>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn records(&self) -> Vec<(String, String)> {
        self.records.read().await.clone()
    }

    pub async fn responses(&self) -> Vec<String> {
        self.records
            .read()
            .await
            .iter()
            .map(|(_, response)| response.clone())
            .collect()
    }
}

#[async_trait]
impl ResponseSink for CollectingSink {
    async fn emit(&mut self, line: &str, response: &str) -> Result<()> {
        let mut records = self.records.write().await;
        records.push((line.to_string(), response.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_source_yields_in_order() {
        let mut source = ScriptedSource::new(["SERVICE", "GET-A"]);
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("SERVICE"));
        assert_eq!(source.next_line().await.unwrap().as_deref(), Some("GET-A"));
        assert!(source.next_line().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_collecting_sink_clones_share_records() {
        let sink = CollectingSink::new();
        let mut writer = sink.clone();
        writer.emit("SERVICE", "SERVICE-OK").await.unwrap();

        assert_eq!(sink.responses().await, vec!["SERVICE-OK".to_string()]);
    }
}
