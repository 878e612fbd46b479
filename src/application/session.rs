use crate::application::machine::VendingMachine;
use crate::domain::ports::{CommandSourceBox, ResponseSinkBox};
use crate::error::Result;
use tracing::{debug, info};

/// Drives one machine from a command source until the source runs dry.
///
/// Each line is processed to completion, and its response delivered to
/// every sink, before the next line is read.
pub struct Session {
    machine: VendingMachine,
    source: CommandSourceBox,
    sinks: Vec<ResponseSinkBox>,
}

impl Session {
    pub fn new(machine: VendingMachine, source: CommandSourceBox) -> Self {
        Self {
            machine,
            source,
            sinks: Vec::new(),
        }
    }

    pub fn with_sink(mut self, sink: ResponseSinkBox) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Runs the session and hands the machine back in its final state.
    pub async fn run(mut self) -> Result<VendingMachine> {
        let mut lines = 0usize;
        while let Some(line) = self.source.next_line().await? {
            let response = self.machine.process(&line)?;
            debug!(%line, %response, "line processed");
            for sink in &mut self.sinks {
                sink.emit(&line, &response).await?;
            }
            lines += 1;
        }
        info!(lines, "session finished");
        Ok(self.machine)
    }
}
