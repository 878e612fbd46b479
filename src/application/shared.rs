use crate::application::machine::{MachineSnapshot, VendingMachine};
use crate::error::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

/// A machine that can be driven from several tasks at once.
///
/// Each call holds the lock for its whole command line, so a purchase (and
/// the reserve read its change plan depends on) never interleaves with
/// another caller's commands.
#[derive(Clone)]
pub struct SharedMachine {
    inner: Arc<Mutex<VendingMachine>>,
}

impl SharedMachine {
    pub fn new(machine: VendingMachine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    pub async fn process(&self, line: &str) -> Result<String> {
        let mut machine = self.inner.lock().await;
        machine.process(line)
    }

    pub async fn snapshot(&self) -> MachineSnapshot {
        self.inner.lock().await.snapshot()
    }
}
