//! Adapters between the machine and the outside world: the interactive
//! console and the CSV transcript.

pub mod console;
pub mod csv;
