//! Application layer: the command processor and the loops that drive it.
//!
//! `VendingMachine` interprets command lines against its inventories.
//! `Session` feeds it from a `CommandSource` and fans responses out to
//! `ResponseSink`s; `SharedMachine` serialises access for concurrent hosts.

pub mod machine;
pub mod session;
pub mod shared;
