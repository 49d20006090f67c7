//! Application layer containing the register engine.
//!
//! `VendingMachine` owns all money and stock state and is the only place
//! that state is mutated. Outer adapters (the command router and the status
//! panel) talk to it through its operations and read accessors.

pub mod machine;
