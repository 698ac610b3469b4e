//! The state machine engine.
//!
//! # Key Concepts
//!
//! - **Transition table**: `from_state -> action -> Transition`, built once
//! - **Fsm**: validates actions against the table and executes transitions
//!   on a borrowed host object
//! - **Errors**: duplicate registrations fail construction, invalid actions
//!   fail a single `process` call and leave the engine usable

mod config;
mod error;
mod fsm;
mod table;

pub use config::FsmConfig;
pub use error::FsmError;
pub use fsm::Fsm;
pub use table::TransitionTable;
