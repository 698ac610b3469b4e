//! Statekeeper: a small finite state machine engine
//!
//! Statekeeper drives the state of an external host object through a fixed
//! table of `(from_state, action) -> to_state` transitions. The engine
//! validates every action against the current state, executes the matching
//! transition on the host and keeps its own copy of the state in lockstep.
//!
//! # Core Concepts
//!
//! - **Host**: any type implementing [`Stateful`], borrowed by the engine
//! - **Transition**: an immutable rule, optionally carrying custom behavior
//! - **Fsm**: the engine that builds the table and processes actions
//!
//! # Example
//!
//! ```rust
//! use statekeeper::{transitions, Fsm, FsmError, Stateful};
//!
//! #[derive(Debug)]
//! struct Vehicle {
//!     state: String,
//! }
//!
//! impl Stateful for Vehicle {
//!     fn current_state(&self) -> &str {
//!         &self.state
//!     }
//!
//!     fn set_state(&mut self, state: &str) {
//!         self.state = state.to_string();
//!     }
//! }
//!
//! let mut vehicle = Vehicle { state: "off".into() };
//! let mut fsm = Fsm::new(&mut vehicle, transitions! {
//!     off: start -> idle,
//!     idle: turn_off -> off,
//!     idle: move -> moving,
//!     moving: stop -> idle,
//!     moving: turn_off -> california_cruisin,
//! })
//! .unwrap();
//!
//! assert!(matches!(fsm.process("move"), Err(FsmError::InvalidAction { .. })));
//!
//! fsm.process("start").unwrap();
//! fsm.process("move").unwrap();
//! assert_eq!(fsm.process("turn_off").unwrap(), "california_cruisin");
//! assert_eq!(vehicle.state, "california_cruisin");
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod machine;

// Re-export commonly used types
pub use crate::core::{ActionRef, Stateful, Transition, TransitionBehavior};
pub use machine::{Fsm, FsmConfig, FsmError};
