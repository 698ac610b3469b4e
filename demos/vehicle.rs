//! Vehicle State Machine
//!
//! This demo drives a vehicle through its states and shows:
//! - Building a transition table with the `transitions!` macro
//! - Custom transition behavior reading a JSON payload
//! - Rejected actions leaving the machine untouched
//! - Transition history and structured logging via `tracing`
//!
//! Run with: RUST_LOG=statekeeper=debug cargo run --example vehicle

use serde_json::json;
use statekeeper::{transitions, Fsm, FsmConfig, Stateful, Transition};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Vehicle {
    state: String,
    driver: String,
}

impl Stateful for Vehicle {
    fn current_state(&self) -> &str {
        &self.state
    }

    fn set_state(&mut self, state: &str) {
        self.state = state.to_string();
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Vehicle State Machine Demo ===\n");

    let mut table: Vec<Transition<Vehicle>> = transitions! {
        off: start -> idle,
        idle: turn_off -> off,
        idle: move -> moving,
        moving: stop -> idle,
        moving: turn_off -> california_cruisin,
    };
    table.push(Transition::custom(
        "off",
        "start_with_driver",
        "idle",
        |vehicle: &mut Vehicle, to, payload: Option<&serde_json::Value>| {
            if let Some(driver) = payload.and_then(|p| p["driver"].as_str()) {
                vehicle.driver = driver.to_string();
            }
            vehicle.set_state(to);
        },
    ));

    let mut vehicle = Vehicle {
        state: "off".into(),
        driver: "nobody".into(),
    };

    let mut fsm = match Fsm::with_config(&mut vehicle, table, FsmConfig::with_history(None)) {
        Ok(fsm) => fsm,
        Err(e) => {
            eprintln!("Invalid transition table: {e}");
            return;
        }
    };

    println!("Initial state: {}", fsm.current_state());
    println!("Available actions: {:?}\n", fsm.available_actions());

    match fsm.process("move") {
        Ok(state) => println!("Unexpectedly moved to {state}"),
        Err(e) => println!("Rejected: {e}"),
    }

    let steps = [
        ("start_with_driver", Some(json!({ "driver": "Ada" }))),
        ("move", None),
        ("turn_off", None),
    ];
    for (action, payload) in steps {
        let result = match &payload {
            Some(payload) => fsm.process_with(action, payload),
            None => fsm.process(action),
        };
        match result {
            Ok(state) => println!("{action:>18} -> {state}"),
            Err(e) => println!("{action:>18} failed: {e}"),
        }
    }

    println!("\nTerminal: {}", fsm.is_terminal());
    if let Some(history) = fsm.history() {
        println!("Path: {}", history.get_path().join(" -> "));
    }

    println!("\nFinal vehicle: {:?}", vehicle);
    println!("\n=== Demo Complete ===");
}
