//! Macros for ergonomic transition table construction.

/// Build a `Vec` of default transitions from `from: action -> to` rules.
///
/// # Example
///
/// ```
/// use statekeeper::core::Transition;
/// use statekeeper::transitions;
///
/// let table: Vec<Transition<String>> = transitions! {
///     off: start -> idle,
///     idle: turn_off -> off,
///     idle: move -> moving,
/// };
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table[2].action(), "move");
/// ```
#[macro_export]
macro_rules! transitions {
    (
        $(
            $from:ident : $action:ident -> $to:ident
        ),* $(,)?
    ) => {
        vec![
            $(
                $crate::core::Transition::new(
                    stringify!($from),
                    stringify!($action),
                    stringify!($to),
                )
            ),*
        ]
    };
}

#[cfg(test)]
mod tests {
    use crate::core::Transition;
    use crate::machine::Fsm;

    #[test]
    fn transitions_macro_builds_default_rules() {
        let table: Vec<Transition<String>> = transitions! {
            off: start -> idle,
            moving: turn_off -> california_cruisin
        };

        assert_eq!(table.len(), 2);
        assert_eq!(table[0].from_state(), "off");
        assert_eq!(table[1].to_state(), "california_cruisin");
        assert!(table.iter().all(|t| !t.is_custom()));
    }

    #[test]
    fn transitions_macro_feeds_the_engine() {
        let mut host = String::from("off");
        let mut fsm = Fsm::new(
            &mut host,
            transitions! {
                off: start -> idle,
                idle: move -> moving,
            },
        )
        .unwrap();

        fsm.process("start").unwrap();
        assert_eq!(fsm.process("move").unwrap(), "moving");
    }

    #[test]
    fn transitions_macro_accepts_empty_input() {
        let table: Vec<Transition<String>> = transitions! {};
        assert!(table.is_empty());
    }
}
