//! Transitions and the behavior executed when one fires.

use super::host::Stateful;
use crate::definition::TransitionDef;
use serde_json::Value;
use std::any::TypeId;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Behavior executed when a transition fires.
///
/// The behavior is fully responsible for moving the host into `to_state`,
/// usually by calling [`Stateful::set_state`], and may perform any other
/// side effects on the host before or after doing so. A behavior that leaves
/// the host anywhere else is a bug: the engine logs a warning and trips a
/// debug assertion.
///
/// # Example
///
/// ```rust
/// use statekeeper::core::{Stateful, TransitionBehavior};
/// use serde_json::Value;
///
/// struct Audited;
///
/// impl TransitionBehavior<String> for Audited {
///     fn apply(&self, host: &mut String, to_state: &str, _payload: Option<&Value>) {
///         host.set_state(to_state);
///     }
/// }
/// ```
pub trait TransitionBehavior<H, P = Value>: Send + Sync {
    /// Move `host` into `to_state`, using `payload` if the behavior needs it.
    fn apply(&self, host: &mut H, to_state: &str, payload: Option<&P>);
}

/// The default behavior: set the host's state and nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetState;

impl<H: Stateful, P> TransitionBehavior<H, P> for SetState {
    fn apply(&self, host: &mut H, to_state: &str, _payload: Option<&P>) {
        host.set_state(to_state);
    }
}

/// Whether `B` is the default [`SetState`] behavior.
pub(crate) fn is_set_state<B: 'static>() -> bool {
    TypeId::of::<B>() == TypeId::of::<SetState>()
}

/// Adapter turning a closure into a [`TransitionBehavior`].
pub struct FnBehavior<F, H, P> {
    f: F,
    _phantom: PhantomData<fn(&mut H, Option<&P>)>,
}

impl<F, H, P> FnBehavior<F, H, P>
where
    F: Fn(&mut H, &str, Option<&P>) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<F, H, P> TransitionBehavior<H, P> for FnBehavior<F, H, P>
where
    F: Fn(&mut H, &str, Option<&P>) + Send + Sync,
{
    fn apply(&self, host: &mut H, to_state: &str, payload: Option<&P>) {
        (self.f)(host, to_state, payload)
    }
}

/// Shared handle to a transition behavior.
pub type BehaviorHandle<H, P> = Arc<dyn TransitionBehavior<H, P>>;

/// An immutable `(from_state, action, to_state)` rule.
///
/// For table purposes a transition is identified by its
/// `(from_state, action)` pair. The attached behavior defaults to
/// [`SetState`].
///
/// # Example
///
/// ```rust
/// use statekeeper::core::Transition;
///
/// let start: Transition<String> = Transition::new("off", "start", "idle");
///
/// assert_eq!(start.from_state(), "off");
/// assert_eq!(start.action(), "start");
/// assert_eq!(start.to_state(), "idle");
/// assert!(!start.is_custom());
/// ```
pub struct Transition<H, P = Value> {
    from_state: String,
    action: String,
    to_state: String,
    behavior: BehaviorHandle<H, P>,
    custom: bool,
}

impl<H: Stateful, P> Transition<H, P> {
    /// Create a transition that only sets the host's state.
    pub fn new(
        from_state: impl Into<String>,
        action: impl Into<String>,
        to_state: impl Into<String>,
    ) -> Self {
        Self {
            from_state: from_state.into(),
            action: action.into(),
            to_state: to_state.into(),
            behavior: Arc::new(SetState),
            custom: false,
        }
    }
}

impl<H: 'static, P: 'static> Transition<H, P> {
    /// Create a transition whose execution is delegated to `behavior`.
    ///
    /// Attaching [`SetState`] explicitly yields a plain, non-custom transition.
    pub fn with_behavior<B>(
        from_state: impl Into<String>,
        action: impl Into<String>,
        to_state: impl Into<String>,
        behavior: B,
    ) -> Self
    where
        B: TransitionBehavior<H, P> + 'static,
    {
        Self::from_parts(
            from_state.into(),
            action.into(),
            to_state.into(),
            Arc::new(behavior),
            !is_set_state::<B>(),
        )
    }

    /// Create a transition whose execution is delegated to a closure.
    ///
    /// ```rust
    /// use statekeeper::core::{Stateful, Transition};
    ///
    /// let shout: Transition<String> = Transition::custom("idle", "shout", "loud", |host: &mut String, to, _| {
    ///     println!("{}!", to.to_uppercase());
    ///     host.set_state(to);
    /// });
    /// assert!(shout.is_custom());
    /// ```
    pub fn custom<F>(
        from_state: impl Into<String>,
        action: impl Into<String>,
        to_state: impl Into<String>,
        f: F,
    ) -> Self
    where
        F: Fn(&mut H, &str, Option<&P>) + Send + Sync + 'static,
    {
        Self::with_behavior(from_state, action, to_state, FnBehavior::new(f))
    }
}

impl<H, P> Transition<H, P> {
    pub(crate) fn from_parts(
        from_state: String,
        action: String,
        to_state: String,
        behavior: BehaviorHandle<H, P>,
        custom: bool,
    ) -> Self {
        Self {
            from_state,
            action,
            to_state,
            behavior,
            custom,
        }
    }

    pub fn from_state(&self) -> &str {
        &self.from_state
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn to_state(&self) -> &str {
        &self.to_state
    }

    /// Whether this transition carries behavior other than [`SetState`].
    pub fn is_custom(&self) -> bool {
        self.custom
    }

    /// Run the attached behavior against `host`.
    pub(crate) fn execute(&self, host: &mut H, payload: Option<&P>) {
        self.behavior.apply(host, &self.to_state, payload);
    }

    /// The plain `(from, action, to)` triple, without behavior.
    pub fn definition(&self) -> TransitionDef {
        TransitionDef {
            from: self.from_state.clone(),
            action: self.action.clone(),
            to: self.to_state.clone(),
        }
    }
}

impl<H, P> Clone for Transition<H, P> {
    fn clone(&self) -> Self {
        Self {
            from_state: self.from_state.clone(),
            action: self.action.clone(),
            to_state: self.to_state.clone(),
            behavior: Arc::clone(&self.behavior),
            custom: self.custom,
        }
    }
}

impl<H, P> fmt::Debug for Transition<H, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from_state", &self.from_state)
            .field("action", &self.action)
            .field("to_state", &self.to_state)
            .field("custom", &self.custom)
            .finish()
    }
}

/// An action given either by name or by a transition carrying that name.
///
/// Both variants resolve to the same action name, so callers can check or
/// fire an action with whichever value they have at hand.
pub enum ActionRef<'a, H, P = Value> {
    Name(&'a str),
    Transition(&'a Transition<H, P>),
}

impl<'a, H, P> ActionRef<'a, H, P> {
    /// The action name this reference resolves to.
    pub fn action(&self) -> &'a str {
        match *self {
            ActionRef::Name(name) => name,
            ActionRef::Transition(transition) => transition.action(),
        }
    }
}

impl<H, P> Clone for ActionRef<'_, H, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, P> Copy for ActionRef<'_, H, P> {}

impl<H, P> fmt::Debug for ActionRef<'_, H, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionRef::Name(name) => f.debug_tuple("Name").field(name).finish(),
            ActionRef::Transition(transition) => {
                f.debug_tuple("Transition").field(transition).finish()
            }
        }
    }
}

impl<'a, H, P> From<&'a str> for ActionRef<'a, H, P> {
    fn from(name: &'a str) -> Self {
        ActionRef::Name(name)
    }
}

impl<'a, H, P> From<&'a String> for ActionRef<'a, H, P> {
    fn from(name: &'a String) -> Self {
        ActionRef::Name(name.as_str())
    }
}

impl<'a, H, P> From<&'a Transition<H, P>> for ActionRef<'a, H, P> {
    fn from(transition: &'a Transition<H, P>) -> Self {
        ActionRef::Transition(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default)]
    struct Vehicle {
        state: String,
        prop: String,
    }

    impl Stateful for Vehicle {
        fn current_state(&self) -> &str {
            &self.state
        }

        fn set_state(&mut self, state: &str) {
            self.state = state.to_string();
        }
    }

    #[test]
    fn new_transition_uses_set_state() {
        let transition: Transition<Vehicle> = Transition::new("off", "start", "idle");
        let mut host = Vehicle::default();

        transition.execute(&mut host, None);

        assert_eq!(host.state, "idle");
        assert!(!transition.is_custom());
    }

    #[test]
    fn custom_transition_receives_payload() {
        let transition: Transition<Vehicle> = Transition::custom(
            "off",
            "custom_start",
            "idle",
            |host: &mut Vehicle, to, payload: Option<&Value>| {
                if let Some(prop) = payload.and_then(|p| p["prop"].as_str()) {
                    host.prop = prop.to_string();
                }
                host.set_state(to);
            },
        );
        let mut host = Vehicle::default();

        transition.execute(&mut host, Some(&json!({ "prop": "customized" })));

        assert_eq!(host.state, "idle");
        assert_eq!(host.prop, "customized");
        assert!(transition.is_custom());
    }

    #[test]
    fn behavior_struct_can_be_attached() {
        struct Twice;

        impl TransitionBehavior<Vehicle> for Twice {
            fn apply(&self, host: &mut Vehicle, to_state: &str, _payload: Option<&Value>) {
                host.prop.push_str("first;");
                host.set_state(to_state);
                host.prop.push_str("second");
            }
        }

        let transition: Transition<Vehicle> = Transition::with_behavior("a", "go", "b", Twice);
        let mut host = Vehicle::default();
        transition.execute(&mut host, None);

        assert_eq!(host.state, "b");
        assert_eq!(host.prop, "first;second");
    }

    #[test]
    fn explicit_set_state_is_not_custom() {
        let transition: Transition<Vehicle> =
            Transition::with_behavior("off", "start", "idle", SetState);
        let closure: Transition<Vehicle> =
            Transition::custom("off", "start", "idle", |host: &mut Vehicle, to, _| {
                host.set_state(to)
            });

        assert!(!transition.is_custom());
        assert!(closure.is_custom());
    }

    #[test]
    fn action_ref_resolves_name_from_both_variants() {
        let transition: Transition<String> = Transition::new("off", "start", "idle");
        let owned = String::from("start");

        let by_str: ActionRef<'_, String> = "start".into();
        let by_string: ActionRef<'_, String> = (&owned).into();
        let by_transition: ActionRef<'_, String> = (&transition).into();

        assert_eq!(by_str.action(), "start");
        assert_eq!(by_string.action(), "start");
        assert_eq!(by_transition.action(), "start");
    }

    #[test]
    fn clone_shares_behavior() {
        let transition: Transition<Vehicle> =
            Transition::custom("a", "go", "b", |host: &mut Vehicle, to, _| host.set_state(to));
        let cloned = transition.clone();

        assert!(Arc::ptr_eq(&transition.behavior, &cloned.behavior));
        assert_eq!(cloned.definition(), transition.definition());
    }

    #[test]
    fn debug_omits_behavior() {
        let transition: Transition<String> = Transition::new("off", "start", "idle");
        let rendered = format!("{transition:?}");

        assert!(rendered.contains("\"off\""));
        assert!(rendered.contains("custom: false"));
    }
}
