/// Describes how an action transforms a state into the next one.
///
/// Reducers are pure: they receive the previous state by reference and return the next one,
/// without side effects.
pub trait Reducer {
    /// The state managed by the reducer.
    type State: Clone + Send + Sync + 'static;
    /// The actions the reducer understands.
    type Action;

    /// Computes the state that follows `state` once `action` has been applied.
    fn reduce(state: &Self::State, action: &Self::Action) -> Self::State;
}
