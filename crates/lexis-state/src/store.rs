use std::marker::PhantomData;

use tokio::sync::watch;

use crate::{Dispatch, Reducer};

/// Holds the current state for reducer `R` and publishes every change to its subscribers.
///
/// Dispatching is synchronous: when [`Dispatch::dispatch`] returns, the new state is visible
/// through [`Store::state`] and has been sent to all subscribers.
pub struct Store<R: Reducer> {
    sender: watch::Sender<R::State>,
    _reducer: PhantomData<fn() -> R>,
}

impl<R: Reducer> Store<R> {
    /// Creates a store holding `initial` as its current state.
    pub fn new(initial: R::State) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender,
            _reducer: PhantomData,
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.sender.borrow().clone()
    }

    /// Subscribes to state changes. The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.sender.subscribe()
    }
}

impl<R: Reducer> Default for Store<R>
where
    R::State: Default,
{
    fn default() -> Self {
        Self::new(R::State::default())
    }
}

impl<R: Reducer> Dispatch<R::Action> for Store<R> {
    fn dispatch(&self, action: R::Action) {
        self.sender.send_modify(|state| *state = R::reduce(state, &action));
        tracing::trace!(
            receivers = self.sender.receiver_count(),
            "Store state updated"
        );
    }
}
