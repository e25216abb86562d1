use tokio::sync::mpsc;

/// Anything that can receive actions of type `A`.
///
/// Implemented for closures, unbounded channels, references and [`Store`](crate::Store), so a
/// flow can report to whichever observer the caller owns.
pub trait Dispatch<A> {
    /// Delivers a single action to the observer.
    fn dispatch(&self, action: A);
}

impl<A, F> Dispatch<A> for F
where
    F: Fn(A),
{
    fn dispatch(&self, action: A) {
        self(action)
    }
}

impl<A> Dispatch<A> for mpsc::UnboundedSender<A> {
    fn dispatch(&self, action: A) {
        if self.send(action).is_err() {
            tracing::debug!("Dispatch receiver dropped, discarding action");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    fn report<D: Dispatch<u32> + ?Sized>(dispatch: &D, values: &[u32]) {
        for value in values {
            dispatch.dispatch(*value);
        }
    }

    #[test]
    fn test_closure_dispatch() {
        let seen = Mutex::new(Vec::new());
        let dispatch = |value: u32| seen.lock().unwrap().push(value);

        report(&dispatch, &[1, 2, 3]);

        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_channel_dispatch() {
        let (tx, mut rx) = mpsc::unbounded_channel();

        report(&tx, &[7, 8]);

        assert_eq!(rx.try_recv().unwrap(), 7);
        assert_eq!(rx.try_recv().unwrap(), 8);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_channel_dispatch_after_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel::<u32>();
        drop(rx);

        // Must not panic
        report(&tx, &[1]);
    }
}
