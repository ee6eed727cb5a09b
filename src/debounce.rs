//! Cancel-and-replace debouncing for high-frequency page events.
//!
//! DESIGN
//! ======
//! Each call to a debounced site replaces the pending arguments and gets a
//! fresh ticket. The browser wrapper [`debounced`] arms one `gloo_timers`
//! timeout per call carrying that ticket; storing the new timeout drops the
//! previous one, which cancels it. When a timer fires, [`Debounce::fire`]
//! hands back the arguments only if its ticket is still the latest, so a
//! superseded timer can never run even if its cancellation raced the drop.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

/// Pending-invocation state for one debounced call site.
#[derive(Debug)]
pub struct Debounce<A> {
    ticket: u64,
    pending: Option<A>,
}

impl<A> Default for Debounce<A> {
    fn default() -> Self {
        Self { ticket: 0, pending: None }
    }
}

impl<A> Debounce<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a call, superseding any pending one. Returns the ticket the
    /// caller's timer must present to [`Self::fire`].
    pub fn call(&mut self, args: A) -> u64 {
        self.ticket = self.ticket.wrapping_add(1);
        self.pending = Some(args);
        self.ticket
    }

    /// Take the pending arguments if `ticket` belongs to the latest call.
    pub fn fire(&mut self, ticket: u64) -> Option<A> {
        if ticket != self.ticket {
            return None;
        }
        self.pending.take()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Wrap `f` so bursts of calls within `wait_ms` collapse into one trailing
/// call with the last arguments.
#[cfg(feature = "hydrate")]
pub fn debounced<A, F>(wait_ms: u32, f: F) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
{
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_timers::callback::Timeout;

    let f = Rc::new(f);
    let state = Rc::new(RefCell::new(Debounce::new()));
    let timer: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move |args: A| {
        let ticket = state.borrow_mut().call(args);
        let f = Rc::clone(&f);
        let state = Rc::clone(&state);
        let timeout = Timeout::new(wait_ms, move || {
            let args = state.borrow_mut().fire(ticket);
            if let Some(args) = args {
                f(args);
            }
        });
        // Dropping the previous timeout cancels it.
        timer.borrow_mut().replace(timeout);
    }
}
