//! Request coalescing for duplicate in-flight async work.
//!
//! DESIGN
//! ======
//! A single slot tracks whether a flight is active. The first caller becomes
//! the leader and runs the real future; callers arriving while the slot is
//! occupied park a oneshot waiter in it and receive a clone of the leader's
//! result. The leader empties the slot before fanning out, so the very next
//! call after a settled flight starts a fresh request. If the leader is
//! dropped mid-flight the slot is emptied on the way out and every parked
//! waiter retries, so one cancelled caller never strands the rest.

#[cfg(test)]
#[path = "single_flight_test.rs"]
mod single_flight_test;

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::channel::oneshot;

type Waiters<T> = Vec<oneshot::Sender<T>>;

/// Coalesces concurrent calls into one shared async computation.
///
/// Clones share one slot, so every holder of a clone participates in the
/// same coalescing domain.
pub struct SingleFlight<T> {
    slot: Arc<Mutex<Option<Waiters<T>>>>,
}

impl<T> Clone for SingleFlight<T> {
    fn clone(&self) -> Self {
        Self { slot: Arc::clone(&self.slot) }
    }
}

impl<T> Default for SingleFlight<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SingleFlight<T> {
    pub fn new() -> Self {
        Self { slot: Arc::new(Mutex::new(None)) }
    }

    /// Whether a flight is currently active.
    pub fn in_flight(&self) -> bool {
        self.lock().is_some()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Waiters<T>>> {
        // A poisoned slot still holds consistent waiter state.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> SingleFlight<T> {
    /// Run `make()` once for all concurrent callers.
    ///
    /// The caller that finds the slot empty claims it and awaits the real
    /// future; everyone else waits for that result. The slot is emptied when
    /// the flight settles, success or failure, before results fan out.
    pub async fn run<F, Fut>(&self, make: F) -> T
    where
        F: Fn() -> Fut,
        Fut: Future<Output = T>,
    {
        loop {
            // Lock scope: decide leader vs. waiter without holding the
            // guard across an await point.
            let waiter = {
                let mut slot = self.lock();
                match slot.as_mut() {
                    Some(waiters) => {
                        let (tx, rx) = oneshot::channel();
                        waiters.push(tx);
                        Some(rx)
                    }
                    None => {
                        *slot = Some(Vec::new());
                        None
                    }
                }
            };

            match waiter {
                Some(rx) => {
                    if let Ok(value) = rx.await {
                        return value;
                    }
                    // Leader dropped before settling; retry for leadership.
                }
                None => {
                    let mut vacate = VacateOnDrop { flight: self, armed: true };
                    let value = make().await;
                    vacate.armed = false;
                    let waiters = self.lock().take().unwrap_or_default();
                    for tx in waiters {
                        let _ = tx.send(value.clone());
                    }
                    return value;
                }
            }
        }
    }
}

/// Empties the slot if the leader future is dropped mid-flight. Dropping the
/// parked senders wakes every waiter with a cancellation.
struct VacateOnDrop<'a, T> {
    flight: &'a SingleFlight<T>,
    armed: bool,
}

impl<T> Drop for VacateOnDrop<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            self.flight.lock().take();
        }
    }
}
