use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::{LocalPool, block_on};
use futures::task::LocalSpawnExt;

// =============================================================
// Helpers
// =============================================================

/// Scripted async source: each call pops the next test-controlled outcome.
#[derive(Clone, Default)]
struct Script {
    calls: Rc<Cell<usize>>,
    outcomes: Rc<RefCell<Vec<oneshot::Receiver<Result<String, String>>>>>,
}

impl Script {
    /// Queue an outcome the test resolves later.
    fn queue_pending(&self) -> oneshot::Sender<Result<String, String>> {
        let (tx, rx) = oneshot::channel();
        self.outcomes.borrow_mut().push(rx);
        tx
    }

    /// Queue an outcome that resolves as soon as it is awaited.
    fn queue_ready(&self, outcome: Result<String, String>) {
        let tx = self.queue_pending();
        let _ = tx.send(outcome);
    }

    fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Counts the call at issue time; resolves when the test decides.
    fn next(&self) -> impl Future<Output = Result<String, String>> {
        self.calls.set(self.calls.get() + 1);
        let rx = self.outcomes.borrow_mut().remove(0);
        async move { rx.await.expect("script outcome dropped") }
    }
}

fn spawn_run(
    spawner: &futures::executor::LocalSpawner,
    flight: &SingleFlight<Result<String, String>>,
    script: &Script,
) -> futures::future::RemoteHandle<Result<String, String>> {
    let flight = flight.clone();
    let script = script.clone();
    spawner
        .spawn_local_with_handle(async move { flight.run(|| script.next()).await })
        .expect("spawn flight caller")
}

// =============================================================
// Coalescing
// =============================================================

#[test]
fn concurrent_callers_share_one_call() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let flight = SingleFlight::new();
    let script = Script::default();
    let resolve = script.queue_pending();

    let first = spawn_run(&spawner, &flight, &script);
    let second = spawn_run(&spawner, &flight, &script);

    pool.run_until_stalled();
    assert_eq!(script.calls(), 1);
    assert!(flight.in_flight());

    resolve.send(Ok("tok-1".to_owned())).expect("resolve flight");
    assert_eq!(pool.run_until(first), Ok("tok-1".to_owned()));
    assert_eq!(pool.run_until(second), Ok("tok-1".to_owned()));
    assert!(!flight.in_flight());
}

#[test]
fn settled_flight_resets_for_the_next_call() {
    let flight = SingleFlight::new();
    let script = Script::default();

    script.queue_ready(Ok("tok-1".to_owned()));
    assert_eq!(block_on(flight.run(|| script.next())), Ok("tok-1".to_owned()));
    assert!(!flight.in_flight());

    script.queue_ready(Ok("tok-2".to_owned()));
    assert_eq!(block_on(flight.run(|| script.next())), Ok("tok-2".to_owned()));
    assert_eq!(script.calls(), 2);
}

#[test]
fn failure_fans_out_and_resets_the_slot() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let flight = SingleFlight::new();
    let script = Script::default();
    let resolve = script.queue_pending();

    let first = spawn_run(&spawner, &flight, &script);
    let second = spawn_run(&spawner, &flight, &script);
    pool.run_until_stalled();

    resolve.send(Err("boom".to_owned())).expect("resolve flight");
    assert_eq!(pool.run_until(first), Err("boom".to_owned()));
    assert_eq!(pool.run_until(second), Err("boom".to_owned()));
    assert_eq!(script.calls(), 1);
    assert!(!flight.in_flight());

    // A later call is a fresh flight, not a replayed failure.
    script.queue_ready(Ok("tok-2".to_owned()));
    let third = spawn_run(&spawner, &flight, &script);
    assert_eq!(pool.run_until(third), Ok("tok-2".to_owned()));
    assert_eq!(script.calls(), 2);
}

#[test]
fn dropped_leader_hands_the_flight_to_a_waiter() {
    let mut pool = LocalPool::new();
    let spawner = pool.spawner();
    let flight = SingleFlight::new();
    let script = Script::default();
    let _stalled = script.queue_pending();
    let resolve_retry = script.queue_pending();

    let leader = spawn_run(&spawner, &flight, &script);
    let waiter = spawn_run(&spawner, &flight, &script);
    pool.run_until_stalled();
    assert_eq!(script.calls(), 1);

    // Cancelling the leader task must not strand the waiter.
    drop(leader);
    pool.run_until_stalled();
    assert_eq!(script.calls(), 2);
    assert!(flight.in_flight());

    resolve_retry.send(Ok("tok-2".to_owned())).expect("resolve retry");
    assert_eq!(pool.run_until(waiter), Ok("tok-2".to_owned()));
    assert!(!flight.in_flight());
}

#[test]
fn lone_caller_gets_the_value_through() {
    let flight = SingleFlight::new();
    let script = Script::default();
    script.queue_ready(Ok("tok-1".to_owned()));

    let value = block_on(flight.run(|| script.next()));
    assert_eq!(value, Ok("tok-1".to_owned()));
    assert_eq!(script.calls(), 1);
}
