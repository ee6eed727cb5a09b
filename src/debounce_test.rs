use super::*;

/// Replay `calls` against a debouncer the way the browser wrapper does: each
/// call arms a timer for `at + wait_ms` with its ticket, a newer call cancels
/// the armed timer, and due timers fire in time order.
fn simulate(wait_ms: f64, calls: &[(f64, u32)]) -> Vec<u32> {
    let mut debounce = Debounce::new();
    let mut armed: Option<(f64, u64)> = None;
    let mut fired = Vec::new();
    for (at, arg) in calls {
        if let Some((due, ticket)) = armed {
            if due <= *at {
                fired.extend(debounce.fire(ticket));
            }
        }
        armed = Some((at + wait_ms, debounce.call(*arg)));
    }
    if let Some((_, ticket)) = armed {
        fired.extend(debounce.fire(ticket));
    }
    fired
}

#[test]
fn burst_collapses_to_one_call_with_last_args() {
    let calls: Vec<(f64, u32)> = (0..10).map(|i| (f64::from(i) * 15.0, i)).collect();
    assert_eq!(simulate(20.0, &calls), vec![9]);
}

#[test]
fn calls_spaced_beyond_wait_each_fire() {
    let calls = [(0.0, 1), (50.0, 2), (100.0, 3)];
    assert_eq!(simulate(20.0, &calls), vec![1, 2, 3]);
}

#[test]
fn burst_then_pause_then_burst_fires_twice() {
    let calls = [(0.0, 1), (10.0, 2), (100.0, 3), (110.0, 4)];
    assert_eq!(simulate(20.0, &calls), vec![2, 4]);
}

#[test]
fn superseded_ticket_never_fires() {
    let mut debounce = Debounce::new();
    let stale = debounce.call("first");
    let latest = debounce.call("second");
    assert_eq!(debounce.fire(stale), None);
    assert!(debounce.is_pending());
    assert_eq!(debounce.fire(latest), Some("second"));
    assert!(!debounce.is_pending());
}

#[test]
fn ticket_fires_at_most_once() {
    let mut debounce = Debounce::new();
    let ticket = debounce.call(7);
    assert_eq!(debounce.fire(ticket), Some(7));
    assert_eq!(debounce.fire(ticket), None);
}
