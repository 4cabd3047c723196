use lightsout_core::time::Scheduler;

#[test]
fn test_events_fire_in_time_order() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(0.0, 300, "c");
    scheduler.schedule(0.0, 100, "a");
    scheduler.schedule(0.0, 200, "b");

    assert_eq!(scheduler.next_deadline(), Some(100.0));
    assert!(scheduler.pop_due(99.0).is_none());

    let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(1000.0))
        .map(|f| f.event)
        .collect();
    assert_eq!(fired, vec!["a", "b", "c"]);
    assert!(scheduler.is_idle());
}

#[test]
fn test_equal_delays_keep_insertion_order() {
    let mut scheduler = Scheduler::new();
    for i in 0..5 {
        scheduler.schedule(10.0, 50, i);
    }

    let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(60.0))
        .map(|f| (f.fire_at, f.event))
        .collect();
    assert_eq!(fired, vec![(60.0, 0), (60.0, 1), (60.0, 2), (60.0, 3), (60.0, 4)]);
}

#[test]
fn test_zero_delay_is_due_immediately() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(42.0, 0, ());
    let fired = scheduler.pop_due(42.0).expect("zero delay should be due now");
    assert_eq!(fired.fire_at, 42.0);
}

#[test]
fn test_cancel_all_is_idempotent() {
    let mut scheduler = Scheduler::new();
    scheduler.schedule(0.0, 10, 1);
    scheduler.schedule(0.0, 20, 2);
    assert_eq!(scheduler.pending(), 2);

    scheduler.cancel_all();
    scheduler.cancel_all();
    assert_eq!(scheduler.pending(), 0);
    assert!(scheduler.pop_due(1_000.0).is_none());
    assert_eq!(scheduler.next_deadline(), None);

    // Still usable afterwards.
    scheduler.schedule(0.0, 5, 3);
    assert_eq!(scheduler.pop_due(5.0).map(|f| f.event), Some(3));
}

#[test]
fn test_cancel_single_handle() {
    let mut scheduler = Scheduler::new();
    let first = scheduler.schedule(0.0, 10, "first");
    scheduler.schedule(0.0, 20, "second");

    assert!(scheduler.cancel(first));
    assert!(!scheduler.cancel(first));
    assert_eq!(scheduler.pending(), 1);
    assert_eq!(scheduler.next_deadline(), Some(20.0));

    let fired = scheduler.pop_due(100.0).unwrap();
    assert_eq!(fired.event, "second");
    assert!(!scheduler.cancel(fired.handle));
}
