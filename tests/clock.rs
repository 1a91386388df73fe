use std::time::Duration;

use brooklands::clock::{FixedTimestep, MAX_FRAME};

#[test]
fn default_runs_fifty_updates_per_second() {
    let clock = FixedTimestep::default();
    assert_eq!(clock.step(), Duration::from_millis(20));
    assert_eq!(clock.ticks(), 0);
}

#[test]
fn zero_rate_is_treated_as_one() {
    assert_eq!(FixedTimestep::new(0).step(), Duration::from_secs(1));
}

#[test]
fn leftover_time_carries_into_next_frame() {
    let mut clock = FixedTimestep::new(50);
    assert_eq!(clock.advance(Duration::from_millis(50)), 2);
    assert!((clock.alpha() - 0.5).abs() < 1e-4);
    assert_eq!(clock.advance(Duration::from_millis(10)), 1);
    assert!(clock.alpha().abs() < 1e-4);
    assert_eq!(clock.ticks(), 3);
}

#[test]
fn short_frames_accumulate() {
    let mut clock = FixedTimestep::new(50);
    let due: u32 = (0..10).map(|_| clock.advance(Duration::from_millis(4))).sum();
    assert_eq!(due, 2);
}

#[test]
fn long_stalls_are_capped() {
    let mut clock = FixedTimestep::new(50);
    assert_eq!(clock.advance(Duration::from_secs(5)), (MAX_FRAME.as_millis() / 20) as u32);
    assert_eq!(clock.ticks(), 12);
}
