use super::*;

#[test]
fn new_schedule_has_nothing_pending() {
    let schedule = ClampSchedule::new(50);
    assert_eq!(schedule.pending(), None);
    assert_eq!(schedule.delay_ms(), 50);
}

#[test]
fn arm_hands_out_increasing_generations() {
    let mut schedule = ClampSchedule::new(50);
    let a = schedule.arm();
    let b = schedule.arm();
    assert!(b.generation > a.generation);
    assert_eq!(a.delay_ms, 50);
    assert_eq!(schedule.pending(), Some(b.generation));
}

#[test]
fn take_current_ticket_succeeds_once() {
    let mut schedule = ClampSchedule::new(50);
    let ticket = schedule.arm();
    assert!(schedule.take(ticket.generation));
    assert!(!schedule.take(ticket.generation));
    assert_eq!(schedule.pending(), None);
}

#[test]
fn rearm_invalidates_earlier_ticket() {
    let mut schedule = ClampSchedule::new(50);
    let stale = schedule.arm();
    let fresh = schedule.arm();
    assert!(!schedule.take(stale.generation));
    assert!(schedule.take(fresh.generation));
}

#[test]
fn cancel_invalidates_pending_ticket() {
    let mut schedule = ClampSchedule::new(50);
    let ticket = schedule.arm();
    assert!(schedule.cancel());
    assert!(!schedule.cancel());
    assert!(!schedule.take(ticket.generation));
}
