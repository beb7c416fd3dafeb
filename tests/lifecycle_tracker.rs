//! Lifecycle tracker dispatch tests.

use std::cell::RefCell;
use std::rc::Rc;

use rollfive::lifecycle::{LifecycleEvent, LifecycleObserver, LifecycleStage, LifecycleTracker};

struct RecordingObserver {
    seen: Rc<RefCell<Vec<LifecycleEvent>>>,
}

impl LifecycleObserver for RecordingObserver {
    fn on_event(&mut self, event: LifecycleEvent) {
        self.seen.borrow_mut().push(event);
    }
}

#[test]
fn observers_see_events_in_emission_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut tracker = LifecycleTracker::new();
    tracker.observe(RecordingObserver {
        seen: Rc::clone(&seen),
    });

    let events = [
        LifecycleEvent::Created,
        LifecycleEvent::Started,
        LifecycleEvent::Resumed,
        LifecycleEvent::Paused,
        LifecycleEvent::Stopped,
        LifecycleEvent::Destroyed,
    ];
    for event in events {
        tracker.emit(event);
    }

    assert_eq!(*seen.borrow(), events.to_vec());
    assert_eq!(tracker.stage(), LifecycleStage::Destroyed);
}

#[test]
fn rejected_events_are_not_dispatched() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut tracker = LifecycleTracker::new();
    tracker.observe(RecordingObserver {
        seen: Rc::clone(&seen),
    });

    // Resumed is invalid straight from Initialized.
    assert!(!tracker.emit(LifecycleEvent::Resumed));
    assert!(seen.borrow().is_empty());
    assert_eq!(tracker.stage(), LifecycleStage::Initialized);
}

#[test]
fn pause_resume_cycle() {
    let mut tracker = LifecycleTracker::new();
    tracker.emit(LifecycleEvent::Created);
    tracker.emit(LifecycleEvent::Started);
    tracker.emit(LifecycleEvent::Resumed);
    tracker.emit(LifecycleEvent::Paused);
    assert!(tracker.emit(LifecycleEvent::Resumed));
    assert_eq!(tracker.stage(), LifecycleStage::Resumed);
}
