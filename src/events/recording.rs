use std::cell::RefCell;

use crate::events::{Event, Observer};

/// Keeps every event it receives so tests can assert on them.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<Event>>
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }
}

impl Observer for RecordingObserver {
    fn notify(&self, event: &Event) {
        self.events.borrow_mut().push(event.clone());
    }
}
