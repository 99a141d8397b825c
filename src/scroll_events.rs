use std::cell::RefCell;
use std::rc::{Rc, Weak};
use crate::scroll_tracker::{ScrollTracker, ViewportMetrics};

struct Listener {
    id: u64,
    tracker: Weak<RefCell<ScrollTracker>>,
}

#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<Listener>,
}

/// Scroll notification source of the host.
///
/// Trackers are held weakly; a view keeps its tracker alive and releases the
/// listener by dropping (or detaching) its [`Subscription`].
#[derive(Default)]
pub struct ScrollEvents {
    listeners: Rc<RefCell<Listeners>>,
}

#[must_use = "dropping a subscription detaches the tracker"]
pub struct Subscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
    tracker: Weak<RefCell<ScrollTracker>>,
}

impl ScrollEvents {
    pub fn new() -> ScrollEvents {
        ScrollEvents::default()
    }

    pub fn subscribe(&self, tracker: &Rc<RefCell<ScrollTracker>>) -> Subscription {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push(Listener { id, tracker: Rc::downgrade(tracker) });
        log::debug!("scroll listener {} attached", id);

        Subscription {
            id,
            listeners: Rc::downgrade(&self.listeners),
            tracker: Rc::downgrade(tracker),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().entries.len()
    }

    /// Forwards a scroll notification, returns how many trackers scheduled a
    /// new recomputation.
    pub fn notify_scroll(&self) -> usize {
        self.live_trackers()
            .iter()
            .filter(|tracker| tracker.borrow_mut().on_scroll_event())
            .count()
    }

    /// Runs the pending recomputations, returns how many trackers sampled.
    pub fn frame(&self, metrics: &impl ViewportMetrics, now_ms: f64) -> usize {
        self.live_trackers()
            .iter()
            .filter(|tracker| tracker.borrow_mut().on_frame(metrics, now_ms).is_some())
            .count()
    }

    fn live_trackers(&self) -> Vec<Rc<RefCell<ScrollTracker>>> {
        let mut listeners = self.listeners.borrow_mut();
        listeners.entries.retain(|listener| listener.tracker.strong_count() > 0);
        listeners.entries.iter().filter_map(|listener| listener.tracker.upgrade()).collect()
    }
}

impl Subscription {
    pub fn detach(self) {
        // Drop does the work
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().entries.retain(|listener| listener.id != self.id);
        }
        if let Some(tracker) = self.tracker.upgrade() {
            tracker.borrow_mut().detach();
        }
        log::debug!("scroll listener {} detached", self.id);
    }
}
