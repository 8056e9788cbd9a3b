use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Process-wide change notifications keyed by storage key name.
///
/// The payload is only the key; receivers always re-read from storage.
/// Delivery is synchronous fan-out into per-subscriber queues; sessions
/// drain their queue in [`crate::Session::sync`]. Injectable so tests can
/// wire several sessions to one bus.
#[derive(Default)]
pub struct ChangeBus {
    subscribers: Mutex<Vec<Weak<Mutex<VecDeque<String>>>>>,
}

/// One observer's pending notifications. Dropped subscriptions are pruned
/// from the bus on the next publish.
pub struct Subscription {
    queue: Arc<Mutex<VecDeque<String>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ChangeBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let queue = Arc::new(Mutex::new(VecDeque::new()));
        lock(&self.subscribers).push(Arc::downgrade(&queue));
        Subscription { queue }
    }

    /// Signal that `key` changed. Delivered to every live subscription,
    /// including the publisher's own. A key already pending in a queue is
    /// not enqueued again, so an undrained queue never grows past the
    /// number of distinct storage keys.
    pub fn publish(&self, key: &str) {
        let mut subscribers = lock(&self.subscribers);
        subscribers.retain(|weak| match weak.upgrade() {
            Some(queue) => {
                let mut pending = lock(&queue);
                if pending.iter().all(|k| k != key) {
                    pending.push_back(key.to_string());
                }
                true
            }
            None => false,
        });
    }
}

impl Subscription {
    /// Drain pending key names in arrival order.
    pub fn drain(&self) -> Vec<String> {
        lock(&self.queue).drain(..).collect()
    }
}
