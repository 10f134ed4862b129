// SPDX-License-Identifier: MPL-2.0
//! Publish/subscribe bus between toast producers and the container.
//!
//! A [`Channel`] is created once by the host and handed (cloned) to every
//! producer and to the container. Producers never see the container and the
//! container never sees the producers.
//!
//! Delivery is synchronous and in publish order. With no subscriber the
//! payload is dropped: this is a broadcast, not a queue.

use super::notification::Toast;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle returned by [`Channel::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Handler = Rc<dyn Fn(&Toast)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscribers: Vec<(SubscriberId, Handler)>,
}

/// Cheaply cloneable handle to a shared subscriber registry.
#[derive(Clone, Default)]
pub struct Channel {
    registry: Rc<RefCell<Registry>>,
}

impl Channel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler`, called once per published toast.
    pub fn subscribe(&self, handler: impl Fn(&Toast) + 'static) -> SubscriberId {
        let mut registry = self.registry.borrow_mut();
        let id = SubscriberId(registry.next_id);
        registry.next_id += 1;
        registry.subscribers.push((id, Rc::new(handler)));
        log::debug!("toast channel: subscriber {} registered", id.0);
        id
    }

    /// Removes a subscriber. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.subscribers.len();
        registry.subscribers.retain(|(sid, _)| *sid != id);
        let removed = registry.subscribers.len() < before;
        if removed {
            log::debug!("toast channel: subscriber {} removed", id.0);
        }
        removed
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().subscribers.len()
    }

    /// Broadcasts `toast` to every current subscriber.
    pub fn publish(&self, toast: Toast) {
        // Snapshot so handlers may publish or (un)subscribe re-entrantly.
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .subscribers
            .iter()
            .map(|(_, handler)| Rc::clone(handler))
            .collect();

        if handlers.is_empty() {
            log::trace!("toast channel: no subscriber, dropping {:?}", toast.message());
            return;
        }

        for handler in handlers {
            handler(&toast);
        }
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
