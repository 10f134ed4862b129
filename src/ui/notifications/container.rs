// SPDX-License-Identifier: MPL-2.0
//! Active toast collection.
//!
//! The `Container` subscribes to a [`Channel`], assigns identifiers to the
//! toasts it receives, runs their lifecycles and removes them once dismissed.
//! It is the only owner of the active collection: cards only request removal
//! through [`Message::Dismiss`].
//!
//! Published payloads are buffered in an inbox by the subscription handler
//! and moved into the collection by [`Container::receive`], so the container
//! itself can live in plain application state and be borrowed by `view`.

use super::channel::{Channel, SubscriberId};
use super::lifecycle::{DismissReason, Lifecycle};
use super::notification::{Position, Toast, ToastId};
use crate::config::MIN_MAX_VISIBLE;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Instant;

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close affordance of a toast was pressed.
    Dismiss(ToastId),
    /// Periodic tick checking auto-dismiss timers.
    Tick(Instant),
}

/// A toast in the active collection.
#[derive(Debug)]
pub struct ToastItem {
    id: ToastId,
    toast: Toast,
    lifecycle: Lifecycle,
}

impl ToastItem {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    #[must_use]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }
}

/// Owns and orders the currently active toasts.
#[derive(Debug, Default)]
pub struct Container {
    /// Shown toasts, oldest first.
    active: Vec<ToastItem>,
    /// Toasts waiting for a free slot when a visible cap is set.
    queue: VecDeque<(ToastId, Toast)>,
    inbox: Rc<RefCell<VecDeque<Toast>>>,
    subscription: Option<(Channel, SubscriberId)>,
    max_visible: Option<usize>,
    next_id: u64,
}

impl Container {
    /// Creates an empty, unbounded container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps how many toasts are shown at once. Overflow waits in a FIFO queue.
    #[must_use]
    pub fn with_max_visible(mut self, max_visible: Option<usize>) -> Self {
        self.max_visible = max_visible.map(|max| max.max(MIN_MAX_VISIBLE));
        self
    }

    /// Subscribes to `channel`, replacing any previous subscription.
    pub fn attach(&mut self, channel: &Channel) {
        self.detach();

        let inbox = Rc::clone(&self.inbox);
        let id = channel.subscribe(move |toast: &Toast| {
            inbox.borrow_mut().push_back(toast.clone());
        });
        self.subscription = Some((channel.clone(), id));
    }

    /// Unsubscribes from the current channel, if any.
    pub fn detach(&mut self) {
        if let Some((channel, id)) = self.subscription.take() {
            channel.unsubscribe(id);
        }
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// Moves delivered payloads into the collection, in publish order.
    ///
    /// Returns the identifiers assigned, including those of queued toasts.
    pub fn receive(&mut self, now: Instant) -> Vec<ToastId> {
        let delivered: Vec<Toast> = self.inbox.borrow_mut().drain(..).collect();
        delivered
            .into_iter()
            .map(|toast| self.push(toast, now))
            .collect()
    }

    /// Adds a toast directly, bypassing the channel.
    pub fn push(&mut self, toast: Toast, now: Instant) -> ToastId {
        self.next_id += 1;
        let id = ToastId::new(self.next_id);

        if self.has_free_slot() {
            self.show(id, toast, now);
        } else {
            log::debug!("{id} queued, {} toasts visible", self.active.len());
            self.queue.push_back((id, toast));
        }
        id
    }

    fn has_free_slot(&self) -> bool {
        self.max_visible.is_none_or(|max| self.active.len() < max)
    }

    fn show(&mut self, id: ToastId, toast: Toast, now: Instant) {
        let lifecycle = Lifecycle::new(toast.duration(), toast.callback(), now);
        self.active.push(ToastItem {
            id,
            toast,
            lifecycle,
        });
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.has_free_slot() {
            match self.queue.pop_front() {
                Some((id, toast)) => self.show(id, toast, now),
                None => break,
            }
        }
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
            Message::Tick(instant) => {
                self.receive(*instant);
                self.tick(*instant);
            }
        }
    }

    /// Dismisses a toast by its ID, running its completion callback.
    ///
    /// Returns `false` if no such toast exists.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        if let Some(index) = self.active.iter().position(|item| item.id == id) {
            let mut item = self.active.remove(index);
            item.lifecycle.dismiss(DismissReason::Closed);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(index) = self.queue.iter().position(|(queued, _)| *queued == id) {
            if let Some((_, toast)) = self.queue.remove(index) {
                if let Some(callback) = toast.callback() {
                    callback.call();
                }
            }
            return true;
        }

        false
    }

    /// Expires toasts whose timer elapsed at `now`. Returns how many expired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut expired = Vec::new();
        self.active.retain_mut(|item| {
            if item.lifecycle.poll(now) {
                expired.push(item.id);
                false
            } else {
                true
            }
        });

        if !expired.is_empty() {
            log::debug!("{} toast(s) expired", expired.len());
            self.promote_from_queue(now);
        }
        expired.len()
    }

    /// Removes every toast, cancelling timers without running callbacks.
    pub fn clear(&mut self) {
        for item in &mut self.active {
            item.lifecycle.cancel();
        }
        self.active.clear();
        self.queue.clear();
        self.inbox.borrow_mut().clear();
    }

    /// Shown toasts, oldest first.
    pub fn active(&self) -> impl Iterator<Item = &ToastItem> {
        self.active.iter()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastItem> {
        self.active.iter().find(|item| item.id == id)
    }

    /// Number of shown toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Payloads delivered by the channel but not yet received.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.inbox.borrow().len()
    }

    /// Earliest armed auto-dismiss deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.active
            .iter()
            .filter_map(|item| item.lifecycle.deadline())
            .min()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// Shown toasts grouped by anchor, in [`Position::ALL`] order.
    ///
    /// Empty groups are omitted. Each group keeps insertion order.
    #[must_use]
    pub fn grouped(&self) -> Vec<(Position, Vec<&ToastItem>)> {
        Position::ALL
            .iter()
            .filter_map(|&position| {
                let items: Vec<&ToastItem> = self
                    .active
                    .iter()
                    .filter(|item| item.toast.position() == position)
                    .collect();
                (!items.is_empty()).then_some((position, items))
            })
            .collect()
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Kind;
    use std::cell::Cell;
    use std::time::Duration;

    fn attached() -> (Channel, Container) {
        let channel = Channel::new();
        let mut container = Container::new();
        container.attach(&channel);
        (channel, container)
    }

    fn ids(container: &Container) -> Vec<ToastId> {
        container.active().map(ToastItem::id).collect()
    }

    #[test]
    fn new_container_is_empty() {
        let container = Container::new();
        assert!(container.is_empty());
        assert_eq!(container.queued_count(), 0);
        assert!(!container.is_attached());
        assert!(container.next_deadline().is_none());
    }

    #[test]
    fn published_toast_is_received_with_fresh_id() {
        let (channel, mut container) = attached();
        let now = Instant::now();

        channel.publish(Toast::success("Saved").with_duration_ms(0));
        assert_eq!(container.pending_count(), 1);

        let received = container.receive(now);
        assert_eq!(received.len(), 1);

        let item = container.get(received[0]).unwrap();
        assert_eq!(item.toast().kind(), Kind::Success);
        assert!(item.toast().is_closeable());
        assert!(item.lifecycle().is_visible());
    }

    #[test]
    fn same_message_twice_yields_distinct_items() {
        let (channel, mut container) = attached();
        channel.publish(Toast::new("dup"));
        channel.publish(Toast::new("dup"));

        let received = container.receive(Instant::now());
        assert_eq!(container.len(), 2);
        assert_ne!(received[0], received[1]);
    }

    #[test]
    fn dismiss_removes_exactly_one_and_keeps_order() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        for message in ["a", "b", "c", "d"] {
            channel.publish(Toast::new(message));
        }
        let received = container.receive(now);

        assert!(container.dismiss(received[1], now));
        assert_eq!(ids(&container), vec![received[0], received[2], received[3]]);
    }

    #[test]
    fn dismiss_unknown_id_is_noop() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        channel.publish(Toast::new("only"));
        let received = container.receive(now);

        assert!(container.dismiss(received[0], now));
        assert!(!container.dismiss(received[0], now));
        assert!(container.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_dismissal() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        channel.publish(Toast::new("first"));
        let first = container.receive(now)[0];
        container.dismiss(first, now);

        channel.publish(Toast::new("second"));
        let second = container.receive(now)[0];
        assert!(second > first);
    }

    #[test]
    fn tick_expires_only_elapsed_toasts() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        channel.publish(Toast::new("short").with_duration_ms(100));
        channel.publish(Toast::new("long").with_duration_ms(1000));
        channel.publish(Toast::new("sticky").with_duration_ms(0));
        container.receive(now);

        assert_eq!(container.tick(now + Duration::from_millis(150)), 1);
        assert_eq!(container.len(), 2);
        assert_eq!(container.tick(now + Duration::from_secs(3600)), 1);

        let remaining: Vec<&str> = container.active().map(|i| i.toast().message()).collect();
        assert_eq!(remaining, vec!["sticky"]);
        assert!(!container.has_pending_timers());
    }

    #[test]
    fn callback_fires_once_on_expiry() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        channel.publish(
            Toast::new("bye")
                .with_duration_ms(200)
                .with_on_close(move || counter.set(counter.get() + 1)),
        );
        container.receive(now);

        container.tick(now + Duration::from_millis(200));
        container.tick(now + Duration::from_millis(400));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn manual_dismiss_runs_callback_and_disarms_timer() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        channel.publish(
            Toast::new("bye")
                .with_duration_ms(200)
                .with_on_close(move || counter.set(counter.get() + 1)),
        );
        let id = container.receive(now)[0];

        container.update(&Message::Dismiss(id), now);
        container.update(&Message::Tick(now + Duration::from_millis(500)), now);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn tick_message_receives_pending_payloads() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        channel.publish(Toast::new("late arrival"));

        container.update(&Message::Tick(now), now);
        assert_eq!(container.len(), 1);
        assert_eq!(container.pending_count(), 0);
    }

    #[test]
    fn clear_cancels_without_callbacks() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        channel.publish(Toast::new("x").with_on_close(move || counter.set(counter.get() + 1)));
        container.receive(now);

        container.clear();
        container.tick(now + Duration::from_secs(60));
        assert!(container.is_empty());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn grouped_follows_position_order_and_fifo() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        channel.publish(Toast::new("br-1"));
        channel.publish(Toast::new("tl-1").with_position(Position::TopLeft));
        channel.publish(Toast::new("br-2"));
        container.receive(now);

        let groups = container.grouped();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Position::TopLeft);
        assert_eq!(groups[1].0, Position::BottomRight);

        let bottom: Vec<&str> = groups[1].1.iter().map(|i| i.toast().message()).collect();
        assert_eq!(bottom, vec!["br-1", "br-2"]);
    }

    #[test]
    fn capped_container_queues_overflow() {
        let channel = Channel::new();
        let mut container = Container::new().with_max_visible(Some(2));
        container.attach(&channel);
        let now = Instant::now();

        for i in 0..3 {
            channel.publish(Toast::new(format!("toast-{i}")));
        }
        let received = container.receive(now);
        assert_eq!(container.len(), 2);
        assert_eq!(container.queued_count(), 1);

        container.dismiss(received[0], now);
        assert_eq!(ids(&container), vec![received[1], received[2]]);
        assert_eq!(container.queued_count(), 0);
    }

    #[test]
    fn queued_toast_timer_starts_when_shown() {
        let channel = Channel::new();
        let mut container = Container::new().with_max_visible(Some(1));
        container.attach(&channel);
        let now = Instant::now();

        channel.publish(Toast::new("first").with_duration_ms(100));
        channel.publish(Toast::new("second").with_duration_ms(100));
        let received = container.receive(now);

        let later = now + Duration::from_millis(100);
        assert_eq!(container.tick(later), 1);
        assert_eq!(
            container.get(received[1]).unwrap().lifecycle().deadline(),
            Some(later + Duration::from_millis(100))
        );
    }

    #[test]
    fn zero_cap_is_raised_to_minimum() {
        let mut container = Container::new().with_max_visible(Some(0));
        container.push(Toast::new("shown"), Instant::now());
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn dropping_container_unsubscribes() {
        let channel = Channel::new();
        {
            let mut container = Container::new();
            container.attach(&channel);
            assert_eq!(channel.subscriber_count(), 1);
        }
        assert_eq!(channel.subscriber_count(), 0);
    }

    #[test]
    fn reattach_replaces_subscription() {
        let first = Channel::new();
        let second = Channel::new();
        let mut container = Container::new();
        container.attach(&first);
        container.attach(&second);

        assert_eq!(first.subscriber_count(), 0);
        assert_eq!(second.subscriber_count(), 1);
    }

    #[test]
    fn callback_may_publish_follow_up() {
        let (channel, mut container) = attached();
        let now = Instant::now();
        let producer = channel.clone();
        channel.publish(
            Toast::new("step one")
                .with_duration_ms(0)
                .with_on_close(move || producer.publish(Toast::new("step two"))),
        );
        let id = container.receive(now)[0];

        container.dismiss(id, now);
        container.receive(now);
        let messages: Vec<&str> = container.active().map(|i| i.toast().message()).collect();
        assert_eq!(messages, vec!["step two"]);
    }
}
