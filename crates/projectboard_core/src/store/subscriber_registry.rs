//! Generic change-notification registry.
//!
//! # Responsibility
//! - Track listener callbacks under opaque subscription handles.
//! - Fan out post-mutation snapshots in registration order.
//!
//! # Invariants
//! - Handles are never reused within one registry lifetime.
//! - Notification order equals registration order.
//! - Notification is synchronous and runs to completion before the
//!   triggering call returns.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Callback invoked with a read-only snapshot after each committed mutation.
pub type Listener<T> = Arc<dyn Fn(&[T]) + Send + Sync>;

/// Opaque handle identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Subscription management errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionError {
    /// Handle is unknown or was already unsubscribed.
    NotSubscribed(SubscriptionId),
}

impl Display for SubscriptionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotSubscribed(id) => write!(f, "listener not subscribed: {id}"),
        }
    }
}

impl Error for SubscriptionError {}

/// Handle-keyed listener registry, generic over the tracked item type.
///
/// Tokens grow monotonically, so map iteration order is registration order
/// and a removed handle can never resolve to a later listener.
pub struct SubscriberRegistry<T> {
    listeners: BTreeMap<u64, Listener<T>>,
    next_token: u64,
}

impl<T> std::fmt::Debug for SubscriberRegistry<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("listeners", &self.listeners.len())
            .field("next_token", &self.next_token)
            .finish()
    }
}

impl<T> Default for SubscriberRegistry<T> {
    fn default() -> Self {
        Self {
            listeners: BTreeMap::new(),
            next_token: 0,
        }
    }
}

impl<T> SubscriberRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener and returns its handle.
    ///
    /// # Contract
    /// - The listener fires starting from the next notification;
    ///   registration never replays past mutations.
    /// - The same callback may be registered more than once and is invoked
    ///   once per handle.
    pub fn subscribe(&mut self, listener: Listener<T>) -> SubscriptionId {
        let token = self.next_token;
        self.next_token += 1;
        self.listeners.insert(token, listener);
        SubscriptionId(token)
    }

    /// Removes one listener by handle.
    ///
    /// # Errors
    /// - Returns `NotSubscribed` for unknown or already-removed handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<(), SubscriptionError> {
        match self.listeners.remove(&id.0) {
            Some(_) => Ok(()),
            None => Err(SubscriptionError::NotSubscribed(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Invokes every listener in registration order with the same snapshot.
    pub fn notify_all(&self, snapshot: &[T]) {
        for listener in self.listeners.values() {
            listener(snapshot);
        }
    }
}
