//! Subscription tokens for listener removal.

use uuid::Uuid;

/// Capability returned by [`Service::subscribe`](crate::interpreter::Service::subscribe)
/// that identifies one listener.
///
/// Tokens are keyed by a freshly generated id rather than by position in
/// the listener list, so removal stays correct no matter how many earlier
/// subscribers have already been removed. Passing a token to
/// [`unsubscribe`](crate::interpreter::Service::unsubscribe) more than once
/// is a safe no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    id: Uuid,
}

impl Subscription {
    pub(crate) fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }

    pub(crate) fn id(&self) -> Uuid {
        self.id
    }
}
