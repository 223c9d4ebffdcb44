//! Load state of one asynchronous view.
//!
//! A [`Resource`] starts out `Loading` and settles exactly once per load into
//! `Ready` or `Failed`. Each load is identified by a [`Ticket`]; a completion
//! carrying any ticket but the latest is dropped without touching the state,
//! so a superseded request can never overwrite a newer one.
use std::future::Future;

use tracing::debug;

use crate::error::{Result, ServiceError};

/// Identifies one load of a [`Resource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum ResourceState<T> {
    Loading,
    Ready(T),
    Failed(ServiceError),
}

#[derive(Clone, Debug)]
pub struct Resource<T> {
    state: ResourceState<T>,
    generation: u64,
}

impl<T> Resource<T> {
    /// A resource whose first load is in flight under [`Resource::ticket`].
    pub fn new() -> Self {
        Self {
            state: ResourceState::Loading,
            generation: 0,
        }
    }

    /// Ticket of the load currently allowed to settle this resource.
    pub fn ticket(&self) -> Ticket {
        Ticket(self.generation)
    }

    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResourceState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match &self.state {
            ResourceState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ServiceError> {
        match &self.state {
            ResourceState::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// Restarts at `Loading` and supersedes every earlier ticket.
    pub fn reload(&mut self) -> Ticket {
        self.generation += 1;
        self.state = ResourceState::Loading;
        self.ticket()
    }

    /// Settles the load identified by `ticket`.
    ///
    /// Returns `false` and leaves the state untouched when the ticket is stale
    /// or this load has already settled.
    pub fn complete(&mut self, ticket: Ticket, result: Result<T>) -> bool {
        if ticket != self.ticket() || !self.is_loading() {
            debug!(?ticket, current = ?self.ticket(), "discarding stale resource completion");
            return false;
        }

        self.state = match result {
            Ok(value) => ResourceState::Ready(value),
            Err(err) => ResourceState::Failed(err),
        };
        true
    }

    /// Awaits `load` and settles the current ticket with its result.
    pub async fn settle(&mut self, load: impl Future<Output = Result<T>>) -> &ResourceState<T> {
        let ticket = self.ticket();
        let result = load.await;
        self.complete(ticket, result);
        &self.state
    }

    pub fn into_result(self) -> Option<Result<T>> {
        match self.state {
            ResourceState::Loading => None,
            ResourceState::Ready(value) => Some(Ok(value)),
            ResourceState::Failed(err) => Some(Err(err)),
        }
    }
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unavailable() -> ServiceError {
        ServiceError::DataUnavailable {
            reason: "offline".into(),
        }
    }

    #[test]
    fn starts_loading_and_settles_once() {
        let mut resource = Resource::new();
        assert!(resource.is_loading());

        let ticket = resource.ticket();
        assert!(resource.complete(ticket, Ok(3)));
        assert_eq!(resource.ready(), Some(&3));

        assert!(!resource.complete(ticket, Ok(4)));
        assert_eq!(resource.ready(), Some(&3));
    }

    #[test]
    fn failure_is_terminal_until_reload() {
        let mut resource: Resource<u32> = Resource::new();
        let first = resource.ticket();
        assert!(resource.complete(first, Err(unavailable())));
        assert_eq!(resource.error(), Some(&unavailable()));

        let second = resource.reload();
        assert!(resource.is_loading());
        assert!(resource.complete(second, Ok(1)));
        assert_eq!(resource.into_result(), Some(Ok(1)));
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut resource = Resource::new();
        let stale = resource.ticket();
        let current = resource.reload();

        assert!(!resource.complete(stale, Ok("old")));
        assert!(resource.is_loading());

        assert!(resource.complete(current, Ok("new")));
        assert_eq!(resource.state(), &ResourceState::Ready("new"));
    }

    #[tokio::test]
    async fn settle_awaits_the_load() {
        let mut resource = Resource::new();
        let state = resource.settle(async { Ok::<_, ServiceError>(vec![1, 2]) }).await;
        assert_eq!(state, &ResourceState::Ready(vec![1, 2]));
    }
}
