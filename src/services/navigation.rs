//! Deferred navigation side effects.
//!
//! A successful flow schedules one route change after a fixed delay.
//! The timer is cancellable and tied to the handle owning it, so a
//! screen torn down before the delay elapses never gets navigated.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::Route;

/// Sink for navigation requests, implemented by the presentation layer.
pub trait Navigator: Send + Sync {
    /// Move the user to the given route.
    fn navigate(&self, route: Route);
}

/// A navigation scheduled to fire after a delay.
///
/// Dropping or cancelling the handle before the delay elapses means the
/// navigation never happens.
#[derive(Debug)]
pub struct ScheduledNav {
    handle: Option<JoinHandle<()>>,
}

impl ScheduledNav {
    /// Schedule `route` to fire on `navigator` after `delay`.
    pub fn after(navigator: Arc<dyn Navigator>, route: Route, delay: Duration) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(%route, "deferred navigation firing");
            navigator.navigate(route);
        });
        Self {
            handle: Some(handle),
        }
    }

    /// Wait for the navigation to fire.
    pub async fn wait(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }

    /// Cancel the pending navigation.
    pub fn cancel(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ScheduledNav {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Single pending navigation owned by an orchestrator.
///
/// Holding at most one slot means a re-run of the flow replaces (and
/// cancels) any navigation still waiting from the previous run.
#[derive(Debug, Default)]
pub struct NavSlot {
    slot: Mutex<Option<ScheduledNav>>,
}

impl NavSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a navigation; an unfired previous one is cancelled.
    pub fn put(&self, nav: ScheduledNav) {
        let previous = self
            .slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(nav);
        if let Some(old) = previous {
            old.cancel();
        }
    }

    /// Hand the pending navigation to the caller, if any.
    pub fn take(&self) -> Option<ScheduledNav> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Cancel the pending navigation, if any.
    pub fn cancel(&self) {
        if let Some(nav) = self.take() {
            nav.cancel();
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingNav;
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_after_the_delay() {
        let nav = Arc::new(RecordingNav::default());
        let scheduled = ScheduledNav::after(nav.clone(), Route::Home, Duration::from_secs(2));

        tokio::task::yield_now().await;
        tokio::time::advance(Duration::from_millis(1999)).await;
        tokio::task::yield_now().await;
        assert!(nav.routes().is_empty());

        scheduled.wait().await;
        assert_eq!(nav.routes(), vec![Route::Home]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_navigation_never_fires() {
        let nav = Arc::new(RecordingNav::default());
        let scheduled = ScheduledNav::after(nav.clone(), Route::Home, Duration::from_secs(2));
        scheduled.cancel();

        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert!(nav.routes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_handle_cancels_the_timer() {
        let nav = Arc::new(RecordingNav::default());
        drop(ScheduledNav::after(
            nav.clone(),
            Route::Login,
            Duration::from_secs(2),
        ));

        tokio::time::advance(Duration::from_secs(5)).await;
        tokio::task::yield_now().await;
        assert!(nav.routes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn slot_replacement_cancels_previous() {
        let nav = Arc::new(RecordingNav::default());
        let slot = NavSlot::new();
        slot.put(ScheduledNav::after(
            nav.clone(),
            Route::Login,
            Duration::from_secs(2),
        ));
        slot.put(ScheduledNav::after(
            nav.clone(),
            Route::Home,
            Duration::from_secs(2),
        ));

        slot.take().expect("pending navigation").wait().await;
        tokio::task::yield_now().await;
        assert_eq!(nav.routes(), vec![Route::Home]);
    }
}
