//! Page position trackers driven by the calendar state.
//!
//! A host UI exposes its pagers through the [`Pager`] trait. [`PagerState`]
//! is a headless implementation that animates on the tokio clock and
//! publishes its target page, which is what the session driver listens to.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::sync::watch;

/// Default duration of an animated scroll between two pages.
pub const DEFAULT_ANIMATION: Duration = Duration::from_millis(300);

/// A horizontally paged view the calendar can steer.
pub trait Pager {
    /// Page the pager rests on, or is animating toward.
    fn target_page(&self) -> usize;

    /// Animate to `page`, resolving once the animation settles.
    ///
    /// Dropping the returned future abandons the animation without error.
    fn animate_scroll_to_page(&self, page: usize) -> impl Future<Output = ()> + Send;
}

#[derive(Debug)]
struct Position {
    current_page: usize,
    /// Bumped on every scroll so an older animation won't settle over a newer one.
    generation: u64,
}

/// Headless pager with a fixed page count.
///
/// Cloning yields another handle to the same pager.
#[derive(Debug, Clone)]
pub struct PagerState {
    page_count: usize,
    animation: Duration,
    position: Arc<Mutex<Position>>,
    target: Arc<watch::Sender<usize>>,
}

impl PagerState {
    /// Creates a pager resting on `initial_page` (clamped to the page count).
    pub fn new(initial_page: usize, page_count: usize) -> Self {
        let initial_page = clamp_page(initial_page, page_count);
        let (target, _) = watch::channel(initial_page);

        PagerState {
            page_count,
            animation: DEFAULT_ANIMATION,
            position: Arc::new(Mutex::new(Position {
                current_page: initial_page,
                generation: 0,
            })),
            target: Arc::new(target),
        }
    }

    pub fn with_animation(mut self, animation: Duration) -> Self {
        self.animation = animation;
        self
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Page the pager currently shows; lags [`Pager::target_page`] mid-animation.
    pub fn current_page(&self) -> usize {
        self.lock().current_page
    }

    pub fn is_scroll_in_progress(&self) -> bool {
        self.current_page() != self.target_page()
    }

    /// Stream of target page changes, the pager's "settled on page N" signal.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.target.subscribe()
    }

    /// Moves to `page` immediately, without animating.
    pub fn jump_to_page(&self, page: usize) {
        let page = clamp_page(page, self.page_count);
        {
            let mut position = self.lock();
            position.generation += 1;
            position.current_page = page;
        }
        self.publish(page);
    }

    fn begin_scroll(&self, page: usize) -> u64 {
        let generation = {
            let mut position = self.lock();
            position.generation += 1;
            position.generation
        };
        self.publish(page);
        generation
    }

    fn finish_scroll(&self, page: usize, generation: u64) {
        let mut position = self.lock();
        if position.generation == generation {
            position.current_page = page;
        }
    }

    fn publish(&self, page: usize) {
        self.target.send_if_modified(|target| {
            if *target == page {
                false
            } else {
                *target = page;
                true
            }
        });
    }

    fn lock(&self) -> MutexGuard<'_, Position> {
        // Position is plain data, a poisoned lock still holds a usable value.
        self.position.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Pager for PagerState {
    fn target_page(&self) -> usize {
        *self.target.borrow()
    }

    fn animate_scroll_to_page(&self, page: usize) -> impl Future<Output = ()> + Send {
        let pager = self.clone();
        let page = clamp_page(page, self.page_count);
        async move {
            let generation = pager.begin_scroll(page);
            tracing::trace!(page, "pager scroll started");
            tokio::time::sleep(pager.animation).await;
            pager.finish_scroll(page, generation);
            tracing::trace!(page, "pager scroll settled");
        }
    }
}

fn clamp_page(page: usize, page_count: usize) -> usize {
    page.min(page_count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_initial_page() {
        let pager = PagerState::new(12, 5);

        assert_eq!(pager.target_page(), 4);
        assert_eq!(pager.current_page(), 4);
        assert_eq!(PagerState::new(3, 0).target_page(), 0);
    }

    #[test]
    fn test_jump_to_page_publishes_target() {
        let pager = PagerState::new(0, 5);
        let mut rx = pager.subscribe();

        pager.jump_to_page(3);

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), 3);
        assert_eq!(pager.current_page(), 3);
        assert!(!pager.is_scroll_in_progress());
    }

    #[tokio::test(start_paused = true)]
    async fn test_animation_moves_target_first_then_current_page() {
        let pager = PagerState::new(0, 5).with_animation(Duration::from_millis(200));

        let handle = pager.clone();
        let scroll = tokio::spawn(async move { handle.animate_scroll_to_page(2).await });
        tokio::task::yield_now().await;

        assert_eq!(pager.target_page(), 2);
        assert_eq!(pager.current_page(), 0);
        assert!(pager.is_scroll_in_progress());

        scroll.await.unwrap();
        assert_eq!(pager.current_page(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_animation_never_settles() {
        let pager = PagerState::new(1, 5);

        let handle = pager.clone();
        let scroll = tokio::spawn(async move { handle.animate_scroll_to_page(4).await });
        tokio::task::yield_now().await;
        scroll.abort();
        assert!(scroll.await.unwrap_err().is_cancelled());

        tokio::time::sleep(DEFAULT_ANIMATION * 2).await;
        assert_eq!(pager.target_page(), 4);
        assert_eq!(pager.current_page(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_scroll_wins_over_older_one() {
        let pager = PagerState::new(0, 5);

        let handle = pager.clone();
        let first = tokio::spawn(async move { handle.animate_scroll_to_page(1).await });
        tokio::task::yield_now().await;
        pager.jump_to_page(3);
        first.await.unwrap();

        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.target_page(), 3);
    }
}
