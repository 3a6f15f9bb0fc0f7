//! # Testimonial Showcase
//!
//! The home page shows three testimonials at a time and advances the
//! window on a fixed period. The ticker driving it is owned by whoever
//! started it: dropping the handle stops the timer.

use serde::Serialize;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// How often the showcase advances
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(4);

/// Testimonials visible at once
pub const VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub avatar: &'static str,
    pub text: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah M.",
        avatar: "/avatars/sarah.jpg",
        text: "LearnOne helped me ace my SATs with personalized sessions. Highly recommend!",
    },
    Testimonial {
        name: "David R.",
        avatar: "/avatars/david.jpg",
        text: "The tutors are excellent, they really know how to make tough topics simple.",
    },
    Testimonial {
        name: "Priya K.",
        avatar: "/avatars/priya.jpg",
        text: "Affordable, convenient, and interactive! My go-to for live learning.",
    },
    Testimonial {
        name: "James W.",
        avatar: "/avatars/james.jpg",
        text: "The best investment I've made in my education. Quality is outstanding!",
    },
    Testimonial {
        name: "Maria G.",
        avatar: "/avatars/maria.jpg",
        text: "Flexible schedule and amazing tutors. Learning has never been this enjoyable!",
    },
    Testimonial {
        name: "Alex T.",
        avatar: "/avatars/alex.jpg",
        text: "Perfect platform for students who want to excel. Highly satisfied!",
    },
];

/// Number of distinct window start positions for `len` items shown
/// `visible` at a time. Never zero.
pub fn window_count(len: usize, visible: usize) -> usize {
    (len.saturating_sub(visible) + 1).max(1)
}

/// The items visible when the showcase sits at `index`
pub fn window<T>(items: &[T], index: usize, visible: usize) -> &[T] {
    let start = index.min(items.len().saturating_sub(visible));
    let end = (start + visible).min(items.len());
    &items[start..end]
}

/// Periodic advance of the showcase index, owned by its handle.
///
/// The index is published over a `watch` channel. Dropping the ticker
/// (or calling [`ShowcaseTicker::stop`]) aborts the timer task.
#[derive(Debug)]
pub struct ShowcaseTicker {
    index: watch::Receiver<usize>,
    task: JoinHandle<()>,
}

impl ShowcaseTicker {
    /// Start advancing over `positions` window positions every `period`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(period: Duration, positions: usize) -> Self {
        let positions = positions.max(1);
        let period = period.max(Duration::from_millis(1));
        let (tx, index) = watch::channel(0usize);

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick completes immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                tx.send_modify(|current| *current = (*current + 1) % positions);
            }
        });

        tracing::debug!(?period, positions, "Showcase ticker started");
        Self { index, task }
    }

    /// Current window position
    pub fn current(&self) -> usize {
        *self.index.borrow()
    }

    /// Receiver notified on every advance
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    /// Stop the timer. Equivalent to dropping the handle.
    pub fn stop(self) {}

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for ShowcaseTicker {
    fn drop(&mut self) {
        self.task.abort();
        tracing::debug!("Showcase ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_count_matches_visible_slots() {
        assert_eq!(window_count(TESTIMONIALS.len(), VISIBLE), 4);
        assert_eq!(window_count(2, VISIBLE), 1);
        assert_eq!(window_count(0, VISIBLE), 1);
    }

    #[test]
    fn test_window_slices() {
        let items = [1, 2, 3, 4, 5, 6];
        assert_eq!(window(&items, 0, 3), &[1, 2, 3]);
        assert_eq!(window(&items, 3, 3), &[4, 5, 6]);
        assert_eq!(window(&items, 9, 3), &[4, 5, 6]);
        assert_eq!(window(&items[..2], 0, 3), &[1, 2]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_advances_and_wraps() {
        let ticker = ShowcaseTicker::start(DEFAULT_PERIOD, 4);
        let mut rx = ticker.subscribe();
        assert_eq!(ticker.current(), 0);

        let mut seen = Vec::new();
        for _ in 0..5 {
            rx.changed().await.unwrap();
            seen.push(*rx.borrow_and_update());
        }

        assert_eq!(seen, vec![1, 2, 3, 0, 1]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_ticker_stops_timer() {
        let ticker = ShowcaseTicker::start(DEFAULT_PERIOD, 4);
        let mut rx = ticker.subscribe();
        assert!(ticker.is_running());

        ticker.stop();

        assert!(rx.changed().await.is_err());
        assert_eq!(*rx.borrow(), 0);
    }
}
