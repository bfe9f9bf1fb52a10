//! Transient notifications.
//!
//! Each notification moves `Queued -> Visible -> Dismissed`. Visible entries expire
//! after a timeout or are dismissed explicitly; dismissed entries leave the active
//! set. Time is passed in by the caller so the lifecycle is deterministic.

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationState {
    Queued,
    Visible,
    Dismissed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub state: NotificationState,
    shown_at: Option<Instant>,
}

/// Call contract shared by every page: `(kind, title, message)`.
pub trait Notifier {
    fn notify(&mut self, kind: NotificationKind, title: &str, message: &str) -> u64;
}

/// Owns the display lifecycle of every notification.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    queued: VecDeque<Notification>,
    visible: Vec<Notification>,
    timeout: Duration,
    max_visible: usize,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(timeout: Duration, max_visible: usize) -> Self {
        Self {
            queued: VecDeque::new(),
            visible: Vec::new(),
            timeout,
            max_visible: max_visible.max(1),
            next_id: 1,
        }
    }

    /// Expire timed-out entries, then promote queued ones into free slots.
    ///
    /// Returns the notifications dismissed by this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<Notification> {
        let timeout = self.timeout;
        let mut expired = Vec::new();
        self.visible.retain(|n| {
            let keep = n.shown_at.map_or(true, |shown| now.duration_since(shown) < timeout);
            if !keep {
                let mut gone = n.clone();
                gone.state = NotificationState::Dismissed;
                expired.push(gone);
            }
            keep
        });

        while self.visible.len() < self.max_visible {
            match self.queued.pop_front() {
                Some(mut next) => {
                    next.state = NotificationState::Visible;
                    next.shown_at = Some(now);
                    self.visible.push(next);
                }
                None => break,
            }
        }

        expired
    }

    /// Dismiss a queued or visible notification. Returns it in its final state.
    pub fn dismiss(&mut self, id: u64) -> Option<Notification> {
        let removed = if let Some(pos) = self.visible.iter().position(|n| n.id == id) {
            Some(self.visible.remove(pos))
        } else {
            self.queued
                .iter()
                .position(|n| n.id == id)
                .and_then(|pos| self.queued.remove(pos))
        };

        removed.map(|mut n| {
            n.state = NotificationState::Dismissed;
            n
        })
    }

    /// Dismiss the most recently shown notification.
    pub fn dismiss_latest(&mut self) -> Option<Notification> {
        let id = self.visible.last()?.id;
        self.dismiss(id)
    }

    pub fn visible(&self) -> &[Notification] {
        &self.visible
    }

    /// Every notification not yet dismissed, visible first.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().chain(self.queued.iter())
    }

    pub fn len(&self) -> usize {
        self.visible.len() + self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for NotificationCenter {
    fn notify(&mut self, kind: NotificationKind, title: &str, message: &str) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        match kind {
            NotificationKind::Error => log::warn!("[{}] {}: {}", kind, title, message),
            _ => log::info!("[{}] {}: {}", kind, title, message),
        }

        self.queued.push_back(Notification {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            state: NotificationState::Queued,
            shown_at: None,
        });
        id
    }
}
