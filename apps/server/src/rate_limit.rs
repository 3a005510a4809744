//! Per-client fixed-window request limits
//!
//! Each client key has an hourly and a daily window. A request is admitted only
//! when both windows have room, and only admitted requests are counted.

use crate::config::RateLimitConfig;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, PoisonError};

/// Tracked clients before expired entries are swept.
const SWEEP_THRESHOLD: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitWindow {
    Hourly,
    Daily,
}

impl LimitWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            LimitWindow::Hourly => "hourly",
            LimitWindow::Daily => "daily",
        }
    }

    fn length(&self) -> TimeDelta {
        match self {
            LimitWindow::Hourly => TimeDelta::hours(1),
            LimitWindow::Daily => TimeDelta::days(1),
        }
    }
}

impl fmt::Display for LimitWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one admission check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateDecision {
    /// `None` when admitted, otherwise the window that is full.
    pub exceeded: Option<LimitWindow>,
    /// Limit of the reported window: hourly when admitted.
    pub limit: u32,
    pub remaining: u32,
    pub reset_at: DateTime<Utc>,
}

impl RateDecision {
    pub fn allowed(&self) -> bool {
        self.exceeded.is_none()
    }

    /// Human-readable rejection message.
    pub fn message(&self) -> String {
        let per = match self.exceeded {
            Some(LimitWindow::Daily) => "day",
            _ => "hour",
        };
        format!(
            "Rate limit exceeded. You can make {} requests per {per}. Try again after {}.",
            self.limit,
            self.reset_at.to_rfc3339()
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: DateTime<Utc>,
}

impl Window {
    fn current(slot: Option<Window>, kind: LimitWindow, now: DateTime<Utc>) -> Window {
        match slot {
            Some(w) if now < w.reset_at => w,
            _ => Window {
                count: 0,
                reset_at: now + kind.length(),
            },
        }
    }
}

#[derive(Debug, Default)]
struct ClientWindows {
    hourly: Option<Window>,
    daily: Option<Window>,
}

/// In-memory limiter keyed by client address.
///
/// A disabled limiter admits everything and tracks nothing.
#[derive(Debug)]
pub struct RateLimiter {
    enabled: bool,
    per_hour: u32,
    per_day: u32,
    clients: Mutex<HashMap<String, ClientWindows>>,
}

impl RateLimiter {
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            enabled: config.enabled,
            per_hour: config.requests_per_hour,
            per_day: config.requests_per_day,
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn disabled() -> Self {
        Self::new(&RateLimitConfig::default())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check and, when admitted, count one request for `client`.
    ///
    /// Returns `None` when limiting is disabled.
    pub fn check(&self, client: &str) -> Option<RateDecision> {
        self.check_at(client, Utc::now())
    }

    pub fn check_at(&self, client: &str, now: DateTime<Utc>) -> Option<RateDecision> {
        if !self.enabled {
            return None;
        }

        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if clients.len() >= SWEEP_THRESHOLD {
            clients.retain(|_, w| w.daily.is_some_and(|d| now < d.reset_at));
        }

        let entry = clients.entry(client.to_string()).or_default();
        let mut hourly = Window::current(entry.hourly, LimitWindow::Hourly, now);
        let mut daily = Window::current(entry.daily, LimitWindow::Daily, now);

        let decision = if hourly.count >= self.per_hour {
            RateDecision {
                exceeded: Some(LimitWindow::Hourly),
                limit: self.per_hour,
                remaining: 0,
                reset_at: hourly.reset_at,
            }
        } else if daily.count >= self.per_day {
            RateDecision {
                exceeded: Some(LimitWindow::Daily),
                limit: self.per_day,
                remaining: 0,
                reset_at: daily.reset_at,
            }
        } else {
            hourly.count += 1;
            daily.count += 1;
            RateDecision {
                exceeded: None,
                limit: self.per_hour,
                remaining: self.per_hour - hourly.count,
                reset_at: hourly.reset_at,
            }
        };

        entry.hourly = Some(hourly);
        entry.daily = Some(daily);
        Some(decision)
    }
}
