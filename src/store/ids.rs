//! # Id Providers
//!
//! New students get their id from an `IdProvider`. The default hands out
//! millisecond timestamps, bumped past the last issued value when the clock
//! has not moved on, so two creates in the same millisecond still differ.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

use super::record::StudentId;

/// Source of fresh student ids
pub trait IdProvider: Send + Sync + std::fmt::Debug {
    fn next_id(&self) -> StudentId;
}

/// Timestamp-derived ids, strictly increasing within a process
#[derive(Debug, Default)]
pub struct TimestampIds {
    last: AtomicU64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_millis() -> StudentId {
        u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
    }

    fn issue(&self, now: StudentId) -> StudentId {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = if now > prev { now } else { prev + 1 };
            match self
                .last
                .compare_exchange_weak(prev, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => prev = actual,
            }
        }
    }
}

impl IdProvider for TimestampIds {
    fn next_id(&self) -> StudentId {
        self.issue(Self::now_millis())
    }
}

/// Plain counter, starting at a chosen value
#[derive(Debug)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    pub fn starting_at(first: StudentId) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdProvider for SequentialIds {
    fn next_id(&self) -> StudentId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
