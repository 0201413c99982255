//! Identifier generation
//!
//! New records get prefixed, timestamp-based ids (`q_1698230400123`,
//! `plan_1698230400124`, ...) matching the format the platform's data already
//! uses. The generator is strictly monotonic process-wide, so two ids created
//! within the same millisecond never collide.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

static LAST_STAMP: AtomicI64 = AtomicI64::new(0);

/// Generate a fresh id with the given entity prefix.
pub fn next_id(prefix: &str) -> String {
    let now = Utc::now().timestamp_millis();
    let stamp = match LAST_STAMP.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        Some(if now > last { now } else { last + 1 })
    }) {
        Ok(prev) => {
            if now > prev {
                now
            } else {
                prev + 1
            }
        }
        // The closure always returns Some, so this branch is unreachable;
        // fall back to the raw clock rather than panicking.
        Err(_) => now,
    };
    format!("{}_{}", prefix, stamp)
}
