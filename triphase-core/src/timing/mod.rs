//! Timing helpers on a caller-supplied millisecond clock
//!
//! Nothing here sleeps. Each helper stores a timestamp or deadline and is
//! evaluated against `now_ms` on every poll. Timestamps are `u32` and all
//! comparisons are wrap-safe, so the 49.7-day rollover is harmless.

pub mod blink;
pub mod press;
pub mod settle;

pub use blink::Blink;
pub use press::{PressKind, PressTimer};
pub use settle::SettleWindow;

/// Milliseconds from `since` to `now`, across a clock wrap
#[inline]
pub const fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Check whether `deadline` has been reached at `now`
///
/// Valid as long as the deadline is less than 2^31 ms away.
#[inline]
pub const fn deadline_reached(now: u32, deadline: u32) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}
