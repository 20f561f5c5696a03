//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `staffdesk_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::NaiveDate;
use staffdesk_core::CalendarDuration;

fn main() {
    println!("staffdesk_core ping={}", staffdesk_core::ping());
    println!("staffdesk_core version={}", staffdesk_core::core_version());

    // Fixed dates keep the probe output stable across runs.
    let joined = NaiveDate::from_ymd_opt(2021, 3, 15).expect("valid probe date");
    let reference = NaiveDate::from_ymd_opt(2023, 1, 10).expect("valid probe date");
    println!(
        "staffdesk_core tenure_probe={}",
        CalendarDuration::between(joined, reference)
    );
}
