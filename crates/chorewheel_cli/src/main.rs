//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `chorewheel_core` linkage.
//! - Print today's period keys for a quick local sanity check.

use chorewheel_core::{period_key_for, Frequency};

fn main() {
    let today = chrono::Local::now().date_naive();
    println!("chorewheel_core version={}", chorewheel_core::core_version());
    for frequency in Frequency::ALL {
        println!(
            "{} period_key={}",
            frequency.as_str(),
            period_key_for(frequency, today)
        );
    }
}
