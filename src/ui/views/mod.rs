pub mod build;
pub mod publish;
pub mod upload;

use std::time::Duration;

/// `1.53s`
pub fn format_duration(elapsed: Duration) -> String {
    format!("{:.2}s", elapsed.as_secs_f64())
}

fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
