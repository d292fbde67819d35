//! Bounded activity log shown in the side panel.

use crate::types::{LogEntry, LogLevel};

/// Append `entry`, dropping the oldest entries beyond `cap`.
pub fn push_capped(logs: &mut Vec<LogEntry>, entry: LogEntry, cap: usize) {
    logs.push(entry);
    if logs.len() > cap {
        let excess = logs.len() - cap;
        logs.drain(..excess);
    }
}

/// Forward an entry to the browser console at the matching level.
pub fn echo_to_console(entry: &LogEntry) {
    match entry.level {
        LogLevel::Error => log::error!("{}", entry.message),
        LogLevel::Warning => log::warn!("{}", entry.message),
        LogLevel::Info | LogLevel::Success => log::info!("{}", entry.message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_drops_oldest_beyond_cap() {
        let mut logs = Vec::new();
        for i in 0..5 {
            push_capped(&mut logs, LogEntry::now(LogLevel::Info, format!("entry {i}")), 3);
        }
        let messages: Vec<&str> = logs.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["entry 2", "entry 3", "entry 4"]);
    }

    #[test]
    fn test_timestamp_format() {
        let entry = LogEntry::now(LogLevel::Success, "done");
        assert_eq!(entry.timestamp.len(), 8);
        assert_eq!(entry.timestamp.matches(':').count(), 2);
    }
}
