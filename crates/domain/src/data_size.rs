use std::fmt;

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Human readable size with 1024-based units, e.g. `1.50 MB` or `512 Bytes`.
pub fn format_data_size(bytes: u64) -> String {
    match bytes {
        b if b >= GB => format!("{:.2} GB", b as f64 / GB as f64),
        b if b >= MB => format!("{:.2} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.2} KB", b as f64 / KB as f64),
        b => format!("{} Bytes", b),
    }
}

/// Average transfer rate over a whole time budget.
///
/// This is `bytes / budget`, not an instantaneous rate, and is only used
/// for display. Selection compares raw byte counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    pub bytes_per_second: u64,
}

impl Throughput {
    pub fn over(bytes: u64, budget_secs: u64) -> Self {
        Self {
            bytes_per_second: bytes.checked_div(budget_secs).unwrap_or(0),
        }
    }
}

impl fmt::Display for Throughput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/s", format_data_size(self.bytes_per_second))
    }
}
