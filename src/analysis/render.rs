//! Human and machine rendering of reports.

use super::report::CollisionReport;
use std::fmt;
use std::time::Duration;

/// Sample keys printed before the rest are summarized.
const SAMPLE_KEYS_SHOWN: usize = 8;

impl CollisionReport {
    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// JSON value, for embedding reports in a larger document.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    /// Format a hash value as zero-padded hex sized to the kernel width.
    #[must_use]
    pub fn format_hash(&self, hash: u64) -> String {
        let digits = self.width.bits().div_ceil(4).max(1) as usize;
        format!("0x{hash:0digits$x}")
    }
}

/// Throughput in human-readable form.
fn format_throughput(keys_per_sec: f64) -> String {
    if keys_per_sec >= 1_000_000.0 {
        format!("{:.2}M keys/s", keys_per_sec / 1_000_000.0)
    } else if keys_per_sec >= 1_000.0 {
        format!("{:.2}K keys/s", keys_per_sec / 1_000.0)
    } else {
        format!("{keys_per_sec:.2} keys/s")
    }
}

/// Duration in human-readable form.
fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    if nanos >= 1_000_000_000 {
        format!("{:.4} s", elapsed.as_secs_f64())
    } else if nanos >= 1_000_000 {
        format!("{:.2} ms", nanos as f64 / 1_000_000.0)
    } else if nanos >= 1_000 {
        format!("{:.2} µs", nanos as f64 / 1_000.0)
    } else {
        format!("{nanos} ns")
    }
}

impl fmt::Display for CollisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "kernel:                {} ({})", self.kernel, self.width)?;
        writeln!(f, "total keys:            {}", self.total_keys)?;
        writeln!(f, "distinct hashes:       {}", self.distinct_hashes)?;
        writeln!(f, "colliding buckets:     {}", self.colliding_buckets)?;
        writeln!(
            f,
            "excess colliding keys: {} ({:.4}%)",
            self.excess_colliding_keys,
            self.collision_rate() * 100.0
        )?;
        writeln!(f, "largest bucket:        {}", self.max_bucket_size)?;

        if !self.size_histogram.is_empty() {
            let sizes: Vec<String> = self
                .size_histogram
                .iter()
                .map(|(size, count)| format!("{size}x{count}"))
                .collect();
            writeln!(f, "bucket sizes:          {}", sizes.join(" "))?;
        }

        write!(f, "time:                  {}", format_elapsed(self.elapsed))?;
        match (self.keys_per_second(), self.nanos_per_key()) {
            (Some(rate), Some(per_key)) => {
                writeln!(f, " ({}, {per_key:.1} ns/key)", format_throughput(rate))?;
            }
            _ => writeln!(f)?,
        }

        match &self.sample {
            Some(sample) => {
                let mut keys: Vec<String> = sample
                    .entries
                    .iter()
                    .take(SAMPLE_KEYS_SHOWN)
                    .map(|e| format!("{:?}", e.key_lossy()))
                    .collect();
                if sample.entries.len() > SAMPLE_KEYS_SHOWN {
                    keys.push(format!("... {} more", sample.entries.len() - SAMPLE_KEYS_SHOWN));
                }
                write!(
                    f,
                    "sample collision:      {} <- {}",
                    self.format_hash(sample.hash),
                    keys.join(", ")
                )
            }
            None => write!(f, "sample collision:      none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crate::dataset::Dataset;
    use crate::hash::{Murmur3, Rolling64, SumModulo};

    #[test]
    fn test_display_with_sample() {
        let ds = Dataset::from_pairs([("apple", "1"), ("banana", "2"), ("orange", "3")]);
        let report = analyze(&ds, &SumModulo::new(1).unwrap()).unwrap();
        let text = report.to_string();

        assert!(text.contains("kernel:                sum-modulo (0-bit)"));
        assert!(text.contains("total keys:            3"));
        assert!(text.contains("distinct hashes:       1"));
        assert!(text.contains("excess colliding keys: 2"));
        assert!(text.contains("bucket sizes:          3x1"));
        assert!(text.contains(r#"0x0 <- "apple", "banana", "orange""#));
    }

    #[test]
    fn test_display_without_collisions() {
        let ds = Dataset::from_keys(["a", "b"]);
        let report = analyze(&ds, &Rolling64).unwrap();
        assert!(report.to_string().ends_with("sample collision:      none"));
    }

    #[test]
    fn test_display_truncates_large_sample() {
        let ds = Dataset::from_keys((0..12).map(|_| "same"));
        let report = analyze(&ds, &Rolling64).unwrap();
        assert!(report.to_string().contains("... 4 more"));
    }

    #[test]
    fn test_format_hash_width() {
        let report = analyze(&Dataset::new(), &Murmur3::new()).unwrap();
        assert_eq!(report.format_hash(0xAB), "0x000000ab");
        let report = analyze(&Dataset::new(), &Rolling64).unwrap();
        assert_eq!(report.format_hash(1), "0x0000000000000001");
    }

    #[test]
    fn test_json_fields() {
        let ds = Dataset::from_keys(["a", "b", "a"]);
        let report = analyze(&ds, &Murmur3::with_seed(42)).unwrap();
        let value = report.to_json_value().unwrap();

        assert_eq!(value["kernel"], "murmur3");
        assert_eq!(value["width"], 32);
        assert_eq!(value["total_keys"], 3);
        assert_eq!(value["distinct_hashes"], 2);
        assert_eq!(value["excess_colliding_keys"], 1);
        assert_eq!(value["size_histogram"]["2"], 1);
        assert_eq!(value["sample"]["entries"][0]["key"], "a");
        assert!(value["elapsed_ns"].is_u64());
        assert!(report.to_json().unwrap().starts_with('{'));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_throughput(2_500_000.0), "2.50M keys/s");
        assert_eq!(format_throughput(1_500.0), "1.50K keys/s");
        assert_eq!(format_elapsed(Duration::from_nanos(999)), "999 ns");
        assert_eq!(format_elapsed(Duration::from_micros(1500)), "1.50 ms");
    }
}
