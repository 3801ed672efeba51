//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use fftmul_core::DigitSequence;

/// Format a product for display, truncating long values unless verbose.
#[must_use]
pub fn format_result(value: &DigitSequence, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a byte count with a binary unit.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

/// Write the product, newline-terminated, to a file (overwriting it).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, value: &DigitSequence) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_duration_micro() {
        let s = format_duration(Duration::from_nanos(500));
        assert!(s.contains("µs"));
    }

    #[test]
    fn format_duration_milli() {
        let s = format_duration(Duration::from_millis(42));
        assert!(s.contains("ms"));
    }

    #[test]
    fn format_duration_minutes() {
        let s = format_duration(Duration::from_secs(90));
        assert_eq!(s, "1m30.0s");
    }

    #[test]
    fn format_bytes_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KiB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MiB");
    }

    #[test]
    fn format_result_short() {
        let value = DigitSequence::from(12345u64);
        assert_eq!(format_result(&value, false), "12345");
    }

    #[test]
    fn format_result_truncates_long() {
        let value: DigitSequence = "7".repeat(150).parse().unwrap();
        let s = format_result(&value, false);
        assert!(s.ends_with("(150 digits)"));
        assert_eq!(format_result(&value, true).len(), 150);
    }

    #[test]
    fn write_to_file_roundtrip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("product.txt");
        write_to_file(&path, &DigitSequence::from(998_001u64)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "998001\n");
    }

    #[test]
    fn write_empty_product_as_zero() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("zero.txt");
        write_to_file(&path, &DigitSequence::new()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\n");
    }
}
