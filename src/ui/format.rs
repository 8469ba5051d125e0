//! Display formatting rules shared by the list views

use chrono::{DateTime, Local};

use crate::core::{MountPoint, PortMapping};

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Placeholder for absent identifiers
pub const ID_PLACEHOLDER: &str = "-";

/// Placeholder for untagged images
pub const NONE_TAG: &str = "<none>";

/// Format a byte count with base-1024 units.
///
/// The unit is `floor(log_1024(bytes))` clamped to the unit table, and the
/// value is rounded to 2 decimal places with trailing zeros dropped, so
/// 1536 renders as "1.5 KB" and a whole gigabyte as "1 GB".
pub fn format_bytes(bytes: i64) -> String {
    if bytes <= 0 {
        return "0 B".to_string();
    }
    let exp = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exp = exp.min(BYTE_UNITS.len() - 1);
    let value = (bytes as f64 / 1024_f64.powi(exp as i32) * 100.0).round() / 100.0;
    format!("{} {}", value, BYTE_UNITS[exp])
}

/// Format a unix timestamp (seconds) as a local "MM-DD HH:MM" string
pub fn format_timestamp(secs: i64) -> String {
    match DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.with_timezone(&Local).format("%m-%d %H:%M").to_string(),
        None => ID_PLACEHOLDER.to_string(),
    }
}

/// The repository portion of an image's first tag, `<none>` when untagged
pub fn primary_repo(tags: &[String]) -> String {
    tags.first()
        .and_then(|t| t.split(':').next())
        .filter(|r| !r.is_empty())
        .unwrap_or(NONE_TAG)
        .to_string()
}

/// The version portion of a tag, defaulting to "latest" when missing
pub fn tag_version(tag: &str) -> String {
    match tag.split(':').nth(1) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "latest".to_string(),
    }
}

/// First 12 characters of an identifier, `-` when absent
pub fn short_id(id: &str) -> String {
    if id.is_empty() {
        return ID_PLACEHOLDER.to_string();
    }
    id.chars().take(12).collect()
}

/// Characters 7-19 of an image identifier (skips the `sha256:` prefix)
pub fn image_short_id(id: &str) -> String {
    if id.is_empty() {
        return ID_PLACEHOLDER.to_string();
    }
    let trimmed: String = id.chars().skip(7).take(12).collect();
    if trimmed.is_empty() {
        ID_PLACEHOLDER.to_string()
    } else {
        trimmed
    }
}

/// How many list entries render before the overflow indicator
pub const OVERFLOW_LIMIT: usize = 2;

/// Join the first [`OVERFLOW_LIMIT`] entries and count the rest as "+N more"
pub fn with_overflow(entries: &[String]) -> String {
    if entries.is_empty() {
        return ID_PLACEHOLDER.to_string();
    }
    let shown = entries
        .iter()
        .take(OVERFLOW_LIMIT)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if entries.len() > OVERFLOW_LIMIT {
        format!("{} +{} more", shown, entries.len() - OVERFLOW_LIMIT)
    } else {
        shown
    }
}

/// Publicly published port mappings as "public:private" strings
pub fn published_ports(ports: &[PortMapping]) -> Vec<String> {
    ports
        .iter()
        .filter_map(|p| {
            p.public_port
                .map(|public| format!("{}:{}", public, p.private_port))
        })
        .collect()
}

/// Mount destinations for compact display
pub fn mount_destinations(mounts: &[MountPoint]) -> Vec<String> {
    mounts.iter().map(|m| m.destination.clone()).collect()
}

/// Clip a string to a display width, with a trailing ellipsis when truncated
pub fn clip_to_width(s: &str, max: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max.saturating_sub(1) {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1024), "1 KB");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(1024 * 1024), "1 MB");
        assert_eq!(format_bytes(1_073_741_824), "1 GB");
    }

    #[test]
    fn test_format_bytes_rounding() {
        // 1.337 GB rounds to 2 decimal places
        assert_eq!(format_bytes(1_435_503_820), "1.34 GB");
        assert_eq!(format_bytes(1_050_000), "1 MB");
    }

    #[test]
    fn test_format_bytes_clamps_to_unit_table() {
        // Beyond TB the unit stays TB
        let pb = 1024_i64.pow(5);
        assert_eq!(format_bytes(pb), "1024 TB");
    }

    #[test]
    fn test_format_bytes_negative() {
        assert_eq!(format_bytes(-1), "0 B");
    }

    #[test]
    fn test_format_timestamp_shape() {
        let rendered = format_timestamp(1_700_000_000);
        // MM-DD HH:MM
        assert_eq!(rendered.len(), 11);
        assert_eq!(&rendered[2..3], "-");
        assert_eq!(&rendered[5..6], " ");
        assert_eq!(&rendered[8..9], ":");
    }

    #[test]
    fn test_primary_repo() {
        let tags = vec!["nginx:latest".to_string(), "nginx:1.27".to_string()];
        assert_eq!(primary_repo(&tags), "nginx");
        assert_eq!(primary_repo(&[]), "<none>");
        assert_eq!(primary_repo(&["redis".to_string()]), "redis");
    }

    #[test]
    fn test_tag_version_defaults_to_latest() {
        assert_eq!(tag_version("nginx:1.27"), "1.27");
        assert_eq!(tag_version("nginx"), "latest");
        assert_eq!(tag_version("nginx:"), "latest");
    }

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("abc123def456789"), "abc123def456");
        assert_eq!(short_id(""), "-");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn test_image_short_id_skips_prefix() {
        assert_eq!(
            image_short_id("sha256:abcdef0123456789abcdef"),
            "abcdef012345"
        );
        assert_eq!(image_short_id(""), "-");
        assert_eq!(image_short_id("short"), "-");
    }

    #[test]
    fn test_published_ports_filter() {
        let ports = vec![
            PortMapping {
                ip: None,
                private_port: 80,
                public_port: Some(8080),
                protocol: "tcp".to_string(),
            },
            PortMapping {
                ip: None,
                private_port: 443,
                public_port: None,
                protocol: "tcp".to_string(),
            },
        ];
        assert_eq!(published_ports(&ports), vec!["8080:80".to_string()]);
    }

    #[test]
    fn test_with_overflow() {
        let entries: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(with_overflow(&entries), "a, b +2 more");
        assert_eq!(with_overflow(&entries[..2]), "a, b");
        assert_eq!(with_overflow(&[]), "-");
    }

    #[test]
    fn test_clip_to_width() {
        assert_eq!(clip_to_width("short", 10), "short");
        assert_eq!(clip_to_width("a long message", 7), "a long…");
        // Wide glyphs count as two columns
        assert_eq!(clip_to_width("日本語", 4), "日…");
    }
}
