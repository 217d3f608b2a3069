//! Command-line tooling for the OpenLR line encoder.
//!
//! This crate provides utilities for producing and understanding encoded
//! line references:
//!
//! - Load line references from JSON files or directories of them
//! - Print the encoding as OpenLR base64, hex or a JSON report
//! - Explain the encoding byte by byte
//!
//! # Design Principles
//!
//! - **First-class tooling** - These tools are part of the product, not afterthoughts.
//! - **Human-readable output** - Make it easy to understand what the codec is doing.

mod layout;

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use codec::{EncodeOptions, LineLocationReference};
use glob::Pattern;
use serde::Serialize;

pub use layout::{explain_line, split_sections, LayoutEntry, Section};

/// Textual OpenLR form: standard base64 with padding.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Lowercase hex, one space between bytes.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Parses a JSON line reference. Offsets default to zero.
pub fn parse_line(json: &str) -> Result<LineLocationReference> {
    serde_json::from_str(json).context("parse line reference json")
}

/// Reads and parses a JSON line reference file.
pub fn load_line(path: &Path) -> Result<LineLocationReference> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read line {}", path.display()))?;
    parse_line(&contents).with_context(|| format!("in {}", path.display()))
}

/// Summary of one encoded line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    pub points: usize,
    pub len: usize,
    pub base64: String,
    pub hex: String,
}

/// Encodes `line` and collects every textual form of the result.
pub fn encode_report(
    line: &LineLocationReference,
    options: &EncodeOptions,
    path: Option<&Path>,
) -> Result<EncodeReport> {
    let bytes = line.encode_with(options).context("encode line")?;
    Ok(EncodeReport {
        path: path.map(Path::to_path_buf),
        points: line.points.len(),
        len: bytes.len(),
        base64: encode_base64(&bytes),
        hex: encode_hex(&bytes),
    })
}

/// Lists the JSON inputs under `dir`, sorted by path.
///
/// Without a glob, every `*.json` file is taken. A glob matches either the
/// full path or the file name.
pub fn collect_inputs(dir: &Path, glob: Option<&str>) -> Result<Vec<PathBuf>> {
    let pattern = Pattern::new(glob.unwrap_or("*.json")).context("invalid glob pattern")?;
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read dir {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches_path = pattern.matches_path(&path);
        let matches_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| pattern.matches(name));
        if matches_path || matches_name {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Renders a layout as an aligned text table.
#[must_use]
pub fn format_layout(entries: &[LayoutEntry]) -> String {
    let width = entries
        .iter()
        .map(|entry| entry.section.to_string().len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            out,
            "{:>3}..{:<3} {:<width$}  {}",
            entry.start,
            entry.end,
            entry.section.to_string(),
            encode_hex(&entry.bytes),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN_JSON: &str = r#"{
        "points": [
            {"lon": 9.9750602, "lat": 48.0632865, "frc": 1, "fow": 3, "bear": 298, "lfrcnp": 1, "dnp": 88},
            {"lon": 9.9750602, "lat": 48.0632865, "frc": 1, "fow": 3, "bear": 298, "lfrcnp": 7, "dnp": 0}
        ]
    }"#;

    #[test]
    fn hex_is_spaced_lowercase() {
        assert_eq!(encode_hex(&[0x0B, 0xFF, 0x00]), "0b ff 00");
        assert_eq!(encode_hex(&[]), "");
    }

    #[test]
    fn base64_is_padded() {
        assert_eq!(encode_base64(&[0x0B]), "Cw==");
    }

    #[test]
    fn report_for_golden_line() {
        let line = parse_line(GOLDEN_JSON).unwrap();
        let report = encode_report(&line, &EncodeOptions::strict(), None).unwrap();
        assert_eq!(report.base64, "CwcX6CItqAs6AQAAAAALGg==");
        assert_eq!(report.len, 16);
        assert_eq!(report.points, 2);
        assert!(report.hex.starts_with("0b 07 17"));
    }

    #[test]
    fn report_json_omits_missing_path() {
        let line = parse_line(GOLDEN_JSON).unwrap();
        let report = encode_report(&line, &EncodeOptions::default(), None).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("path"));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse_line("{\"points\": 3}").is_err());
    }

    #[test]
    fn strict_report_carries_codec_error() {
        let mut line = parse_line(GOLDEN_JSON).unwrap();
        line.points[0].frc = 12;
        let err = encode_report(&line, &EncodeOptions::strict(), None).unwrap_err();
        assert!(format!("{err:#}").contains("frc"));
    }

    #[test]
    fn layout_table_lists_sections() {
        let line = parse_line(GOLDEN_JSON).unwrap();
        let entries = explain_line(&line, &EncodeOptions::default()).unwrap();
        let table = format_layout(&entries);
        assert_eq!(table.lines().count(), entries.len());
        assert!(table.contains("lrp 0 absolute coords"));
        assert!(table.contains("17 e8 22 2d a8"));
    }
}
