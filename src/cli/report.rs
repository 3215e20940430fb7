//! Report formatting and printing utilities.
//!
//! Coverage gaps are displayed in cargo-style format. Separate from the core
//! so lingua can be used as a library without pulling in terminal concerns.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::coverage::{CoverageGap, GapKind};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print coverage gaps in cargo-style format to stdout.
pub fn report(gaps: &[CoverageGap], default_language: &str) {
    report_to(gaps, default_language, &mut io::stdout().lock());
}

/// Print coverage gaps to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(gaps: &[CoverageGap], default_language: &str, writer: &mut W) {
    if gaps.is_empty() {
        return;
    }

    // Align the rule tags after the longest quoted key.
    let max_key_width = gaps
        .iter()
        .map(|gap| gap.key.width())
        .max()
        .unwrap_or(0);

    for gap in gaps {
        print_gap(gap, default_language, max_key_width, writer);
    }

    print_summary(gaps, writer);
}

/// Print a success message when no gaps are found.
pub fn print_success(language_count: usize) {
    print_success_to(language_count, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(language_count: usize, writer: &mut W) {
    let msg = format!(
        "Checked {} language {} - no coverage gaps found",
        language_count,
        if language_count == 1 {
            "dictionary"
        } else {
            "dictionaries"
        }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

/// Print loader warnings (unparsable files, missing default dictionary).
pub fn print_warnings(warnings: &[String]) {
    print_warnings_to(warnings, &mut io::stderr().lock());
}

/// Print loader warnings to a custom writer.
pub fn print_warnings_to<W: Write>(warnings: &[String], writer: &mut W) {
    for warning in warnings {
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), warning);
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_gap<W: Write>(
    gap: &CoverageGap,
    default_language: &str,
    max_key_width: usize,
    writer: &mut W,
) {
    let padding = " ".repeat(max_key_width - gap.key.width());
    let _ = writeln!(
        writer,
        "{}: \"{}\"{}  {}",
        "warning".bold().yellow(),
        gap.key,
        padding,
        gap.kind.to_string().dimmed().cyan()
    );

    let note = match gap.kind {
        GapKind::MissingKey => format!(
            "falls back to \"{}\" while \"{}\" is active",
            default_language, gap.language
        ),
        GapKind::OrphanKey => format!(
            "resolves only while \"{}\" is active",
            gap.language
        ),
    };
    let _ = writeln!(
        writer,
        "  {} {}.json ({})",
        "-->".blue(),
        gap.language,
        note
    );
}

fn print_summary<W: Write>(gaps: &[CoverageGap], writer: &mut W) {
    let missing = gaps
        .iter()
        .filter(|g| g.kind == GapKind::MissingKey)
        .count();
    let orphans = gaps.len() - missing;

    let mut parts = Vec::new();
    if missing > 0 {
        parts.push(format!("{} missing", missing));
    }
    if orphans > 0 {
        parts.push(format!("{} orphan", orphans));
    }

    let summary = format!(
        "Found {} coverage {} ({})",
        gaps.len(),
        if gaps.len() == 1 { "gap" } else { "gaps" },
        parts.join(", ")
    );
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", summary.bold().yellow());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::{CoverageGap, GapKind};

    fn gaps() -> Vec<CoverageGap> {
        vec![
            CoverageGap {
                language: "es".to_string(),
                key: "editor.blockOptions.duplicate".to_string(),
                kind: GapKind::MissingKey,
            },
            CoverageGap {
                language: "es".to_string(),
                key: "editor.close".to_string(),
                kind: GapKind::OrphanKey,
            },
        ]
    }

    fn rendered(gaps: &[CoverageGap]) -> String {
        let mut out = Vec::new();
        report_to(gaps, "en", &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn report_names_key_language_and_rule() {
        let output = rendered(&gaps());
        assert!(output.contains("editor.blockOptions.duplicate"));
        assert!(output.contains("missing-key"));
        assert!(output.contains("orphan-key"));
        assert!(output.contains("es.json"));
    }

    #[test]
    fn report_summarizes_counts() {
        let output = rendered(&gaps());
        assert!(output.contains("Found 2 coverage gaps (1 missing, 1 orphan)"));
    }

    #[test]
    fn empty_report_prints_nothing() {
        assert!(rendered(&[]).is_empty());
    }

    #[test]
    fn success_message_pluralizes() {
        let mut out = Vec::new();
        print_success_to(1, &mut out);
        print_success_to(3, &mut out);
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("1 language dictionary"));
        assert!(output.contains("3 language dictionaries"));
    }
}
