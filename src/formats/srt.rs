use crate::{
    formats::time::{Scanner, format_srt_timestamp},
    model::{Shift, Timestamp},
};

use super::Rewrite;

/// Parses a SubRip timing line: `H:MM:SS,mmm --> H:MM:SS,mmm`.
///
/// Leading whitespace and whitespace around the arrow are allowed, field
/// widths are not enforced, and anything after the end clock (e.g. legacy
/// `X1:` position coordinates) is ignored. Both clocks must be present.
pub fn parse_timing_line(line: &[u8]) -> Option<(Timestamp, Timestamp)> {
    let mut sc = Scanner::new(line);
    sc.skip_whitespace();
    let start = scan_clock(&mut sc)?;
    sc.skip_whitespace();
    sc.literal(b"-->")?;
    sc.skip_whitespace();
    let end = scan_clock(&mut sc)?;
    Some((start, end))
}

fn scan_clock(sc: &mut Scanner<'_>) -> Option<Timestamp> {
    let h = field(sc)?;
    sc.literal(b":")?;
    let m = field(sc)?;
    sc.literal(b":")?;
    let s = field(sc)?;
    sc.literal(b",")?;
    let ms = field(sc)?;
    Timestamp::from_parts(h, m, s, ms)
}

// Whitespace may precede any field, as with scanf's `%d`.
fn field(sc: &mut Scanner<'_>) -> Option<i64> {
    sc.skip_whitespace();
    sc.number()
}

/// Rewrites a timing line in canonical form, or returns `None` for a
/// passthrough line. The rewritten line always ends in a single `\n`.
pub fn shift_line(line: &[u8], by: Shift) -> Option<Rewrite> {
    let (start, end) = parse_timing_line(line)?;
    let start = start.shifted(by);
    let end = end.shifted(by);

    let text = format!(
        "{} --> {}\n",
        format_srt_timestamp(start.timestamp),
        format_srt_timestamp(end.timestamp)
    );

    Some(Rewrite {
        bytes: text.into_bytes(),
        clamped: usize::from(start.clamped) + usize::from(end.clamped),
    })
}
