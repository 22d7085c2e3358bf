use crate::{
    formats::time::{Scanner, format_vtt_timestamp, split_line_ending},
    model::{Shift, Timestamp},
};

use super::Rewrite;

/// WebVTT timing line. Hours are optional on input (`MM:SS.mmm`) but always
/// written. Cue settings after the end clock are kept.
pub fn shift_line(line: &[u8], by: Shift) -> Option<Rewrite> {
    let (body, _) = split_line_ending(line);
    let mut sc = Scanner::new(body);
    sc.skip_whitespace();
    let start = scan_clock(&mut sc)?;
    sc.skip_whitespace();
    sc.literal(b"-->")?;
    sc.skip_whitespace();
    let end = scan_clock(&mut sc)?;
    let settings = sc.rest();

    let start = start.shifted(by);
    let end = end.shifted(by);

    let mut bytes = format!(
        "{} --> {}",
        format_vtt_timestamp(start.timestamp),
        format_vtt_timestamp(end.timestamp)
    )
    .into_bytes();
    bytes.extend_from_slice(settings);
    bytes.push(b'\n');

    Some(Rewrite {
        bytes,
        clamped: usize::from(start.clamped) + usize::from(end.clamped),
    })
}

fn scan_clock(sc: &mut Scanner<'_>) -> Option<Timestamp> {
    let first = sc.number()?;
    sc.literal(b":")?;
    let second = sc.number()?;
    let (h, m, s) = if sc.peek() == Some(b':') {
        sc.literal(b":")?;
        (first, second, sc.number()?)
    } else {
        (0, first, second)
    };
    sc.literal(b".")?;
    let ms = sc.number()?;
    Timestamp::from_parts(h, m, s, ms)
}
