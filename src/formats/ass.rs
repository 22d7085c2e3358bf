use crate::{
    formats::time::{Scanner, format_ass_timestamp},
    model::{Shift, Timestamp},
};

use super::Rewrite;

const EVENT_PREFIXES: [&[u8]; 2] = [b"Dialogue:", b"Comment:"];

/// Shifts the Start and End fields of an ASS/SSA event line. Every other
/// byte, including the event text and line terminator, is copied as is.
pub fn shift_line(line: &[u8], by: Shift) -> Option<Rewrite> {
    let prefix_len = EVENT_PREFIXES
        .iter()
        .find(|p| line.starts_with(p))
        .map(|p| p.len())?;

    // Layer, Start, End are the first three comma separated fields.
    let mut commas = line
        .iter()
        .enumerate()
        .skip(prefix_len)
        .filter(|(_, b)| **b == b',')
        .map(|(i, _)| i);
    let layer_end = commas.next()?;
    let start_end = commas.next()?;
    let end_end = commas.next()?;

    let start = parse_clock(&line[layer_end + 1..start_end])?.shifted(by);
    let end = parse_clock(&line[start_end + 1..end_end])?.shifted(by);

    let mut bytes = Vec::with_capacity(line.len() + 4);
    bytes.extend_from_slice(&line[..=layer_end]);
    bytes.extend_from_slice(format_ass_timestamp(start.timestamp).as_bytes());
    bytes.push(b',');
    bytes.extend_from_slice(format_ass_timestamp(end.timestamp).as_bytes());
    bytes.extend_from_slice(&line[end_end..]);

    Some(Rewrite {
        bytes,
        clamped: usize::from(start.clamped) + usize::from(end.clamped),
    })
}

/// `H:MM:SS.cc`, whole field. The fraction is scaled by its width, so
/// `.5` is 500 ms and `.123` is 123 ms.
fn parse_clock(field: &[u8]) -> Option<Timestamp> {
    let mut sc = Scanner::new(field);
    sc.skip_whitespace();
    let h = sc.number()?;
    sc.literal(b":")?;
    let m = sc.number()?;
    sc.literal(b":")?;
    let s = sc.number()?;
    sc.literal(b".")?;
    let ms = sc.fraction_millis()?;
    sc.skip_whitespace();
    if !sc.is_empty() {
        return None;
    }
    Timestamp::from_parts(h, m, s, ms)
}
