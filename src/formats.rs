pub mod ass;
pub mod srt;
pub mod time;
pub mod vtt;

use std::path::Path;

use crate::{cli::Format, model::Shift};

/// A timing line after shifting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub bytes: Vec<u8>,
    /// How many of the line's timestamps were floored at zero.
    pub clamped: usize,
}

/// Returns the rewritten line, or `None` when the line passes through
/// unchanged.
pub fn shift_line(line: &[u8], fmt: Format, by: Shift) -> Option<Rewrite> {
    match fmt {
        Format::Srt => srt::shift_line(line, by),
        Format::Vtt => vtt::shift_line(line, by),
        Format::Ass => ass::shift_line(line, by),
    }
}

pub fn infer_format_from_path(path: &Path) -> Option<Format> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
        .as_str()
    {
        "srt" => Some(Format::Srt),
        "vtt" => Some(Format::Vtt),
        "ass" | "ssa" => Some(Format::Ass),
        _ => None,
    }
}
