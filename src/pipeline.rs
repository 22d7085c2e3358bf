use anyhow::{Context, Result, anyhow, bail};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{
    cli::{Args, Format},
    config::Config,
    formats,
    model::Shift,
};

/// Everything a run needs, resolved from the arguments and config.
#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: Format,
    pub seconds: f64,
    pub shift: Shift,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines: usize,
    pub shifted: usize,
    pub passthrough: usize,
    pub clamped: usize,
}

pub fn run_shift(args: &Args, cfg: &Config) -> Result<()> {
    let job = resolve_job(args, cfg)?;

    let span = tracing::info_span!(
        "shift",
        input = %job.input.display(),
        format = ?job.format,
        shift_ms = job.shift.millis()
    );
    let _g = span.enter();
    tracing::info!(output = %job.output.display(), "output path resolved");

    if same_file(&job.input, &job.output) {
        bail!(
            "refusing to write output over the input file: {}",
            job.output.display()
        );
    }

    let input = File::open(&job.input)
        .with_context(|| format!("cannot open input file: {}", job.input.display()))?;
    let output = File::create(&job.output)
        .with_context(|| format!("cannot open output file: {}", job.output.display()))?;

    let mut writer = BufWriter::new(output);
    let summary = shift_stream(
        BufReader::new(input),
        &mut writer,
        job.format,
        job.shift,
        cfg.logging.debug_line_samples,
    )?;
    writer
        .flush()
        .with_context(|| format!("failed writing output file: {}", job.output.display()))?;

    tracing::info!(
        lines = summary.lines,
        shifted = summary.shifted,
        passthrough = summary.passthrough,
        clamped = summary.clamped,
        "shift summary"
    );
    if summary.shifted == 0 {
        tracing::warn!(format = ?job.format, "no timing lines matched; output is a copy of the input");
    }

    println!(
        "Subtitle shifted by {}s and saved as '{}'",
        job.seconds,
        job.output.display()
    );
    Ok(())
}

pub fn resolve_job(args: &Args, cfg: &Config) -> Result<Job> {
    let input = args
        .file
        .clone()
        .ok_or_else(|| anyhow!("missing input file: --file <FILE> --time <SECONDS> [--output <FILE>]"))?;

    let seconds = parse_shift_seconds(args.time.as_deref(), cfg.shift.strict_time)?;

    let format = args
        .format
        .or_else(|| formats::infer_format_from_path(&input))
        .unwrap_or(cfg.shift.default_format);

    let output = match &args.output {
        Some(o) => o.clone(),
        None => derive_output_path(&input, &cfg.shift.output_suffix)?,
    };

    Ok(Job {
        input,
        output,
        format,
        seconds,
        shift: Shift::from_seconds(seconds),
    })
}

/// Streams `reader` to `writer` one line at a time, rewriting timing lines
/// and copying every other line byte for byte.
pub fn shift_stream<R: BufRead, W: Write>(
    mut reader: R,
    writer: &mut W,
    fmt: Format,
    by: Shift,
    debug_samples: usize,
) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut line = Vec::new();
    let sample = tracing::enabled!(tracing::Level::DEBUG);

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .context("failed reading input")?;
        if n == 0 {
            break;
        }
        summary.lines += 1;

        match formats::shift_line(&line, fmt, by) {
            Some(rewrite) => {
                writer
                    .write_all(&rewrite.bytes)
                    .context("failed writing output")?;
                summary.shifted += 1;
                summary.clamped += rewrite.clamped;

                if sample && summary.shifted <= debug_samples {
                    tracing::debug!(
                        line_no = summary.lines,
                        before = %String::from_utf8_lossy(&line).trim_end(),
                        after = %String::from_utf8_lossy(&rewrite.bytes).trim_end(),
                        "line sample"
                    );
                }
            }
            None => {
                writer.write_all(&line).context("failed writing output")?;
                summary.passthrough += 1;
            }
        }
    }

    Ok(summary)
}

/// `movie.srt` -> `movie_rsynced.srt`; `movie` -> `movie_rsynced`.
pub fn derive_output_path(input: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| anyhow!("bad input filename: {}", input.display()))?;

    let mut name = stem.to_os_string();
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    Ok(input.with_file_name(name))
}

/// Resolves `--time`. Lenient mode takes the longest numeric prefix and
/// falls back to zero; strict mode requires the whole value to be a number.
pub fn parse_shift_seconds(raw: Option<&str>, strict: bool) -> Result<f64> {
    let Some(raw) = raw else {
        return Ok(0.0);
    };
    let text = raw.trim_start();

    match leading_float(text) {
        Some((v, used)) if used == text.trim_end().len() => Ok(v),
        _ if strict => bail!("invalid --time value '{raw}': expected a number of seconds"),
        Some((v, _)) => {
            tracing::warn!(time = raw, used = v, "ignoring trailing text in --time value");
            Ok(v)
        }
        None => {
            tracing::warn!(time = raw, "--time value is not a number; shifting by 0");
            Ok(0.0)
        }
    }
}

/// Longest prefix of `s` that reads as a decimal number, with the count of
/// bytes it spans.
fn leading_float(s: &str) -> Option<(f64, usize)> {
    let b = s.as_bytes();
    let digits_at = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    let int_digits = digits_at(i);
    i += int_digits;

    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = digits_at(i + 1);
        if int_digits + frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = digits_at(j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }

    s[..i].parse().ok().map(|v| (v, i))
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    matches!((a.canonicalize(), b.canonicalize()), (Ok(x), Ok(y)) if x == y)
}
