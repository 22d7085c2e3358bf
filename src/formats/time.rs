use crate::model::Timestamp;

pub fn format_srt_timestamp(t: Timestamp) -> String {
    format_timestamp(t, ',')
}

pub fn format_vtt_timestamp(t: Timestamp) -> String {
    format_timestamp(t, '.')
}

fn format_timestamp(t: Timestamp, ms_sep: char) -> String {
    let (hour, min, sec, milli) = t.parts();
    format!("{hour:02}:{min:02}:{sec:02}{ms_sep}{milli:03}")
}

/// `H:MM:SS.cc`; milliseconds below a centisecond are dropped.
pub fn format_ass_timestamp(t: Timestamp) -> String {
    let (hours, minutes, seconds, millis) = t.parts();
    let centis = millis / 10;
    format!("{hours}:{minutes:02}:{seconds:02}.{centis:02}")
}

/// Splits a raw line into its body and its `\n` / `\r\n` terminator.
pub fn split_line_ending(line: &[u8]) -> (&[u8], &[u8]) {
    let body_len = match line {
        [.., b'\r', b'\n'] => line.len() - 2,
        [.., b'\n'] => line.len() - 1,
        _ => line.len(),
    };
    line.split_at(body_len)
}

/// Forward-only cursor over the bytes of one line.
pub struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    pub fn is_empty(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub fn skip_whitespace(&mut self) {
        while self
            .bytes
            .get(self.pos)
            .is_some_and(|b| b.is_ascii_whitespace())
        {
            self.pos += 1;
        }
    }

    /// One or more ASCII digits. `None` when there are none or the value
    /// overflows.
    pub fn number(&mut self) -> Option<i64> {
        let digits = self.rest().iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let mut value: i64 = 0;
        for &b in &self.bytes[self.pos..self.pos + digits] {
            value = value.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
        }
        self.pos += digits;
        Some(value)
    }

    /// Decimal fraction digits read as milliseconds: padded or truncated to
    /// three digits.
    pub fn fraction_millis(&mut self) -> Option<i64> {
        let digits = self.rest().iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 {
            return None;
        }
        let millis = self.bytes[self.pos..self.pos + digits]
            .iter()
            .chain(std::iter::repeat(&b'0'))
            .take(3)
            .fold(0, |acc, &b| acc * 10 + i64::from(b - b'0'));
        self.pos += digits;
        Some(millis)
    }

    pub fn literal(&mut self, lit: &[u8]) -> Option<()> {
        if self.rest().starts_with(lit) {
            self.pos += lit.len();
            Some(())
        } else {
            None
        }
    }

    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }
}
