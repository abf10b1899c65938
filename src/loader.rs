//! Streaming mapping-file loader.

use crate::parse::{ConfusableEntry, ParseError, ParsedLine, parse_line};
#[cfg(feature = "simd")]
use simdutf8::basic::from_utf8;
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read mapping file: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: invalid UTF-8")]
    InvalidUtf8 { line: usize },

    #[error("line {line}: malformed mapping")]
    Malformed {
        line: usize,
        #[source]
        source: ParseError,
    },
}

#[inline]
fn validate_utf8(bytes: &[u8]) -> Option<&str> {
    #[cfg(feature = "simd")]
    {
        from_utf8(bytes).ok()
    }
    #[cfg(not(feature = "simd"))]
    {
        std::str::from_utf8(bytes).ok()
    }
}

/// Parse every line of `reader` and hand each entry to `sink`, in order.
///
/// Non-data lines are skipped. The first malformed line aborts the load;
/// entries already handed to `sink` stay where they are. Returns the number
/// of entries delivered.
pub fn load_mappings<R, F>(mut reader: R, mut sink: F) -> Result<usize, LoadError>
where
    R: BufRead,
    F: FnMut(ConfusableEntry),
{
    let mut buf = Vec::with_capacity(256);
    let mut line_no = 0usize;
    let mut loaded = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = validate_utf8(&buf).ok_or(LoadError::InvalidUtf8 { line: line_no })?;
        match parse_line(line) {
            Ok(ParsedLine::Entry(entry)) => {
                sink(entry);
                loaded += 1;
            }
            Ok(ParsedLine::Skip) => trace!(line = line_no, "Skipping non-data line"),
            Err(source) => {
                warn!(line = line_no, error = %source, loaded, "Mapping file load aborted");
                return Err(LoadError::Malformed {
                    line: line_no,
                    source,
                });
            }
        }
    }

    debug!(lines = line_no, loaded, "Mapping file loaded");
    Ok(loaded)
}
