//! Backward chunked reader returning the last lines of a text file.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Bytes read per backward step.
pub const CHUNK_SIZE: usize = 8192;

/// Last `n` lines of the file at `path`, oldest first.
///
/// A missing file yields an empty list. Invalid UTF-8 is replaced with U+FFFD.
pub fn tail_lines(path: &Path, n: usize) -> io::Result<Vec<String>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    tail_from(file, n, CHUNK_SIZE)
}

/// Last `n` lines of `source`, reading backward `chunk` bytes at a time.
///
/// Stops once more than `n` lines are buffered or the start is reached, so a
/// source holding a single newline-free line is read completely.
pub fn tail_from<R: Read + Seek>(mut source: R, n: usize, chunk: usize) -> io::Result<Vec<String>> {
    let n = n.max(1);
    let chunk = chunk.max(1) as u64;

    let mut pos = source.seek(SeekFrom::End(0))?;
    let mut buf: Vec<u8> = Vec::new();
    let mut line_count = 0;

    while pos > 0 && line_count <= n {
        let read = chunk.min(pos);
        pos -= read;
        source.seek(SeekFrom::Start(pos))?;

        let mut block = vec![0u8; read as usize];
        source.read_exact(&mut block)?;
        block.extend_from_slice(&buf);
        buf = block;

        line_count = split_lines(&buf).len();
    }

    let lines = split_lines(&buf);
    let start = lines.len().saturating_sub(n);

    Ok(lines[start..]
        .iter()
        .map(|l| String::from_utf8_lossy(l).into_owned())
        .collect())
}

/// Split on `\n`, `\r\n` or a lone `\r`. A trailing terminator does not open
/// an empty last line; blank lines in between are kept.
fn split_lines(buf: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < buf.len() {
        match buf[i] {
            b'\n' => {
                lines.push(&buf[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&buf[start..i]);
                if buf.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < buf.len() {
        lines.push(&buf[start..]);
    }

    lines
}
