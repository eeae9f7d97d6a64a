//! Splits a line stream into bounded chunks.

use std::io::BufRead;

use comention_core::errors::ScanError;

/// A batch of consecutive corpus lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of the chunk in the stream, from 0.
    pub index: u64,
    /// Ordinal of `lines[0]` in the corpus, from 1.
    pub first_line: u64,
    pub lines: Vec<String>,
}

impl Chunk {
    /// Corpus ordinals paired with their lines.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (u64, &str)> + '_ {
        self.lines
            .iter()
            .enumerate()
            .map(move |(offset, line)| (self.first_line + offset as u64, line.as_str()))
    }
}

/// Reads at most `chunk_lines` lines per chunk.
///
/// Line terminators (`\n`, `\r\n`) are stripped and invalid UTF-8 is
/// replaced, so a stray byte never aborts a long run.
pub struct ChunkReader<R> {
    reader: R,
    chunk_lines: usize,
    next_index: u64,
    lines_read: u64,
    buf: Vec<u8>,
}

impl<R: BufRead> ChunkReader<R> {
    pub fn new(reader: R, chunk_lines: usize) -> Self {
        Self {
            reader,
            chunk_lines: chunk_lines.max(1),
            next_index: 0,
            lines_read: 0,
            buf: Vec::new(),
        }
    }

    /// Lines handed out so far.
    pub fn lines_read(&self) -> u64 {
        self.lines_read
    }

    /// The next chunk, or `None` at end of input.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>, ScanError> {
        let first_line = self.lines_read + 1;
        let mut lines = Vec::with_capacity(self.chunk_lines.min(4096));

        while lines.len() < self.chunk_lines {
            self.buf.clear();
            let read = self
                .reader
                .read_until(b'\n', &mut self.buf)
                .map_err(|source| ScanError::IoError {
                    line: self.lines_read + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }

            let mut end = self.buf.len();
            if end > 0 && self.buf[end - 1] == b'\n' {
                end -= 1;
            }
            if end > 0 && self.buf[end - 1] == b'\r' {
                end -= 1;
            }
            lines.push(String::from_utf8_lossy(&self.buf[..end]).into_owned());
            self.lines_read += 1;
        }

        if lines.is_empty() {
            return Ok(None);
        }

        let chunk = Chunk {
            index: self.next_index,
            first_line,
            lines,
        };
        self.next_index += 1;
        Ok(Some(chunk))
    }
}

impl<R: BufRead> Iterator for ChunkReader<R> {
    type Item = Result<Chunk, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk().transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_are_bounded_and_numbered() {
        let input = "a\nb\r\nc\nd\ne";
        let chunks: Vec<Chunk> = ChunkReader::new(input.as_bytes(), 2)
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].lines, vec!["a", "b"]);
        assert_eq!(chunks[1].first_line, 3);
        assert_eq!(chunks[2].lines, vec!["e"]);
        assert_eq!(chunks[2].index, 2);
        assert_eq!(
            chunks[1].numbered_lines().collect::<Vec<_>>(),
            vec![(3, "c"), (4, "d")]
        );
    }

    #[test]
    fn a_full_last_chunk_loses_no_line() {
        let input = "1\n2\n3\n4\n";
        let mut reader = ChunkReader::new(input.as_bytes(), 2);
        let total: usize = reader.by_ref().map(|c| c.unwrap().lines.len()).sum();
        assert_eq!(total, 4);
        assert_eq!(reader.lines_read(), 4);
    }

    #[test]
    fn empty_input_has_no_chunks() {
        assert!(ChunkReader::new("".as_bytes(), 10).next().is_none());
    }

    #[test]
    fn empty_lines_are_kept() {
        let chunk = ChunkReader::new("\n\nx\n".as_bytes(), 10)
            .next()
            .unwrap()
            .unwrap();
        assert_eq!(chunk.lines, vec!["", "", "x"]);
    }
}
