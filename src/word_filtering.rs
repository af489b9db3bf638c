use std::{io::{self, Read}, collections::HashSet, mem};

/// Reads UTF8 text from `reader` and returns its unique words in order of first appearance.
///
/// A word is a run of alphanumeric characters or apostrophes.
/// Input is decoded chunk by chunk; characters and words split between two reads are
/// stitched back together.
pub fn reader_to_words(mut reader: impl Read) -> io::Result<Vec<String>> {
    let mut scanner = WordScanner::default();

    let mut buffer = [0 as u8; 264];
    let mut read_start = 0;

    loop {
        let bytes_read = reader.read(&mut buffer[read_start..])?;
        if bytes_read == 0 {
            if read_start > 0 {
                return Err(io::Error::new(io::ErrorKind::InvalidInput, "unexpected end of UTF8 input"));
            }
            break;
        }

        let content_len = read_start + bytes_read;
        let (text, bytes_left) = bytes_to_str(&buffer[..content_len])?;
        scanner.feed(text);

        read_start = match bytes_left {
            None => 0,
            Some(bytes_left) => {
                buffer.copy_within((content_len-bytes_left)..content_len, 0);
                bytes_left
            },
        };
    }

    Ok(scanner.finish())
}

/// Scans `s` for words and returns the unique ones in order of first appearance.
pub fn scan_words(s: &str) -> Vec<String> {
    let mut scanner = WordScanner::default();
    scanner.feed(s);
    scanner.finish()
}

#[derive(Debug, Default)]
struct WordScanner {
    words: Vec<String>,
    seen: HashSet<String>,
    current: String,
}

impl WordScanner {
    fn feed(&mut self, s: &str) {
        for c in s.chars() {
            if is_word_char(c) {
                self.current.push(c);
            } else {
                self.end_word();
            }
        }
    }

    fn end_word(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let word = mem::take(&mut self.current);
        if !self.seen.contains(&word) {
            self.seen.insert(word.clone());
            self.words.push(word);
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.end_word();
        self.words
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\''
}

/// In-place converts a UTF8 formatted string into `&str`.
///
/// If a UTF8 character was cut off in the end,
/// returns the length left in the second element of a tuple
///
/// If there is an invalid UTF8 character, returns an io::Error
fn bytes_to_str(bytes: &[u8]) -> io::Result<(&str, Option<usize>)> {
    match std::str::from_utf8(bytes) {
        Ok(s) => Ok((s, None)),
        Err(utf8_error) => {
            if utf8_error.error_len().is_some() {
                return Err(io::Error::new(io::ErrorKind::InvalidInput,
                    "string contains invalid UTF8"));
            }
            let valid_up_to = utf8_error.valid_up_to();
            let s = std::str::from_utf8(&bytes[..valid_up_to])
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
            Ok((s, Some(bytes.len() - valid_up_to)))
        },
    }
}
