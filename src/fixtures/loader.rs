//! Fixture line reading
//!
//! Lines are read lazily from an open file; the file is closed as soon as the
//! iterator is exhausted or dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

/// A forward-only sequence of lines read from a fixture file
///
/// Trailing `\n` and `\r\n` terminators are stripped. Each item is an
/// `io::Result` so read failures surface at the line where they happen.
#[derive(Debug)]
pub struct FixtureLines {
    lines: Lines<BufReader<File>>,
}

impl Iterator for FixtureLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next()
    }
}

/// Open a file for lazy line-by-line reading
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened.
///
/// # Examples
/// ```no_run
/// use aoc2023::fixtures::loader::read_lines;
///
/// for line in read_lines("fixtures/test/2.txt").unwrap() {
///     println!("{}", line.unwrap());
/// }
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> io::Result<FixtureLines> {
    let file = File::open(path)?;
    Ok(FixtureLines {
        lines: BufReader::new(file).lines(),
    })
}
