//! Puzzle input fixtures
//!
//! Fixture files live under a root directory, addressed by paths relative to it:
//! `actual/<day>.txt` for puzzle inputs and `test/<day>.txt` for the worked samples.

pub mod loader;

use std::path::{Path, PathBuf};

pub use loader::{FixtureLines, read_lines};

/// Relative path of a day's puzzle input
#[must_use]
pub fn actual(day: u8) -> String {
    format!("actual/{day}.txt")
}

/// Root directory that relative fixture paths are resolved against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixtures {
    root: PathBuf,
}

impl Fixtures {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of a fixture given its path relative to the root
    #[must_use]
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

impl Default for Fixtures {
    /// The `fixtures` directory shipped next to `Cargo.toml`
    fn default() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actual_paths() {
        assert_eq!(actual(1), "actual/1.txt");
        assert_eq!(actual(2), "actual/2.txt");
    }

    #[test]
    fn path_joins_root() {
        let fixtures = Fixtures::new("/data/aoc");
        assert_eq!(fixtures.path("test/2.txt"), Path::new("/data/aoc/test/2.txt"));
        assert_eq!(fixtures.path(actual(1)), Path::new("/data/aoc/actual/1.txt"));
    }

    #[test]
    fn default_root_contains_samples() {
        let fixtures = Fixtures::default();
        assert!(fixtures.path("test/1.txt").is_file());
        assert_eq!(read_lines(fixtures.path("test/2.txt")).unwrap().count(), 5);
    }
}
