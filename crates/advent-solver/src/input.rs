//! Sources of puzzle input text.
//!
//! Puzzles name their input (for example `day4`); an [`InputSource`] resolves
//! that name to text. Three sources are provided:
//!
//! - [`BundledInputs`] - the sample inputs compiled into the crate
//! - [`DirectoryInputs`] - `<name>.txt` files in a directory
//! - [`MemoryInputs`] - an in-memory map, mostly for tests

use std::{
    collections::HashMap,
    fmt::Debug,
    fs,
    path::{Path, PathBuf},
};

/// A lookup from input names to their text.
pub trait InputSource: Debug + Send + Sync {
    /// Returns the text of the input called `name`.
    ///
    /// Returns `None` if the name is unknown or the input cannot be read as
    /// UTF-8 text.
    fn load_text(&self, name: &str) -> Option<String>;
}

const BUNDLED: [(&str, &str); 4] = [
    ("day1", include_str!("../fixtures/day1.txt")),
    ("day2", include_str!("../fixtures/day2.txt")),
    ("day3", include_str!("../fixtures/day3.txt")),
    ("day4", include_str!("../fixtures/day4.txt")),
];

/// The sample inputs bundled with the crate.
///
/// # Examples
///
/// ```
/// use advent_solver::input::{BundledInputs, InputSource as _};
///
/// let inputs = BundledInputs::new();
/// assert!(inputs.load_text("day1").is_some());
/// assert!(inputs.load_text("day99").is_none());
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct BundledInputs;

impl BundledInputs {
    /// Creates a new `BundledInputs`.
    #[must_use]
    pub const fn new() -> Self {
        BundledInputs
    }

    /// Returns the names of all bundled inputs.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        BUNDLED.iter().map(|(name, _)| *name)
    }
}

impl InputSource for BundledInputs {
    fn load_text(&self, name: &str) -> Option<String> {
        BUNDLED
            .iter()
            .find(|(bundled, _)| *bundled == name)
            .map(|(_, text)| (*text).to_owned())
    }
}

/// Inputs stored as `<name>.txt` files in a directory.
#[derive(Debug, Clone)]
pub struct DirectoryInputs {
    dir: PathBuf,
}

impl DirectoryInputs {
    /// Creates a source reading from `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the directory inputs are read from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> Option<PathBuf> {
        // Names are plain file stems; anything that could leave the directory is unknown.
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return None;
        }
        Some(self.dir.join(format!("{name}.txt")))
    }
}

impl InputSource for DirectoryInputs {
    fn load_text(&self, name: &str) -> Option<String> {
        let path = self.path_for(name)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                log::debug!("cannot read input {}: {e}", path.display());
                return None;
            }
        };
        match String::from_utf8(bytes) {
            Ok(text) => Some(text),
            Err(e) => {
                log::debug!("input {} is not UTF-8: {e}", path.display());
                None
            }
        }
    }
}

/// Inputs held in memory.
///
/// # Examples
///
/// ```
/// use advent_solver::input::{InputSource as _, MemoryInputs};
///
/// let inputs = MemoryInputs::from_iter([("day4", "XMAS")]);
/// assert_eq!(inputs.load_text("day4").as_deref(), Some("XMAS"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryInputs {
    texts: HashMap<String, String>,
}

impl MemoryInputs {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` under `name`, replacing any previous text.
    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(name.into(), text.into());
    }
}

impl<N, T> FromIterator<(N, T)> for MemoryInputs
where
    N: Into<String>,
    T: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let texts = iter
            .into_iter()
            .map(|(name, text)| (name.into(), text.into()))
            .collect();
        Self { texts }
    }
}

impl InputSource for MemoryInputs {
    fn load_text(&self, name: &str) -> Option<String> {
        self.texts.get(name).cloned()
    }
}
