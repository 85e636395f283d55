use std::collections::HashSet;
use thiserror::Error;

/// Root of the Nectar of Instruction library on vedabase.io.
pub const BASE_URL: &str = "https://vedabase.io/en/library/noi/";

/// Number of numbered texts in the book, after the preface.
pub const TEXT_COUNT: u32 = 11;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("target list is empty")]
    Empty,

    #[error("duplicate target ID: {0}")]
    DuplicateId(String),
}

/// One page to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: String,
    pub title: String,
    pub url: String,
}

impl Target {
    /// A target whose URL is `{base_url}{id}/`.
    pub fn under(base_url: &str, id: &str, title: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("{base_url}{id}/"),
        }
    }
}

/// An ordered, non-empty list of targets with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetList {
    targets: Vec<Target>,
}

impl TargetList {
    pub fn new(targets: Vec<Target>) -> Result<Self, TargetError> {
        if targets.is_empty() {
            return Err(TargetError::Empty);
        }
        let mut seen = HashSet::new();
        for target in &targets {
            if !seen.insert(target.id.as_str()) {
                return Err(TargetError::DuplicateId(target.id.clone()));
            }
        }
        Ok(Self { targets })
    }

    /// The preface followed by Texts 1-11, rooted at `base_url`.
    ///
    /// `base_url` is expected to end with a slash.
    pub fn nectar_of_instruction(base_url: &str) -> Self {
        let mut targets = vec![Target::under(base_url, "preface", "Preface")];
        targets.extend((1..=TEXT_COUNT).map(|n| {
            Target::under(base_url, &n.to_string(), &format!("Text {n}"))
        }));
        Self { targets }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.id.as_str()).collect()
    }
}

impl Default for TargetList {
    fn default() -> Self {
        Self::nectar_of_instruction(BASE_URL)
    }
}

impl<'a> IntoIterator for &'a TargetList {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}
