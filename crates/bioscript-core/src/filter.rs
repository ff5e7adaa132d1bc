use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sequence::{FetchedEntry, SequenceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundsError {
    #[error("minimum length {min} is greater than maximum length {max}")]
    Inverted { min: usize, max: usize },
}

/// Inclusive sequence length range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBounds {
    min: usize,
    max: usize,
}

impl LengthBounds {
    pub fn new(min: usize, max: usize) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, length: usize) -> bool {
        self.min <= length && length <= self.max
    }
}

impl std::fmt::Display for LengthBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// Keep the entries whose sequence length lies within `bounds`.
///
/// Entries are pulled one at a time; the first upstream error stops the
/// filter and is returned, discarding what was collected so far.
pub fn filter_by_length<I, E, X>(entries: I, bounds: LengthBounds) -> Result<Vec<SequenceRecord>, X>
where
    I: IntoIterator<Item = Result<E, X>>,
    E: FetchedEntry,
{
    let mut kept = Vec::new();
    for entry in entries {
        let entry = entry?;
        if bounds.contains(entry.sequence_len()) {
            kept.push(SequenceRecord::from_entry(&entry));
        }
    }
    Ok(kept)
}
