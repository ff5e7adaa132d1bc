//! Input validation for sequence generation and retrieval parameters.
//!
//! Every function here is pure: it takes the raw text the user typed and
//! either returns a normalized value or a [`ValidationError`] describing why
//! the input was rejected. Re-prompting is left to the caller.

use thiserror::Error;

/// Maximum number of characters kept in a FASTA description
pub const MAX_DESCRIPTION_LEN: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("please enter a whole number")]
    NotAnInteger,
    #[error("please enter a positive whole number")]
    NotPositive,
    #[error("please enter a non-negative whole number")]
    Negative,
    #[error("sequence ID must not be empty")]
    EmptyId,
    #[error("sequence ID must not contain whitespace")]
    IdContainsWhitespace,
    #[error("taxonomy ID must be a number")]
    InvalidTaxid,
    #[error("marker must not be empty")]
    EmptyMarker,
    #[error("marker must contain letters only")]
    MarkerNotAlphabetic,
}

/// A description after trimming and truncation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    pub text: String,
    /// Set when the input exceeded [`MAX_DESCRIPTION_LEN`] characters
    pub truncated: bool,
}

fn parse_integer(raw: &str) -> Result<i64, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::NotAnInteger)
}

/// Parse the requested sequence length; must be greater than zero
pub fn parse_length(raw: &str) -> Result<usize, ValidationError> {
    let value = parse_integer(raw)?;
    if value <= 0 {
        return Err(ValidationError::NotPositive);
    }
    usize::try_from(value).map_err(|_| ValidationError::NotAnInteger)
}

/// Parse a length bound for the retrieval filter; zero is allowed
pub fn parse_length_bound(raw: &str) -> Result<usize, ValidationError> {
    let value = parse_integer(raw)?;
    if value < 0 {
        return Err(ValidationError::Negative);
    }
    usize::try_from(value).map_err(|_| ValidationError::NotAnInteger)
}

pub fn parse_sequence_id(raw: &str) -> Result<String, ValidationError> {
    let id = raw.trim();
    if id.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::IdContainsWhitespace);
    }
    Ok(id.to_string())
}

/// Parse an NCBI taxonomy identifier, which is a plain number
pub fn parse_taxid(raw: &str) -> Result<String, ValidationError> {
    let taxid = raw.trim();
    if taxid.is_empty() || !taxid.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidTaxid);
    }
    Ok(taxid.to_string())
}

/// Trim a description and cut it to [`MAX_DESCRIPTION_LEN`] characters.
///
/// Never fails: an empty description is allowed, and a long one is
/// shortened with `truncated` set so the caller can warn about it.
pub fn normalize_description(raw: &str) -> Description {
    let trimmed = raw.trim();
    if trimmed.chars().count() > MAX_DESCRIPTION_LEN {
        Description {
            text: trimmed.chars().take(MAX_DESCRIPTION_LEN).collect(),
            truncated: true,
        }
    } else {
        Description {
            text: trimmed.to_string(),
            truncated: false,
        }
    }
}

/// Lowercase the letters that could be mistaken for nucleotides.
///
/// Only uppercase `A`, `C`, `G` and `T` are folded; any other character,
/// including uppercase `N` or `X`, is kept as typed.
pub fn fold_nucleotide_letters(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'A' | 'C' | 'G' | 'T' => c.to_ascii_lowercase(),
            other => other,
        })
        .collect()
}

/// Normalize the marker text spliced into a generated sequence
pub fn normalize_marker(raw: &str) -> Result<String, ValidationError> {
    let marker = fold_nucleotide_letters(raw.trim());
    if marker.is_empty() {
        return Err(ValidationError::EmptyMarker);
    }
    if !marker.chars().all(char::is_alphabetic) {
        return Err(ValidationError::MarkerNotAlphabetic);
    }
    Ok(marker)
}

/// Fully validated parameters for one generated sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    sequence_id: String,
    description: String,
    marker: String,
}

impl GenerationRequest {
    /// Validate every field from raw input at once.
    ///
    /// The returned flag is set when the description had to be truncated.
    pub fn from_raw(
        length: &str,
        sequence_id: &str,
        description: &str,
        marker: &str,
    ) -> Result<(Self, bool), ValidationError> {
        let description = normalize_description(description);
        let request = Self {
            length: parse_length(length)?,
            sequence_id: parse_sequence_id(sequence_id)?,
            description: description.text,
            marker: normalize_marker(marker)?,
        };
        Ok((request, description.truncated))
    }

    /// Assemble a request from values that already passed validation
    pub fn from_validated(
        length: usize,
        sequence_id: String,
        description: Description,
        marker: String,
    ) -> Self {
        Self {
            length,
            sequence_id,
            description: description.text,
            marker,
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn sequence_id(&self) -> &str {
        &self.sequence_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Name of the FASTA file written for this request
    pub fn file_name(&self) -> String {
        format!("{}.fasta", self.sequence_id)
    }
}
