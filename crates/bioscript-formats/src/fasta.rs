use std::io::Write;

use crate::ParseError;

/// Line width used by [`serialize`] when wrapping is requested
pub const DEFAULT_LINE_WIDTH: usize = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub description: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(id: impl Into<String>, description: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            sequence: sequence.into(),
        }
    }
}

/// Write one record as exactly two lines: `>id description` and the sequence.
///
/// The separating space is always written, even for an empty description.
/// Sequence case is preserved so lowercase markers stay visible.
pub fn write_record<W: Write>(
    writer: &mut W,
    id: &str,
    description: &str,
    sequence: &str,
) -> std::io::Result<()> {
    writeln!(writer, ">{} {}", id, description)?;
    writeln!(writer, "{}", sequence)
}

/// Parse a FASTA format string into one or more records
pub fn parse(input: &str) -> Result<Vec<FastaRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Option<FastaRecord> = None;

    for line in input.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('>') {
            if let Some(rec) = current.take() {
                if !rec.sequence.is_empty() {
                    records.push(rec);
                }
            }

            let mut parts = header.splitn(2, char::is_whitespace);
            let id = parts.next().unwrap_or("").to_string();
            let description = parts.next().map(str::trim).unwrap_or("").to_string();
            if id.is_empty() {
                current = None;
                continue;
            }
            current = Some(FastaRecord::new(id, description, String::new()));
        } else if let Some(rec) = current.as_mut() {
            rec.sequence
                .extend(trimmed.chars().filter(|c| c.is_alphabetic()));
        }
    }

    if let Some(rec) = current {
        if !rec.sequence.is_empty() {
            records.push(rec);
        }
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA input".to_string(),
        ));
    }

    Ok(records)
}

/// Serialize records to FASTA, wrapping sequence lines at `width` columns
/// when given
pub fn serialize(records: &[FastaRecord], width: Option<usize>) -> String {
    let mut out = String::new();

    for rec in records {
        out.push('>');
        out.push_str(&rec.id);
        if !rec.description.is_empty() {
            out.push(' ');
            out.push_str(&rec.description);
        }
        out.push('\n');

        match width {
            Some(width) if width > 0 => {
                let chars: Vec<char> = rec.sequence.chars().collect();
                for chunk in chars.chunks(width) {
                    out.extend(chunk.iter());
                    out.push('\n');
                }
            }
            _ => {
                out.push_str(&rec.sequence);
                out.push('\n');
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_record_two_lines() {
        let mut buf = Vec::new();
        write_record(&mut buf, "x1", "test", "ACGTcatACG").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), ">x1 test\nACGTcatACG\n");
    }

    #[test]
    fn test_write_record_empty_description() {
        let mut buf = Vec::new();
        write_record(&mut buf, "x1", "", "ACGT").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), ">x1 \nACGT\n");
    }

    #[test]
    fn test_long_sequence_not_wrapped() {
        let seq = "A".repeat(250);
        let mut buf = Vec::new();
        write_record(&mut buf, "long", "", &seq).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_parse_single_sequence() {
        let input = ">seq1 A test sequence\nATCGATCG\nGGCCTTAA\n";
        let recs = parse(input).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id, "seq1");
        assert_eq!(recs[0].description, "A test sequence");
        assert_eq!(recs[0].sequence, "ATCGATCGGGCCTTAA");
    }

    #[test]
    fn test_parse_keeps_case() {
        let recs = parse(">x1 \nACGbobT\n").unwrap();
        assert_eq!(recs[0].description, "");
        assert_eq!(recs[0].sequence, "ACGbobT");
    }

    #[test]
    fn test_parse_multi_sequence() {
        let input = ">seq1\nATCG\n>seq2\nGGCC\n>seq3\nTTAA\n";
        let recs = parse(input).unwrap();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[1].sequence, "GGCC");
    }

    #[test]
    fn test_serialize_wrapped() {
        let rec = FastaRecord::new("w", "", "ACGT".repeat(50));
        let text = serialize(&[rec.clone()], Some(DEFAULT_LINE_WIDTH));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], ">w");
        assert_eq!(lines.len(), 1 + 3);
        assert_eq!(lines[1].len(), 80);
        assert_eq!(parse(&text).unwrap()[0], rec);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse("").is_err());
        assert!(parse("> \n").is_err());
    }
}
