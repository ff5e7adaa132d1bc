use bioscript_core::FetchedEntry;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till1},
    character::complete::{digit1, space0, space1},
    combinator::{map_res, opt},
    sequence::{preceded, terminated, tuple},
    IResult,
};

use crate::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    Linear,
    Circular,
}

/// The parts of a GenBank flat-file record the retrieval flow cares about
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenBankRecord {
    pub name: String,
    /// Length stated on the LOCUS line
    pub declared_length: Option<usize>,
    pub molecule_type: Option<String>,
    pub topology: Option<Topology>,
    pub definition: String,
    pub accession: Option<String>,
    /// `accession.version` from the VERSION line
    pub version: Option<String>,
    pub organism: Option<String>,
    /// Uppercased ORIGIN bases; empty for records without an ORIGIN block
    pub sequence: String,
}

impl GenBankRecord {
    /// Record identifier: versioned accession, then accession, then LOCUS name
    pub fn id(&self) -> &str {
        self.version
            .as_deref()
            .or(self.accession.as_deref())
            .unwrap_or(&self.name)
    }

    /// Sequence length, falling back to the LOCUS length when no ORIGIN was given
    pub fn len(&self) -> usize {
        if self.sequence.is_empty() {
            self.declared_length.unwrap_or(0)
        } else {
            self.sequence.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FetchedEntry for GenBankRecord {
    fn identifier(&self) -> &str {
        self.id()
    }

    fn sequence_len(&self) -> usize {
        self.len()
    }

    fn description(&self) -> &str {
        &self.definition
    }
}

struct Locus<'a> {
    name: &'a str,
    length: Option<usize>,
    rest: &'a str,
}

fn locus_line(input: &str) -> IResult<&str, Locus<'_>> {
    let (rest, (name, length)) = preceded(
        terminated(tag("LOCUS"), space1),
        tuple((
            take_till1(char::is_whitespace),
            opt(preceded(
                space1,
                terminated(
                    map_res(digit1, str::parse::<usize>),
                    preceded(space0, alt((tag("bp"), tag("aa"), tag("rc")))),
                ),
            )),
        )),
    )(input)?;
    Ok(("", Locus { name, length, rest }))
}

fn parse_locus_line(line: &str, record: &mut GenBankRecord) -> Result<(), ParseError> {
    let (_, locus) = locus_line(line)
        .map_err(|e| ParseError::InvalidFormat(format!("bad LOCUS line {:?}: {}", line, e)))?;

    record.name = locus.name.to_string();
    record.declared_length = locus.length;

    for part in locus.rest.split_whitespace() {
        match part {
            "circular" => record.topology = Some(Topology::Circular),
            "linear" => record.topology = Some(Topology::Linear),
            _ => {
                let lower = part.to_lowercase();
                if record.molecule_type.is_none() && (lower.contains("dna") || lower.contains("rna")) {
                    record.molecule_type = Some(part.to_string());
                }
            }
        }
    }
    Ok(())
}

/// Value of a header keyword line; keywords occupy the first 12 columns
fn keyword_value(line: &str) -> &str {
    line.get(12..).unwrap_or("").trim()
}

fn is_continuation(line: &str) -> bool {
    line.starts_with("            ")
}

fn parse_record(lines: &[&str]) -> Result<GenBankRecord, ParseError> {
    let mut record = GenBankRecord {
        name: String::new(),
        declared_length: None,
        molecule_type: None,
        topology: None,
        definition: String::new(),
        accession: None,
        version: None,
        organism: None,
        sequence: String::new(),
    };
    let mut saw_locus = false;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if line.starts_with("LOCUS") {
            parse_locus_line(line, &mut record)?;
            saw_locus = true;
        } else if line.starts_with("DEFINITION") {
            let mut def = keyword_value(line).to_string();
            i += 1;
            while i < lines.len() && is_continuation(lines[i]) {
                def.push(' ');
                def.push_str(lines[i].trim());
                i += 1;
            }
            record.definition = def.trim_end_matches('.').to_string();
            continue;
        } else if line.starts_with("ACCESSION") {
            record.accession = keyword_value(line)
                .split_whitespace()
                .next()
                .map(str::to_string);
        } else if line.starts_with("VERSION") {
            record.version = keyword_value(line)
                .split_whitespace()
                .next()
                .map(str::to_string);
        } else if line.trim_start().starts_with("ORGANISM") {
            record.organism = Some(line.trim_start()[8..].trim().to_string());
        } else if line.starts_with("ORIGIN") {
            i += 1;
            while i < lines.len() {
                for ch in lines[i].chars() {
                    if ch.is_ascii_alphabetic() {
                        record.sequence.push(ch.to_ascii_uppercase());
                    }
                }
                i += 1;
            }
            continue;
        }

        i += 1;
    }

    if !saw_locus {
        return Err(ParseError::InvalidFormat(
            "GenBank record without LOCUS line".to_string(),
        ));
    }
    Ok(record)
}

/// Parse every record of a concatenated GenBank stream, as returned by
/// `efetch` with `rettype=gb`.
///
/// Records end with a `//` line. Blank text between records is ignored; a
/// trailing record without its terminator is an [`ParseError::UnexpectedEnd`].
pub fn parse_all(input: &str) -> Result<Vec<GenBankRecord>, ParseError> {
    let mut records = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in input.lines() {
        if line.starts_with("//") {
            records.push(parse_record(&current)?);
            current.clear();
        } else if !current.is_empty() || !line.trim().is_empty() {
            current.push(line);
        }
    }

    if !current.is_empty() {
        return Err(ParseError::UnexpectedEnd);
    }

    Ok(records)
}

/// Parse a single GenBank record. The `//` terminator is optional here.
pub fn parse(input: &str) -> Result<GenBankRecord, ParseError> {
    let lines: Vec<&str> = input
        .lines()
        .take_while(|line| !line.starts_with("//"))
        .collect();
    parse_record(&lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MINI_GENBANK: &str = r#"LOCUS       pTest           100 bp    DNA     circular SYN 01-JAN-2026
DEFINITION  Test plasmid with a rather long definition that wraps onto a
            second line.
ACCESSION   XX000001 XX000002
VERSION     XX000001.2
KEYWORDS    .
SOURCE      synthetic construct
  ORGANISM  synthetic construct
            other sequences; artificial sequences.
FEATURES             Location/Qualifiers
     promoter        1..20
                     /label="test promoter"
ORIGIN
        1 atcgatcgat cgatcgatcg atcgatcgat cgatcgatcg atcgatcgat
       51 cgatcgatcg atcgatcgat cgatcgatcg atcgatcgat cgatcgatcg
//
"#;

    #[test]
    fn test_parse_mini_genbank() {
        let rec = parse(MINI_GENBANK).unwrap();
        assert_eq!(rec.name, "pTest");
        assert_eq!(rec.declared_length, Some(100));
        assert_eq!(rec.topology, Some(Topology::Circular));
        assert_eq!(rec.molecule_type.as_deref(), Some("DNA"));
        assert_eq!(rec.len(), 100);
        assert_eq!(rec.accession.as_deref(), Some("XX000001"));
        assert_eq!(rec.id(), "XX000001.2");
        assert_eq!(rec.organism.as_deref(), Some("synthetic construct"));
        assert!(rec.sequence.starts_with("ATCGATCG"));
    }

    #[test]
    fn test_definition_joined_and_trimmed() {
        let rec = parse(MINI_GENBANK).unwrap();
        assert_eq!(
            rec.definition,
            "Test plasmid with a rather long definition that wraps onto a second line"
        );
    }

    #[test]
    fn test_id_fallbacks() {
        let no_version = MINI_GENBANK.replace("VERSION     XX000001.2\n", "");
        assert_eq!(parse(&no_version).unwrap().id(), "XX000001");

        let no_accession = no_version.replace("ACCESSION   XX000001 XX000002\n", "");
        assert_eq!(parse(&no_accession).unwrap().id(), "pTest");
    }

    #[test]
    fn test_declared_length_without_origin() {
        let input = "LOCUS       NW_0001   5000 bp    DNA     linear   CON 01-JAN-2024\n\
                     DEFINITION  Scaffold.\n\
                     VERSION     NW_0001.1\n\
                     CONTIG      join(AB000001.1:1..5000)\n\
                     //\n";
        let rec = parse(input).unwrap();
        assert!(rec.sequence.is_empty());
        assert_eq!(rec.len(), 5000);
        assert_eq!(rec.topology, Some(Topology::Linear));
    }

    #[test]
    fn test_parse_all_multiple() {
        let two = format!("{}\n{}", MINI_GENBANK, MINI_GENBANK.replace("pTest", "pOther"));
        let records = parse_all(&two).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "pTest");
        assert_eq!(records[1].name, "pOther");
        assert_eq!(records[1].len(), 100);
    }

    #[test]
    fn test_parse_all_empty_body() {
        assert_eq!(parse_all("").unwrap().len(), 0);
        assert_eq!(parse_all("\n\n").unwrap().len(), 0);
    }

    #[test]
    fn test_parse_all_truncated() {
        let truncated = MINI_GENBANK.trim_end().trim_end_matches("//");
        assert!(matches!(parse_all(truncated), Err(ParseError::UnexpectedEnd)));
    }

    #[test]
    fn test_missing_locus() {
        let input = "DEFINITION  Nothing.\n//\n";
        assert!(matches!(parse_all(input), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_locus_without_length() {
        let rec = parse("LOCUS       oddname\n//\n").unwrap();
        assert_eq!(rec.name, "oddname");
        assert_eq!(rec.declared_length, None);
        assert_eq!(rec.len(), 0);
    }
}
