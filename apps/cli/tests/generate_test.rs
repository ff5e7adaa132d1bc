use bioscript_cli::{generate, Console};
use bioscript_core::CompositionStats;
use bioscript_formats::fasta;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn run_with_input(input: &str, seed: u64) -> (tempfile::TempDir, std::path::PathBuf, String) {
    let dir = tempfile::tempdir().unwrap();
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let request = generate::read_request(&mut console).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let path = generate::run(&request, dir.path(), &mut rng, console.output()).unwrap();
    let out = String::from_utf8(console.into_output()).unwrap();
    (dir, path, out)
}

#[test]
fn test_generated_fasta_file() {
    let (dir, path, _) = run_with_input("10\nx1\ntest\nCAT\n", 2024);
    assert_eq!(path, dir.path().join("x1.fasta"));

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], ">x1 test");
    assert_eq!(lines[1].len(), 13);
    assert_eq!(lines[1].matches("cat").count(), 1);

    let bases: String = lines[1].replacen("cat", "", 1);
    assert_eq!(bases.len(), 10);
    assert!(bases.chars().all(|c| "ACGT".contains(c)));
}

#[test]
fn test_marker_without_foldable_letters() {
    let (_dir, path, _) = run_with_input("10\nx1\ntest\nBOB\n", 7);
    let records = fasta::parse(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(records[0].sequence.len(), 13);
    assert_eq!(records[0].sequence.matches("BOB").count(), 1);
}

#[test]
fn test_statistics_printed_for_bases_only() {
    let (_dir, path, out) = run_with_input("40\nstats\n\nGATTACA\n", 99);

    let text = std::fs::read_to_string(&path).unwrap();
    let sequence = text.lines().nth(1).unwrap();
    let bases = sequence.replacen("gattaca", "", 1);
    assert_eq!(bases.len(), 40);

    let expected = CompositionStats::from_bases(&bases).unwrap();
    assert!(out.contains("Sequence saved to"));
    assert!(out.contains("Sequence statistics:"));
    assert!(out.contains(&expected.to_string()));
}

#[test]
fn test_empty_description_header() {
    let (_dir, path, _) = run_with_input("5\nbare\n\nZed\n", 1);
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().next(), Some(">bare "));
}

#[test]
fn test_same_seed_same_sequence() {
    let (_a, path_a, _) = run_with_input("30\nseeded\n\nXyz\n", 5);
    let (_b, path_b, _) = run_with_input("30\nseeded\n\nXyz\n", 5);
    assert_eq!(
        std::fs::read_to_string(path_a).unwrap(),
        std::fs::read_to_string(path_b).unwrap()
    );
}
