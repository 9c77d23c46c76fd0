//! Integration tests for artifact conflict resolution and TSV layout.

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use thirteenf_edgar::{
    HoldingsReport, INFORMATION_TABLE_HEADER, InformationTableRow, Report, SearchResultRow,
};
use thirteenf_output::{ArtifactWriter, ScriptedPrompt, WriteMode, WriteOutcome};

const HEADER_LINE: &str = "Name Of Issuer\tTitle Of Class\tCUSIP\tValue (x$1000)\tSHRS or PRN AMT\tSH/PRN\tPut/Call\tInvestment Discretion\tManager\tSole\tShared\tNone\n";

fn holding(fields: [&str; 12]) -> InformationTableRow {
    let [
        issuer,
        title_of_class,
        cusip,
        value,
        amount,
        amount_type,
        put_call,
        discretion,
        manager,
        sole,
        shared,
        none,
    ] = fields.map(str::to_string);
    InformationTableRow {
        issuer,
        title_of_class,
        cusip,
        value,
        amount,
        amount_type,
        put_call,
        discretion,
        manager,
        sole,
        shared,
        none,
    }
}

fn holdings_reports() -> Vec<Report> {
    vec![Report::Holdings(HoldingsReport {
        filing_type: "13F-HR".to_string(),
        filing_date: "2019-05-15".to_string(),
        document_url: "https://www.sec.gov/infotable.xml".to_string(),
        rows: vec![
            holding([
                "APPLE INC", "COM", "037833100", "12,345", "65,000", "SH", "", "SOLE", "",
                "65,000", "0", "0",
            ]),
            holding([
                "BERKSHIRE HATHAWAY INC DEL - CL B NEW",
                "CL B-NEW",
                "084670702",
                "6,789",
                "33,000",
                "SH",
                "Call",
                "DFND",
                "1,2",
                "30,000",
                "3,000",
                "0",
            ]),
        ],
    })]
}

fn filing(filing_type: &str, date: &str) -> Report {
    Report::Filing(SearchResultRow {
        filing_type: filing_type.to_string(),
        format: "Documents".to_string(),
        format_link: Some("/index.htm".to_string()),
        description: "Report - Acc-no: 1".to_string(),
        filing_date: date.to_string(),
        file_number: "028-10098".to_string(),
    })
}

fn base(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("holdings")
}

fn read_tsv(path: &Path) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .from_path(path)
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

#[test]
fn test_new_file_gets_header_and_rows() {
    let dir = TempDir::new().unwrap();
    let writer = ArtifactWriter::holdings(base(&dir));
    let mut prompt = ScriptedPrompt::default();

    let outcome = writer.write(&holdings_reports(), &mut prompt).unwrap();

    assert_eq!(
        outcome,
        WriteOutcome::Written {
            path: dir.path().join("holdings.tsv"),
            mode: WriteMode::Create,
            records: 2,
        }
    );
    assert!(prompt.asked().is_empty());

    let contents = fs::read_to_string(writer.path()).unwrap();
    let lines: Vec<_> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(format!("{}\n", lines[0]), HEADER_LINE);
    assert!(lines[1].starts_with("APPLE INC\tCOM\t037833100"));
    assert!(contents.ends_with("0\n"));
}

#[test]
fn test_round_trip_recovers_fields() {
    let dir = TempDir::new().unwrap();
    let writer = ArtifactWriter::holdings(base(&dir));
    let reports = holdings_reports();

    writer.write(&reports, &mut ScriptedPrompt::default()).unwrap();

    let parsed = read_tsv(writer.path());
    assert_eq!(parsed[0], INFORMATION_TABLE_HEADER);

    let expected: Vec<Vec<String>> = reports
        .iter()
        .flat_map(Report::records)
        .map(|r| r.into_iter().map(str::to_string).collect())
        .collect();
    assert_eq!(parsed[1..], expected[..]);
    assert_eq!(parsed[2][0], "BERKSHIRE HATHAWAY INC DEL - CL B NEW");
    assert_eq!(parsed[2][1], "CL B-NEW");
}

#[test]
fn test_overwrite_replaces_contents() {
    let dir = TempDir::new().unwrap();
    let writer = ArtifactWriter::holdings(base(&dir));
    fs::write(writer.path(), "stale line\n").unwrap();
    let mut prompt = ScriptedPrompt::new([true]);

    let outcome = writer.write(&holdings_reports(), &mut prompt).unwrap();

    assert!(matches!(
        outcome,
        WriteOutcome::Written {
            mode: WriteMode::Overwrite,
            records: 2,
            ..
        }
    ));
    assert_eq!(prompt.asked().len(), 1);
    assert!(prompt.asked()[0].contains("Overwrite it?"));

    let contents = fs::read_to_string(writer.path()).unwrap();
    assert!(contents.starts_with(HEADER_LINE));
    assert!(!contents.contains("stale line"));
}

#[test]
fn test_append_keeps_contents_and_skips_header() {
    let dir = TempDir::new().unwrap();
    let writer = ArtifactWriter::holdings(base(&dir));
    writer
        .write(&holdings_reports(), &mut ScriptedPrompt::default())
        .unwrap();
    let first = fs::read_to_string(writer.path()).unwrap();

    let mut prompt = ScriptedPrompt::new([false, true]);
    let outcome = writer.write(&holdings_reports(), &mut prompt).unwrap();

    assert!(matches!(
        outcome,
        WriteOutcome::Written {
            mode: WriteMode::Append,
            records: 2,
            ..
        }
    ));
    assert_eq!(prompt.asked().len(), 2);

    let contents = fs::read_to_string(writer.path()).unwrap();
    assert!(contents.starts_with(&first));
    assert_eq!(contents.matches("Name Of Issuer").count(), 1);
    assert_eq!(contents.lines().count(), 5);
}

#[test]
fn test_declining_both_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let writer = ArtifactWriter::holdings(base(&dir));
    let original = b"keep\tme\nexactly\n";
    fs::write(writer.path(), original).unwrap();
    let modified = fs::metadata(writer.path()).unwrap().modified().unwrap();

    let mut prompt = ScriptedPrompt::new([false, false]);
    let outcome = writer.write(&holdings_reports(), &mut prompt).unwrap();

    assert_eq!(
        outcome,
        WriteOutcome::Unchanged {
            path: writer.path().to_path_buf()
        }
    );
    assert_eq!(fs::read(writer.path()).unwrap(), original);
    assert_eq!(
        fs::metadata(writer.path()).unwrap().modified().unwrap(),
        modified
    );
}

#[test]
fn test_overwrite_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let writer = ArtifactWriter::holdings(base(&dir));

    writer
        .write(&holdings_reports(), &mut ScriptedPrompt::default())
        .unwrap();
    let first = fs::read(writer.path()).unwrap();

    writer
        .write(&holdings_reports(), &mut ScriptedPrompt::new([true]))
        .unwrap();
    assert_eq!(fs::read(writer.path()).unwrap(), first);
}

#[test]
fn test_filings_filtered_at_write_time_without_header() {
    let dir = TempDir::new().unwrap();
    let writer = ArtifactWriter::filings(dir.path().join("filings"), ["13f"]);
    let reports = vec![
        filing("13F-HR", "2019-05-15"),
        filing("SC 13G", "2019-02-14"),
        filing("13F-HR/A", "2019-02-10"),
    ];

    let outcome = writer
        .write(&reports, &mut ScriptedPrompt::default())
        .unwrap();
    assert!(matches!(outcome, WriteOutcome::Written { records: 2, .. }));

    assert_eq!(
        read_tsv(writer.path()),
        vec![
            vec!["13F-HR", "Documents", "Report - Acc-no: 1", "2019-05-15", "028-10098"],
            vec!["13F-HR/A", "Documents", "Report - Acc-no: 1", "2019-02-10", "028-10098"],
        ]
    );
}

#[test]
fn test_empty_reports_still_write_header() {
    let dir = TempDir::new().unwrap();
    let writer = ArtifactWriter::holdings(base(&dir));

    let outcome = writer.write(&[], &mut ScriptedPrompt::default()).unwrap();

    assert!(matches!(outcome, WriteOutcome::Written { records: 0, .. }));
    assert_eq!(fs::read_to_string(writer.path()).unwrap(), HEADER_LINE);
}
