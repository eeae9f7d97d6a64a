//! TSV and JSON Lines reporters.

use comention_analysis::report::tsv::{COMENTION_HEADER, MENTION_HEADER, PAIR_HEADER, RELATEDNESS_HEADER};
use comention_analysis::report::create_reporter;
use comention_analysis::statistics::{ComentionRow, MentionRow, PairRow, RelatednessRow, Report};
use comention_core::config::{OutputMode, ReportFormat};

fn implicit_report() -> Report {
    let mut report = Report::empty(OutputMode::Implicit);
    report.pairs.push(PairRow {
        entity1: "A".to_string(),
        entity2: "C".to_string(),
        mentions1: 20,
        mentions2: 40,
        comentions: 20,
        mutual_information: 25f64.ln(),
        likelihood: 47.123456,
    });
    report.implicit.push(RelatednessRow {
        entity1: "A".to_string(),
        entity2: "B".to_string(),
        mutual_information: f64::NEG_INFINITY,
        likelihood: f64::NEG_INFINITY,
        jaccard: 1.0,
        shared_neighbors: 1,
        mean_shared_mi: 25f64.ln(),
    });
    report
}

#[test]
fn tsv_implicit_has_two_tables_with_headers() {
    let text = create_reporter(ReportFormat::Tsv)
        .render(&implicit_report())
        .unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            PAIR_HEADER,
            "A\tC\t20\t40\t20\t3.2189\t47.1235",
            RELATEDNESS_HEADER,
            "A\tB\t-inf\t-inf\t1.0000\t1\t3.2189",
        ]
    );
}

#[test]
fn tsv_mention_and_comention_tables() {
    let mut mention = Report::empty(OutputMode::Mention);
    mention.mentions.push(MentionRow {
        entity: "GENE:1".to_string(),
        first_seen: 12,
        mentions: 3,
    });
    let text = create_reporter(ReportFormat::Tsv).render(&mention).unwrap();
    assert_eq!(text, format!("{MENTION_HEADER}\nGENE:1\t12\t3\n"));

    let mut comention = Report::empty(OutputMode::Comention);
    comention.comentions.push(ComentionRow {
        entity1: "A".to_string(),
        entity2: "B".to_string(),
        first_seen: 4,
        comentions: 9,
    });
    let text = create_reporter(ReportFormat::Tsv).render(&comention).unwrap();
    assert_eq!(text, format!("{COMENTION_HEADER}\nA\tB\t4\t9\n"));
}

#[test]
fn tsv_empty_report_is_just_the_header() {
    let text = create_reporter(ReportFormat::Tsv)
        .render(&Report::empty(OutputMode::Pairs))
        .unwrap();
    assert_eq!(text, format!("{PAIR_HEADER}\n"));
}

#[test]
fn jsonl_writes_one_tagged_object_per_row() {
    let reporter = create_reporter(ReportFormat::Jsonl);
    assert_eq!(reporter.name(), "jsonl");
    let text = reporter.render(&implicit_report()).unwrap();

    let rows: Vec<serde_json::Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["table"], "pair");
    assert_eq!(rows[0]["comentions"], 20);
    assert_eq!(rows[1]["table"], "implicit");
    assert_eq!(rows[1]["mutual_information"], "-inf");
    assert_eq!(rows[1]["shared_neighbors"], 1);
    assert_eq!(rows[1]["jaccard"], 1.0);
}

#[test]
fn jsonl_empty_report_writes_nothing() {
    let text = create_reporter(ReportFormat::Jsonl)
        .render(&Report::empty(OutputMode::Implicit))
        .unwrap();
    assert!(text.is_empty());
}

#[test]
fn jsonl_rows_follow_the_row_type_serialization() {
    let report = implicit_report();
    let text = create_reporter(ReportFormat::Jsonl).render(&report).unwrap();
    let first = text.lines().next().unwrap();
    assert!(first.starts_with(r#"{"table":"pair","entity1":"A""#), "line: {first}");

    let mut expected = serde_json::to_value(&report.pairs[0]).unwrap();
    expected["table"] = serde_json::json!("pair");
    let written: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(written, expected);
}

#[test]
fn non_finite_scores_serialize_as_strings() {
    let row = &implicit_report().implicit[0];
    let value = serde_json::to_value(row).unwrap();
    assert_eq!(value["mutual_information"], "-inf");
    assert_eq!(value["likelihood"], "-inf");
    assert_eq!(value["mean_shared_mi"], 25f64.ln());

    let nan = RelatednessRow {
        jaccard: f64::NAN,
        ..row.clone()
    };
    assert_eq!(serde_json::to_value(&nan).unwrap()["jaccard"], "NaN");
}
