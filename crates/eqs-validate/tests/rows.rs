use std::fs;

use eqs_ingest::{IngestError, ParseOptions};
use eqs_model::{Column, EquipmentRecord, Status};
use eqs_validate::{
    DatasetError, DatasetReport, RowIssueKind, check_dataset, check_dataset_file, validate_rows,
};

const HEADER: &str = "TAG,STATUS,MOTIVO,PTS,OS,RETORNO,CADEADO,OBSERVACOES,MODIFICADO_POR,DATA";

fn row(tag: &str, status: &str) -> EquipmentRecord {
    EquipmentRecord::new(tag, status).with(Column::ModifiedAt, "2024-01-15T10:30:00")
}

#[test]
fn modified_at_without_seconds_is_flagged() {
    let record = row("BB-101", "OPE").with(Column::ModifiedAt, "2024-01-15T10:30");
    let issues = validate_rows(&[record]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].line, 2);
    assert_eq!(issues[0].kind.column(), Column::ModifiedAt);
    assert_eq!(
        issues[0].to_string(),
        "Linha 2: DATA deve estar no formato YYYY-MM-DDTHH:MM:SS"
    );
}

#[test]
fn modified_at_with_non_ascii_digits_is_flagged() {
    let record = row("BB-101", "OPE").with(Column::ModifiedAt, "٢٠٢٤-٠١-١٥T١٠:٣٠:٤٥");
    let issues = validate_rows(&[record]);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind.column(), Column::ModifiedAt);
}

#[test]
fn quoted_multiline_note_keeps_record_numbering() {
    let text = format!(
        "{HEADER}\n\
         BB-101,OPE,,,,,,\"parada\nprogramada\",maria,2024-01-15T10:30:00\n\
         TG-01,RUN,,,,,,,maria,2024-01-15T10:30:00\n"
    );
    let err = check_dataset(&text, &ParseOptions::quoted()).unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.issues()[0].line, 3);
    assert_eq!(err.issues()[0].kind.column(), Column::Status);
}

#[test]
fn bulk_path_skips_reason_presence_and_note_length() {
    let records = vec![
        row("BB-101", "ST-BY"),
        row("TG-01", "MNT").with(Column::Note, "a".repeat(250)),
    ];
    assert!(validate_rows(&records).is_empty());
}

#[test]
fn issues_accumulate_across_rows() {
    let records = vec![
        row("", "RUN"),
        row("BB-101", "OPE"),
        row("TG-01", "MNT")
            .with(Column::Reason, "Conveniência do sistema")
            .with(Column::ReturnTime, "amanhã"),
    ];
    let issues = validate_rows(&records);
    let summary: Vec<(usize, Column)> = issues
        .iter()
        .map(|issue| (issue.line, issue.kind.column()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (2, Column::Tag),
            (2, Column::Status),
            (4, Column::Reason),
            (4, Column::ReturnTime),
        ]
    );
}

#[test]
fn rejected_dataset_lists_every_issue() {
    let text = format!(
        "{HEADER}\n\
         ,OPE,,,,,,,maria,2024-01-15T10:30:00\n\
         BB-101,RUN,,,,,,,maria,2024-01-15T10:30\n"
    );
    let err = check_dataset(&text, &ParseOptions::default()).unwrap_err();
    assert_eq!(err.issues().len(), 3);
    insta::assert_snapshot!(err.to_string(), @r"
    Erros de validação encontrados:
    Linha 2: TAG é obrigatória
    Linha 3: STATUS deve ser OPE, ST-BY ou MNT
    Linha 3: DATA deve estar no formato YYYY-MM-DDTHH:MM:SS
    ");
}

#[test]
fn header_mismatch_passes_through() {
    let err = check_dataset("TAG,STATUS,MOTIVO\nBB-101,OPE,\n", &ParseOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        DatasetError::Parse(IngestError::HeaderMismatch { .. })
    ));
    assert!(err.issues().is_empty());
}

#[test]
fn valid_file_is_accepted() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("equipamentos.csv");
    fs::write(
        &path,
        format!(
            "{HEADER}\n\
             BB-101,OPE,,,,,,,maria,2024-01-15T10:30:00\n\
             TG-01,MNT,Manutenção corretiva,PTS-1,OS-2,2024-01-20T08:00,CAD-9,,joao,2024-01-15T11:00:00\n"
        ),
    )
    .expect("write csv");

    let records = check_dataset_file(&path, &ParseOptions::default()).expect("valid dataset");
    assert_eq!(records.len(), 2);
}

#[test]
fn report_counts_and_issues() {
    let records = vec![
        row("BB-101", "OPE"),
        row("BB-102", "OPE"),
        row("TG-01", "MNT").with(Column::ModifiedAt, "ontem"),
        row("TG-02", "??"),
    ];
    let report = DatasetReport::from_records(&records);
    assert_eq!(report.row_count, 4);
    assert_eq!(report.count(Status::Operating), 2);
    assert_eq!(report.count(Status::Maintenance), 1);
    assert_eq!(report.rows_with_issues(), 2);
    assert!(!report.is_acceptable());
    assert!(matches!(
        report.issues[1].kind,
        RowIssueKind::InvalidStatus { ref value } if value == "??"
    ));
}
