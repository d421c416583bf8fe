use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use eqs_model::{Column, EquipmentRecord, Status, StatusCounts};
use eqs_validate::{DatasetReport, RowIssue, RowIssueKind};

pub fn print_check_summary(path: &Path, report: &DatasetReport) {
    println!("File: {}", path.display());
    print_status_counts(&report.counts);
    print_issue_table(&report.issues);
    if report.is_acceptable() {
        println!("Dataset OK: {} rows ready to send.", report.row_count);
    } else {
        eprintln!(
            "Dataset rejected: {} issues on {} of {} rows.",
            report.issues.len(),
            report.rows_with_issues(),
            report.row_count
        );
    }
}

pub fn print_status_counts(counts: &StatusCounts) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Code"),
        header_cell("Units"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for status in Status::ALL {
        table.add_row(vec![
            Cell::new(format!("{} {}", status.icon(), status.label())),
            status_cell(status.code()),
            count_cell(counts.get(status), status_color(status)),
        ]);
    }
    let unknown = counts.total - counts.operating - counts.standby - counts.maintenance;
    if unknown > 0 {
        table.add_row(vec![
            dim_cell("Unknown"),
            dim_cell("-"),
            count_cell(unknown, Color::Red),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(counts.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_issue_table(issues: &[RowIssue]) {
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            Cell::new(issue.line).fg(Color::Red),
            Cell::new(issue.kind.column().name()).fg(Color::Blue),
            value_cell(issue_value(issue)),
            Cell::new(issue.kind.message()),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

pub fn print_records(records: &[&EquipmentRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("TAG"),
        header_cell("STATUS"),
        header_cell("MOTIVO"),
        header_cell("RETORNO"),
        header_cell("OBSERVACOES"),
        header_cell("MODIFICADO_POR"),
        header_cell("DATA"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.tag)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            record_status_cell(record),
            value_cell(&record.reason),
            value_cell(&record.return_time),
            value_cell(&record.note),
            value_cell(&record.modified_by),
            value_cell(&record.modified_at),
        ]);
    }
    println!("{table}");
}

pub fn print_reasons() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Status"),
        header_cell("Required"),
        header_cell("Reasons"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for status in Status::ALL {
        let required: Vec<&str> = status
            .required_fields()
            .iter()
            .map(Column::name)
            .collect();
        let reasons = if status.allowed_reasons().is_empty() {
            dim_cell("-")
        } else {
            Cell::new(status.allowed_reasons().join("\n"))
        };
        table.add_row(vec![
            status_cell(status.code()),
            Cell::new(format!("{} {}", status.icon(), status.label())),
            Cell::new(required.join(", ")),
            reasons,
        ]);
    }
    println!("{table}");
}

fn issue_value(issue: &RowIssue) -> &str {
    match &issue.kind {
        RowIssueKind::TagRequired => "",
        RowIssueKind::InvalidStatus { value } => value,
        RowIssueKind::InvalidReasonForStatus { reason, .. } => reason,
        RowIssueKind::InvalidTimestamp { value, .. } => value,
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 7 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Fixed(26)),
            ColumnConstraint::LowerBoundary(Width::Fixed(18)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::LowerBoundary(Width::Fixed(21)),
        ]);
    }
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Fixed(16)),
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::UpperBoundary(Width::Percentage(55)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn record_status_cell(record: &EquipmentRecord) -> Cell {
    match record.status() {
        Some(status) => status_cell(status.code()),
        None => Cell::new(&record.status).fg(Color::Red),
    }
}

fn status_cell(code: &str) -> Cell {
    match Status::from_code(code) {
        Some(status) => Cell::new(code)
            .fg(status_color(status))
            .add_attribute(Attribute::Bold),
        None => Cell::new(code).fg(Color::Red),
    }
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Operating => Color::Green,
        Status::Standby => Color::Yellow,
        Status::Maintenance => Color::Red,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn value_cell(value: &str) -> Cell {
    if value.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
