use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use farecast_model::{FEATURE_COLUMNS, FeatureKind};

use crate::types::{EngineerSummary, EstimateResult};

pub fn print_estimate(result: &EstimateResult) {
    println!("Estimated fare: $ {:.2}", result.fare);
    println!("Mode: {}", result.mode);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Feature"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (column, (name, value)) in FEATURE_COLUMNS.iter().zip(result.row.iter()) {
        table.add_row(vec![Cell::new(name), Cell::new(format_value(column.kind, value))]);
    }
    println!("{table}");
}

pub fn print_estimate_json(result: &EstimateResult) -> serde_json::Result<()> {
    let payload = serde_json::json!({
        "fare": result.fare,
        "mode": result.mode,
        "features": result.row,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

pub fn print_engineer_summary(summary: &EngineerSummary) {
    println!("Input: {}", summary.input.display());
    println!("Output: {}", summary.output.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Columns"),
        header_cell("Layout"),
        header_cell("Duration"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(summary.rows_in),
        Cell::new(summary.rows_out),
        Cell::new(summary.columns_out),
        Cell::new(if summary.full_frame {
            "full frame"
        } else {
            "training matrix"
        }),
        Cell::new(format!("{} ms", summary.duration_ms)),
    ]);
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Integer-like features print without a fractional part.
fn format_value(kind: FeatureKind, value: f64) -> String {
    match kind {
        FeatureKind::Integer | FeatureKind::Flag => format!("{}", value as i64),
        FeatureKind::Float => {
            let s = format!("{value:.4}");
            let trimmed = s.trim_end_matches('0').trim_end_matches('.');
            if trimmed.is_empty() {
                "0".to_string()
            } else {
                trimmed.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_format_by_kind() {
        assert_eq!(format_value(FeatureKind::Integer, 8.0), "8");
        assert_eq!(format_value(FeatureKind::Flag, 1.0), "1");
        assert_eq!(format_value(FeatureKind::Float, 22.0), "22");
        assert_eq!(format_value(FeatureKind::Float, 12.3456789), "12.3457");
        assert_eq!(format_value(FeatureKind::Float, 0.0), "0");
    }
}
