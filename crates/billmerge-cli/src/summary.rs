use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use billmerge_cli::types::MergeResult;
use billmerge_map::FieldResolution;

pub fn print_summary(result: &MergeResult) {
    println!("Input: {}", result.input_dir.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: dry run, nothing written"),
    }
    if let Some(path) = &result.report {
        println!("Report: {}", path.display());
    }
    println!("{}", summary_table(result));
    println!();
    println!("Column resolution:");
    println!("{}", resolution_table(&result.resolutions));
    if !result.stats.missing_columns.is_empty() {
        println!();
        println!(
            "Columns written empty: {}",
            result.stats.missing_columns.join(", ")
        );
    }
}

fn summary_table(result: &MergeResult) -> Table {
    let stats = &result.stats;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Files read"), Cell::new(result.files.len())]);
    table.add_row(vec![Cell::new("Records in"), Cell::new(stats.input_records)]);
    table.add_row(vec![
        Cell::new("Address from street parts"),
        count_cell(stats.address_from_extended),
    ]);
    table.add_row(vec![
        Cell::new("Address from legacy street fields"),
        count_cell(stats.address_from_legacy),
    ]);
    table.add_row(vec![
        Cell::new("Secondary address filled"),
        count_cell(stats.secondary_filled),
    ]);
    table.add_row(vec![
        Cell::new("Address duplicates"),
        count_cell(stats.duplicates_emitted),
    ]);
    table.add_row(vec![
        Cell::new("Friendly names backfilled"),
        count_cell(stats.names_backfilled),
    ]);
    table.add_row(vec![
        Cell::new("Records out")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(stats.output_records).add_attribute(Attribute::Bold),
    ]);
    table
}

fn resolution_table(resolutions: &[FieldResolution]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Mode"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    for resolution in resolutions {
        let columns = if resolution.columns.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(resolution.columns.join(", "))
        };
        table.add_row(vec![
            Cell::new(resolution.field)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(resolution.mode),
            columns,
        ]);
    }
    table
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green)
    } else {
        dim_cell(count)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
