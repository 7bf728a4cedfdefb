//! Run summary table printed with `--summary`.

use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nft_meta_cli::pipeline::GenerateSummary;

pub fn print_summary(summary: &GenerateSummary) {
    println!("Archive: {}", summary.archive.display());
    println!("Hidden: {}", summary.hidden_dir.display());
    println!("Public: {}", summary.public_dir.display());
    println!("{}", summary_table(summary));
}

pub fn summary_table(summary: &GenerateSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Token"),
        header_cell("Traits"),
        header_cell("Hidden"),
        header_cell("Public"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for token in &summary.tokens {
        table.add_row(vec![
            Cell::new(&token.token_id).fg(Color::Cyan),
            count_cell(token.trait_count),
            file_cell(&token.hidden_path),
            file_cell(&token.public_path),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.trait_count()).add_attribute(Attribute::Bold),
        Cell::new(summary.token_count()).add_attribute(Attribute::Bold),
        Cell::new(summary.token_count()).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn file_cell(path: &Path) -> Cell {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
    Cell::new(name).fg(Color::Green)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
