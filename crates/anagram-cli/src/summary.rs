//! Tabular rendering of the mode registry.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use anagram_transform::{ModeRegistry, describe_rules};

/// Table of registered modes in application order.
pub fn modes_table(registry: &ModeRegistry) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Order"),
        header_cell("Mode"),
        header_cell("Replacements"),
    ]);
    apply_table_style(&mut table);
    for (index, mode) in registry.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(mode.name()).add_attribute(Attribute::Bold),
            Cell::new(describe_rules(mode.replacements())),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
