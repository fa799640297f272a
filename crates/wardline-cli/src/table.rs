use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use wardline_labs::LabStatus;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Status column cell: high in red, low in blue, normal dimmed, matching the
/// abnormal highlight colors of the labs grid.
pub fn status_cell(status: LabStatus) -> Cell {
    match status {
        LabStatus::High => Cell::new(format!("high {}", status.arrow()))
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        LabStatus::Low => Cell::new(format!("low {}", status.arrow()))
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        LabStatus::Normal => dim_cell("normal"),
    }
}
