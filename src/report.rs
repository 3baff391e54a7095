use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};

use crate::inventory::Server;

const COLUMNS: [&str; 6] = [
    "Server",
    "Name",
    "Index",
    "Free Memory",
    "Used Memory",
    "Total Memory",
];

const MEMORY_COLUMN_WIDTH: usize = 10;

/// Flattens the inventory into table rows, one per device. The server name
/// appears only on the first row of its group; servers without devices
/// produce no rows at all.
pub fn report_rows(servers: &[Server]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();

    for server in servers {
        let mut name = server.name.as_str();
        for gpu in &server.devices {
            rows.push(vec![
                name.to_string(),
                gpu.name.clone(),
                gpu.index.to_string(),
                align_right(&gpu.free_memory),
                align_right(&gpu.used_memory),
                align_right(&gpu.total_memory),
            ]);
            name = "";
        }
    }

    rows
}

/// Renders the inventory as a printable table.
pub fn build_report(servers: &[Server]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(
        COLUMNS
            .iter()
            .map(|column| {
                Cell::new(column)
                    .add_attribute(Attribute::Bold)
                    .add_attribute(Attribute::Underlined)
            })
            .collect::<Vec<_>>(),
    );

    for row in report_rows(servers) {
        let cells: Vec<Cell> = row
            .into_iter()
            .enumerate()
            .map(|(column, value)| {
                let cell = Cell::new(value);
                if column == 0 { cell.fg(Color::Blue) } else { cell }
            })
            .collect();
        table.add_row(cells);
    }

    table
}

fn align_right(value: &str) -> String {
    format!("{:>width$}", value, width = MEMORY_COLUMN_WIDTH)
}
