//! Output formatting helpers for human-readable and JSON output.

use sticky_order::Snapshot;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

/// Table rows for a snapshot: index, group, id, hint and compact JSON value.
pub fn item_rows(snapshot: &Snapshot) -> Vec<Vec<String>> {
    snapshot
        .iter()
        .enumerate()
        .map(|(index, item)| {
            vec![
                index.to_string(),
                item.group_id().to_string(),
                item.id().to_string(),
                item.order_hint().to_string(),
                item.value().to_string(),
            ]
        })
        .collect()
}

/// Print the visible order in the selected format.
pub fn print_items(
    snapshot: &Snapshot,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            if snapshot.is_empty() {
                println!("No items.");
                return Ok(());
            }
            print_table(&["INDEX", "GROUP", "ID", "HINT", "VALUE"], &item_rows(snapshot));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(snapshot)?);
        }
    }
    Ok(())
}
