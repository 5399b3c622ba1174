use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use uranai_engine::History;

pub fn run(file: &Path) -> Result<(), String> {
    let history =
        History::load(file).map_err(|e| format!("failed to read {}: {e}", file.display()))?;

    if history.is_empty() {
        println!("  No past readings.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["When", "Mode", "Reading"]);

    for entry in history.entries() {
        table.add_row(vec![
            entry.created_at.format("%Y-%m-%d %H:%M").to_string(),
            entry.mode.to_string(),
            entry.record.result().title.clone(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} readings", history.len());

    Ok(())
}
