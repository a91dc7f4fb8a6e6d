//! Lister Settings List Example
//!
//! Drives a settings-style list through every mutator and prints the deltas
//! a host view would receive, along with the layout it would query.
//!
//! Run with: RUST_LOG=lister=debug cargo run -p lister --example settings_list

use std::sync::Arc;

use lister::prelude::*;
use tracing_subscriber::EnvFilter;

/// Stand-in for a platform list widget: prints what it would animate.
struct ConsoleHost;

impl HostView for ConsoleHost {
    fn apply_delta(&self, delta: &ListDelta) {
        match delta {
            ListDelta::FullReload => println!("reload everything"),
            ListDelta::InsertAt { path, animation } => {
                println!("insert {path} ({animation:?})");
            }
            ListDelta::DeleteAt { path, animation } => {
                println!("delete {path} ({animation:?})");
            }
            ListDelta::DeleteAtMany { paths, animation } => {
                let paths: Vec<String> = paths.iter().map(ToString::to_string).collect();
                println!("delete {} ({animation:?})", paths.join(" "));
            }
        }
    }
}

fn print_layout(model: &ListModel<String>) -> ListResult<()> {
    for section in 0..model.section_count() {
        if let Some(header) = model.header_title(section)? {
            println!("== {header} ==");
        }
        for row in 0..model.row_count(section)? {
            let path = IndexPath::new(section, row);
            let cell = model.cell_for_row(path)?;
            let frame = cell.content_frame(Rect::new(0.0, 0.0, 320.0, model.row_height(path)?));
            println!("  {:<14} {:>5.1}pt  content at {:?}", cell.content(), frame.height(), frame);
        }
        if let Some(footer) = model.footer_title(section)? {
            println!("   ({footer})");
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ListConfig::from_toml_str(
        r#"
        default_row_height = 44.0
        animation = "automatic"

        [default_edges]
        left = 16.0
        right = 16.0
        "#,
    )?;

    let model = ListModel::with_config(config);
    model.bind_host(Arc::new(ConsoleHost));

    model.set(vec![
        Section::new(vec![
            Row::new("Airplane Mode".to_string()),
            Row::new("Wi-Fi".to_string()).with_action(|| println!("-> open Wi-Fi")),
            Row::new("Bluetooth".to_string()),
        ])
        .with_header("Connections"),
        Section::new(vec![
            Row::new("Notifications".to_string()),
            Row::new("Sounds".to_string()),
            Row::new("Focus".to_string()),
            Row::new("Screen Time".to_string()).with_height(60.0),
        ])
        .with_header("Alerts")
        .with_footer("Focus filters apply to all devices."),
    ]);

    model.append_row(Row::new("Cellular".to_string()), 0)?;
    model.insert_row_with(
        Row::new("VPN".to_string()),
        IndexPath::new(0, 1),
        RowAnimation::Top,
    )?;
    model.remove_row(IndexPath::new(0, 0))?;

    let removed = model.remove_rows(1, &[2, 0])?;
    let removed: Vec<String> = removed.into_iter().map(|row| row.into_content()).collect();
    println!("removed {removed:?}");

    model.select(IndexPath::new(0, 1))?;

    print_layout(&model)?;

    if let Err(err) = model.remove_row(IndexPath::new(5, 0)) {
        println!("rejected: {err}");
    }

    model.clear();
    Ok(())
}
