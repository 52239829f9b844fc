use bblg_core::catalog;
use bblg_core::EventKind;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct KindItem {
    pub tag: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
    pub color: String,
}

pub fn kind_items() -> Vec<KindItem> {
    EventKind::ALL
        .into_iter()
        .map(|kind| {
            let attributes = catalog::attributes(kind);
            KindItem {
                tag: kind.tag(),
                label: kind.label(),
                glyph: attributes.glyph,
                color: attributes.color.hex(),
            }
        })
        .collect()
}

pub fn run_kinds(as_json: bool) -> Result<(), CliError> {
    let items = kind_items();
    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in items {
            println!("{}  {:<10}  {}  {}", item.glyph, item.tag, item.color, item.label);
        }
    }
    Ok(())
}
