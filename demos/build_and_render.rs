//! Building a document tree directly and rendering it both ways.
//!
//! Run with: cargo run --example build_and_render

use jsonette::{from_str, json, to_string, to_string_pretty, JsonValue};

fn main() -> Result<(), jsonette::Error> {
    let report = json!({
        "title": "Quarterly Report",
        "quarter": 'Q',
        "year": 2026,
        "revenue": 1250000.75,
        "approved": true,
        "auditor": null,
        "regions": ["EMEA", "APAC", "AMER"]
    });

    println!("Compact:\n{}\n", to_string(&report));
    println!("Pretty:\n{}\n", to_string_pretty(&report));

    // Round trip: parse the rendered text back into a tree
    let reparsed = from_str(&to_string(&report))?;
    let regions = reparsed
        .as_object()
        .and_then(|obj| obj.get("regions"))
        .and_then(JsonValue::as_array)
        .expect("regions array");
    println!("First region: {}", regions[0]);

    Ok(())
}
