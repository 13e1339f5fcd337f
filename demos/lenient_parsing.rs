//! Strict versus lenient parsing of malformed input.
//!
//! Run with: cargo run --example lenient_parsing

use jsonette::{from_str, from_str_lenient, to_string};

fn main() {
    let messy = r#"
        {
            "name": "Ada",
            "nickname":,
            "langs": ["rust", "python",],
            # not part of the dialect
            "active": true
        }
    "#;

    match from_str(messy) {
        Ok(_) => unreachable!("strict mode rejects this input"),
        Err(err) => println!("strict: {err}"),
    }

    // lenient mode drops the valueless key and skips the stray characters
    let doc = from_str_lenient(messy).expect("lenient parse");
    println!("lenient: {}", to_string(&doc));

    let obj = doc.as_object().expect("object root");
    assert!(!obj.contains_key("nickname"));
    assert_eq!(obj.get("langs").and_then(|v| v.as_array()).map(|a| a.len()), Some(2));
}
