//! Pouch encoding example
//!
//! This example demonstrates how entries end up in a payload: small
//! entries batched into a shared block, large entries split across a
//! dedicated block stream.

use pouch_format::{BLOCK_CAPACITY, ContentType, Entry, Error, PouchBuilder};

fn main() -> Result<(), Error> {
    println!("=== Pouch Encoding Example ===\n");

    let mut builder = PouchBuilder::new("example-device")?;

    // Two small entries share one block
    builder.add_entry(&Entry::text(
        "/.s/settings",
        ContentType::Json,
        r#"{"interval":30}"#,
    ))?;
    builder.add_entry(&Entry::text(
        "/.s/label",
        ContentType::OctetStream,
        "bench-rig-7",
    ))?;

    // An entry larger than one block gets its own stream
    let big = Entry::new(
        "/.s/blob",
        ContentType::OctetStream,
        vec![0xA5; 2 * BLOCK_CAPACITY],
    );
    builder.add_entry(&big)?;

    let payload = builder.finish()?;

    println!("Encoded payload: {} bytes", payload.len());
    println!("First bytes: {}", hex_prefix(&payload, 16));

    Ok(())
}

fn hex_prefix(bytes: &[u8], n: usize) -> String {
    bytes
        .iter()
        .take(n)
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
