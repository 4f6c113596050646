use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Serializer, ser::PrettyFormatter};

const INDENT: &[u8] = b"    ";

/// Serialize with 4-space indentation and a trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    value
        .serialize(&mut serializer)
        .context("Failed to serialize JSON")?;

    let mut content = String::from_utf8(buffer).context("Serialized JSON is not UTF-8")?;
    content.push('\n');
    Ok(content)
}
