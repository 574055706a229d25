use std::io::Write;

use clap::Args;
use serde_json::Value;
use warehouse::{
    catalog::Catalog,
    documents::{Document, keys},
};

use super::CliError;

/// Keys whose values are always taken as text, so that `serial=42` stays a
/// string.
const TEXT_KEYS: [&str; 10] = [
    keys::TYPE,
    "Type",
    keys::SERIAL_NUMBER,
    "serial",
    "SerialNumber",
    "Serial",
    keys::NAME,
    keys::BRAND,
    keys::CPU,
    keys::GPU,
];

/// Keys of the 5G flag, which also accepts `1` and `0`.
const FLAG_KEYS: [&str; 2] = [keys::HAS_5G, "has5g"];

#[derive(Debug, Args)]
pub(crate) struct EditArgs {
    /// Serial number of the product to edit
    serial: String,

    /// Field to change, as KEY=VALUE (repeatable); the 5G flag takes true/false or 1/0
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    set: Vec<(String, Value)>,

    /// Partial product document, e.g. '{"price": 899.0}'
    #[arg(long, value_name = "DOCUMENT")]
    json: Option<String>,
}

/// Split a `KEY=VALUE` argument. Values are read as JSON when they parse and
/// as text otherwise. The 5G flag also takes `1` and `0`.
fn parse_assignment(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;

    let key = key.trim();

    if key.is_empty() {
        return Err("key cannot be empty".to_string());
    }

    let value = if TEXT_KEYS.contains(&key) {
        Value::String(value.to_string())
    } else if FLAG_KEYS.contains(&key) && matches!(value, "1" | "0") {
        Value::Bool(value == "1")
    } else {
        serde_json::from_str::<Value>(value).unwrap_or_else(|_| Value::String(value.to_string()))
    };

    Ok((key.to_string(), value))
}

pub(crate) fn run(
    args: EditArgs,
    catalog: &mut Catalog,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut document = match args.json.as_deref() {
        Some(raw) => match serde_json::from_str::<Value>(raw)? {
            Value::Object(document) => document,
            _ => return Err(CliError::PatchNotAnObject),
        },
        None => Document::new(),
    };

    document.extend(args.set);

    if document.is_empty() {
        return Err(CliError::EmptyPatch);
    }

    let product = catalog.apply_patch_document(&args.serial, &document)?;

    writeln!(out, "Updated {}", product.serial_number())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_assignment_reads_json_values() -> TestResult {
        assert_eq!(parse_assignment("price=899.5")?, ("price".into(), json!(899.5)));
        assert_eq!(parse_assignment("has5G=true")?, ("has5G".into(), json!(true)));
        assert_eq!(parse_assignment("ramGB=32")?, ("ramGB".into(), json!(32)));

        Ok(())
    }

    #[test]
    fn parse_assignment_keeps_text_keys_as_strings() -> TestResult {
        assert_eq!(parse_assignment("serial=42")?, ("serial".into(), json!("42")));
        assert_eq!(parse_assignment("name=true")?, ("name".into(), json!("true")));
        assert_eq!(
            parse_assignment("gpu=RTX 4090")?,
            ("gpu".into(), json!("RTX 4090"))
        );

        Ok(())
    }

    #[test]
    fn parse_assignment_reads_numeric_5g_flags() -> TestResult {
        assert_eq!(parse_assignment("has5G=1")?, ("has5G".into(), json!(true)));
        assert_eq!(parse_assignment("has5g=0")?, ("has5g".into(), json!(false)));
        assert_eq!(parse_assignment("ramGB=1")?, ("ramGB".into(), json!(1)));

        Ok(())
    }

    #[test]
    fn parse_assignment_falls_back_to_text() -> TestResult {
        assert_eq!(parse_assignment("quantity=lots")?, ("quantity".into(), json!("lots")));
        assert_eq!(parse_assignment("cpu=a=b")?, ("cpu".into(), json!("a=b")));

        Ok(())
    }

    #[test]
    fn parse_assignment_rejects_missing_separator_or_key() {
        assert!(parse_assignment("price").is_err());
        assert!(parse_assignment("=5").is_err());
    }
}
