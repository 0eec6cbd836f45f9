//! Door input collection: flag values or interactive prompts, parsed into a
//! [`DoorSpec`] with every bad field reported at once.

use std::io::{self, BufRead, Write};

use hinge_core::DoorSpec;

/// Raw text for each door field, as typed or passed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDoorFields {
    pub thickness: Option<String>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub k: Option<String>,
}

/// Parse all fields, collecting one message per invalid field.
pub fn parse_door(fields: &RawDoorFields) -> Result<DoorSpec, Vec<String>> {
    let mut errors = Vec::new();

    let thickness = parse_required("Door thickness T", fields.thickness.as_deref(), &mut errors);
    let height = parse_optional("Door height", fields.height.as_deref(), &mut errors);
    let weight = parse_optional("Door weight", fields.weight.as_deref(), &mut errors);
    let desired_k = parse_optional("Boring distance K", fields.k.as_deref(), &mut errors);

    match thickness {
        Some(thickness_mm) if errors.is_empty() => Ok(DoorSpec {
            thickness_mm,
            height_mm: height,
            weight_kg: weight,
            desired_k_mm: desired_k,
        }),
        _ => Err(errors),
    }
}

fn parse_required(label: &str, raw: Option<&str>, errors: &mut Vec<String>) -> Option<f64> {
    let value = raw.map(str::trim).unwrap_or("");
    if value.is_empty() {
        errors.push(format!("{} is required.", label));
        return None;
    }
    match parse_number(value) {
        Some(v) => Some(v),
        None => {
            errors.push(format!("{} must be a number.", label));
            None
        }
    }
}

fn parse_optional(label: &str, raw: Option<&str>, errors: &mut Vec<String>) -> Option<f64> {
    let value = raw.map(str::trim).unwrap_or("");
    if value.is_empty() {
        return None;
    }
    match parse_number(value) {
        Some(v) => Some(v),
        None => {
            errors.push(format!("{} must be a number if provided.", label));
            None
        }
    }
}

fn parse_number(value: &str) -> Option<f64> {
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Print `prompt` and read one line from stdin. `None` on EOF or I/O failure.
pub fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    match io::stdin().lock().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

/// Prompt until the value parses (or is blank, when `allow_blank`).
///
/// Returns `None` for a blank answer or when stdin closes.
pub fn prompt_number(prompt: &str, allow_blank: bool) -> Option<String> {
    loop {
        let raw = prompt_line(prompt)?;
        if raw.is_empty() && allow_blank {
            return None;
        }
        if parse_number(&raw).is_some() {
            return Some(raw);
        }
        println!("Please enter a numeric value.");
    }
}
