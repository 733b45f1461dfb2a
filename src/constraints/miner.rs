//! Documentation idiom matching
//!
//! Each idiom is matched against the help text on its own. A match is
//! applied and cut out of the description; anything that does not match
//! cleanly is left in the text untouched.

use crate::error::Result;
use crate::schema::Schema;
use crate::types::DocType;
use regex::Regex;
use serde_json::{Number, Value};
use std::sync::LazyLock;

/// "Valid values:" header line
static VALID_VALUES_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*valid\s+values(?:\s+are)?\s*:?\s*$").unwrap());

/// `- "value" - description`
static VALID_VALUE_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*[-*]\s*"([^"]*)"\s*-\s*(.*)$"#).unwrap());

static MINIMUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bminimum(?:\s+value)?(?:\s+is|:)\s*(-?\d+(?:\.\d+)?)\.?").unwrap()
});

static MAXIMUM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bmaximum(?:\s+value)?(?:\s+is|:)\s*(-?\d+(?:\.\d+)?)\.?").unwrap()
});

static DEFAULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bdefault(?:s\s+to|\s+value\s+is|\s+is|:)\s*(?:"([^"]*)"|(\S+?))\.?(?:\s|$)"#)
        .unwrap()
});

/// `Default: a, b` for list tags; items may be quoted or bare
static LIST_DEFAULT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\bdefault(?:s\s+to|\s+value\s+is|\s+is|:)\s*((?:"[^"]*"|[^\s,"]+)(?:\s*,\s*(?:"[^"]*"|[^\s,"]+))*)"#,
    )
    .unwrap()
});

/// "Returns at most 50 entries, capped at 500."
static AT_MOST_CAPPED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\breturns?\s+at\s+most\s+(\d+)\b[^.]*?\bcapped\s+at\s+(\d+)\.?").unwrap()
});

/// Schema and residual description mined from a parameter's help text
#[derive(Debug, Clone, PartialEq)]
pub struct MinedParameter {
    /// Declared type with every matched constraint applied
    pub schema: Schema,
    /// Help text with matched idioms removed; `None` if nothing remains
    pub description: Option<String>,
}

/// Mine bounds, enumerations and defaults for a declared input parameter
pub fn mine_parameter_constraints(help: &str, doc_type: DocType) -> MinedParameter {
    let mut schema = Schema::for_doc_type(doc_type);
    let scalar = match doc_type {
        DocType::ListOf(element) => element.doc_type(),
        other => other,
    };
    let mut text = help.to_string();

    if let Some((values, rest)) = take_valid_values(&text, scalar) {
        constrain(&mut schema, |s| s.enum_values = Some(values));
        text = rest;
    }

    apply_idiom(&mut text, &AT_MOST_CAPPED, |caps| {
        match (parse_number(&caps[1]), parse_number(&caps[2])) {
            (Some(default), Some(cap)) => {
                schema.default = Some(Value::Number(default));
                constrain(&mut schema, |s| s.maximum = Some(cap));
                true
            }
            _ => false,
        }
    });

    apply_idiom(&mut text, &MINIMUM, |caps| match parse_number(&caps[1]) {
        Some(minimum) => {
            constrain(&mut schema, |s| s.minimum = Some(minimum));
            true
        }
        None => false,
    });

    apply_idiom(&mut text, &MAXIMUM, |caps| match parse_number(&caps[1]) {
        Some(maximum) => {
            constrain(&mut schema, |s| s.maximum = Some(maximum));
            true
        }
        None => false,
    });

    let default_re: &Regex = match doc_type {
        DocType::ListOf(_) => &LIST_DEFAULT,
        _ => &DEFAULT,
    };
    apply_idiom(&mut text, default_re, |caps| {
        let raw = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
        match typed_default(raw, doc_type) {
            Some(default) => {
                schema.default = Some(default);
                true
            }
            None => false,
        }
    });

    let description = tidy(&text);
    schema.description.clone_from(&description);
    MinedParameter {
        schema,
        description,
    }
}

/// Parse the declared tag, then mine (convenience function)
pub fn mine_declared_parameter(help: &str, tag: &str) -> Result<MinedParameter> {
    Ok(mine_parameter_constraints(help, DocType::parse(tag)?))
}

/// Bounds and enums constrain the elements of a list, not the list
fn constrain(schema: &mut Schema, f: impl FnOnce(&mut Schema)) {
    match schema.items.as_deref_mut() {
        Some(items) => f(items),
        None => f(schema),
    }
}

/// Run `apply` on the first match and cut the match out if it accepted it
fn apply_idiom(
    text: &mut String,
    re: &Regex,
    apply: impl FnOnce(&regex::Captures<'_>) -> bool,
) {
    let range = {
        let Some(caps) = re.captures(text) else {
            return;
        };
        if !apply(&caps) {
            return;
        }
        caps.get(0).map(|m| m.range())
    };
    if let Some(range) = range {
        text.replace_range(range, " ");
    }
}

/// Find a "Valid values" block; all bullets must parse or none apply
fn take_valid_values(text: &str, scalar: DocType) -> Option<(Vec<Value>, String)> {
    let lines: Vec<&str> = text.lines().collect();
    let header = lines.iter().position(|l| VALID_VALUES_HEADER.is_match(l))?;

    let bullets: Vec<&str> = lines[header + 1..]
        .iter()
        .take_while(|l| l.trim_start().starts_with(['-', '*']))
        .copied()
        .collect();
    if bullets.is_empty() {
        return None;
    }

    let mut values = Vec::with_capacity(bullets.len());
    for bullet in &bullets {
        let caps = VALID_VALUE_BULLET.captures(bullet)?;
        values.push(typed_value(&caps[1], scalar)?);
    }

    let end = header + 1 + bullets.len();
    let rest = lines[..header]
        .iter()
        .chain(&lines[end..])
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    Some((values, rest))
}

fn typed_value(raw: &str, scalar: DocType) -> Option<Value> {
    let raw = raw.trim();
    match scalar {
        DocType::Numeric | DocType::Timestamp => raw.parse::<i64>().ok().map(Value::from),
        DocType::Float => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        DocType::Boolean => match raw.to_lowercase().as_str() {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        _ => Some(Value::String(raw.to_string())),
    }
}

/// Lists take a comma-separated default
fn typed_default(raw: &str, doc_type: DocType) -> Option<Value> {
    match doc_type {
        DocType::ListOf(element) => raw
            .trim_end_matches('.')
            .split(',')
            .map(|part| typed_value(part.trim().trim_matches('"'), element.doc_type()))
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
        DocType::Object | DocType::AssociativeArray => None,
        scalar => typed_value(raw, scalar),
    }
}

fn parse_number(raw: &str) -> Option<Number> {
    raw.parse::<i64>()
        .ok()
        .map(Number::from)
        .or_else(|| raw.parse::<f64>().ok().and_then(Number::from_f64))
}

/// Collapse runs of spaces and drop blank lines
fn tidy(text: &str) -> Option<String> {
    let lines: Vec<String> = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
