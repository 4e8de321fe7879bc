//! Operation scripts: one registry operation per line.
//!
//! ```text
//! create <h>
//! drop <h>
//! add <h> <key> <kind> <value...>
//! modify <h> <key> <kind> <value...>
//! delete <h> <key>
//! get <h> <key>
//! replace <h> [key=value ...]
//! array <h> <key> [element ...]
//! delete-array <h> <key>
//! render <h>
//! ```
//!
//! `<kind>` is a kind name or a legacy integer code. `<value...>` is the rest
//! of the line after the whitespace that follows `<kind>`, so it may contain
//! spaces and keeps any trailing ones. Blank lines and lines starting with `#`
//! are skipped.

use std::collections::BTreeMap;

use anyhow::{anyhow, bail, Context};
use serde::Serialize;
use sjson_store::{DocumentStore, Operation, StatusApi};
use sjson_types::ValueKind;

/// One parsed script line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Create(i32),
    Drop(i32),
    Add { handle: i32, key: String, kind: i32, value: String },
    Modify { handle: i32, key: String, kind: i32, value: String },
    Delete { handle: i32, key: String },
    Get { handle: i32, key: String },
    Replace { handle: i32, fields: BTreeMap<String, String> },
    Array { handle: i32, key: String, elements: Vec<String> },
    DeleteArray { handle: i32, key: String },
    Render(i32),
}

/// Result of running one step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub line: usize,
    pub op: String,
    /// Status code for mutating steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    /// Text for reading steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Parse a whole script, keeping 1-based line numbers.
pub fn parse_script(text: &str) -> anyhow::Result<Vec<(usize, Step)>> {
    let mut steps = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let number = idx + 1;
        if let Some(step) = parse_line(line).with_context(|| format!("line {number}: {line:?}"))? {
            steps.push((number, step));
        }
    }
    Ok(steps)
}

/// Parse one line. Returns `Ok(None)` for blanks and comments.
pub fn parse_line(line: &str) -> anyhow::Result<Option<Step>> {
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let mut rest = trimmed;
    let verb = next_word(&mut rest).ok_or_else(|| anyhow!("empty line"))?;
    let step = match verb {
        "create" => Step::Create(handle(&mut rest)?),
        "drop" => Step::Drop(handle(&mut rest)?),
        "add" | "modify" => {
            let handle = handle(&mut rest)?;
            let key = word(&mut rest, "key")?;
            let kind = kind_code(word(&mut rest, "kind")?)?;
            let value = rest.trim_start().to_string();
            if value.trim_end().is_empty() {
                bail!("missing value");
            }
            if verb == "add" {
                Step::Add { handle, key, kind, value }
            } else {
                Step::Modify { handle, key, kind, value }
            }
        }
        "delete" => Step::Delete {
            handle: handle(&mut rest)?,
            key: word(&mut rest, "key")?,
        },
        "get" => Step::Get {
            handle: handle(&mut rest)?,
            key: word(&mut rest, "key")?,
        },
        "replace" => {
            let handle = handle(&mut rest)?;
            let mut fields = BTreeMap::new();
            while let Some(pair) = next_word(&mut rest) {
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| anyhow!("expected key=value, got {pair:?}"))?;
                fields.insert(key.to_string(), value.to_string());
            }
            Step::Replace { handle, fields }
        }
        "array" => {
            let handle = handle(&mut rest)?;
            let key = word(&mut rest, "key")?;
            let mut elements = Vec::new();
            while let Some(elem) = next_word(&mut rest) {
                elements.push(elem.to_string());
            }
            Step::Array { handle, key, elements }
        }
        "delete-array" => Step::DeleteArray {
            handle: handle(&mut rest)?,
            key: word(&mut rest, "key")?,
        },
        "render" => Step::Render(handle(&mut rest)?),
        other => bail!("unknown operation {other:?}"),
    };

    if matches!(
        step,
        Step::Create(_)
            | Step::Drop(_)
            | Step::Render(_)
            | Step::Delete { .. }
            | Step::Get { .. }
            | Step::DeleteArray { .. }
    ) && !rest.trim().is_empty()
    {
        bail!("unexpected trailing input {:?}", rest.trim());
    }
    Ok(Some(step))
}

impl Step {
    /// Execute against `api` and describe what happened.
    pub fn apply<S: DocumentStore>(&self, line: usize, api: &StatusApi<S>) -> Outcome {
        let (op, status, output) = match self {
            Step::Create(h) => (Operation::Create.to_string(), Some(api.create(*h)), None),
            Step::Drop(h) => (
                Operation::DeleteDocument.to_string(),
                Some(api.delete_document(*h)),
                None,
            ),
            Step::Add { handle, key, kind, value } => (
                Operation::AddField.to_string(),
                Some(api.add_field(*handle, key, value, *kind)),
                None,
            ),
            Step::Modify { handle, key, kind, value } => (
                Operation::ModifyField.to_string(),
                Some(api.modify_field(*handle, key, value, *kind)),
                None,
            ),
            Step::Delete { handle, key } => (
                Operation::DeleteField.to_string(),
                Some(api.delete_field(*handle, key)),
                None,
            ),
            Step::Get { handle, key } => (
                "get_field_value".to_string(),
                None,
                Some(api.get_field_value(*handle, key)),
            ),
            Step::Replace { handle, fields } => (
                Operation::ReplaceScalarFields.to_string(),
                Some(api.replace_scalar_fields(*handle, fields.clone())),
                None,
            ),
            Step::Array { handle, key, elements } => (
                Operation::AddArray.to_string(),
                Some(api.add_array(*handle, key, elements.clone())),
                None,
            ),
            Step::DeleteArray { handle, key } => (
                Operation::DeleteArray.to_string(),
                Some(api.delete_array(*handle, key)),
                None,
            ),
            Step::Render(h) => ("render".to_string(), None, Some(api.render(*h))),
        };
        Outcome { line, op, status, output }
    }
}

fn next_word<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let s = rest.trim_start();
    if s.is_empty() {
        *rest = s;
        return None;
    }
    let end = s.find(char::is_whitespace).unwrap_or(s.len());
    let (word, remainder) = s.split_at(end);
    *rest = remainder;
    Some(word)
}

fn word(rest: &mut &str, what: &str) -> anyhow::Result<String> {
    next_word(rest)
        .map(str::to_string)
        .ok_or_else(|| anyhow!("missing {what}"))
}

fn handle(rest: &mut &str) -> anyhow::Result<i32> {
    let raw = next_word(rest).ok_or_else(|| anyhow!("missing handle"))?;
    raw.parse()
        .with_context(|| format!("invalid handle {raw:?}"))
}

/// A kind name maps to its code; a bare integer is passed through untouched.
fn kind_code(raw: String) -> anyhow::Result<i32> {
    if let Ok(code) = raw.parse::<i32>() {
        return Ok(code);
    }
    Ok(raw.parse::<ValueKind>()?.code())
}
