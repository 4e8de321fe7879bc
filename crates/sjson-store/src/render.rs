//! Text rendering of a [`Document`].
//!
//! Scalar fields are written first, then array fields, each group in key
//! order. Scalar values are emitted exactly as stored. Array elements are
//! always wrapped in double quotes and never escaped.
//!
//! With the default options every entry, including the last, is followed by a
//! comma. Existing consumers parse that form, so it stays the default.

use serde::{Deserialize, Serialize};

use crate::document::Document;

/// Largest accepted [`RenderOptions::indent`].
pub const MAX_INDENT: usize = 16;

/// Layout knobs for [`render_document`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Spaces before each entry, at most [`MAX_INDENT`].
    pub indent: usize,
    /// Emit a comma after the final entry too.
    pub trailing_comma: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            trailing_comma: true,
        }
    }
}

impl RenderOptions {
    /// Options that produce strict JSON punctuation (no trailing comma).
    pub fn strict() -> Self {
        Self {
            trailing_comma: false,
            ..Default::default()
        }
    }
}

/// Render `doc` as a brace-delimited block, one entry per line.
///
/// An `indent` above [`MAX_INDENT`] is clamped to it.
pub fn render_document(doc: &Document, options: &RenderOptions) -> String {
    let pad = " ".repeat(options.indent.min(MAX_INDENT));

    let mut entries = Vec::with_capacity(doc.field_count() + doc.array_count());
    for (key, value) in doc.fields() {
        entries.push(format!("{pad}\"{key}\": {value}"));
    }
    for (key, elements) in doc.arrays() {
        let body = elements
            .iter()
            .map(|e| format!("\"{e}\""))
            .collect::<Vec<_>>()
            .join(", ");
        entries.push(format!("{pad}\"{key}\": [{body}]"));
    }

    let mut out = String::from("{\n");
    let last = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        out.push_str(entry);
        if options.trailing_comma || i < last {
            out.push(',');
        }
        out.push('\n');
    }
    out.push('}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sjson_types::{DocumentHandle, ValueKind};

    fn sample() -> Document {
        let mut d = Document::new(DocumentHandle::new(1));
        d.add_field("name", "\"John\"", ValueKind::String).unwrap();
        d.add_field("age", "25", ValueKind::Number).unwrap();
        d.add_array("tags", vec!["a".into(), "b".into(), "c".into()])
            .unwrap();
        d
    }

    #[test]
    fn empty_document() {
        let d = Document::new(DocumentHandle::new(9));
        assert_eq!(render_document(&d, &RenderOptions::default()), "{\n}");
        assert_eq!(render_document(&d, &RenderOptions::strict()), "{\n}");
    }

    #[test]
    fn default_layout_has_trailing_commas() {
        let text = render_document(&sample(), &RenderOptions::default());
        assert_eq!(
            text,
            "{\n  \"age\": 25,\n  \"name\": \"John\",\n  \"tags\": [\"a\", \"b\", \"c\"],\n}"
        );
    }

    #[test]
    fn strict_layout_drops_final_comma() {
        let text = render_document(&sample(), &RenderOptions::strict());
        assert!(text.ends_with("\"tags\": [\"a\", \"b\", \"c\"]\n}"));
        assert!(text.contains("\"name\": \"John\",\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["age"], 25);
        assert_eq!(parsed["tags"][2], "c");
    }

    #[test]
    fn array_elements_are_always_quoted() {
        let mut d = Document::new(DocumentHandle::new(2));
        d.add_array("mixed", vec!["1".into(), "\"q\"".into(), "".into()])
            .unwrap();
        let text = render_document(&d, &RenderOptions::default());
        assert!(text.contains("  \"mixed\": [\"1\", \"\"q\"\", \"\"],\n"));
    }

    #[test]
    fn empty_array() {
        let mut d = Document::new(DocumentHandle::new(3));
        d.add_array("none", vec![]).unwrap();
        let text = render_document(&d, &RenderOptions::default());
        assert_eq!(text, "{\n  \"none\": [],\n}");
    }

    #[test]
    fn custom_indent() {
        let mut d = Document::new(DocumentHandle::new(4));
        d.add_field("n", "null", ValueKind::Null).unwrap();
        let opts = RenderOptions {
            indent: 4,
            trailing_comma: true,
        };
        assert_eq!(render_document(&d, &opts), "{\n    \"n\": null,\n}");
    }

    #[test]
    fn oversized_indent_is_clamped() {
        let mut d = Document::new(DocumentHandle::new(6));
        d.add_field("n", "1", ValueKind::Number).unwrap();
        let opts = RenderOptions {
            indent: usize::MAX,
            trailing_comma: true,
        };
        let pad = " ".repeat(MAX_INDENT);
        assert_eq!(render_document(&d, &opts), format!("{{\n{pad}\"n\": 1,\n}}"));
    }

    #[test]
    fn scalars_precede_arrays() {
        let mut d = Document::new(DocumentHandle::new(5));
        d.add_array("a", vec!["x".into()]).unwrap();
        d.add_field("z", "true", ValueKind::Boolean).unwrap();
        let text = render_document(&d, &RenderOptions::default());
        let z = text.find("\"z\"").unwrap();
        let a = text.find("\"a\"").unwrap();
        assert!(z < a);
    }
}
