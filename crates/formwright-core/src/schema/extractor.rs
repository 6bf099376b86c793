//! Schema extraction from assistant text.
//!
//! The assistant answers either with a JSON form schema or with plain
//! conversation ("Can you clarify what fields you need?"). `extract_schema`
//! decides which one it got. It never panics and never surfaces an error to
//! the user: a rejection just means the text is a conversational reply.
//!
//! Only the document shape is checked: an object with a `fields` list.
//! Inside the list, attributes are read leniently. An attribute that is
//! missing, `null` or of the wrong type takes its default, and a field entry
//! that is not an object becomes an all-default field.

use serde_json::{Map, Value};

use formwright_types::error::NotASchema;
use formwright_types::form::{DEFAULT_FORM_TITLE, FieldSpec, FieldType, FormSchema};

/// Interpret assistant text as a form schema.
///
/// Accepts a JSON object with a `fields` list (and optionally a `title`).
/// Anything else -- prose, other JSON values, objects without a list of
/// fields -- is rejected with the reason, which callers are expected to log
/// at most.
pub fn extract_schema(raw: &str) -> Result<FormSchema, NotASchema> {
    let result = parse(raw.trim());

    match &result {
        Ok(schema) => tracing::debug!(
            title = %schema.title,
            field_count = schema.fields.len(),
            "Extracted form schema from assistant text"
        ),
        Err(reason) => tracing::debug!(
            %reason,
            content_preview = %preview(raw),
            "Assistant text is not a form schema; treating as conversation"
        ),
    }

    result
}

/// Same as [`extract_schema`], discarding the rejection reason.
pub fn extract(raw: &str) -> Option<FormSchema> {
    extract_schema(raw).ok()
}

fn parse(text: &str) -> Result<FormSchema, NotASchema> {
    let value: Value =
        serde_json::from_str(text).map_err(|e| NotASchema::NotJson(e.to_string()))?;

    let object = value.as_object().ok_or(NotASchema::NotAnObject)?;
    let entries = match object.get("fields") {
        None | Some(Value::Null) => return Err(NotASchema::MissingFields),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(NotASchema::InvalidShape(
                "`fields` is not a list".to_string(),
            ));
        }
    };

    let title = text_attr(object, "title")
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FORM_TITLE.to_string());

    Ok(FormSchema {
        title,
        fields: entries.iter().map(field_from_value).collect(),
    })
}

fn field_from_value(entry: &Value) -> FieldSpec {
    let Some(attrs) = entry.as_object() else {
        tracing::debug!(entry = %entry, "Field entry is not an object; using defaults");
        return FieldSpec::default();
    };

    FieldSpec {
        id: text_attr(attrs, "id"),
        label: text_attr(attrs, "label").unwrap_or_default(),
        field_type: FieldType::from_declared(
            attrs.get("type").and_then(Value::as_str),
        ),
        required: attrs
            .get("required")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        placeholder: text_attr(attrs, "placeholder"),
        options: match attrs.get("options") {
            Some(Value::Array(items)) => items.iter().filter_map(scalar_text).collect(),
            _ => Vec::new(),
        },
    }
}

/// A textual attribute. Numbers are taken in their JSON spelling, so
/// `"id": 1` still names the control.
fn text_attr(attrs: &Map<String, Value>, key: &str) -> Option<String> {
    attrs.get(key).and_then(scalar_text)
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn preview(raw: &str) -> String {
    raw.chars().take(120).collect()
}
