//! Form schema model.
//!
//! A `FormSchema` is the validated, typed description of a form: a title and
//! an ordered list of fields. Values of these types only ever exist in a
//! fully valid state; building one from assistant text goes through the
//! schema extractor in `formwright-core`, which applies the defaults below.
//!
//! Serializing a `FormSchema` produces the embedded schema wire format:
//!
//! ```json
//! { "title": "Contact Us", "fields": [
//!   { "id": "name", "label": "Name", "type": "text", "required": true }
//! ] }
//! ```

use serde::Serialize;

use std::fmt;

/// Title used when the schema omits one (or sends an empty string).
pub const DEFAULT_FORM_TITLE: &str = "Generated Form";

/// Input type used when a field omits `type`.
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// A validated form description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSchema {
    pub title: String,
    /// Rendering order is exactly this order.
    pub fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Number of fields marked as required.
    pub fn required_count(&self) -> usize {
        self.fields.iter().filter(|f| f.required).count()
    }
}

/// One field of a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Declared identifier. When absent the renderer derives one from the
    /// field's position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Blank when the assistant omitted it.
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Only meaningful for `FieldType::Select`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// The kind of control a field maps to.
///
/// Closed over the two types that need a dedicated control. Every other
/// declared type (including ones we have never heard of) is a single-line
/// input that keeps the declared string so it can be passed through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum FieldType {
    TextArea,
    Select,
    Input(String),
}

impl FieldType {
    /// Classify a declared `type` string. Absent or blank means plain text.
    pub fn from_declared(declared: Option<&str>) -> Self {
        match declared.map(str::trim) {
            None | Some("") => FieldType::Input(DEFAULT_INPUT_TYPE.to_string()),
            Some("textarea") => FieldType::TextArea,
            Some("select") => FieldType::Select,
            Some(other) => FieldType::Input(other.to_string()),
        }
    }

    /// The type string as it appears on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::TextArea => "textarea",
            FieldType::Select => "select",
            FieldType::Input(declared) => declared,
        }
    }
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Input(DEFAULT_INPUT_TYPE.to_string())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Input(declared) => declared,
            other => other.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_declared_known_types() {
        assert_eq!(FieldType::from_declared(Some("textarea")), FieldType::TextArea);
        assert_eq!(FieldType::from_declared(Some("select")), FieldType::Select);
        assert_eq!(
            FieldType::from_declared(Some("email")),
            FieldType::Input("email".to_string())
        );
    }

    #[test]
    fn test_from_declared_missing_or_blank_is_text() {
        assert_eq!(FieldType::from_declared(None), FieldType::default());
        assert_eq!(FieldType::from_declared(Some("  ")), FieldType::default());
        assert_eq!(FieldType::default().as_str(), "text");
    }

    #[test]
    fn test_unknown_type_is_kept_verbatim() {
        let ft = FieldType::from_declared(Some("signature-pad"));
        assert_eq!(ft, FieldType::Input("signature-pad".to_string()));
        assert_eq!(ft.to_string(), "signature-pad");
    }

    #[test]
    fn test_serialize_skips_absent_optionals() {
        let schema = FormSchema {
            title: "Contact Us".to_string(),
            fields: vec![FieldSpec {
                id: Some("name".to_string()),
                label: "Name".to_string(),
                field_type: FieldType::default(),
                required: true,
                placeholder: None,
                options: Vec::new(),
            }],
        };

        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Contact Us",
                "fields": [{"id": "name", "label": "Name", "type": "text", "required": true}]
            })
        );
    }

    #[test]
    fn test_required_count() {
        let field = |required| FieldSpec {
            id: None,
            label: String::new(),
            field_type: FieldType::TextArea,
            required,
            placeholder: None,
            options: Vec::new(),
        };
        let schema = FormSchema {
            title: DEFAULT_FORM_TITLE.to_string(),
            fields: vec![field(true), field(false), field(true)],
        };
        assert_eq!(schema.required_count(), 2);
    }
}
