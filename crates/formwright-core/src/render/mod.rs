//! Form renderer.
//!
//! [`render`] maps the current schema and loading flag to a [`RenderState`]:
//! a concrete description of what the form pane shows. It is a pure
//! function -- the same `(schema, loading)` pair always yields an equal
//! state -- so front-ends (HTML in [`html`], the terminal view in the CLI)
//! only have to draw it.
//!
//! Precedence: loading wins over everything, then "no schema" shows the
//! static placeholder, otherwise the schema is turned into controls.

pub mod html;

use formwright_types::form::{FieldSpec, FieldType, FormSchema};

/// Text of the transient indicator shown while a reply is pending.
pub const LOADING_MESSAGE: &str = "Generating form...";

/// Label of the neutral first entry of every select control.
pub const SELECT_PROMPT: &str = "Choose an option...";

/// Label of the submit control.
pub const SUBMIT_LABEL: &str = "Submit Form";

/// Appended to the label of required controls.
pub const REQUIRED_MARKER: &str = "*";

/// Visible height of multi-line inputs.
pub const TEXTAREA_ROWS: u8 = 4;

/// Input types a single-line control can carry as-is. Anything else is
/// drawn as a plain text input.
const HTML_INPUT_TYPES: &[&str] = &[
    "text",
    "email",
    "number",
    "password",
    "tel",
    "url",
    "search",
    "date",
    "datetime-local",
    "time",
    "month",
    "week",
    "color",
    "range",
    "checkbox",
    "radio",
    "file",
    "hidden",
];

/// The three mutually exclusive things the form pane can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderState {
    Loading(LoadingIndicator),
    Empty(Placeholder),
    Populated(RenderedForm),
}

impl RenderState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RenderState::Loading(_))
    }

    /// The rendered form, if there is one.
    pub fn form(&self) -> Option<&RenderedForm> {
        match self {
            RenderState::Populated(form) => Some(form),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingIndicator {
    pub message: &'static str,
}

/// Static, non-interactive help shown before any form exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub heading: &'static str,
    pub intro: &'static str,
    pub examples: &'static [&'static str],
    pub outro: &'static str,
}

pub const PLACEHOLDER: Placeholder = Placeholder {
    heading: "Form Preview",
    intro: "Start a conversation in the chat to create your form. I can help you build:",
    examples: &[
        "Contact forms",
        "Registration forms",
        "Survey forms",
        "Feedback forms",
        "And much more!",
    ],
    outro: "Just describe what you need and I'll generate a live form for you.",
};

/// A fully populated form: title, one control per field, submit control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedForm {
    pub title: String,
    pub controls: Vec<FieldControl>,
    pub submit: SubmitControl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: &'static str,
}

/// One interactive control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldControl {
    /// Declared id, or the positional fallback.
    pub id: String,
    /// Always equal to `id`; submitted values are keyed by it.
    pub name: String,
    pub label: String,
    /// Enforced by the control when the form is filled in.
    pub required: bool,
    pub placeholder: Option<String>,
    pub widget: Widget,
}

impl FieldControl {
    /// Label with the required marker appended when applicable.
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} {REQUIRED_MARKER}", self.label)
        } else {
            self.label.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Multi-line text input with a fixed visible height.
    TextArea { rows: u8 },
    /// Choice control; `options[0]` is the neutral prompt.
    Select { options: Vec<ChoiceOption> },
    /// Single-line input.
    Input {
        /// Type attribute the control is drawn with.
        input_type: String,
        /// Type string exactly as the schema declared it.
        declared_type: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    /// True only for the leading "choose" entry, whose value is empty.
    pub neutral: bool,
}

impl ChoiceOption {
    fn neutral() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PROMPT.to_string(),
            neutral: true,
        }
    }

    fn entry(option: &str) -> Self {
        Self {
            value: option.to_string(),
            label: option.to_string(),
            neutral: false,
        }
    }
}

/// Render the form pane for the given schema and loading flag.
pub fn render(schema: Option<&FormSchema>, loading: bool) -> RenderState {
    if loading {
        return RenderState::Loading(LoadingIndicator {
            message: LOADING_MESSAGE,
        });
    }

    match schema {
        None => RenderState::Empty(PLACEHOLDER),
        Some(schema) => RenderState::Populated(RenderedForm {
            title: schema.title.clone(),
            controls: schema
                .fields
                .iter()
                .enumerate()
                .map(|(position, field)| control_for(field, position))
                .collect(),
            submit: SubmitControl {
                label: SUBMIT_LABEL,
            },
        }),
    }
}

/// Resolve the identifier of the field at `position`.
///
/// Stage one: the declared id, when present and not blank. Stage two: a
/// positional id (`field-0`, `field-1`, ...). Because the fallback depends on
/// position, several fields omitting `id` still get distinct identifiers. A
/// declared id that happens to equal another field's fallback is kept as is.
pub fn resolve_field_id(field: &FieldSpec, position: usize) -> String {
    match field.id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("field-{position}"),
    }
}

fn control_for(field: &FieldSpec, position: usize) -> FieldControl {
    let id = resolve_field_id(field, position);

    let widget = match &field.field_type {
        FieldType::TextArea => Widget::TextArea {
            rows: TEXTAREA_ROWS,
        },
        FieldType::Select => Widget::Select {
            options: std::iter::once(ChoiceOption::neutral())
                .chain(field.options.iter().map(|o| ChoiceOption::entry(o)))
                .collect(),
        },
        FieldType::Input(declared) => Widget::Input {
            input_type: input_type_for(declared).to_string(),
            declared_type: declared.clone(),
        },
    };

    FieldControl {
        name: id.clone(),
        id,
        label: field.label.clone(),
        required: field.required,
        placeholder: field.placeholder.clone(),
        widget,
    }
}

fn input_type_for(declared: &str) -> &str {
    if HTML_INPUT_TYPES.contains(&declared) {
        declared
    } else {
        "text"
    }
}
