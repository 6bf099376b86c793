use thiserror::Error;

/// Why a piece of assistant text was not accepted as a form schema.
///
/// None of these are failures from the user's point of view: the text is
/// simply a conversational reply and is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotASchema {
    #[error("not a JSON document: {0}")]
    NotJson(String),

    #[error("JSON document is not an object")]
    NotAnObject,

    #[error("document has no `fields` list")]
    MissingFields,

    #[error("document does not have the form schema shape: {0}")]
    InvalidShape(String),
}
