//! HTML emitter for [`RenderState`].
//!
//! Produces a self-contained fragment (no `<html>`/`<body>`). Every piece of
//! schema-provided text is escaped; class names are stable so a stylesheet
//! can target them.

use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

use super::{FieldControl, Placeholder, RenderState, RenderedForm, Widget, REQUIRED_MARKER};

/// Emit the HTML fragment for a render state.
pub fn to_html(state: &RenderState) -> String {
    match state {
        RenderState::Loading(indicator) => format!(
            "<div class=\"form-loading\"><div class=\"loading-spinner\"></div><p>{}</p></div>",
            text(indicator.message)
        ),
        RenderState::Empty(placeholder) => placeholder_html(placeholder),
        RenderState::Populated(form) => form_html(form),
    }
}

fn placeholder_html(placeholder: &Placeholder) -> String {
    let items: String = placeholder
        .examples
        .iter()
        .map(|example| format!("<li>{}</li>", text(example)))
        .collect();

    format!(
        "<div class=\"form-placeholder\"><h2>{}</h2><p>{}</p><ul>{items}</ul><p>{}</p></div>",
        text(placeholder.heading),
        text(placeholder.intro),
        text(placeholder.outro),
    )
}

fn form_html(form: &RenderedForm) -> String {
    let mut out = String::new();
    out.push_str("<div class=\"form-container\">");
    out.push_str(&format!("<h2 class=\"form-title\">{}</h2>", text(&form.title)));
    out.push_str("<form class=\"dynamic-form\">");

    for control in &form.controls {
        out.push_str(&control_html(control));
    }

    out.push_str(&format!(
        "<button type=\"submit\" class=\"form-submit\">{}</button>",
        text(form.submit.label)
    ));
    out.push_str("</form></div>");
    out
}

fn control_html(control: &FieldControl) -> String {
    let mut label = format!(
        "<label for=\"{}\" class=\"field-label\">{}",
        attr(&control.id),
        text(&control.label)
    );
    if control.required {
        label.push_str(&format!("<span class=\"required\">{REQUIRED_MARKER}</span>"));
    }
    label.push_str("</label>");

    let common = common_attrs(control);
    let widget = match &control.widget {
        Widget::TextArea { rows } => format!(
            "<textarea{common}{} class=\"field-input textarea\" rows=\"{rows}\"></textarea>",
            placeholder_attr(control)
        ),
        Widget::Select { options } => {
            let options: String = options
                .iter()
                .map(|o| format!("<option value=\"{}\">{}</option>", attr(&o.value), text(&o.label)))
                .collect();
            format!("<select{common} class=\"field-input select\">{options}</select>")
        }
        Widget::Input { input_type, .. } => format!(
            "<input type=\"{}\"{common}{} class=\"field-input\">",
            attr(input_type),
            placeholder_attr(control)
        ),
    };

    format!("<div class=\"form-field\">{label}{widget}</div>")
}

fn common_attrs(control: &FieldControl) -> String {
    let mut attrs = format!(
        " id=\"{}\" name=\"{}\"",
        attr(&control.id),
        attr(&control.name)
    );
    if control.required {
        attrs.push_str(" required");
    }
    attrs
}

fn placeholder_attr(control: &FieldControl) -> String {
    control
        .placeholder
        .as_deref()
        .map(|p| format!(" placeholder=\"{}\"", attr(p)))
        .unwrap_or_default()
}
