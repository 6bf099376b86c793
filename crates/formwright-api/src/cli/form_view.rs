//! Terminal drawing of the form pane.

use console::style;

use formwright_core::render::{Placeholder, RenderState, RenderedForm, Widget};

/// Format a render state for the terminal.
pub fn format_state(state: &RenderState) -> String {
    match state {
        RenderState::Loading(indicator) => {
            format!("  {} {}", style("…").cyan(), style(indicator.message).dim())
        }
        RenderState::Empty(placeholder) => format_placeholder(placeholder),
        RenderState::Populated(form) => format_form(form),
    }
}

fn format_placeholder(placeholder: &Placeholder) -> String {
    let mut lines = vec![
        format!("  {}", style(placeholder.heading).bold()),
        String::new(),
        format!("  {}", placeholder.intro),
    ];
    lines.extend(
        placeholder
            .examples
            .iter()
            .map(|example| format!("    • {example}")),
    );
    lines.push(String::new());
    lines.push(format!("  {}", style(placeholder.outro).dim()));
    lines.join("\n")
}

fn format_form(form: &RenderedForm) -> String {
    let mut lines = vec![
        format!("  {}", style(&form.title).cyan().bold()),
        format!("  {}", style("─".repeat(form.title.chars().count().max(8))).dim()),
    ];

    for control in &form.controls {
        let kind = match &control.widget {
            Widget::TextArea { rows } => format!("textarea, {rows} rows"),
            Widget::Select { options } => {
                let choices: Vec<&str> = options
                    .iter()
                    .filter(|o| !o.neutral)
                    .map(|o| o.label.as_str())
                    .collect();
                format!("select: {}", choices.join(" | "))
            }
            Widget::Input { declared_type, .. } => declared_type.clone(),
        };

        let mut line = format!(
            "  {} {}",
            style(control.display_label()).bold(),
            style(format!("[{kind}]")).dim()
        );
        if let Some(placeholder) = &control.placeholder {
            line.push_str(&format!("  {}", style(format!("\"{placeholder}\"")).italic().dim()));
        }
        lines.push(line);
    }

    lines.push(String::new());
    lines.push(format!("  {}", style(format!("[ {} ]", form.submit.label)).green()));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwright_core::render::{LOADING_MESSAGE, render};
    use formwright_core::schema::extract_schema;

    #[test]
    fn test_loading_shows_message() {
        let text = format_state(&render(None, true));
        assert!(text.contains(LOADING_MESSAGE));
    }

    #[test]
    fn test_placeholder_lists_examples() {
        let text = format_state(&render(None, false));
        assert!(text.contains("Form Preview"));
        assert!(text.contains("• Contact forms"));
        assert!(text.contains("• And much more!"));
    }

    #[test]
    fn test_form_lists_controls_in_order() {
        let schema = extract_schema(
            r#"{"title": "Signup", "fields": [
                {"id": "email", "label": "Email", "type": "email", "required": true, "placeholder": "you@example.com"},
                {"label": "Plan", "type": "select", "options": ["Free", "Pro"]},
                {"label": "Bio", "type": "textarea"}
            ]}"#,
        )
        .unwrap();
        let text = format_state(&render(Some(&schema), false));

        assert!(text.contains("Signup"));
        assert!(text.contains("Email *"));
        assert!(text.contains("[email]"));
        assert!(text.contains("you@example.com"));
        assert!(text.contains("select: Free | Pro"));
        assert!(text.contains("textarea, 4 rows"));
        assert!(text.contains("[ Submit Form ]"));

        let email_at = text.find("Email *").unwrap();
        let plan_at = text.find("Plan").unwrap();
        let bio_at = text.find("Bio").unwrap();
        assert!(email_at < plan_at && plan_at < bio_at);
    }
}
