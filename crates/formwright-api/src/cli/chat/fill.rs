//! `/fill` -- fill in the rendered form with terminal prompts.
//!
//! Each control becomes one prompt. Required controls cannot be left empty,
//! selects only offer their options, password inputs hide what is typed.
//! The result is keyed by control name, like a submitted HTML form.

use console::style;
use dialoguer::{Confirm, Input, Password, Select};
use serde_json::{Map, Value};

use formwright_core::render::{ChoiceOption, FieldControl, RenderedForm, Widget};

/// Prompt for every control of `form`, in order.
pub fn fill_form(form: &RenderedForm) -> anyhow::Result<Map<String, Value>> {
    println!();
    println!("  {}", style(&form.title).cyan().bold());
    println!();

    let mut values = Map::new();
    for control in &form.controls {
        let value = prompt_control(control)?;
        values.insert(control.name.clone(), value);
    }
    Ok(values)
}

fn prompt_control(control: &FieldControl) -> anyhow::Result<Value> {
    let label = control.display_label();

    match &control.widget {
        Widget::Select { options } => {
            let choices = select_choices(control, options)?;
            let labels: Vec<&str> = choices.iter().map(|o| o.label.as_str()).collect();
            let selection = Select::new()
                .with_prompt(label)
                .items(&labels)
                .default(0)
                .interact()?;
            Ok(Value::String(choices[selection].value.clone()))
        }

        Widget::Input { input_type, .. } if input_type == "checkbox" => loop {
            let checked = Confirm::new()
                .with_prompt(label.as_str())
                .default(false)
                .interact()?;
            if checked || !control.required {
                break Ok(Value::Bool(checked));
            }
            println!("  {} This box must be checked", style("!").yellow().bold());
        },

        Widget::Input { input_type, .. } if input_type == "password" => {
            let secret = Password::new()
                .with_prompt(prompt_text(control))
                .allow_empty_password(!control.required)
                .interact()?;
            Ok(Value::String(secret))
        }

        Widget::Input { input_type, .. } => {
            let text = read_text(control, input_type)?;
            Ok(typed_value(input_type, text))
        }

        Widget::TextArea { .. } => Ok(Value::String(read_text(control, "textarea")?)),
    }
}

/// Entries a select offers. A required select cannot be answered with the
/// neutral entry, so one without real options cannot be filled at all.
fn select_choices<'a>(
    control: &FieldControl,
    options: &'a [ChoiceOption],
) -> anyhow::Result<Vec<&'a ChoiceOption>> {
    let choices: Vec<_> = options
        .iter()
        .filter(|o| !(control.required && o.neutral))
        .collect();
    if choices.is_empty() {
        anyhow::bail!("{} has no options", control.label);
    }
    Ok(choices)
}

fn read_text(control: &FieldControl, input_type: &str) -> anyhow::Result<String> {
    let required = control.required;
    let input_type = input_type.to_string();

    let text = Input::<String>::new()
        .with_prompt(prompt_text(control))
        .allow_empty(!required)
        .validate_with(move |value: &String| check_value(&input_type, required, value))
        .interact_text()?;
    Ok(text.trim().to_string())
}

fn prompt_text(control: &FieldControl) -> String {
    match &control.placeholder {
        Some(placeholder) => format!("{} ({placeholder})", control.display_label()),
        None => control.display_label(),
    }
}

/// Validate one typed value the way the control would.
pub fn check_value(input_type: &str, required: bool, value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return if required {
            Err("This field is required".to_string())
        } else {
            Ok(())
        };
    }

    match input_type {
        "number" | "range" => value
            .parse::<f64>()
            .map(|_| ())
            .map_err(|_| "Please enter a number".to_string()),
        "email" if !looks_like_email(value) => Err("Please enter an email address".to_string()),
        _ => Ok(()),
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@') && !value.contains(' ')
        }
        None => false,
    }
}

fn typed_value(input_type: &str, text: String) -> Value {
    if matches!(input_type, "number" | "range") {
        if let Some(number) = text.parse::<f64>().ok().and_then(serde_json::Number::from_f64) {
            return Value::Number(number);
        }
    }
    Value::String(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use formwright_core::render::render;
    use formwright_types::form::{FieldSpec, FieldType, FormSchema};

    #[test]
    fn test_required_rejects_blank() {
        assert_eq!(
            check_value("text", true, "   "),
            Err("This field is required".to_string())
        );
        assert_eq!(check_value("text", false, ""), Ok(()));
        assert_eq!(check_value("text", true, "Ada"), Ok(()));
    }

    #[test]
    fn test_number_must_parse() {
        assert!(check_value("number", false, "42").is_ok());
        assert!(check_value("number", false, "4.5").is_ok());
        assert!(check_value("number", false, "many").is_err());
        assert!(check_value("number", false, "").is_ok());
    }

    #[test]
    fn test_email_shape() {
        assert!(check_value("email", true, "ada@example.com").is_ok());
        assert!(check_value("email", true, "ada.example.com").is_err());
        assert!(check_value("email", true, "@example.com").is_err());
        assert!(check_value("email", true, "a@b@c").is_err());
    }

    #[test]
    fn test_unknown_types_accept_anything() {
        assert!(check_value("color-wheel", false, "teal").is_ok());
    }

    fn select_control(required: bool, entries: &[&str]) -> FieldControl {
        let schema = FormSchema {
            title: "Plans".to_string(),
            fields: vec![FieldSpec {
                id: Some("plan".to_string()),
                label: "Plan".to_string(),
                field_type: FieldType::Select,
                required,
                placeholder: None,
                options: entries.iter().map(|e| e.to_string()).collect(),
            }],
        };
        let state = render(Some(&schema), false);
        state.form().unwrap().controls[0].clone()
    }

    fn choice_values(control: &FieldControl) -> anyhow::Result<Vec<String>> {
        let Widget::Select { options } = &control.widget else {
            panic!("expected a select");
        };
        Ok(select_choices(control, options)?
            .into_iter()
            .map(|o| o.value.clone())
            .collect())
    }

    #[test]
    fn test_required_select_hides_neutral_entry() {
        let control = select_control(true, &["Free", "Pro"]);
        assert_eq!(choice_values(&control).unwrap(), vec!["Free", "Pro"]);

        let control = select_control(false, &["Free"]);
        assert_eq!(choice_values(&control).unwrap(), vec!["", "Free"]);
    }

    #[test]
    fn test_required_select_without_options_cannot_be_filled() {
        let control = select_control(true, &[]);
        let err = choice_values(&control).unwrap_err();
        assert_eq!(err.to_string(), "Plan has no options");

        let control = select_control(false, &[]);
        assert_eq!(choice_values(&control).unwrap(), vec![""]);
    }

    #[test]
    fn test_typed_value() {
        assert_eq!(typed_value("number", "3".to_string()), serde_json::json!(3.0));
        assert_eq!(typed_value("number", "".to_string()), Value::String(String::new()));
        assert_eq!(typed_value("text", "3".to_string()), Value::String("3".to_string()));
    }
}
