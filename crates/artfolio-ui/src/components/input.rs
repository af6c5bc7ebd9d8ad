//! Form Field Components
//!
//! Text inputs, textareas and selects with an optional error annotation:
//! a red border on the control and an inline message below it. The
//! annotation is driven entirely by the `error` prop, so a field carries at
//! most one at a time.

use artfolio_core::FieldError;
use dioxus::prelude::*;

/// Border and message colour of an annotated field.
pub const ERROR_COLOR: &str = "#ef4444";

fn control_style(error: Option<FieldError>) -> String {
    match error {
        Some(_) => format!("border-color: {};", ERROR_COLOR),
        None => String::new(),
    }
}

/// Inline error message under a field.
#[component]
pub fn FieldErrorText(error: FieldError) -> Element {
    rsx! {
        div {
            class: "field-error",
            style: "color: {ERROR_COLOR}; font-size: 0.875rem; margin-top: 0.25rem;",
            "{error.message()}"
        }
    }
}

/// Properties for the TextField component
#[derive(Clone, PartialEq, Props)]
pub struct TextFieldProps {
    /// Form field name
    pub name: String,
    /// Label text
    pub label: String,
    /// Current value
    pub value: String,
    /// Handler called when the value changes
    pub oninput: EventHandler<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Current annotation, if any
    #[props(default)]
    pub error: Option<FieldError>,
}

/// Single-line input with label and error annotation
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TextField {
///         name: "email".to_string(),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///         value: form.read().value(ContactField::Email).to_string(),
///         error: form.read().errors().get(ContactField::Email),
///         oninput: move |v| form.write().set(ContactField::Email, v),
///     }
/// }
/// ```
#[component]
pub fn TextField(props: TextFieldProps) -> Element {
    let id = format!("field-{}", props.name);
    let style = control_style(props.error);

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{props.label}" }
            input {
                id: "{id}",
                name: "{props.name}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                style: "{style}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = props.error {
                FieldErrorText { error }
            }
        }
    }
}

/// Properties for the TextAreaField component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaFieldProps {
    pub name: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default)]
    pub error: Option<FieldError>,
}

#[component]
pub fn TextAreaField(props: TextAreaFieldProps) -> Element {
    let id = format!("field-{}", props.name);
    let style = control_style(props.error);

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{props.label}" }
            textarea {
                id: "{id}",
                name: "{props.name}",
                rows: "{props.rows}",
                value: "{props.value}",
                style: "{style}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = props.error {
                FieldErrorText { error }
            }
        }
    }
}

/// Properties for the SelectField component
#[derive(Clone, PartialEq, Props)]
pub struct SelectFieldProps {
    pub name: String,
    pub label: String,
    pub value: String,
    pub onchange: EventHandler<String>,
    /// `(value, label)` pairs; an empty-valued prompt is prepended
    pub options: Vec<(String, String)>,
    #[props(default = "Select an option".to_string())]
    pub prompt: String,
    #[props(default)]
    pub error: Option<FieldError>,
}

#[component]
pub fn SelectField(props: SelectFieldProps) -> Element {
    let id = format!("field-{}", props.name);
    let style = control_style(props.error);

    rsx! {
        div { class: "form-group",
            label { r#for: "{id}", "{props.label}" }
            select {
                id: "{id}",
                name: "{props.name}",
                value: "{props.value}",
                style: "{style}",
                onchange: move |e| props.onchange.call(e.value()),
                option { value: "", "{props.prompt}" }
                for (value, label) in props.options.iter() {
                    option {
                        key: "{value}",
                        value: "{value}",
                        selected: *value == props.value,
                        "{label}"
                    }
                }
            }
            if let Some(error) = props.error {
                FieldErrorText { error }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_border_only_when_annotated() {
        assert_eq!(control_style(None), "");
        assert_eq!(
            control_style(Some(FieldError::Required)),
            "border-color: #ef4444;"
        );
    }
}
