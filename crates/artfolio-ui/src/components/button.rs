//! Button Components
//!
//! - Primary: form submits and calls to action
//! - Ghost: secondary actions, "view full-size" triggers
//! - Close: the `×` control of dialogs

use artfolio_core::SubmitControl;
use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Filled violet button
    #[default]
    Primary,
    /// Outlined button
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler; receives the raw event so callers can stop propagation
    #[props(default)]
    pub onclick: Option<EventHandler<MouseEvent>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Ghost,
///         class: "view-full-size".to_string(),
///         onclick: move |e: MouseEvent| {
///             e.stop_propagation();
///             open_piece();
///         },
///         "View full size"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_class(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |e| {
                if let Some(handler) = &props.onclick {
                    handler.call(e);
                }
            },
            {props.children}
        }
    }
}

/// Submit button driven by a [`SubmitControl`].
///
/// Label, disabled state and dimmed background all come from the control,
/// so the form controller only has to mutate its model.
#[component]
pub fn SubmitButton(
    /// Control state from the form model
    control: SubmitControl,
    /// Optional additional CSS classes
    #[props(default)]
    class: Option<String>,
) -> Element {
    let full_class = join_class("btn-primary submit-btn", class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "submit",
            disabled: control.is_disabled(),
            style: "{control.style()}",
            "{control.label()}"
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        span {
            class: "close",
            role: "button",
            "aria-label": "Close",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}

fn join_class(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn join_class_skips_empty() {
        assert_eq!(join_class("btn", None), "btn");
        assert_eq!(join_class("btn", Some("")), "btn");
        assert_eq!(join_class("btn", Some("wide")), "btn wide");
    }
}
