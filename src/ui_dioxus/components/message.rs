use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageVariant {
    Danger,
    Info,
    Success,
}

impl MessageVariant {
    fn class(&self) -> &'static str {
        match self {
            MessageVariant::Danger => "alert alert-danger",
            MessageVariant::Info => "alert alert-info",
            MessageVariant::Success => "alert alert-success",
        }
    }
}

/// Inline alert box.
#[component]
pub fn Message(variant: MessageVariant, children: Element) -> Element {
    rsx! {
        div { class: variant.class(), role: "alert", {children} }
    }
}
