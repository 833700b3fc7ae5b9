use dioxus::prelude::*;

#[component]
pub fn Loader(label: String) -> Element {
    rsx! {
        div { class: "loader", style: "display: flex;",
            h5 { "{label}" }
            span { class: "ml-2",
                span { class: "spinner-border", role: "status" }
            }
        }
    }
}
