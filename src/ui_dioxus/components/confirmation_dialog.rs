use dioxus::prelude::*;

#[component]
pub fn ConfirmationDialog(
    title: String,
    message: String,
    confirm_text: String,
    cancel_text: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
    danger: bool,
) -> Element {
    let confirm_color = if danger { "#dc2626" } else { "#3b82f6" };

    rsx! {
        // Modal backdrop
        div {
            class: "modal-backdrop",
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0;
                   background: rgba(0, 0, 0, 0.5); z-index: 1000;
                   display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_cancel.call(()),

            // Modal content
            div {
                class: "modal-content",
                role: "dialog",
                style: "background: white; border-radius: 12px; padding: 24px;
                       width: 90%; max-width: 400px;
                       box-shadow: 0 10px 40px rgba(0, 0, 0, 0.2);",
                onclick: move |e| e.stop_propagation(),

                h3 {
                    class: "modal-title",
                    style: "margin: 0 0 12px 0; font-size: 20px; font-weight: 600;",
                    i {
                        class: "fas fa-exclamation-triangle",
                        style: "color: #e6e600; margin-right: 8px;",
                    }
                    "{title}"
                }

                p {
                    class: "modal-body",
                    style: "margin: 0 0 24px 0; color: #666; line-height: 1.5;",
                    "{message}"
                }

                div {
                    class: "modal-footer",
                    style: "display: flex; justify-content: flex-end; gap: 10px;",

                    button {
                        class: "btn-confirm",
                        style: format!("padding: 8px 20px; border: none;
                               background: {}; color: white; border-radius: 4px;
                               cursor: pointer; font-size: 14px;", confirm_color),
                        onclick: move |_| on_confirm.call(()),
                        "{confirm_text}"
                    }

                    button {
                        class: "btn-cancel",
                        style: "padding: 8px 20px; border: 1px solid #ddd;
                               background: white; color: #333; border-radius: 4px;
                               cursor: pointer; font-size: 14px;",
                        onclick: move |_| on_cancel.call(()),
                        "{cancel_text}"
                    }
                }
            }
        }
    }
}
