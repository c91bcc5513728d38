use dioxus::prelude::*;

use crate::ui::theme;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "{theme::panel_border()} p-4 shadow-sm",
            h3 { class: "{theme::label_class()}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {theme::text_secondary()}", "{value}" }
            if let Some(desc) = description {
                p { class: "mt-1 text-xs {theme::text_muted()}", "{desc}" }
            }
        }
    }
}
