use dioxus::prelude::*;

use crate::ui::theme;

/// Two-bar comparison of the original purchase price against the
/// predicted resale price.
#[component]
pub fn PriceChart(original: f64, predicted: f64) -> Element {
    let scale = original.max(predicted).max(1.0);
    let bars = [
        ("Original Price", original, "bg-slate-500"),
        ("Predicted Price", predicted, "bg-indigo-500"),
    ];

    rsx! {
        div {
            class: "{theme::panel_border()} p-4",
            h3 { class: "{theme::section_heading()}", "Price Comparison" }
            div {
                class: "mt-4 space-y-4",
                for (label, amount, color) in bars {
                    div {
                        div {
                            class: "flex items-center justify-between text-xs text-slate-400",
                            span { "{label}" }
                            span { class: "font-semibold text-slate-200", {format!("₹{amount:.2}")} }
                        }
                        div {
                            class: "mt-1 h-3 w-full rounded-full bg-slate-800",
                            div {
                                class: "h-3 rounded-full {color}",
                                style: format!("width: {:.1}%", (amount / scale * 100.0).clamp(0.0, 100.0)),
                            }
                        }
                    }
                }
            }
        }
    }
}
