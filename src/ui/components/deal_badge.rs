use dioxus::prelude::*;

use crate::domain::DealStatus;

/// Styled verdict block for a quote: the deal label plus the profit that
/// produced it.
#[component]
pub fn DealBadge(deal: DealStatus, buyer_profit: f64) -> Element {
    let theme = match deal {
        DealStatus::Excellent => "border-emerald-500/40 bg-emerald-500/10 text-emerald-200",
        DealStatus::Fair => "border-amber-500/40 bg-amber-500/10 text-amber-200",
        DealStatus::Overpriced => "border-rose-500/40 bg-rose-500/10 text-rose-200",
    };
    let label = deal.label();
    let rationale = if buyer_profit >= 0.0 {
        format!("Buyer gains ₹{buyer_profit:.0} over the purchase price")
    } else {
        format!("Buyer loses ₹{:.0} against the purchase price", -buyer_profit)
    };

    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {theme}",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "Deal Analysis" }
            }
            p { class: "mt-2 text-2xl font-semibold", "{label}" }
            p { class: "mt-1 text-xs opacity-80", "{rationale}" }
        }
    }
}
