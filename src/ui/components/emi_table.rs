use dioxus::prelude::*;

use crate::domain::InstallmentPlan;
use crate::ui::theme;

/// {term, monthly payment} table for the financing breakdown.
#[component]
pub fn EmiTable(plans: Vec<InstallmentPlan>, annual_rate_pct: f64) -> Element {
    let is_empty = plans.is_empty();
    rsx! {
        div {
            class: "{theme::table_container()}",
            header {
                class: "flex flex-wrap items-center justify-between gap-2 border-b border-slate-800 px-4 py-3",
                h3 { class: "text-sm font-semibold text-slate-200", "EMI Plans" }
                span { class: "text-xs {theme::text_muted()}", {format!("{annual_rate_pct:.1}% annual rate")} }
            }
            if is_empty {
                p { class: "px-4 py-6 text-sm {theme::text_muted()}", "No installment plans to show." }
            } else {
                table {
                    class: "min-w-full {theme::table_divider()} text-sm",
                    thead {
                        class: "{theme::table_header()} text-left tracking-wide",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Term" }
                            th { class: "px-4 py-3 font-medium text-right", "Monthly Payment" }
                        }
                    }
                    tbody {
                        class: "{theme::table_divider()}",
                        for plan in plans {
                            tr {
                                class: "hover:bg-slate-800/40",
                                td { class: "px-4 py-3 font-medium {theme::text_secondary()}", {format!("{} months", plan.months)} }
                                td { class: "px-4 py-3 text-right text-slate-300", {format!("₹{:.2}/month", plan.monthly_payment)} }
                            }
                        }
                    }
                }
            }
        }
    }
}
