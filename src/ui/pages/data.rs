use dioxus::prelude::*;

use crate::{domain::AppState, ui::theme};

const SAMPLE_ROWS: usize = 8;

/// Preview of the bundled reference dataset that feeds the choice lists.
#[component]
pub fn DataPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let total = state.with(|st| st.catalog.len());
    let rows = state.with(|st| st.catalog.sample(SAMPLE_ROWS).to_vec());
    let brand_count = state.with(|st| st.catalog.brands().len());
    let city_count = state.with(|st| st.catalog.cities().len());
    let is_empty = rows.is_empty();

    rsx! {
        div { class: "space-y-6",
            section {
                class: "{theme::panel_border()} p-4",
                h2 { class: "{theme::section_heading()}", "Reference Dataset" }
                p { class: "mt-2 text-sm text-slate-400",
                    {format!("{total} listings across {brand_count} brands and {city_count} cities. Loaded once at startup; used only to populate the estimator's choice lists.")}
                }
            }
            div {
                class: "{theme::table_container()}",
                header {
                    class: "flex items-center justify-between border-b border-slate-800 px-4 py-3",
                    h3 { class: "text-sm font-semibold text-slate-200", "Sample Bike Data" }
                    span { class: "text-xs {theme::text_muted()}", {format!("first {} rows", rows.len())} }
                }
                if is_empty {
                    p { class: "px-4 py-6 text-sm {theme::text_muted()}", "Dataset failed to load; no rows to show." }
                } else {
                    table {
                        class: "min-w-full {theme::table_divider()} text-sm",
                        thead {
                            class: "{theme::table_header()} text-left tracking-wide",
                            tr {
                                th { class: "px-4 py-3 font-medium", "Brand" }
                                th { class: "px-4 py-3 font-medium", "Model" }
                                th { class: "px-4 py-3 font-medium", "City" }
                                th { class: "px-4 py-3 font-medium", "Owner" }
                                th { class: "px-4 py-3 font-medium text-right", "KMs" }
                                th { class: "px-4 py-3 font-medium text-right", "Age" }
                                th { class: "px-4 py-3 font-medium text-right", "Power (cc)" }
                                th { class: "px-4 py-3 font-medium text-right", "Price (₹)" }
                            }
                        }
                        tbody {
                            class: "{theme::table_divider()}",
                            for row in rows {
                                tr {
                                    class: "hover:bg-slate-800/40",
                                    td { class: "px-4 py-3 font-medium {theme::text_secondary()}", "{row.brand}" }
                                    td { class: "px-4 py-3 text-slate-300", "{row.bike_name}" }
                                    td { class: "px-4 py-3 text-slate-300", "{row.city}" }
                                    td { class: "px-4 py-3 text-slate-300", "{row.owner}" }
                                    td { class: "px-4 py-3 text-right text-slate-300", {format!("{:.0}", row.kms_driven)} }
                                    td { class: "px-4 py-3 text-right text-slate-300", "{row.age}" }
                                    td { class: "px-4 py-3 text-right text-slate-300", {format!("{:.0}", row.power)} }
                                    td { class: "px-4 py-3 text-right text-slate-300", {format!("{:.0}", row.price)} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
