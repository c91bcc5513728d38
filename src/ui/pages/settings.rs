use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{AppState, FinancingParams},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
    util::{persistence, version},
};

#[component]
pub fn SettingsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let initial = state.with(|st| st.financing);
    let mut rate_input = use_signal(|| format!("{:.1}", initial.annual_rate_pct));

    let on_apply = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| match parse_financing(rate_input()) {
            Ok(params) => {
                state.with_mut(|st| st.financing = params);
                persist_user_state(&state);
                push_toast(
                    toasts.clone(),
                    ToastKind::Success,
                    "Updated financing parameters.",
                );
            }
            Err(message) => {
                push_toast(toasts.clone(), ToastKind::Error, message);
            }
        }
    };

    let on_reset = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let defaults = FinancingParams::default();
            rate_input.set(format!("{:.1}", defaults.annual_rate_pct));
            state.with_mut(|st| st.financing = defaults);
            persist_user_state(&state);
            push_toast(
                toasts.clone(),
                ToastKind::Info,
                "Restored the default financing rate.",
            );
        }
    };

    let on_clear_saved = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| match persistence::clear_persisted_state() {
            Ok(()) => {
                state.with_mut(|st| {
                    st.financing = FinancingParams::default();
                    st.broker = Default::default();
                });
                rate_input.set(format!("{:.1}", FinancingParams::default().annual_rate_pct));
                push_toast(
                    toasts.clone(),
                    ToastKind::Info,
                    "Removed saved preferences from disk.",
                );
            }
            Err(err) => {
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Failed to clear saved state: {err}"),
                );
            }
        }
    };

    let version_label = version::version_label();

    rsx! {
        div { class: "space-y-8",
            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "{theme::section_heading()}", "Financing" }
                p { class: "mt-2 text-sm text-slate-400",
                    "Annual interest rate used for the EMI breakdown. Zero is allowed and amortizes interest-free."
                }
                div { class: "mt-4 sm:w-64",
                    label { class: "{theme::label_class()}", "Annual rate % (0-36)" }
                    input {
                        class: "{theme::input_class()}",
                        value: rate_input(),
                        oninput: move |evt| rate_input.set(evt.value().to_string()),
                    }
                }
                div { class: "mt-4 flex gap-3",
                    button { class: "{theme::btn_primary()}", onclick: on_apply, "Apply" }
                    button { class: "{theme::btn_secondary()}", onclick: on_reset, "Reset Default" }
                }
            }

            section {
                class: "{theme::panel_border()} p-6",
                h2 { class: "{theme::section_heading()}", "Saved Preferences" }
                p { class: "mt-2 text-sm text-slate-400",
                    "The financing rate and broker card are stored as JSON in the platform config directory. Quotes are never saved."
                }
                button {
                    class: "mt-4 rounded-lg border border-amber-500/40 px-4 py-2 text-xs font-semibold uppercase tracking-wide text-amber-200 hover:bg-amber-500/10",
                    onclick: on_clear_saved,
                    "Clear Saved State"
                }
            }

            section {
                class: "flex flex-col items-center gap-2 {theme::panel_border()} p-6 text-center text-slate-400",
                h2 { class: "{theme::section_heading()}", "About" }
                p { class: "text-sm", "{version::APP_NAME} {version_label}" }
                p { class: "text-xs {theme::text_muted()}",
                    "Estimates come from a fixed heuristic formula, not market data. Treat them as a starting point for negotiation."
                }
            }
        }
    }
}

fn parse_financing(rate: String) -> Result<FinancingParams, String> {
    let annual_rate_pct: f64 = rate
        .trim()
        .parse()
        .map_err(|_| "Annual rate must be a number between 0 and 36")?;
    if !(0.0..=36.0).contains(&annual_rate_pct) {
        return Err("Annual rate must be between 0 and 36%".to_string());
    }

    Ok(FinancingParams { annual_rate_pct })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_bounds_the_rate() {
        assert_eq!(
            parse_financing("10.0".to_string()),
            Ok(FinancingParams {
                annual_rate_pct: 10.0
            })
        );
        assert!(parse_financing("0".to_string()).is_ok());
        assert!(parse_financing("36".to_string()).is_ok());
        assert!(parse_financing("-1".to_string()).is_err());
        assert!(parse_financing("37".to_string()).is_err());
        assert!(parse_financing("ten".to_string()).is_err());
    }
}
