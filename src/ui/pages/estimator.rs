use dioxus::prelude::*;

use crate::{
    app::persist_user_state,
    domain::{
        installment_plans, quote, AppState, BikeListing, OwnerTier, PriceEstimate,
        TransactionContext, STANDARD_TERMS,
    },
    ui::{
        components::{
            deal_badge::DealBadge,
            emi_table::EmiTable,
            kpi_card::KpiCard,
            price_chart::PriceChart,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
};

/// Result of one Predict press, kept only for rendering.
#[derive(Clone, PartialEq)]
struct QuoteView {
    listing: BikeListing,
    ctx: TransactionContext,
    estimate: PriceEstimate,
}

#[component]
pub fn EstimatorPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let brands = state.with(|st| st.catalog.brands());
    let cities = state.with(|st| st.catalog.cities());
    let owner_types = state.with(|st| st.catalog.owner_types());
    let financing = state.with(|st| st.financing);
    let saved_broker = state.with(|st| st.broker.clone());

    let mut brand = use_signal(|| brands.first().cloned().unwrap_or_default());
    let mut model = use_signal(String::new);
    let mut city = use_signal(|| cities.first().cloned().unwrap_or_default());
    let mut owner = use_signal(|| owner_types.first().cloned().unwrap_or_default());
    let mut kms_input = use_signal(|| "10000".to_string());
    let mut age_input = use_signal(|| "3".to_string());
    let mut power_input = use_signal(|| "150".to_string());
    let mut price_input = use_signal(|| "40000".to_string());
    let mut brokerage_input = use_signal(|| "5".to_string());

    let mut quote_view = use_signal(|| None::<QuoteView>);
    let show_emi = use_signal(|| false);

    let mut broker_name = use_signal(|| saved_broker.name.clone());
    let mut broker_phone = use_signal(|| saved_broker.phone.clone());

    let models = state.with(|st| st.catalog.models_for(&brand()));
    // Switching brand clears the model; fall back to the first model of
    // the new brand instead of submitting an empty value.
    let selected_model = if models.contains(&model()) {
        model()
    } else {
        models.first().cloned().unwrap_or_default()
    };

    let on_submit = {
        let toasts = toasts.clone();
        let mut quote_view = quote_view.clone();
        let selected_model = selected_model.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            let purchase_price = match price_input().trim().parse::<f64>() {
                Ok(value) => value,
                Err(_) => {
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        "Purchase price must be numeric.",
                    );
                    return;
                }
            };
            // The estimator contract assumes a positive purchase price;
            // this gate keeps non-positive values from ever reaching it.
            if purchase_price <= 0.0 {
                push_toast(
                    toasts.clone(),
                    ToastKind::Warning,
                    "Please enter a valid purchase price.",
                );
                return;
            }

            let parsed = parse_listing(
                brand(),
                selected_model.clone(),
                city(),
                owner(),
                kms_input(),
                age_input(),
                power_input(),
                brokerage_input(),
                purchase_price,
            );

            match parsed {
                Ok((listing, ctx)) => {
                    let estimate = quote(&listing, &ctx);
                    quote_view.set(Some(QuoteView {
                        listing,
                        ctx,
                        estimate,
                    }));
                }
                Err(message) => {
                    push_toast(toasts.clone(), ToastKind::Error, message);
                }
            }
        }
    };

    let on_save_broker = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            state.with_mut(|st| {
                st.broker.name = broker_name().trim().to_string();
                st.broker.phone = broker_phone().trim().to_string();
            });
            persist_user_state(&state);
            push_toast(toasts.clone(), ToastKind::Success, "Saved broker details.");
        }
    };

    let current = quote_view();
    let emi_plans = current
        .as_ref()
        .filter(|_| show_emi())
        .and_then(|view| {
            installment_plans(
                view.estimate.predicted_price,
                &STANDARD_TERMS,
                financing.annual_rate_pct,
            )
            .ok()
        })
        .unwrap_or_default();
    let broker_card = crate::domain::BrokerContact {
        name: broker_name(),
        phone: broker_phone(),
    };
    let broker_card_complete = broker_card.is_complete();

    rsx! {
        div { class: "space-y-8",
            section {
                class: "grid gap-6 lg:grid-cols-3",
                form {
                    class: "space-y-4 lg:col-span-1 {theme::panel_border()} px-4 py-4",
                    onsubmit: on_submit,
                    h2 { class: "{theme::section_heading()}", "Bike Details" }
                    div {
                        label { class: "{theme::label_class()}", "Brand" }
                        select {
                            class: "{theme::input_class()}",
                            value: brand(),
                            onchange: move |evt| {
                                brand.set(evt.value().to_string());
                                model.set(String::new());
                            },
                            for entry in brands.iter() {
                                option { value: entry.clone(), "{entry}" }
                            }
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Model" }
                        select {
                            class: "{theme::input_class()}",
                            value: selected_model.clone(),
                            onchange: move |evt| model.set(evt.value().to_string()),
                            for entry in models.iter() {
                                option { value: entry.clone(), "{entry}" }
                            }
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "City" }
                        select {
                            class: "{theme::input_class()}",
                            value: city(),
                            onchange: move |evt| city.set(evt.value().to_string()),
                            for entry in cities.iter() {
                                option { value: entry.clone(), "{entry}" }
                            }
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Owner Type" }
                        select {
                            class: "{theme::input_class()}",
                            value: owner(),
                            onchange: move |evt| owner.set(evt.value().to_string()),
                            for entry in owner_types.iter() {
                                option { value: entry.clone(), "{entry}" }
                            }
                        }
                    }
                    div { class: "grid gap-4 sm:grid-cols-2",
                        div {
                            label { class: "{theme::label_class()}", "Kilometers Driven" }
                            input {
                                class: "{theme::input_class()}",
                                r#type: "number",
                                min: "0",
                                step: "500",
                                value: kms_input(),
                                oninput: move |evt| kms_input.set(evt.value().to_string()),
                            }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Age (years, 0-20)" }
                            input {
                                class: "{theme::input_class()}",
                                r#type: "number",
                                min: "0",
                                max: "20",
                                value: age_input(),
                                oninput: move |evt| age_input.set(evt.value().to_string()),
                            }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Power (cc, 50-1500)" }
                            input {
                                class: "{theme::input_class()}",
                                r#type: "number",
                                min: "50",
                                max: "1500",
                                value: power_input(),
                                oninput: move |evt| power_input.set(evt.value().to_string()),
                            }
                        }
                        div {
                            label { class: "{theme::label_class()}", "Purchase Price (₹)" }
                            input {
                                class: "{theme::input_class()}",
                                r#type: "number",
                                min: "1000",
                                step: "500",
                                value: price_input(),
                                oninput: move |evt| price_input.set(evt.value().to_string()),
                            }
                        }
                    }
                    div {
                        label { class: "{theme::label_class()}", "Brokerage (%, 0-20)" }
                        input {
                            class: "{theme::input_class()}",
                            r#type: "number",
                            min: "0",
                            max: "20",
                            value: brokerage_input(),
                            oninput: move |evt| brokerage_input.set(evt.value().to_string()),
                        }
                    }
                    button {
                        class: "{theme::btn_primary()} w-full",
                        r#type: "submit",
                        "🔍 Predict Price"
                    }
                }

                div {
                    class: "space-y-6 lg:col-span-2",
                    if let Some(view) = current {
                        SummaryPanel { listing: view.listing.clone() }
                        section {
                            class: "grid gap-4 sm:grid-cols-3",
                            KpiCard {
                                title: "Predicted Resale Price".to_string(),
                                value: format!("₹{:.2}", view.estimate.predicted_price),
                                description: Some("Floored at ₹5000".to_string()),
                            }
                            KpiCard {
                                title: "Buyer's Profit".to_string(),
                                value: format!("₹{:.2}", view.estimate.buyer_profit),
                                description: Some("Predicted minus purchase".to_string()),
                            }
                            KpiCard {
                                title: "Broker's Profit".to_string(),
                                value: format!("₹{:.2}", view.estimate.broker_profit),
                                description: Some(format!("{:.0}% of predicted", view.ctx.brokerage_pct)),
                            }
                        }
                        DealBadge {
                            deal: view.estimate.deal,
                            buyer_profit: view.estimate.buyer_profit,
                        }
                        PriceChart {
                            original: view.ctx.purchase_price,
                            predicted: view.estimate.predicted_price,
                        }
                        section {
                            class: "space-y-3",
                            label {
                                class: "flex items-center gap-2 text-sm text-slate-300",
                                input {
                                    r#type: "checkbox",
                                    class: "h-4 w-4 accent-indigo-500",
                                    checked: show_emi(),
                                    onclick: {
                                        let mut show_emi = show_emi.clone();
                                        move |_| {
                                            let shown = show_emi();
                                            show_emi.set(!shown);
                                        }
                                    },
                                }
                                "💳 Show EMI Options"
                            }
                            if show_emi() {
                                EmiTable {
                                    plans: emi_plans.clone(),
                                    annual_rate_pct: financing.annual_rate_pct,
                                }
                            }
                        }
                        section {
                            class: "{theme::panel_border()} p-4 space-y-3",
                            h3 { class: "{theme::section_heading()}", "Broker Info" }
                            div { class: "grid gap-4 sm:grid-cols-2",
                                div {
                                    label { class: "{theme::label_class()}", "Broker Name" }
                                    input {
                                        class: "{theme::input_class()}",
                                        value: broker_name(),
                                        oninput: move |evt| broker_name.set(evt.value().to_string()),
                                    }
                                }
                                div {
                                    label { class: "{theme::label_class()}", "Broker Contact Number" }
                                    input {
                                        class: "{theme::input_class()}",
                                        value: broker_phone(),
                                        oninput: move |evt| broker_phone.set(evt.value().to_string()),
                                    }
                                }
                            }
                            if broker_card_complete {
                                p {
                                    class: "rounded-lg border border-emerald-500/40 bg-emerald-500/10 px-3 py-2 text-sm text-emerald-200",
                                    {format!(
                                        "📞 {} | 📱 {} | 💼 Earns ₹{:.2}",
                                        broker_name().trim(),
                                        broker_phone().trim(),
                                        view.estimate.broker_profit
                                    )}
                                }
                            }
                            button {
                                class: "{theme::btn_secondary()}",
                                onclick: on_save_broker,
                                "Save Broker"
                            }
                        }
                    } else {
                        div {
                            class: "{theme::panel_border()} p-10 text-center text-sm {theme::text_muted()}",
                            "Fill in the bike details and press Predict to get a resale quote."
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryPanel(listing: BikeListing) -> Element {
    let owner_display = OwnerTier::parse(&listing.owner).name();
    let rows = [
        ("Brand", listing.brand.clone()),
        ("Model", listing.model.clone()),
        ("City", listing.city.clone()),
        ("Owner", owner_display.to_string()),
        ("KMs Driven", format!("{:.0} km", listing.kms_driven)),
        ("Age", format!("{} years", listing.age_years)),
        ("Power", format!("{:.0} cc", listing.power_cc)),
    ];

    rsx! {
        section {
            class: "{theme::panel_border()} p-4",
            h3 { class: "{theme::section_heading()}", "Bike Summary" }
            dl {
                class: "mt-3 grid gap-x-6 gap-y-2 text-sm sm:grid-cols-2",
                for (label, value) in rows {
                    div { class: "flex justify-between gap-4",
                        dt { class: "{theme::text_muted()}", "{label}" }
                        dd { class: "font-medium {theme::text_secondary()}", "{value}" }
                    }
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn parse_listing(
    brand: String,
    model: String,
    city: String,
    owner: String,
    kms: String,
    age: String,
    power: String,
    brokerage: String,
    purchase_price: f64,
) -> Result<(BikeListing, TransactionContext), String> {
    let kms_driven: f64 = kms
        .trim()
        .parse()
        .map_err(|_| "Kilometers driven must be numeric")?;
    if kms_driven < 0.0 {
        return Err("Kilometers driven cannot be negative".to_string());
    }

    let age_years: u32 = age.trim().parse().map_err(|_| "Age must be a whole number")?;
    if age_years > 20 {
        return Err("Age must be between 0 and 20 years".to_string());
    }

    let power_cc: f64 = power.trim().parse().map_err(|_| "Power must be numeric")?;
    if !(50.0..=1500.0).contains(&power_cc) {
        return Err("Power must be between 50 and 1500 cc".to_string());
    }

    let brokerage_pct: f64 = brokerage
        .trim()
        .parse()
        .map_err(|_| "Brokerage must be numeric")?;
    if !(0.0..=20.0).contains(&brokerage_pct) {
        return Err("Brokerage must be between 0 and 20%".to_string());
    }

    Ok((
        BikeListing {
            brand,
            model,
            city,
            owner,
            kms_driven,
            age_years,
            power_cc,
        },
        TransactionContext {
            purchase_price,
            brokerage_pct,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(kms: &str, age: &str, power: &str, brokerage: &str) -> Result<(), String> {
        parse_listing(
            "Bajaj".to_string(),
            "Pulsar 150".to_string(),
            "Pune".to_string(),
            "First".to_string(),
            kms.to_string(),
            age.to_string(),
            power.to_string(),
            brokerage.to_string(),
            40_000.0,
        )
        .map(|_| ())
    }

    #[test]
    fn accepts_in_range_inputs() {
        assert!(parse("10000", "3", "150", "5").is_ok());
        assert!(parse("0", "0", "50", "0").is_ok());
        assert!(parse("250000", "20", "1500", "20").is_ok());
    }

    #[test]
    fn rejects_out_of_range_inputs() {
        assert!(parse("-1", "3", "150", "5").is_err());
        assert!(parse("10000", "21", "150", "5").is_err());
        assert!(parse("10000", "3", "49", "5").is_err());
        assert!(parse("10000", "3", "1501", "5").is_err());
        assert!(parse("10000", "3", "150", "21").is_err());
        assert!(parse("abc", "3", "150", "5").is_err());
    }
}
