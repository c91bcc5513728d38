use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    infra::dataset,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{DataPage, EstimatorPage, SettingsPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/estimator")]
    Estimator {},
    #[route("/data")]
    Data {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    let toasts = use_signal(Vec::<ToastMessage>::new);

    // One-time startup work: restore saved preferences, then load the
    // embedded dataset the choice lists are built from. Both finish
    // before the first Predict can run.
    use_hook({
        let mut state = state.clone();
        let toasts = toasts.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
            match dataset::load_embedded_catalog() {
                Ok(catalog) => {
                    println!("Loaded bike catalog with {} listings.", catalog.len());
                    state.with_mut(|st| st.catalog = catalog);
                }
                Err(err) => {
                    println!("Failed to load bundled bike dataset: {err}");
                    push_toast(
                        toasts.clone(),
                        ToastKind::Error,
                        format!("Failed to load bike dataset: {err}"),
                    );
                }
            }
        }
    });
    use_context_provider(|| state.clone());
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

pub fn persist_user_state(state: &Signal<AppState>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        println!("Failed to persist user state: {err}");
    }
}

#[component]
pub fn Estimator() -> Element {
    rsx! { Shell { EstimatorPage {} } }
}

#[component]
pub fn Data() -> Element {
    rsx! { Shell { DataPage {} } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Shell { SettingsPage {} } }
}
