use dioxus::prelude::*;
use tracing::error;

use crate::dashboard::DashboardPanels;
use crate::t;

#[component]
pub fn Dashboard() -> Element {
    let dataset = use_server_future(api::fetch_dataset)?;
    let loaded = dataset.read().clone();

    let body = match loaded {
        None => rsx! {
            p { class: "dashboard__status", {t!("dashboard-loading")} }
        },
        Some(Err(err)) => {
            error!("dataset unavailable: {err}");
            rsx! {
                div { class: "dashboard__error", role: "alert",
                    h2 { {t!("dashboard-error-title")} }
                    p { class: "dashboard__error-detail", "{err}" }
                    p { {t!("dashboard-error-hint")} }
                }
            }
        }
        Some(Ok(data)) => {
            let ideas = data.ideas().len();
            let records = data.records().len();
            let meta = t!("dashboard-dataset-meta", ideas = ideas, records = records);
            rsx! {
                p { class: "dashboard__meta", "{meta}" }
                DashboardPanels { dataset: data }
            }
        }
    };

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            p { class: "dashboard__intro", {t!("dashboard-intro")} }
            {body}
        }
    }
}
