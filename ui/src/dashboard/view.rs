use std::sync::Arc;

use api::{Dataset, Factor};
use dioxus::prelude::*;

use super::controller::{DashboardController, FilterEvent};
use crate::charts::{BarChartPanel, ChartSet, RadarChartPanel, RadarOptions};
use crate::components::{FactorChecklist, IdeaPicker};
use crate::core::filters::FilterState;
use crate::i18n;
use crate::t;

/// Filters plus the three linked charts for one loaded dataset.
#[component]
pub fn DashboardPanels(dataset: Dataset) -> Element {
    let labels = use_hook(i18n::chart_labels);

    // Seeded with the same "all selected" build the controller starts from;
    // every later rebuild arrives through the subscription.
    let charts = use_signal({
        let dataset = dataset.clone();
        let labels = labels.clone();
        move || {
            let filters = FilterState::all_selected(&dataset);
            ChartSet::build(&dataset, &filters, &labels, &RadarOptions::default())
        }
    });

    let mut controller = use_signal(move || {
        let mut ctl = DashboardController::with_options(
            Arc::new(dataset.clone()),
            labels.clone(),
            RadarOptions::default(),
        );
        ctl.subscribe(move |set| {
            let mut charts = charts;
            charts.set(set.clone());
        });
        ctl
    });

    let (selected_factors, selected_ideas, idea_options) = {
        let ctl = controller.read();
        (
            ctl.filters().factors().to_vec(),
            ctl.filters().ideas().to_vec(),
            ctl.dataset().ideas().to_vec(),
        )
    };
    let all_ideas = idea_options.clone();
    let set = charts();
    let empty_label = t!("chart-empty");

    rsx! {
        div { class: "dashboard",
            aside { class: "dashboard__filters filters",
                FactorChecklist {
                    selected: selected_factors,
                    on_toggle: move |factor: Factor| {
                        controller.write().handle(FilterEvent::ToggleFactor(factor));
                    },
                }
                IdeaPicker {
                    options: idea_options,
                    selected: selected_ideas,
                    on_toggle: move |idea: String| {
                        controller.write().handle(FilterEvent::ToggleIdea(idea));
                    },
                    on_select_all: move |_| {
                        controller.write().handle(FilterEvent::SetIdeas(all_ideas.clone()));
                    },
                }
                button {
                    r#type: "button",
                    class: "button button--primary filters__reset",
                    onclick: move |_| {
                        controller.write().handle(FilterEvent::Reset);
                    },
                    {t!("filter-reset")}
                }
            }

            div { class: "dashboard__charts",
                BarChartPanel { chart: set.stacked, empty_label: empty_label.clone() }
                RadarChartPanel { chart: set.radar, empty_label: empty_label.clone() }
                div { class: "dashboard__ranked",
                    BarChartPanel { chart: set.ranked, empty_label }
                    p { class: "dashboard__note", {t!("chart-ranked-note")} }
                }
            }
        }
    }
}
