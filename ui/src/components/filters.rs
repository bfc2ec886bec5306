use api::Factor;
use dioxus::prelude::*;

use crate::i18n::factor_label;
use crate::t;

/// Inline checklist of the four factors.
#[component]
pub fn FactorChecklist(selected: Vec<Factor>, on_toggle: EventHandler<Factor>) -> Element {
    rsx! {
        fieldset { class: "filters__group filters__group--factors",
            legend { class: "filters__label", {t!("filter-factors-label")} }
            div { class: "filters__checklist",
                for factor in Factor::ALL {
                    label { key: "{factor:?}", class: "filters__check",
                        input {
                            r#type: "checkbox",
                            value: factor.dataset_label(),
                            checked: selected.contains(&factor),
                            onchange: move |_| on_toggle.call(factor),
                        }
                        span { "{factor_label(factor)}" }
                    }
                }
            }
        }
    }
}

/// Multi-select of business ideas rendered as toggle chips.
#[component]
pub fn IdeaPicker(
    options: Vec<String>,
    selected: Vec<String>,
    on_toggle: EventHandler<String>,
    on_select_all: EventHandler<()>,
) -> Element {
    let all_selected = options.iter().all(|idea| selected.contains(idea));
    let selected_count = selected.len();
    let total = options.len();

    rsx! {
        fieldset { class: "filters__group filters__group--ideas",
            legend { class: "filters__label", {t!("filter-ideas-label")} }
            div { class: "filters__chips", role: "listbox", aria_multiselectable: "true",
                for idea in options.into_iter() {
                    {render_chip(idea.clone(), selected.contains(&idea), on_toggle)}
                }
            }
            div { class: "filters__meta",
                span { {t!("filter-ideas-count", selected = selected_count, total = total)} }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    disabled: all_selected,
                    onclick: move |_| on_select_all.call(()),
                    {t!("filter-select-all")}
                }
            }
        }
    }
}

fn render_chip(idea: String, active: bool, on_toggle: EventHandler<String>) -> Element {
    let value = idea.clone();
    rsx! {
        button {
            key: "{idea}",
            r#type: "button",
            role: "option",
            class: format!(
                "filters__chip {}",
                if active { "filters__chip--active" } else { "" }
            ),
            aria_selected: if active { "true" } else { "false" },
            onclick: move |_| on_toggle.call(value.clone()),
            "{idea}"
        }
    }
}
