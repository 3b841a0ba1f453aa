//! Pure Yew view components for the P/F ratio screen.
//!
//! None of these hold state; they render props and report input through
//! callbacks.

use pf_ratio::config::{CALCULATE_LABEL, RELOAD_LABEL};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// One "label | key input | looked-up value" row.
#[derive(Properties, PartialEq)]
pub struct LookupRowProps {
    pub label: AttrValue,
    pub id: AttrValue,
    pub key_text: AttrValue,
    pub value_text: AttrValue,
    pub oninput: Callback<String>,
}

#[function_component(LookupRow)]
pub fn lookup_row(props: &LookupRowProps) -> Html {
    let oninput = props.oninput.reform(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.value()
    });

    html! {
        <div class="row">
            <label class="col col-text" for={props.id.clone()}>{ props.label.clone() }</label>
            <input
                id={props.id.clone()}
                class="col col-input"
                type="text"
                inputmode="numeric"
                value={props.key_text.clone()}
                {oninput}
            />
            <input
                class="col col-input"
                type="text"
                value={props.value_text.clone()}
                readonly=true
            />
        </div>
    }
}

/// The "Calculate" button and the read-only result next to it.
#[derive(Properties, PartialEq)]
pub struct CalculateRowProps {
    pub enabled: bool,
    pub result: AttrValue,
    pub onclick: Callback<()>,
}

#[function_component(CalculateRow)]
pub fn calculate_row(props: &CalculateRowProps) -> Html {
    html! {
        <div class="row">
            <button
                class="col col-wide btn-calculate"
                disabled={!props.enabled}
                onclick={props.onclick.reform(|_: MouseEvent| ())}
            >
                { CALCULATE_LABEL }
            </button>
            <input
                class="col col-input"
                type="text"
                value={props.result.clone()}
                readonly=true
            />
        </div>
    }
}

/// Inline message slot under the title. Offers a reload when `on_reload`
/// is set.
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub on_reload: Option<Callback<()>>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    html! {
        <div class="error">
            if let Some(message) = &props.message {
                <span class="error-text">{ message.clone() }</span>
            }
            if let Some(on_reload) = &props.on_reload {
                <button class="btn-secondary small" onclick={on_reload.reform(|_: MouseEvent| ())}>
                    { RELOAD_LABEL }
                </button>
            }
        </div>
    }
}

#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="spinner" role="status" aria-label="Loading"></div>
    }
}
