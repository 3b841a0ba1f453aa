//! Main module for the P/F ratio calculator using Yew.
//! Wires the reducer store, the reference-table loader and the view.

use pf_ratio::config::{APP_TITLE, FOOTER_TEXT, O2_FLOW_LABEL, SPO2_LABEL};
use pf_ratio::{logging, AppAction, Slot};
use yew::prelude::*;

mod components;
mod hooks;

use components::{CalculateRow, ErrorBanner, LookupRow, Spinner};
use hooks::{use_reference_loader, Store};

/// Primary application component: the whole calculator screen.
#[function_component(Main)]
fn main_component() -> Html {
    let store = use_reducer(Store::default);
    let reload = use_reference_loader(store.dispatcher());

    let on_edit = |slot: Slot| {
        let dispatcher = store.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(AppAction::Edit(slot, value)))
    };

    let on_calculate = {
        let dispatcher = store.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(AppAction::Calculate))
    };

    if store.loading {
        return html! {
            <div class="content loading">
                <Spinner />
            </div>
        };
    }

    let form = &store.form;
    let on_reload = store.needs_reload().then(|| reload.clone());

    html! {
        <div class="content">
            <div>
                <h1 class="title">{ APP_TITLE }</h1>
                <ErrorBanner
                    message={store.error.clone().map(AttrValue::from)}
                    {on_reload}
                />
            </div>
            <div class="grid">
                <LookupRow
                    label={SPO2_LABEL}
                    id={Slot::SpO2Key.id()}
                    key_text={form.get(Slot::SpO2Key).to_string()}
                    value_text={form.get(Slot::SpO2Value).to_string()}
                    oninput={on_edit(Slot::SpO2Key)}
                />
                <LookupRow
                    label={O2_FLOW_LABEL}
                    id={Slot::FlowKey.id()}
                    key_text={form.get(Slot::FlowKey).to_string()}
                    value_text={form.get(Slot::FlowValue).to_string()}
                    oninput={on_edit(Slot::FlowKey)}
                />
                <CalculateRow
                    enabled={form.can_calculate()}
                    result={form.get(Slot::Ratio).to_string()}
                    onclick={on_calculate}
                />
            </div>
            <div class="footer">
                <p class="footer-text">{ FOOTER_TEXT }</p>
            </div>
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <div class="container">
            <Main />
        </div>
    }
}

/// Entry point: installs logging and renders the App component.
fn main() {
    logging::init();
    yew::Renderer::<App>::new().render();
}
