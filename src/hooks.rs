use pf_ratio::config::ApiConfig;
use pf_ratio::{load, AppAction, AppState, HttpSource};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

/// Yew-facing wrapper so [`AppState::reduce`] can drive `use_reducer`.
#[derive(Default, PartialEq)]
pub struct Store(AppState);

impl Deref for Store {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.0
    }
}

impl Reducible for Store {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        Rc::new(Store(self.0.reduce(action)))
    }
}

/// Fetch the reference tables once on mount.
///
/// Returns a callback that fetches them again. A load that finishes after
/// the component is gone dispatches into nothing.
#[hook]
pub fn use_reference_loader(dispatcher: UseReducerDispatcher<Store>) -> Callback<()> {
    let reload = Callback::from(move |_: ()| {
        let dispatcher = dispatcher.clone();
        dispatcher.dispatch(AppAction::LoadStarted);
        wasm_bindgen_futures::spawn_local(async move {
            let source = HttpSource::new(ApiConfig::default());
            let result = load(&source).await;
            dispatcher.dispatch(AppAction::LoadFinished(result));
        });
    });

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    reload
}
