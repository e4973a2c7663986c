use yew::prelude::*;
use yew_router::history::{AnyHistory, History, MemoryHistory};
use yew_router::prelude::*;

use crate::i18n::t;
use crate::router::{Route, switch};

/// Static heading above whichever screen the current route selects.
#[function_component(Shell)]
pub fn shell() -> Html {
    html! {
        <div class="App">
            <h1>{ t("app.heading") }</h1>
            <main id="main" role="main">
                <Switch<Route> render={switch} />
            </main>
        </div>
    }
}

/// Browser entry point: routes follow `window.location`, mounted under the configured base path.
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <Shell />
        </BrowserRouter>
    }
}

#[derive(Properties, PartialEq, Eq, Debug, Clone)]
pub struct MemoryAppProps {
    /// Path the in-memory history starts on.
    pub path: AttrValue,
    #[prop_or_default]
    pub basename: Option<AttrValue>,
}

/// The same shell on an in-memory history, for server-side rendering and tests.
#[function_component(MemoryApp)]
pub fn memory_app(props: &MemoryAppProps) -> Html {
    let history = use_memo(props.path.clone(), |path| {
        let history = AnyHistory::from(MemoryHistory::new());
        history.push(path.to_string());
        history
    });

    html! {
        <Router history={(*history).clone()} basename={props.basename.clone()}>
            <Shell />
        </Router>
    }
}
