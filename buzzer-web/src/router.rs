use std::collections::HashMap;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::admin::AdminPage;
use crate::pages::code_entry::CodeEntryPage;
use crate::pages::game::GamePage;
use crate::pages::not_found::NotFound;

/// Client route table. Static `/create` takes precedence over the `/:code` capture.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    CodeEntry,
    #[at("/create")]
    Admin,
    #[at("/:code")]
    Game { code: String },
    #[at("/_/not-found")]
    #[not_found]
    NotFound,
}

/// Top-level screen bound to a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    CodeEntry,
    Game,
    Admin,
    NotFound,
}

impl Screen {
    /// Value of the `data-screen` attribute on the screen's root element.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::CodeEntry => "code-entry",
            Self::Game => "game",
            Self::Admin => "admin",
            Self::NotFound => "not-found",
        }
    }
}

impl Route {
    /// Resolve a pathname to exactly one route; anything unmatched is `NotFound`.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        match self {
            Self::CodeEntry => Screen::CodeEntry,
            Self::Admin => Screen::Admin,
            Self::Game { .. } => Screen::Game,
            Self::NotFound => Screen::NotFound,
        }
    }
}

/// A location pushed verbatim, e.g. `/a/b` from the code entry form.
///
/// The URL keeps the raw path; `Switch` resolves it to a [`Route`] afterwards,
/// so unmatched paths render the not-found screen without rewriting the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPath(String);

impl RawPath {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Route that `Switch` will render once this path is the current location.
    #[must_use]
    pub fn route(&self) -> Route {
        Route::resolve(&self.0)
    }
}

impl From<String> for RawPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl Routable for RawPath {
    fn from_path(path: &str, _params: &HashMap<&str, &str>) -> Option<Self> {
        Some(Self(path.to_string()))
    }

    fn to_path(&self) -> String {
        self.0.clone()
    }

    fn routes() -> Vec<&'static str> {
        Vec::new()
    }

    fn not_found_route() -> Option<Self> {
        None
    }

    fn recognize(pathname: &str) -> Option<Self> {
        Some(Self(pathname.to_string()))
    }
}

#[allow(clippy::needless_pass_by_value)] // `Switch` hands the route over by value.
pub fn switch(route: Route) -> Html {
    match route {
        Route::CodeEntry => html! { <CodeEntryPage /> },
        Route::Admin => html! { <AdminPage /> },
        Route::Game { code } => html! { <GamePage code={AttrValue::from(code)} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
