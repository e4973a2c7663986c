use yew::prelude::*;
use yew_router::prelude::Link;

use crate::components::{CardVariant, MaxWidthCard};
use crate::i18n::t;
use crate::router::{Route, Screen};

/// Shown for any path outside the route table.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found" data-screen={Screen::NotFound.marker()} aria-live="assertive">
            <MaxWidthCard variant={CardVariant::Transparent}>
                <h2>{ t("not_found.title") }</h2>
                <p>{ t("not_found.message") }</p>
                <Link<Route> to={Route::CodeEntry} classes={classes!("link")}>
                    { t("not_found.back") }
                </Link<Route>>
            </MaxWidthCard>
        </section>
    }
}
