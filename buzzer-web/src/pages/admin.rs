use yew::prelude::*;

use crate::components::MaxWidthCard;
use crate::i18n::t;
use crate::router::Screen;

/// Mount point for the game-creation screen.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    html! {
        <section class="admin" data-screen={Screen::Admin.marker()}>
            <MaxWidthCard>
                <h2>{ t("admin.title") }</h2>
                <p>{ t("admin.message") }</p>
            </MaxWidthCard>
        </section>
    }
}
