use std::collections::BTreeMap;
use yew::prelude::*;

use crate::components::MaxWidthCard;
use crate::router::Screen;

#[derive(Properties, Clone, PartialEq)]
pub struct GamePageProps {
    /// Opaque game code captured from the URL.
    pub code: AttrValue,
}

#[function_component(GamePage)]
pub fn game_page(props: &GamePageProps) -> Html {
    let mut vars = BTreeMap::new();
    vars.insert("code", props.code.as_str());
    let title = crate::i18n::tr("game.title", Some(&vars));

    html! {
        <section class="game" data-screen={Screen::Game.marker()} data-code={props.code.clone()}>
            <MaxWidthCard>
                <h2 class="game-title">{ title }</h2>
            </MaxWidthCard>
        </section>
    }
}
