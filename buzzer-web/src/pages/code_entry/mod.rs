mod form;

pub use form::{CodeEntryError, CodeEntryForm};

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{Button, MaxWidthCard, TextField};
use crate::i18n::t;
use crate::router::Screen;

#[function_component(CodeEntryPage)]
pub fn code_entry_page() -> Html {
    let form = use_state(CodeEntryForm::default);
    let navigator = use_navigator();

    let on_input = {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set_input(value);
            form.set(next);
        })
    };

    let on_play = {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            let outcome = next.play_target();
            form.set(next);
            match outcome {
                Ok(target) => {
                    log::debug!("navigating to {} ({:?})", target.as_str(), target.route());
                    if let Some(nav) = navigator.as_ref() {
                        nav.push(&target);
                    }
                }
                Err(err) => log::debug!("code submission refused: {err}"),
            }
        })
    };

    let value = AttrValue::from(form.input().unwrap_or_default().to_string());

    html! {
        <section class="code-entry" data-screen={Screen::CodeEntry.marker()}>
            <MaxWidthCard>
                <TextField
                    id="game-code"
                    label={t("code_entry.label")}
                    value={value}
                    required={true}
                    class={classes!("mb-4")}
                    oninput={on_input}
                />
                { form.form_message().map(|msg| html! {
                    <p class="form-message" role="alert">{ msg }</p>
                }).unwrap_or_default() }
                <Button
                    id="play-btn"
                    label={t("code_entry.play")}
                    class={classes!("block", "ms-auto")}
                    onclick={on_play}
                />
            </MaxWidthCard>
        </section>
    }
}
