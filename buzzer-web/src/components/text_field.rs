use crate::components::foundation as f;
use f::TargetCast;

/// Labelled single-line text input. Emits the full value on every keystroke.
#[derive(f::Properties, PartialEq, Clone)]
pub struct TextFieldProps {
    pub id: f::AttrValue,
    pub label: f::AttrValue,
    #[prop_or_default]
    pub value: f::AttrValue,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub oninput: f::Callback<String>,
}

#[f::function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> f::Html {
    let oninput = {
        let cb = props.oninput.clone();
        f::Callback::from(move |e: f::InputEvent| {
            if let Some(input) = e.target_dyn_into::<f::HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let class = f::class_list(&["form-control", "w-full"], &props.class);
    f::html! {
        <div class={class}>
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{ props.label.clone() }</span>
            </label>
            <input
                id={props.id.clone()}
                class="input input-bordered w-full"
                type="text"
                required={props.required}
                value={props.value.clone()}
                oninput={oninput}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn text_field_links_label_to_input() {
        let props = TextFieldProps {
            id: f::AttrValue::from("game-code"),
            label: f::AttrValue::from("Input game code"),
            value: f::AttrValue::from("abc"),
            required: true,
            class: f::Classes::from("mb-4"),
            oninput: f::Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TextField>::with_props(props).render());
        assert!(html.contains("for=\"game-code\""));
        assert!(html.contains("id=\"game-code\""));
        assert!(html.contains("Input game code"));
        assert!(html.contains("required"));
        assert!(html.contains("mb-4"));
    }
}
