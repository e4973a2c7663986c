use crate::components::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ButtonProps {
    pub label: f::AttrValue,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub onclick: f::Callback<f::MouseEvent>,
}

#[f::function_component(Button)]
pub fn button(props: &ButtonProps) -> f::Html {
    let class = f::class_list(&["btn", "btn-primary"], &props.class);
    f::html! {
        <button
            type="button"
            id={f::attr_value(&props.id)}
            class={class}
            onclick={props.onclick.clone()}
        >
            { props.label.clone() }
        </button>
    }
}
