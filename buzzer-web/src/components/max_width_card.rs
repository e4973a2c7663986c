//! Constrained-width card used to frame every screen.

use crate::components::foundation as f;

/// Shared frame: full width up to 45rem, centered, 1.5rem block margin, 2rem padding.
const FRAME: &[&str] = &["w-full", "max-w-[45rem]", "mx-auto", "my-6", "p-8"];
/// Opaque surface: 5px radius, light border, white background.
const SURFACE: &[&str] = &["rounded-[5px]", "border", "border-solid", "border-[#eeeeee]", "bg-white"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Opaque,
    Transparent,
}

impl CardVariant {
    #[must_use]
    pub fn classes(self) -> f::Classes {
        let mut classes = f::Classes::new();
        for class in FRAME {
            classes.push(*class);
        }
        if self == Self::Opaque {
            for class in SURFACE {
                classes.push(*class);
            }
        }
        classes
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct MaxWidthCardProps {
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(MaxWidthCard)]
pub fn max_width_card(props: &MaxWidthCardProps) -> f::Html {
    let mut class = props.variant.classes();
    class.push(props.class.clone());
    f::html! {
        <div class={class}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;
    use yew::html::ChildrenRenderer;

    #[test]
    fn opaque_variant_adds_surface() {
        let classes = CardVariant::Opaque.classes().to_string();
        assert!(classes.contains("max-w-[45rem]"));
        assert!(classes.contains("bg-white"));
        assert!(classes.contains("border-[#eeeeee]"));
        assert!(classes.contains("rounded-[5px]"));
    }

    #[test]
    fn transparent_variant_keeps_only_frame() {
        let classes = CardVariant::Transparent.classes().to_string();
        assert!(classes.contains("max-w-[45rem]"));
        assert!(classes.contains("mx-auto"));
        assert!(classes.contains("p-8"));
        assert!(!classes.contains("bg-white"));
        assert!(!classes.contains("border"));
    }

    #[test]
    fn card_renders_children_and_extra_classes() {
        let props = MaxWidthCardProps {
            variant: CardVariant::Transparent,
            class: f::Classes::from("admin-card"),
            children: ChildrenRenderer::new(vec![f::html! { <p>{ "inside" }</p> }]),
        };
        let html = block_on(LocalServerRenderer::<MaxWidthCard>::with_props(props).render());
        assert!(html.contains("<p>inside</p>"));
        assert!(html.contains("admin-card"));
        assert!(!html.contains("bg-white"));
    }
}
