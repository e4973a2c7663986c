pub use web_sys::{HtmlInputElement, InputEvent, MouseEvent};
pub use yew::function_component;
pub use yew::html::TargetCast;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

#[must_use]
pub fn attr_value(opt: &Option<AttrValue>) -> Option<AttrValue> {
    opt.clone()
}

#[cfg(test)]
mod tests {
    use super::{attr_value, class_list};
    use yew::Classes;

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mx-1");
        let classes = class_list(&["btn", "btn-primary"], &extra);
        let rendered = classes.to_string();
        assert!(rendered.contains("btn"));
        assert!(rendered.contains("btn-primary"));
        assert!(rendered.contains("mx-1"));
    }

    #[test]
    fn class_list_without_extra_keeps_base_order() {
        let classes = class_list(&["card", "p-8"], &Classes::new());
        assert_eq!(classes.to_string(), "card p-8");
    }

    #[test]
    fn attr_value_clones_optional_attr() {
        let value = Some(yew::AttrValue::from("test"));
        let cloned = attr_value(&value);
        assert_eq!(cloned.as_deref(), Some("test"));
        assert!(attr_value(&None).is_none());
    }
}
