//! Typed variant enums and prop structs through the derive macros.

use rstest::rstest;
use styled_variants::{
    CompoundRule, Element, PropValue, Props, VariantProps, VariantSpec, VariantValue, styled,
};

/// Sizes offered by the button.
#[derive(Clone, Copy, Debug, VariantValue)]
enum Size {
    Small,
    ExtraLarge,
    #[variant(rename = "md")]
    Medium,
}

/// Tones, keyed in lower case.
#[derive(Clone, Copy, Debug, VariantValue)]
#[variant(rename_all = "lowercase")]
enum Tone {
    Danger,
}

/// Props understood by the button.
#[derive(Clone, Debug, Default, VariantProps)]
struct ButtonProps {
    size: Option<Size>,
    tone: Option<Tone>,
    is_open: bool,
    #[variant(rename = "aria-label")]
    label: Option<String>,
    #[variant(skip)]
    children: Vec<String>,
}

#[rstest]
#[case(Size::Small, "small")]
#[case(Size::ExtraLarge, "extra-large")]
#[case(Size::Medium, "md")]
fn enum_keys_follow_rename_rules(#[case] size: Size, #[case] expected: &str) {
    assert_eq!(size.as_ref(), expected);
    assert_eq!(styled_variants::VariantValue::from(size).to_key(), expected);
    assert_eq!(PropValue::from(&size).as_str(), Some(expected));
}

#[test]
fn struct_props_skip_absent_options() {
    let typed = ButtonProps {
        size: Some(Size::ExtraLarge),
        label: Some("Save".to_owned()),
        children: vec!["child".to_owned()],
        ..ButtonProps::default()
    };
    let props = typed.to_props();
    assert_eq!(typed.children.len(), 1);
    let keys: Vec<&str> = props.keys().collect();
    assert_eq!(keys, vec!["size", "isOpen", "aria-label"]);
    assert_eq!(props.get("isOpen"), Some(&PropValue::Bool(false)));
}

#[test]
fn typed_definitions_render() {
    let button = styled(
        Element::new("button"),
        [VariantSpec::new()
            .variant("size", [(Size::Small, "btn-sm"), (Size::ExtraLarge, "btn-xl")])
            .variant("tone", [(Tone::Danger, "btn-danger")])
            .default_variant("size", Size::Small)
            .compound(
                CompoundRule::new([("size", Size::ExtraLarge)], "shadow-lg")
                    .require("tone", Tone::Danger),
            )
            .into()],
    );
    let mut props = Props::new().with("id", "save");
    ButtonProps {
        size: Some(Size::ExtraLarge),
        tone: Some(Tone::Danger),
        ..ButtonProps::default()
    }
    .write_props(&mut props);

    let node = button.render(props, None);
    assert_eq!(node.class_name(), Some("btn-xl btn-danger shadow-lg"));
    assert!(!node.props.contains("size"));
    assert!(node.props.contains("isOpen"));
    assert!(node.props.contains("id"));
}
