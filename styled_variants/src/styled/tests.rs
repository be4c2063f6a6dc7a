//! Unit tests for the styled factory.

use std::borrow::Cow;
use std::cell::RefCell;

use rstest::rstest;

use super::{Component, Element, StyledOptions, styled, styled_with};
use crate::entry::{CompoundRule, ConfigEntry, VariantSpec};
use crate::props::{NodeRef, Props};
use crate::resolve::CompoundMatching;

/// Captures what the wrapped target received.
#[derive(Default)]
struct Probe {
    name: Option<&'static str>,
    seen: RefCell<Vec<Props>>,
}

impl Component for Probe {
    type Node = Option<NodeRef>;

    fn display_name(&self) -> Option<Cow<'_, str>> {
        self.name.map(Cow::Borrowed)
    }

    fn render(&self, props: Props, node_ref: Option<NodeRef>) -> Self::Node {
        self.seen.borrow_mut().push(props);
        node_ref
    }
}

fn open_entries(forward: bool) -> Vec<ConfigEntry> {
    let base = VariantSpec::new().variant("open", [(true, "open"), (false, "closed")]);
    let spec = if forward { base.forward("open") } else { base };
    vec![spec.into()]
}

#[rstest]
#[case("div")]
#[case("span")]
#[case("button")]
#[case("dialog")]
fn elements_receive_variant_classes(#[case] tag: &'static str) {
    let component = styled(
        Element::new(tag),
        [VariantSpec::new().variant("active", [(true, "class1")]).into()],
    );
    let node = component.render(Props::new().with("active", true), None);
    assert_eq!(node.tag, tag);
    assert!(node.has_class("class1"));
    assert_eq!(component.display_name(), format!("styled.{tag}"));
}

#[test]
fn stripped_variants_do_not_reach_the_target() {
    let component = styled(Probe::default(), open_entries(false));
    component.render(Props::new().with("open", true).with("id", "x"), None);
    let seen = component.target().seen.borrow();
    let props = seen.first().cloned().unwrap_or_default();
    assert!(!props.contains("open"));
    assert_eq!(props.get("id").and_then(|v| v.as_str()), Some("x"));
    assert_eq!(props.class_name(), Some("open"));
}

#[test]
fn forwarded_variants_reach_the_target() {
    let component = styled(Probe::default(), open_entries(true));
    component.render(Props::new().with("open", true), None);
    let seen = component.target().seen.borrow();
    let props = seen.first().cloned().unwrap_or_default();
    assert_eq!(props.get("open"), Some(&true.into()));
    assert_eq!(props.class_name(), Some("open"));
}

#[test]
fn class_name_prop_is_merged_not_forwarded_raw() {
    let component = styled(Probe::default(), [ConfigEntry::from("some-class")]);
    component.render(Props::new().with("className", "other-class"), None);
    let seen = component.target().seen.borrow();
    let props = seen.first().cloned().unwrap_or_default();
    assert_eq!(props.class_name(), Some("some-class other-class"));
}

#[test]
fn class_name_is_always_set() {
    let component = styled(Probe::default(), Vec::new());
    component.render(Props::new(), None);
    let seen = component.target().seen.borrow();
    let props = seen.first().cloned().unwrap_or_default();
    assert_eq!(props.class_name(), Some(""));
}

#[test]
fn node_handle_is_passed_through() {
    let component = styled(Probe::default(), open_entries(false));
    let handle = NodeRef::new(String::from("input"));
    let returned = component.render(Props::new(), Some(handle.clone()));
    assert_eq!(returned, Some(handle));
}

#[rstest]
#[case(Some("Card"), "styled.Card")]
#[case(None, "styled.Component")]
fn display_names_use_inner_name(#[case] name: Option<&'static str>, #[case] expected: &str) {
    let probe = Probe {
        name,
        ..Probe::default()
    };
    assert_eq!(styled(probe, Vec::new()).display_name(), expected);
}

#[test]
fn styled_components_nest() {
    let inner = styled(Element::new("a"), [ConfigEntry::from("link")]);
    let outer = styled(
        inner,
        [VariantSpec::new().variant("tone", [("muted", "dim")]).into()],
    );
    assert_eq!(outer.display_name(), "styled.styled.a");
    let node = outer.render(Props::new().with("tone", "muted"), None);
    assert_eq!(node.class_name(), Some("link dim"));
    assert!(!node.props.contains("tone"));
}

#[rstest]
#[case(true)]
#[case(false)]
fn memoization_does_not_change_results(#[case] memoize: bool) {
    let component = styled_with(
        Element::new("div"),
        [VariantSpec::new()
            .variant("size", [("sm", "s"), ("lg", "l")])
            .compound(CompoundRule::new([("size", "lg"), ("tone", "loud")], "shout"))
            .into()],
        StyledOptions::default().with_memoize(memoize),
    );
    let loud = Props::new().with("size", "lg").with("tone", "loud");
    let quiet = Props::new().with("size", "lg").with("tone", "soft");
    assert_eq!(component.class_list(&loud), ["l", "shout"]);
    assert_eq!(component.class_list(&quiet), ["l"]);
    assert_eq!(component.class_list(&loud), ["l", "shout"]);
    assert_eq!(
        component.class_list(&loud.clone().with("className", "x")),
        ["x", "l", "shout"]
    );
}

#[test]
fn effective_matching_option_is_honoured() {
    let entries = || -> Vec<ConfigEntry> {
        vec![VariantSpec::new()
            .variant("open", [(true, "open")])
            .default_variant("open", true)
            .compound(CompoundRule::new([("open", true)], "open-extra"))
            .into()]
    };
    let raw = styled(Element::new("div"), entries());
    let effective = styled_with(
        Element::new("div"),
        entries(),
        StyledOptions::default().with_compound_matching(CompoundMatching::EffectiveValues),
    );
    assert_eq!(raw.class_list(&Props::new()), ["open"]);
    assert_eq!(effective.class_list(&Props::new()), ["open", "open-extra"]);
}
