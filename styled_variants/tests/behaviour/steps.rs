//! Step implementations for class resolution, rendering and loading.

use anyhow::{Result, anyhow, ensure};
use rstest_bdd_macros::{given, then, when};
use styled_variants::{
    CLASS_NAME_PROP, CompoundRule, ConfigEntry, PropValue, StyledError, VariantSpec, VariantValue,
    entries_from_json, entries_from_toml, merge, resolve, styled,
};
use test_helpers::fixtures::{BUTTON_JSON, BUTTON_TOML};
use test_helpers::RecordingComponent;
use test_helpers::text::{class_tokens, normalize_scalar};

use crate::fixtures::StyleContext;

/// Interpret a placeholder as a boolean, integer or string value.
fn scalar(raw: &str) -> VariantValue {
    let value = normalize_scalar(raw);
    match value.as_str() {
        "true" => VariantValue::Bool(true),
        "false" => VariantValue::Bool(false),
        other => other
            .parse::<i64>()
            .map_or_else(|_| VariantValue::Str(value.clone()), VariantValue::Int),
    }
}

#[given("a base class entry {classes}")]
fn base_class_entry(style_context: &StyleContext, classes: String) {
    style_context.push_entry(ConfigEntry::from(normalize_scalar(&classes)));
}

#[given("a variant {name} mapping {value} to {classes}")]
fn variant_mapping(style_context: &StyleContext, name: String, value: String, classes: String) {
    style_context.push_entry(VariantSpec::new().variant(
        normalize_scalar(&name),
        [(scalar(&value), normalize_scalar(&classes))],
    ));
}

#[given("the default {name} is {value}")]
fn default_variant(style_context: &StyleContext, name: String, value: String) {
    style_context
        .push_entry(VariantSpec::new().default_variant(normalize_scalar(&name), scalar(&value)));
}

#[given("a compound rule on {name} = {value} adding {classes}")]
fn compound_rule(style_context: &StyleContext, name: String, value: String, classes: String) {
    let rule = CompoundRule::new(
        [(normalize_scalar(&name), scalar(&value))],
        normalize_scalar(&classes),
    );
    style_context.push_entry(VariantSpec::new().compound(rule));
}

#[given("the prop {name} is forwarded")]
fn forwarded_prop(style_context: &StyleContext, name: String) {
    style_context.push_entry(VariantSpec::new().forward(normalize_scalar(&name)));
}

#[given("the props set {name} to {value}")]
fn set_prop(style_context: &StyleContext, name: String, value: String) {
    let key = normalize_scalar(&name);
    let prop = PropValue::from(scalar(&value));
    style_context.update_props(|props| {
        props.insert(key, prop);
    });
}

#[given("the external class name {classes}")]
fn external_class_name(style_context: &StyleContext, classes: String) {
    let class_name = normalize_scalar(&classes);
    style_context.update_props(|props| {
        props.insert(CLASS_NAME_PROP, class_name);
    });
}

#[given("the entries are loaded from the button JSON document")]
fn load_button_json(style_context: &StyleContext) -> Result<()> {
    let entries = entries_from_json(BUTTON_JSON).map_err(|err| anyhow!(err))?;
    style_context.entries.set(entries);
    Ok(())
}

#[given("the entries are loaded from the button TOML document")]
fn load_button_toml(style_context: &StyleContext) -> Result<()> {
    let entries = entries_from_toml(BUTTON_TOML).map_err(|err| anyhow!(err))?;
    style_context.entries.set(entries);
    Ok(())
}

#[when("the classes are resolved")]
fn resolve_classes(style_context: &StyleContext) {
    let config = merge(style_context.entries.get().unwrap_or_default());
    let props = style_context.props.get().unwrap_or_default();
    let resolution = resolve(&config, &props, props.class_name());
    style_context.classes.set(resolution.classes);
}

#[when("a recording component is rendered")]
fn render_recording(style_context: &StyleContext) {
    let component = styled(
        RecordingComponent::named("Probe"),
        style_context.entries.get().unwrap_or_default(),
    );
    let rendered = component.render(style_context.props.get().unwrap_or_default(), None);
    style_context.rendered.set(rendered);
}

#[when("the JSON document {document} is loaded")]
fn load_json_document(style_context: &StyleContext, document: String) -> Result<()> {
    match entries_from_json(&normalize_scalar(&document)) {
        Ok(entries) => style_context.entries.set(entries),
        Err(err) => style_context.load_error.set(err),
    }
    Ok(())
}

#[then("the classes are {expected}")]
fn classes_are(style_context: &StyleContext, expected: String) -> Result<()> {
    let classes = style_context
        .classes
        .get()
        .ok_or_else(|| anyhow!("expected classes to be resolved"))?;
    let expected_tokens = class_tokens(&expected);
    ensure!(
        classes.as_slice() == expected_tokens.as_slice(),
        "unexpected classes {classes:?}; expected {expected_tokens:?}"
    );
    Ok(())
}

#[then("the rendered class name is {expected}")]
fn rendered_class_name(style_context: &StyleContext, expected: String) -> Result<()> {
    let rendered = style_context
        .rendered
        .get()
        .ok_or_else(|| anyhow!("expected a render"))?;
    let expected_name = normalize_scalar(&expected);
    ensure!(
        rendered.props.class_name() == Some(expected_name.as_str()),
        "unexpected class name {:?}; expected {expected_name:?}",
        rendered.props.class_name()
    );
    Ok(())
}

#[then("the rendered props omit {name}")]
fn rendered_props_omit(style_context: &StyleContext, name: String) -> Result<()> {
    let key = normalize_scalar(&name);
    let rendered = style_context
        .rendered
        .get()
        .ok_or_else(|| anyhow!("expected a render"))?;
    ensure!(!rendered.props.contains(&key), "prop {key} was forwarded");
    Ok(())
}

#[then("the rendered props include {name}")]
fn rendered_props_include(style_context: &StyleContext, name: String) -> Result<()> {
    let key = normalize_scalar(&name);
    let rendered = style_context
        .rendered
        .get()
        .ok_or_else(|| anyhow!("expected a render"))?;
    ensure!(rendered.props.contains(&key), "prop {key} was stripped");
    Ok(())
}

#[then("loading fails with {count} entry errors")]
fn loading_fails_with(style_context: &StyleContext, count: String) -> Result<()> {
    let expected: usize = normalize_scalar(&count).parse()?;
    let err = style_context
        .load_error
        .get()
        .ok_or_else(|| anyhow!("expected loading to fail"))?;
    let StyledError::Aggregate(aggregate) = err.as_ref() else {
        return Err(anyhow!("expected an aggregated error, got {err}"));
    };
    let invalid = aggregate
        .iter()
        .filter(|e| matches!(e, StyledError::InvalidEntry { .. }))
        .count();
    ensure!(
        invalid == expected,
        "expected {expected} invalid entries, got {invalid}"
    );
    Ok(())
}
