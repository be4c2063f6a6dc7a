//! Configuration entries shared by the integration and behavioural suites.

use styled_variants::{CompoundRule, ConfigEntry, VariantSpec};

/// A dialog with an `open` boolean, a `status` string and one compound
/// rule requiring both.
#[must_use]
pub fn dialog_entries() -> Vec<ConfigEntry> {
    vec![
        VariantSpec::new()
            .variant("open", [(true, "open"), (false, "closed")])
            .variant("status", [("success", "success"), ("error", "error")])
            .default_variant("open", true)
            .default_variant("status", "success")
            .compound(CompoundRule::new(
                [("open", "true"), ("status", "success")],
                "open-success",
            ))
            .into(),
    ]
}

/// A button with a base class, a size scale and a forwarded `disabled` prop.
#[must_use]
pub fn button_entries() -> Vec<ConfigEntry> {
    vec![
        ConfigEntry::from("btn"),
        VariantSpec::new()
            .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
            .variant("disabled", [(true, "btn-disabled")])
            .default_variant("size", "sm")
            .forward("disabled")
            .into(),
    ]
}

/// The same button definition written as a JSON document.
pub const BUTTON_JSON: &str = r#"[
  "btn",
  {
    "variants": {
      "size": { "sm": "btn-sm", "lg": "btn-lg" },
      "disabled": { "true": "btn-disabled" }
    },
    "defaultVariants": { "size": "sm" },
    "forwardProps": ["disabled"]
  }
]"#;

/// The same button definition written as a TOML document.
pub const BUTTON_TOML: &str = r#"
entries = [
  "btn",
  { variants = { size = { sm = "btn-sm", lg = "btn-lg" }, disabled = { true = "btn-disabled" } }, defaultVariants = { size = "sm" }, forwardProps = ["disabled"] },
]
"#;
