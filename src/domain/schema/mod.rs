//! Schema-as-data validation of inbound JSON records.
//!
//! A [`Schema`] is a declared constraint tree (field name -> [`FieldRules`])
//! evaluated by recursive descent over a `serde_json::Value` document. It
//! checks the *shape* of a submission before any field-level checks run:
//! which fields are present, their JSON types, emptiness, character-length
//! bounds, and (for mappings) rules applied to every key and every value.
//!
//! Unknown fields beyond the schema are tolerated. Declared fields are
//! required unless the schema opts out via [`Schema::required_all`].

use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fmt;

/// JSON type a field is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Mapping,
}

/// Constraint set for a single field (or for every key/value of a mapping).
#[derive(Debug, Clone)]
pub struct FieldRules {
    kind: ValueKind,
    required: bool,
    allow_empty: bool,
    min_length: Option<usize>,
    max_length: Option<usize>,
    keys_rules: Option<Box<FieldRules>>,
    values_rules: Option<Box<FieldRules>>,
}

impl FieldRules {
    pub fn text() -> Self {
        Self {
            kind: ValueKind::Text,
            required: true,
            allow_empty: true,
            min_length: None,
            max_length: None,
            keys_rules: None,
            values_rules: None,
        }
    }

    pub fn mapping() -> Self {
        Self {
            kind: ValueKind::Mapping,
            ..Self::text()
        }
    }

    /// Reject empty strings / empty mappings.
    pub fn non_empty(mut self) -> Self {
        self.allow_empty = false;
        self
    }

    /// Minimum length in characters (strings).
    pub fn min_chars(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    /// Maximum length in characters (strings).
    pub fn max_chars(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    /// Mark the field optional even when the schema requires all fields.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Rules applied to every key of a mapping field.
    pub fn keys(mut self, rules: FieldRules) -> Self {
        self.keys_rules = Some(Box::new(rules));
        self
    }

    /// Rules applied to every value of a mapping field.
    pub fn values(mut self, rules: FieldRules) -> Self {
        self.values_rules = Some(Box::new(rules));
        self
    }
}

/// Declared record shape: field name -> constraint set.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: BTreeMap<String, FieldRules>,
    required_all: bool,
}

/// One failed constraint, located by a dotted field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub path: String,
    pub message: String,
}

/// Outcome of validating a document against a [`Schema`].
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    fn push(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            path: path.to_string(),
            message: message.into(),
        });
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.path, e.message)?;
        }
        Ok(())
    }
}

impl Schema {
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            required_all: true,
        }
    }

    /// Declare a field with its constraint set.
    pub fn field(mut self, name: &str, rules: FieldRules) -> Self {
        self.fields.insert(name.to_string(), rules);
        self
    }

    /// When `false`, only fields explicitly left required are mandatory.
    pub fn required_all(mut self, required: bool) -> Self {
        self.required_all = required;
        self
    }

    /// Validate a submitted document against the declared shape.
    ///
    /// Fields present in the document but absent from the schema are
    /// ignored. All failing constraints are collected, not just the first.
    pub fn validate(&self, doc: &JsonValue) -> ValidationReport {
        let mut report = ValidationReport::default();

        let obj = match doc.as_object() {
            Some(o) => o,
            None => {
                report.push("<document>", "must be a mapping");
                return report;
            }
        };

        for (name, rules) in &self.fields {
            match obj.get(name) {
                Some(value) => check_value(name, rules, value, &mut report),
                None => {
                    if self.required_all || rules.required {
                        report.push(name, "required field");
                    }
                }
            }
        }

        report
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

fn check_value(path: &str, rules: &FieldRules, value: &JsonValue, report: &mut ValidationReport) {
    match rules.kind {
        ValueKind::Text => check_text(path, rules, value, report),
        ValueKind::Mapping => check_mapping(path, rules, value, report),
    }
}

fn check_text(path: &str, rules: &FieldRules, value: &JsonValue, report: &mut ValidationReport) {
    let s = match value.as_str() {
        Some(s) => s,
        None => {
            report.push(path, "must be of text type");
            return;
        }
    };

    if s.is_empty() && !rules.allow_empty {
        report.push(path, "empty values not allowed");
        return;
    }

    let chars = s.chars().count();
    if let Some(min) = rules.min_length {
        if chars < min {
            report.push(path, format!("min length is {min}"));
        }
    }
    if let Some(max) = rules.max_length {
        if chars > max {
            report.push(path, format!("max length is {max}"));
        }
    }
}

fn check_mapping(path: &str, rules: &FieldRules, value: &JsonValue, report: &mut ValidationReport) {
    let obj = match value.as_object() {
        Some(o) => o,
        None => {
            report.push(path, "must be of mapping type");
            return;
        }
    };

    if obj.is_empty() && !rules.allow_empty {
        report.push(path, "empty values not allowed");
        return;
    }

    for (key, val) in obj {
        let nested = format!("{path}.{key}");
        if let Some(key_rules) = &rules.keys_rules {
            check_value(&nested, key_rules, &JsonValue::String(key.clone()), report);
        }
        if let Some(value_rules) = &rules.values_rules {
            check_value(&nested, value_rules, val, report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name_rules() -> FieldRules {
        FieldRules::text().non_empty().min_chars(3).max_chars(255)
    }

    fn recipe_like_schema() -> Schema {
        Schema::new().field("recipe_name", name_rules()).field(
            "product_list",
            FieldRules::mapping()
                .non_empty()
                .keys(FieldRules::text().non_empty().min_chars(3))
                .values(FieldRules::text().non_empty().min_chars(3)),
        )
    }

    #[test]
    fn accepts_well_formed_document() {
        let report = recipe_like_schema().validate(&json!({
            "recipe_name": "Borscht",
            "product_list": {"Beetroot": "300g", "Salt": "10g"}
        }));
        assert!(report.passed(), "unexpected errors: {report}");
    }

    #[test]
    fn missing_required_field_is_reported() {
        let report = recipe_like_schema().validate(&json!({
            "recipe_name": "Borscht"
        }));
        assert!(!report.passed());
        assert_eq!(report.errors()[0].path, "product_list");
        assert_eq!(report.errors()[0].message, "required field");
    }

    #[test]
    fn required_all_opt_out_skips_undeclared_optionals() {
        let schema = recipe_like_schema().required_all(false);
        // recipe_name rules keep their own required flag (defaults true),
        // so it is still reported; with required_all off nothing changes here
        // unless the field itself opted out.
        let schema = schema.field("note", FieldRules::text().optional());
        let report = schema.validate(&json!({
            "recipe_name": "Borscht",
            "product_list": {"Salt": "10g"}
        }));
        assert!(report.passed(), "unexpected errors: {report}");
    }

    #[test]
    fn type_mismatch_is_reported() {
        let report = recipe_like_schema().validate(&json!({
            "recipe_name": 42,
            "product_list": ["Salt"]
        }));
        let messages: Vec<_> = report.errors().iter().map(|e| e.message.as_str()).collect();
        assert!(messages.contains(&"must be of text type"));
        assert!(messages.contains(&"must be of mapping type"));
    }

    #[test]
    fn empty_values_rejected() {
        let report = recipe_like_schema().validate(&json!({
            "recipe_name": "",
            "product_list": {}
        }));
        assert_eq!(report.errors().len(), 2);
        for e in report.errors() {
            assert_eq!(e.message, "empty values not allowed");
        }
    }

    #[test]
    fn length_bounds_count_characters() {
        let schema = Schema::new().field("name", FieldRules::text().min_chars(3).max_chars(5));
        assert!(schema.validate(&json!({"name": "щи"})).errors()[0]
            .message
            .contains("min length"));
        assert!(schema.validate(&json!({"name": "борщи"})).passed());
        assert!(!schema.validate(&json!({"name": "borschts"})).passed());
    }

    #[test]
    fn nested_key_and_value_rules_are_applied() {
        let report = recipe_like_schema().validate(&json!({
            "recipe_name": "Borscht",
            "product_list": {"Salt": "5g", "x": "300g"}
        }));
        let paths: Vec<_> = report.errors().iter().map(|e| e.path.as_str()).collect();
        // "5g" is too short a value, "x" too short a key.
        assert!(paths.contains(&"product_list.Salt"));
        assert!(paths.contains(&"product_list.x"));
        assert_eq!(report.errors().len(), 2);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let report = recipe_like_schema().validate(&json!({
            "recipe_name": "Borscht",
            "product_list": {"Salt": "10g"},
            "author": "someone",
            "rating": 5
        }));
        assert!(report.passed(), "unexpected errors: {report}");
    }

    #[test]
    fn non_object_document_is_rejected() {
        let report = recipe_like_schema().validate(&json!([1, 2, 3]));
        assert_eq!(report.errors()[0].path, "<document>");
    }

    #[test]
    fn report_display_embeds_paths_and_messages() {
        let report = recipe_like_schema().validate(&json!({}));
        let rendered = report.to_string();
        assert!(rendered.contains("recipe_name: required field"));
        assert!(rendered.contains("product_list: required field"));
    }
}
