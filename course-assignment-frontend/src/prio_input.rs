use core::fmt::Write as _;

use course_assignment_config::UiConfig;
use html_escape::{encode_double_quoted_attribute, encode_text};
use tracing::{debug, trace};

use crate::form::Form;

const OPTION_ATTRIBUTE_PREFIX: &str = "option-";

/// Courses that can be prioritized, in display order. Ids are kept as the
/// digits they were declared with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet {
    options: Vec<(String, String)>,
}

fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|byte| byte.is_ascii_digit())
}

impl OptionSet {
    pub fn new(options: impl IntoIterator<Item = (u64, String)>) -> Self {
        Self {
            options: options
                .into_iter()
                .map(|(id, name)| (id.to_string(), name))
                .collect(),
        }
    }

    /// Reads `option-<id>="<name>"` attributes. Other attributes and
    /// non-numeric ids are skipped.
    pub fn from_attributes<K, V>(attributes: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let options = attributes
            .into_iter()
            .filter_map(|(name, value)| {
                let id = name.as_ref().strip_prefix(OPTION_ATTRIBUTE_PREFIX)?;
                if is_numeric_id(id) {
                    Some((id.to_owned(), value.into()))
                } else {
                    debug!(attribute = name.as_ref(), "ignoring option without numeric id");
                    None
                }
            })
            .collect();
        Self { options }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|(_, name)| name.as_str())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|option| option == name)
    }

    /// Id of the first option called `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(_, option)| option == name)
            .map(|(id, _)| id.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct PrioInput {
    options: OptionSet,
    selected: Vec<String>,
    input: String,
    field_name: String,
    placeholder: String,
    clear_input_on_add: bool,
    max_priorities: Option<usize>,
}

impl PrioInput {
    #[must_use]
    pub fn new(options: OptionSet, ui: &UiConfig) -> Self {
        Self {
            options,
            selected: Vec::new(),
            input: String::new(),
            field_name: ui.priority_field_name.clone(),
            placeholder: ui.placeholder.clone(),
            clear_input_on_add: ui.clear_input_on_add,
            max_priorities: ui.max_priorities,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &OptionSet {
        &self.options
    }

    #[must_use]
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Appends the current input to the selection if it names a known option
    /// that is not selected yet. Anything else is ignored.
    pub fn add_selection(&mut self) -> bool {
        let value = self.input.as_str();
        if value.is_empty() || !self.options.contains(value) {
            trace!(value, "not an option");
            return false;
        }
        if self.selected.iter().any(|selected| selected == value) {
            trace!(value, "already selected");
            return false;
        }
        if self
            .max_priorities
            .is_some_and(|max| self.selected.len() >= max)
        {
            debug!(value, max = ?self.max_priorities, "priority list is full");
            return false;
        }

        self.selected.push(value.to_owned());
        if self.clear_input_on_add {
            self.input.clear();
        }
        true
    }

    /// Option names matching `query` case-insensitively, in option order.
    #[must_use]
    pub fn suggestions(&self, query: &str) -> Vec<&str> {
        let query = query.to_lowercase();
        self.options
            .names()
            .filter(|name| name.to_lowercase().contains(&query))
            .collect()
    }

    /// Replaces the hidden fields this input owns in `form` with one field
    /// per selected course. Without a form there is nothing to do.
    pub fn serialize_on_submit(&self, form: Option<&mut Form>) {
        let Some(form) = form else {
            return;
        };
        form.remove_named(&self.field_name);
        for name in &self.selected {
            if let Some(id) = self.options.resolve(name) {
                form.append_hidden(self.field_name.as_str(), id);
            }
        }
    }

    /// Handles a reset of the surrounding form: the selection is gone and so
    /// are the form's hidden fields.
    pub fn reset(&mut self, form: Option<&mut Form>) {
        self.selected.clear();
        self.input.clear();
        if let Some(form) = form {
            form.reset();
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut html = String::from(r#"<ol id="selected-prios">"#);
        for name in &self.selected {
            let _ = write!(html, "<li>{}</li>", encode_text(name));
        }
        html.push_str("</ol>");

        let _ = write!(
            html,
            r#"<input id="prio-input" list="prio-options" placeholder="{}" value="{}">"#,
            encode_double_quoted_attribute(&self.placeholder),
            encode_double_quoted_attribute(&self.input),
        );

        html.push_str(r#"<datalist id="prio-options">"#);
        for name in self.options.names() {
            let _ = write!(
                html,
                r#"<option value="{}">{}</option>"#,
                encode_double_quoted_attribute(name),
                encode_text(name),
            );
        }
        html.push_str("</datalist>");
        html.push_str(r#"<button id="add-prio-button" type="button">&oplus;</button>"#);
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> OptionSet {
        OptionSet::from_attributes([
            ("option-3", "Math"),
            ("class", "prio"),
            ("option-7", "Art"),
        ])
    }

    fn add(input: &mut PrioInput, name: &str) -> bool {
        input.set_input(name);
        input.add_selection()
    }

    #[test]
    fn option_attributes() {
        let options = OptionSet::from_attributes([
            ("option-3", "Math"),
            ("option-12", "Chemistry"),
            ("option-x", "Broken"),
            ("id", "prios"),
        ]);
        assert_eq!(options.names().collect::<Vec<_>>(), ["Math", "Chemistry"]);
        assert_eq!(options.resolve("Chemistry"), Some("12"));
        assert_eq!(options.resolve("Broken"), None);
    }

    #[test]
    fn ids_are_submitted_as_declared() {
        let options = OptionSet::from_attributes([("option-007", "Math"), ("option-", "Empty")]);
        assert_eq!(options.len(), 1);

        let mut input = PrioInput::new(options, &UiConfig::default());
        add(&mut input, "Math");
        let mut form = Form::new();
        input.serialize_on_submit(Some(&mut form));
        assert_eq!(form.values("prio[]"), ["007"]);
    }

    #[test]
    fn selects_in_order_without_duplicates() {
        let mut input = PrioInput::new(options(), &UiConfig::default());
        assert!(add(&mut input, "Math"));
        assert!(add(&mut input, "Art"));
        assert!(!add(&mut input, "Math"));
        assert_eq!(input.selected(), ["Math", "Art"]);

        let mut form = Form::new();
        input.serialize_on_submit(Some(&mut form));
        assert_eq!(form.values("prio[]"), ["3", "7"]);
    }

    #[test]
    fn unknown_or_empty_names_are_ignored() {
        let mut input = PrioInput::new(options(), &UiConfig::default());
        assert!(!add(&mut input, ""));
        assert!(!add(&mut input, "Music"));
        assert!(!add(&mut input, "math"));
        assert!(input.selected().is_empty());
    }

    #[test]
    fn input_is_kept_unless_configured() {
        let mut input = PrioInput::new(options(), &UiConfig::default());
        add(&mut input, "Math");
        assert_eq!(input.input(), "Math");

        let ui = UiConfig {
            clear_input_on_add: true,
            ..UiConfig::default()
        };
        let mut input = PrioInput::new(options(), &ui);
        add(&mut input, "Math");
        assert_eq!(input.input(), "");
    }

    #[test]
    fn cap_on_priorities() {
        let ui = UiConfig {
            max_priorities: Some(1),
            ..UiConfig::default()
        };
        let mut input = PrioInput::new(options(), &ui);
        assert!(add(&mut input, "Art"));
        assert!(!add(&mut input, "Math"));
        assert_eq!(input.selected(), ["Art"]);
    }

    #[test]
    fn submit_replaces_previous_fields() {
        let mut input = PrioInput::new(options(), &UiConfig::default());
        let mut form = Form::new();
        form.append("prename", "Ada");

        add(&mut input, "Art");
        input.serialize_on_submit(Some(&mut form));
        add(&mut input, "Math");
        input.serialize_on_submit(Some(&mut form));

        assert_eq!(form.values("prio[]"), ["7", "3"]);
        assert_eq!(form.fields().len(), 3);
        assert!(form.fields()[1].hidden);
    }

    #[test]
    fn empty_selection_submits_nothing() {
        let input = PrioInput::new(options(), &UiConfig::default());
        let mut form = Form::new();
        form.append_hidden("prio[]", "9");
        input.serialize_on_submit(Some(&mut form));
        assert!(form.values("prio[]").is_empty());

        input.serialize_on_submit(None);
    }

    #[test]
    fn suggestions_filter_case_insensitively() {
        let input = PrioInput::new(
            OptionSet::new([
                (1, "Mathematik".to_owned()),
                (2, "Kunst".to_owned()),
                (3, "Theater".to_owned()),
            ]),
            &UiConfig::default(),
        );
        assert_eq!(input.suggestions("AT"), ["Mathematik", "Theater"]);
        assert_eq!(input.suggestions("").len(), 3);
        assert!(input.suggestions("Sport").is_empty());
    }

    #[test]
    fn reset_clears_selection_and_form() {
        let mut input = PrioInput::new(options(), &UiConfig::default());
        let mut form = Form::new();
        form.append("prename", "Ada");
        add(&mut input, "Math");
        input.serialize_on_submit(Some(&mut form));

        input.reset(Some(&mut form));
        assert!(input.selected().is_empty());
        assert_eq!(input.input(), "");
        assert!(form.values("prio[]").is_empty());
        assert_eq!(form.values("prename"), ["Ada"]);

        add(&mut input, "Art");
        input.reset(None);
        assert!(input.selected().is_empty());
    }

    #[test]
    fn render_escapes_names() {
        let mut input = PrioInput::new(
            OptionSet::new([(1, "Tom & Jerry".to_owned()), (2, r#"<b>"x"</b>"#.to_owned())]),
            &UiConfig::default(),
        );
        add(&mut input, "Tom & Jerry");
        let html = input.render();

        assert!(html.starts_with(r#"<ol id="selected-prios"><li>Tom &amp; Jerry</li></ol>"#));
        assert!(html.contains(r#"list="prio-options""#));
        assert!(html.contains(r#"placeholder="Namen der priorisierten Kurse eingeben...""#));
        assert!(html.contains(r#"<option value="Tom &amp; Jerry">Tom &amp; Jerry</option>"#));
        assert!(html.contains(r#"&lt;b&gt;"x"&lt;/b&gt;</option>"#));
        assert!(!html.contains("<b>"));
        assert!(html.ends_with(r#"<button id="add-prio-button" type="button">&oplus;</button>"#));
    }
}
