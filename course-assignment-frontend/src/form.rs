use crate::error::FormError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
    pub hidden: bool,
}

/// The fields of a form in document order. Encoding keeps that order, so
/// repeated names arrive as an ordered list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
            hidden: false,
        });
    }

    pub fn append_hidden(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
            hidden: true,
        });
    }

    /// Returns how many fields were removed.
    pub fn remove_named(&mut self, name: &str) -> usize {
        let before = self.fields.len();
        self.fields.retain(|field| field.name != name);
        before - self.fields.len()
    }

    #[must_use]
    pub fn values(&self, name: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|field| field.name == name)
            .map(|field| field.value.as_str())
            .collect()
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn reset(&mut self) {
        self.fields.retain(|field| !field.hidden);
    }

    pub fn encode(&self) -> Result<String, FormError> {
        let pairs: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|field| (field.name.as_str(), field.value.as_str()))
            .collect();
        Ok(serde_urlencoded::to_string(pairs)?)
    }
}
