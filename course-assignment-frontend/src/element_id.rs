/// Returns the segment after the first `-`, verbatim.
///
/// `"participant-42"` yields `"42"`. Only the segment up to a second `-` is
/// returned, so `"a-1-2"` yields `"1"`. Ids without a separator yield `None`.
#[must_use]
pub fn extract_numeric_id(element_id: &str) -> Option<&str> {
    element_id.split('-').nth(1)
}

/// What a drop target id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget<'a> {
    Course(&'a str),
    Unassigned,
    /// No numeric segment, the payload will lack a course id.
    Other(&'a str),
}

impl<'a> DropTarget<'a> {
    #[must_use]
    pub fn classify(element_id: &'a str, unassigned_id: &str) -> Self {
        if element_id == unassigned_id {
            return Self::Unassigned;
        }
        extract_numeric_id(element_id).map_or(Self::Other(element_id), Self::Course)
    }

    #[must_use]
    pub const fn course_id(self) -> Option<&'a str> {
        match self {
            Self::Course(id) => Some(id),
            Self::Unassigned | Self::Other(_) => None,
        }
    }
}

/// `#<id>` selector for an element id. Selectors pass through unchanged.
#[must_use]
pub fn selector(element_id: &str) -> String {
    if element_id.starts_with('#') {
        element_id.to_owned()
    } else {
        format!("#{element_id}")
    }
}
