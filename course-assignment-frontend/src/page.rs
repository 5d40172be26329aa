use std::collections::BTreeMap;

use tracing::debug;

/// How a response fragment replaces a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Swap {
    #[default]
    InnerHtml,
    None,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    classes: Vec<String>,
    markup: String,
}

impl Region {
    #[must_use]
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            classes: Vec::new(),
            markup: markup.into(),
        }
    }

    #[must_use]
    pub fn markup(&self) -> &str {
        &self.markup
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    regions: BTreeMap<String, Region>,
}

fn strip_selector(target: &str) -> &str {
    target.strip_prefix('#').unwrap_or(target)
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_region(&mut self, id: impl Into<String>, region: Region) {
        self.regions.insert(id.into(), region);
    }

    #[must_use]
    pub fn region(&self, target: &str) -> Option<&Region> {
        self.regions.get(strip_selector(target))
    }

    pub fn add_class(&mut self, target: &str, class: &str) -> bool {
        let Some(region) = self.regions.get_mut(strip_selector(target)) else {
            return false;
        };
        if !region.has_class(class) {
            region.classes.push(class.to_owned());
        }
        true
    }

    pub fn remove_class(&mut self, target: &str, class: &str) -> bool {
        let Some(region) = self.regions.get_mut(strip_selector(target)) else {
            return false;
        };
        region.classes.retain(|existing| existing != class);
        true
    }

    #[must_use]
    pub fn has_class(&self, target: &str, class: &str) -> bool {
        self.region(target)
            .is_some_and(|region| region.has_class(class))
    }

    /// Puts `markup` into the region addressed by `target` (`id` or `#id`).
    /// Returns whether a region was changed.
    pub fn swap(&mut self, target: &str, markup: impl Into<String>, swap: Swap) -> bool {
        let id = strip_selector(target);
        let Some(region) = self.regions.get_mut(id) else {
            debug!(region = id, "swap target not on page");
            return false;
        };
        match swap {
            Swap::InnerHtml => {
                region.markup = markup.into();
                true
            }
            Swap::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Page {
        let mut page = Page::new();
        page.insert_region("course-7", Region::new("Math"));
        page
    }

    #[test]
    fn classes_are_a_set() {
        let mut page = page();
        assert!(page.add_class("course-7", "drop-ready"));
        assert!(page.add_class("#course-7", "drop-ready"));
        assert_eq!(page.region("course-7").unwrap().classes(), ["drop-ready"]);
        assert!(page.remove_class("course-7", "drop-ready"));
        assert!(!page.has_class("course-7", "drop-ready"));
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut page = page();
        assert!(!page.add_class("course-8", "drop-ready"));
        assert!(!page.remove_class("course-8", "drop-ready"));
        assert!(!page.swap("#course-8", "<b>x</b>", Swap::InnerHtml));
        assert!(page.region("course-8").is_none());
    }

    #[test]
    fn swap_strategies() {
        let mut page = page();
        page.add_class("course-7", "highlight");

        assert!(page.swap("#course-7", "Art", Swap::InnerHtml));
        assert_eq!(page.region("course-7").unwrap().markup(), "Art");
        assert!(page.has_class("course-7", "highlight"));

        assert!(!page.swap("#course-7", "ignored", Swap::None));
        assert_eq!(page.region("course-7").unwrap().markup(), "Art");

        assert!(page.swap("course-7", "Music", Swap::default()));
        assert_eq!(page.region("course-7").unwrap().markup(), "Music");
        assert_eq!(page.region("course-7").unwrap().classes(), ["highlight"]);
    }
}
