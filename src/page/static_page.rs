use std::collections::{HashMap, HashSet};

use crate::render::Renderer;

use super::{FooterElement, PageElements, ScrollMetrics};

/// Ordered set of CSS classes on one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl FooterElement for ClassList {
    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }
}

/// In-memory page host for headless runs and tests.
#[derive(Debug)]
pub struct StaticPage<S> {
    surfaces: HashMap<String, S>,
    elements: HashSet<String>,
    footers: HashMap<String, ClassList>,
    scroll: ScrollMetrics,
}

impl<S> Default for StaticPage<S> {
    fn default() -> Self {
        Self {
            surfaces: HashMap::new(),
            elements: HashSet::new(),
            footers: HashMap::new(),
            scroll: ScrollMetrics::new(0.0, 0.0, 0.0),
        }
    }
}

impl<S> StaticPage<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_surface(mut self, id: impl Into<String>, surface: S) -> Self {
        self.surfaces.insert(id.into(), surface);
        self
    }

    #[must_use]
    pub fn with_element(mut self, selector: impl Into<String>) -> Self {
        self.elements.insert(selector.into());
        self
    }

    #[must_use]
    pub fn with_footer(mut self, id: impl Into<String>) -> Self {
        self.footers.insert(id.into(), ClassList::default());
        self
    }

    pub fn set_scroll(&mut self, metrics: ScrollMetrics) {
        self.scroll = metrics;
    }

    #[must_use]
    pub fn footer(&self, id: &str) -> Option<&ClassList> {
        self.footers.get(id)
    }
}

impl<S: Renderer> PageElements for StaticPage<S> {
    type Surface = S;
    type Footer = ClassList;

    fn take_surface(&mut self, id: &str) -> Option<S> {
        self.surfaces.remove(id)
    }

    fn has_element(&self, selector: &str) -> bool {
        self.elements.contains(selector)
    }

    fn footer_mut(&mut self, id: &str) -> Option<&mut ClassList> {
        self.footers.get_mut(id)
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.scroll
    }
}
