//! View registry - id-keyed catalog of renderable definitions
//!
//! Tabs that reference a view by id are resolved here when they are added
//! and again when a saved workspace is restored. The registry is an explicit
//! instance owned by `AppModel` and passed by reference wherever resolution
//! is needed.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::panel::{Props, TabContent};

/// Render factory: props in, rendered body out
pub type RenderFn = Rc<dyn Fn(&Props) -> String>;

/// A registered view
#[derive(Clone)]
pub struct ViewDefinition {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Merged under the props supplied when a tab is created
    pub default_props: Props,
    render: RenderFn,
}

impl fmt::Debug for ViewDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("category", &self.category)
            .field("description", &self.description)
            .field("icon", &self.icon)
            .field("default_props", &self.default_props)
            .finish_non_exhaustive()
    }
}

impl ViewDefinition {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        render: impl Fn(&Props) -> String + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
            description: None,
            icon: None,
            default_props: Props::new(),
            render: Rc::new(render),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_default_props(mut self, props: Props) -> Self {
        self.default_props = props;
        self
    }

    /// Default props overlaid with `props`
    pub fn merged_props(&self, props: &Props) -> Props {
        let mut merged = self.default_props.clone();
        merged.extend(props.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    pub fn render(&self, props: &Props) -> String {
        (self.render)(&self.merged_props(props))
    }
}

/// Id-keyed view catalog
///
/// Registration order is kept so listings are stable. Re-registering an id
/// replaces the definition in place (last write wins).
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: HashMap<String, ViewDefinition>,
    order: Vec<String>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view, returning the definition it replaced
    pub fn register(&mut self, view: ViewDefinition) -> Option<ViewDefinition> {
        let id = view.id.clone();
        let previous = self.views.insert(id.clone(), view);
        if previous.is_none() {
            self.order.push(id);
        } else {
            tracing::debug!(view = %id, "replaced registered view");
        }
        previous
    }

    pub fn unregister(&mut self, id: &str) -> Option<ViewDefinition> {
        let removed = self.views.remove(id)?;
        self.order.retain(|v| v != id);
        Some(removed)
    }

    pub fn get(&self, id: &str) -> Option<&ViewDefinition> {
        self.views.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.views.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// All views in registration order
    pub fn get_all(&self) -> Vec<&ViewDefinition> {
        self.order.iter().filter_map(|id| self.views.get(id)).collect()
    }

    /// Views in a category; `None` returns every view
    pub fn get_by_category(&self, category: Option<&str>) -> Vec<&ViewDefinition> {
        match category {
            None => self.get_all(),
            Some(category) => self
                .get_all()
                .into_iter()
                .filter(|v| v.category.as_deref() == Some(category))
                .collect(),
        }
    }

    /// Distinct categories in registration order
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for view in self.get_all() {
            if let Some(category) = view.category.as_deref() {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }
        categories
    }

    /// Look up a saved content string
    ///
    /// Tries the exact id first, then the id with a trailing numeric suffix
    /// removed (`chart-1712345678` resolves to `chart`).
    pub fn resolve(&self, content: &str) -> Option<&ViewDefinition> {
        self.get(content)
            .or_else(|| base_view_id(content).and_then(|base| self.get(base)))
    }

    /// Render a tab's content
    ///
    /// Views that are no longer registered render as a placeholder.
    pub fn render(&self, title: &str, content: &TabContent) -> String {
        match content {
            TabContent::View(view) => match self.get(&view.view_id) {
                Some(definition) => definition.render(&view.props),
                None => placeholder_text(title),
            },
            TabContent::Inline(inline) => inline.payload.clone(),
            TabContent::Builtin(builtin) => builtin.message().to_string(),
            TabContent::Placeholder { title } => placeholder_text(title),
        }
    }
}

/// Strip one trailing `-<digits>` or `_<digits>` suffix
pub fn base_view_id(id: &str) -> Option<&str> {
    let cut = id.rfind(['-', '_'])?;
    let (base, suffix) = (&id[..cut], &id[cut + 1..]);
    if base.is_empty() || suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(base)
}

fn placeholder_text(title: &str) -> String {
    format!("{} (content unavailable)", title)
}
