//! Tabs and the content they host
//!
//! Tab content is an explicit tagged variant so the lossy persistence
//! boundary is visible in the type: only `View` and `Builtin` content can be
//! reconstructed from a saved workspace. `Inline` content is saved as its
//! title and comes back as a `Placeholder`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::PaneId;

/// Free-form properties passed to a view's render factory
pub type Props = Map<String, Value>;

/// Reference to a view registered in the `ViewRegistry`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewRef {
    pub view_id: String,
    #[serde(default)]
    pub props: Props,
}

impl ViewRef {
    pub fn new(view_id: impl Into<String>) -> Self {
        Self {
            view_id: view_id.into(),
            props: Props::new(),
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }
}

/// Already materialized content with no registry dependency
#[derive(Debug, Clone, PartialEq)]
pub struct InlineContent {
    pub payload: String,
    pub props: Props,
}

impl InlineContent {
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            props: Props::new(),
        }
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }
}

/// Default tabs the shell seeds on first start
///
/// These survive a save/restore cycle through a fixed sentinel tag even
/// though they are not registered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTab {
    Welcome,
    Explorer,
    Properties,
    Console,
}

impl BuiltinTab {
    pub const ALL: [BuiltinTab; 4] = [
        BuiltinTab::Welcome,
        BuiltinTab::Explorer,
        BuiltinTab::Properties,
        BuiltinTab::Console,
    ];

    /// Sentinel written to the `content` field of a persisted tab
    pub fn tag(&self) -> &'static str {
        match self {
            BuiltinTab::Welcome => "builtin:welcome",
            BuiltinTab::Explorer => "builtin:explorer",
            BuiltinTab::Properties => "builtin:properties",
            BuiltinTab::Console => "builtin:console",
        }
    }

    pub fn from_tag(tag: &str) -> Option<BuiltinTab> {
        BuiltinTab::ALL.into_iter().find(|b| b.tag() == tag)
    }

    /// Stable tab id used when seeding the default layout
    pub fn tab_id(&self) -> &'static str {
        match self {
            BuiltinTab::Welcome => "welcome",
            BuiltinTab::Explorer => "explorer",
            BuiltinTab::Properties => "properties",
            BuiltinTab::Console => "console",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BuiltinTab::Welcome => "Welcome",
            BuiltinTab::Explorer => "Explorer",
            BuiltinTab::Properties => "Properties",
            BuiltinTab::Console => "Console",
        }
    }

    /// Pane the tab is placed in by `DockLayout::with_default_tabs`
    pub fn default_pane(&self) -> PaneId {
        match self {
            BuiltinTab::Welcome => PaneId::Center,
            BuiltinTab::Explorer => PaneId::Left,
            BuiltinTab::Properties => PaneId::Right,
            BuiltinTab::Console => PaneId::Bottom,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            BuiltinTab::Welcome => "Drag tabs between panes to rearrange the workspace.",
            BuiltinTab::Explorer => "No folder open",
            BuiltinTab::Properties => "Nothing selected",
            BuiltinTab::Console => "Console ready",
        }
    }
}

/// What a tab renders
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    /// Resolved lazily through the view registry
    View(ViewRef),
    /// Ad hoc content owned by the tab itself
    Inline(InlineContent),
    /// One of the recognized default tabs
    Builtin(BuiltinTab),
    /// Stand-in for content that could not be restored
    Placeholder { title: String },
}

impl TabContent {
    pub fn view_id(&self) -> Option<&str> {
        match self {
            TabContent::View(view) => Some(&view.view_id),
            _ => None,
        }
    }
}

/// A closable unit of content hosted in exactly one pane
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    pub id: String,
    pub title: String,
    pub content: TabContent,
    pub closable: bool,
}

impl Tab {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: TabContent) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
            closable: true,
        }
    }

    /// Tab backed by a registered view
    pub fn view(id: impl Into<String>, title: impl Into<String>, view: ViewRef) -> Self {
        Self::new(id, title, TabContent::View(view))
    }

    /// Tab with inline content
    pub fn inline(
        id: impl Into<String>,
        title: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self::new(id, title, TabContent::Inline(InlineContent::new(payload)))
    }

    /// One of the default tabs; never closable
    pub fn builtin(builtin: BuiltinTab) -> Self {
        Self::new(builtin.tab_id(), builtin.title(), TabContent::Builtin(builtin))
            .with_closable(false)
    }

    pub fn with_closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// Lowercase, dash-separated form of a title
///
/// Runs of non-alphanumeric characters collapse to a single dash. An empty
/// result becomes `"tab"`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if slug.is_empty() {
        "tab".to_string()
    } else {
        slug
    }
}
