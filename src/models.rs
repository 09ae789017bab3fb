use serde::Deserialize;

/// Per-page metadata, read from the sidecar TOML file next to a body
/// fragment. Every field is optional: a missing field suppresses the
/// corresponding head tag instead of emitting an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Comma-separated keywords for the `keywords` meta tag.
    pub tag: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    /// Display-formatted date string; also drives newest-first ordering.
    pub date: Option<String>,
}

/// The value the theme's head function is invoked with, once per page.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub title: Option<String>,
    pub meta: PageMeta,
}

impl PageContext {
    pub fn from_meta(meta: PageMeta) -> Self {
        PageContext {
            title: meta.title.clone(),
            meta,
        }
    }
}

/// A content page: slug and site-relative href, the head context, and the
/// body as pre-rendered HTML. Bodies arrive already compiled; the engine
/// never parses markdown.
#[derive(Debug, Clone)]
pub struct Page {
    pub slug: String,
    pub href: String,
    pub context: PageContext,
    pub body: String,
}

impl Page {
    /// Listing title, falling back to the slug.
    pub fn display_title(&self) -> &str {
        self.context.title.as_deref().unwrap_or(&self.slug)
    }

    pub fn display_date(&self) -> &str {
        self.context.meta.date.as_deref().unwrap_or("")
    }
}

/// One entry of the post listing, as handed to the PostItem renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRef {
    pub title: String,
    pub link: String,
    pub date: String,
}

impl From<&Page> for PostRef {
    fn from(page: &Page) -> PostRef {
        PostRef {
            title: page.display_title().to_string(),
            link: page.href.clone(),
            date: page.display_date().to_string(),
        }
    }
}
