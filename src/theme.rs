//! Theme configuration.
//!
//! A theme is a declarative record the export step consumes: static chrome
//! (footer, navigation), a per-page head callback, and styling flags. The
//! head member is a plain closure stored in the record; the engine invokes
//! it later, once per content page.

use crate::config::SiteMetadata;
use crate::head::{self, HeadTag};
use crate::models::PageContext;
use anyhow::{Result, bail};
use maud::{Markup, html};

/// One external navigation entry. Display order is input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    pub url: String,
    pub name: String,
}

/// Per-page head-tag generator, invoked by the engine with that page's
/// context.
pub type HeadFn = Box<dyn Fn(&PageContext) -> Vec<HeadTag> + Send + Sync>;

/// The full theme record.
impl std::fmt::Debug for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Theme")
            .field("footer", &self.footer)
            .field("head", &"<HeadFn>")
            .field("read_more", &self.read_more)
            .field("post_footer", &self.post_footer)
            .field("dark_mode", &self.dark_mode)
            .field("navs", &self.navs)
            .finish()
    }
}

pub struct Theme {
    /// Static footer markup, rendered at the bottom of every page.
    pub footer: Markup,
    /// Per-page head-tag generator.
    pub head: HeadFn,
    /// Link text for summarized index entries.
    pub read_more: String,
    /// Markup appended after every post body, when present.
    pub post_footer: Option<Markup>,
    /// Emits the `dark` class on the document root for class-strategy
    /// styling.
    pub dark_mode: bool,
    /// Ordered external navigation entries for the header.
    pub navs: Vec<Nav>,
}

/// Maps the configured theme name to its record. Unknown names are a
/// configuration error, reported before any output is touched.
pub fn resolve(name: &str, site: &SiteMetadata) -> Result<Theme> {
    match name {
        "blog" => Ok(blog(site)),
        other => bail!("unknown theme '{other}' (available: blog)"),
    }
}

/// The built-in blog theme.
pub fn blog(site: &SiteMetadata) -> Theme {
    let site = site.clone();
    Theme {
        footer: html! {
            hr;
            p class="flex gap-2" {
                a href="https://github.com/nickbeaulieu" target="github" { "Github" }
            }
        },
        head: Box::new(move |ctx| head::page_head(&site, ctx)),
        read_more: "Read More →".to_string(),
        post_footer: None,
        dark_mode: true,
        navs: vec![Nav {
            url: "https://docs.stashpad.com".to_string(),
            name: "Stashpad ↗".to_string(),
        }],
    }
}
