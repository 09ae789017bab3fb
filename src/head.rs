//! Head-tag assembly.
//!
//! Two callers need the same social-preview tag set: the document shell
//! (site-wide record, once per page) and the theme's per-page head
//! function (page record). Both are built on [`social_tags`], one
//! parameterized routine over a [`SocialFields`] view of whichever record
//! is in play.
//!
//! Emission is conditional throughout: a tag appears in the output iff its
//! source field is defined and non-empty. Values pass through verbatim;
//! escaping happens at render time.

use crate::config::SiteMetadata;
use crate::models::PageContext;
use maud::{Markup, html};

/// Robots directive carried by every page.
pub const ROBOTS_DIRECTIVE: &str = "follow, index";

/// Twitter Card type carried by every page.
pub const TWITTER_CARD: &str = "summary_large_image";

/// A single head-tag descriptor. Rendering to markup is a separate step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    /// The `<title>` text.
    Title(String),
    /// A `<meta name=... content=...>` tag.
    Meta {
        name: &'static str,
        content: String,
    },
    /// A `<meta property=... content=...>` Open Graph tag.
    OpenGraph {
        property: &'static str,
        content: String,
    },
}

impl HeadTag {
    pub fn render(&self) -> Markup {
        match self {
            HeadTag::Title(text) => html! { title { (text) } },
            HeadTag::Meta { name, content } => html! { meta name=(name) content=(content); },
            HeadTag::OpenGraph { property, content } => {
                html! { meta property=(property) content=(content); }
            }
        }
    }
}

/// Renders a tag sequence in order.
pub fn render_tags(tags: &[HeadTag]) -> Markup {
    html! { @for tag in tags { (tag.render()) } }
}

/// The fields the shared social-preview routine draws from, borrowed from
/// either the site-wide record or a page's metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct SocialFields<'a> {
    pub site_name: Option<&'a str>,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image: Option<&'a str>,
    pub twitter_site: Option<&'a str>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn push_meta(tags: &mut Vec<HeadTag>, name: &'static str, value: Option<&str>) {
    if let Some(content) = non_empty(value) {
        tags.push(HeadTag::Meta {
            name,
            content: content.to_string(),
        });
    }
}

fn push_og(tags: &mut Vec<HeadTag>, property: &'static str, value: Option<&str>) {
    if let Some(content) = non_empty(value) {
        tags.push(HeadTag::OpenGraph {
            property,
            content: content.to_string(),
        });
    }
}

/// The shared robots/description/Open Graph/Twitter Card sequence.
///
/// The robots directive and the card type are constants and always
/// present; every other tag obeys the conditional-emission invariant.
pub fn social_tags(fields: &SocialFields) -> Vec<HeadTag> {
    let mut tags = vec![HeadTag::Meta {
        name: "robots",
        content: ROBOTS_DIRECTIVE.to_string(),
    }];
    push_meta(&mut tags, "description", fields.description);
    push_og(&mut tags, "og:site_name", fields.site_name);
    push_og(&mut tags, "og:description", fields.description);
    push_og(&mut tags, "og:title", fields.title);
    push_og(&mut tags, "og:image", fields.image);
    tags.push(HeadTag::Meta {
        name: "twitter:card",
        content: TWITTER_CARD.to_string(),
    });
    push_meta(&mut tags, "twitter:site", fields.twitter_site);
    push_meta(&mut tags, "twitter:title", fields.title);
    push_meta(&mut tags, "twitter:description", fields.description);
    push_meta(&mut tags, "twitter:image", fields.image);
    tags
}

/// Site-wide head tags, sourced from the one global metadata record.
/// Invoked exactly once per page, by the document shell.
pub fn document_head(site: &SiteMetadata) -> Vec<HeadTag> {
    social_tags(&SocialFields {
        site_name: Some(&site.title),
        title: Some(&site.title),
        description: Some(&site.description),
        image: Some(&site.image),
        twitter_site: Some(&site.twitter),
    })
}

/// Per-page head tags: title with the site suffix, keywords and author
/// when present, then the shared social set sourced from the page's
/// metadata record.
pub fn page_head(site: &SiteMetadata, ctx: &PageContext) -> Vec<HeadTag> {
    let mut tags = Vec::new();
    if let Some(title) = non_empty(ctx.title.as_deref()) {
        tags.push(HeadTag::Title(format!("{} | {}", title, site.title)));
    }
    push_meta(&mut tags, "keywords", ctx.meta.tag.as_deref());
    push_meta(&mut tags, "author", ctx.meta.author.as_deref());
    tags.extend(social_tags(&SocialFields {
        site_name: ctx.meta.title.as_deref(),
        title: ctx.meta.title.as_deref(),
        description: ctx.meta.description.as_deref(),
        image: ctx.meta.image.as_deref(),
        twitter_site: Some(&site.twitter),
    }));
    tags
}
