//! The export engine.
//!
//! Orchestrates the static export: validates the build settings, copies
//! static assets, loads content fragments with their sidecar metadata, and
//! assembles every page through the theme and the document shell. Page
//! bodies arrive as pre-rendered HTML; compiling markdown or stylesheets
//! is the job of external tools and never happens here.

use crate::components;
use crate::config::{Config, OutputMode};
use crate::models::{Page, PageContext, PageMeta};
use crate::shell;
use crate::theme::{self, Theme};
use anyhow::{Context as _, Result, bail};
use console::style;
use maud::{Markup, PreEscaped, html};
use minify_html::{Cfg, minify};
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// What an export produced, for the caller's summary line.
#[derive(Debug, Clone, Copy)]
pub struct ExportSummary {
    pub posts: usize,
    pub pages: usize,
}

/// Rejects build settings the static exporter cannot honor. Also used by
/// `devlog check` so misconfiguration surfaces without touching output.
pub fn validate_build_settings(config: &Config) -> Result<()> {
    if config.build.output != OutputMode::Export {
        bail!("output mode 'server' is not supported: set build.output = \"export\"");
    }
    if !config.build.unoptimized_images {
        bail!(
            "image optimization requires a server runtime; \
             set build.unoptimized_images = true for a static export"
        );
    }
    Ok(())
}

/// Minifies final HTML when the build asks for it.
fn process_html(html: String, should_minify: bool) -> String {
    if !should_minify {
        return html;
    }

    let mut cfg = Cfg::new();
    cfg.minify_js = true;
    cfg.minify_css = true;
    cfg.keep_comments = false;

    let minified = minify(html.as_bytes(), &cfg);
    String::from_utf8(minified).unwrap_or(html)
}

/// Recursive copy of the static directory into the output root.
fn copy_static(src: &Path, dst: &Path) -> Result<()> {
    for entry in walkdir::WalkDir::new(src) {
        let entry = entry?;
        let rel = entry.path().strip_prefix(src)?;
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Loads every `.html` fragment directly under `dir`, pairing each with
/// its optional `.toml` sidecar. A missing sidecar degrades to an empty
/// context; the corresponding head tags are simply omitted.
fn load_fragments(dir: &Path, href_prefix: &str) -> Result<Vec<Page>> {
    let mut pages = Vec::new();
    if !dir.exists() {
        return Ok(pages);
    }

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension().is_none_or(|e| e != "html") {
            continue;
        }
        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .with_context(|| format!("non-UTF-8 file name: {}", path.display()))?
            .to_string();
        let body = fs::read_to_string(&path)
            .with_context(|| format!("could not read {}", path.display()))?;

        let sidecar = path.with_extension("toml");
        let meta: PageMeta = if sidecar.exists() {
            let raw = fs::read_to_string(&sidecar)?;
            toml::from_str(&raw)
                .with_context(|| format!("could not parse {}", sidecar.display()))?
        } else {
            PageMeta::default()
        };

        pages.push(Page {
            href: format!("{href_prefix}{slug}.html"),
            slug,
            context: PageContext::from_meta(meta),
            body,
        });
    }

    pages.sort_by(|a, b| a.slug.cmp(&b.slug));
    Ok(pages)
}

/// The chrome every page shares: header navigation, the page content, the
/// theme footer.
fn page_body(theme: &Theme, content: Markup) -> Markup {
    html! {
        header { (components::nav_links(&theme.navs)) }
        (content)
        footer { (theme.footer) }
    }
}

/// Assembles one content page into a complete HTML document.
fn render_page(config: &Config, theme: &Theme, page: &Page) -> String {
    let tags = (theme.head)(&page.context);
    let content = html! {
        article {
            (PreEscaped(page.body.as_str()))
            @if let Some(post_footer) = &theme.post_footer { (post_footer) }
        }
    };
    let document = shell::document(
        &config.site,
        &config.build,
        theme,
        &tags,
        page_body(theme, content),
    );
    process_html(document.into_string(), config.build.minify_html)
}

/// Assembles the index: the optional intro fragment, then the post list.
fn render_index(config: &Config, theme: &Theme, intro: Option<&Page>, posts: &[Page]) -> String {
    let context = intro.map(|p| p.context.clone()).unwrap_or_default();
    let tags = (theme.head)(&context);
    let content = html! {
        @if let Some(intro) = intro { (PreEscaped(intro.body.as_str())) }
        (components::post_list(posts, &theme.read_more))
    };
    let document = shell::document(
        &config.site,
        &config.build,
        theme,
        &tags,
        page_body(theme, content),
    );
    process_html(document.into_string(), config.build.minify_html)
}

/// The orchestrator of the devlog export.
pub fn perform_export(config: &Config, verbose: bool) -> Result<ExportSummary> {
    validate_build_settings(config)?;
    let theme = theme::resolve(&config.theme, &config.site)?;

    // --- STEP 1: OUTPUT DIRECTORY ---
    if config.build.clean_output && config.output_dir.exists() {
        if verbose {
            println!("{} Cleaning output directory...", style("[1/5]").dim());
        }
        let _ = fs::remove_dir_all(&config.output_dir);
    }
    let posts_out = config.output_dir.join("posts");
    fs::create_dir_all(&posts_out)
        .with_context(|| format!("could not create {}", posts_out.display()))?;

    // --- STEP 2: STATIC ASSETS ---
    if config.static_dir.exists() {
        if verbose {
            println!("{} Copying static assets...", style("[2/5]").dim());
        }
        copy_static(&config.static_dir, &config.output_dir)?;
    }

    // --- STEP 3: CONTENT INGESTION ---
    if verbose {
        println!("{} Loading content...", style("[3/5]").dim());
    }
    let mut pages = load_fragments(&config.pages_dir, "/")?;
    let mut posts = load_fragments(&config.posts_dir, "/posts/")?;

    // The index fragment is assembled specially, together with the list.
    let intro = pages
        .iter()
        .position(|p| p.slug == "index")
        .map(|i| pages.remove(i));

    // Newest first. Dates are opaque display strings, but the site writes
    // them big-endian, so a descending lexicographic order holds.
    posts.sort_by(|a, b| b.context.meta.date.cmp(&a.context.meta.date));

    // --- STEP 4: PAGE ASSEMBLY ---
    if verbose {
        println!("{} Assembling pages...", style("[4/5]").dim());
    }
    let targets: Vec<(&Page, PathBuf)> = posts
        .iter()
        .map(|p| (p, posts_out.join(format!("{}.html", p.slug))))
        .chain(
            pages
                .iter()
                .map(|p| (p, config.output_dir.join(format!("{}.html", p.slug)))),
        )
        .collect();

    targets.par_iter().try_for_each(|(page, dest)| {
        let rendered = render_page(config, &theme, page);
        fs::write(dest, rendered).with_context(|| format!("could not write {}", dest.display()))
    })?;

    // --- STEP 5: INDEX ---
    if verbose {
        println!("{} Writing index...", style("[5/5]").dim());
    }
    let index = render_index(config, &theme, intro.as_ref(), &posts);
    let index_dest = config.output_dir.join("index.html");
    fs::write(&index_dest, index)
        .with_context(|| format!("could not write {}", index_dest.display()))?;

    Ok(ExportSummary {
        posts: posts.len(),
        pages: pages.len() + 1,
    })
}
