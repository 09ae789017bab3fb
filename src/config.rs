//! Configuration logic for the devlog engine.
//!
//! This module handles the deserialization of `devlog.toml` and provides
//! sane defaults for any missing fields. It is structured into sub-modules
//! (Site, Build, and Style) to keep the configuration file organized.

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The root configuration schema for a devlog project.
///
/// This struct represents the top-level mapping of the `devlog.toml` file.
/// It combines directory paths, site-wide metadata, and export settings.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    // --- Directory Settings ---

    /// The name of the theme providing chrome, head tags, and navigation.
    /// Only the built-in `blog` theme ships with the engine.
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Directory containing top-level page body fragments (e.g. About).
    /// Defaults to `./content`.
    #[serde(default = "default_pages")]
    pub pages_dir: PathBuf,

    /// Directory containing blog post body fragments.
    /// Defaults to `./content/posts`.
    #[serde(default = "default_posts")]
    pub posts_dir: PathBuf,

    /// Directory for raw assets like images, fonts, and stylesheets.
    /// Everything in here is copied directly to the output.
    #[serde(default = "default_static")]
    pub static_dir: PathBuf,

    /// Target directory for the exported static site.
    /// Defaults to `./out`.
    #[serde(default = "default_output")]
    pub output_dir: PathBuf,

    // --- Core Metadata ---

    /// The base domain for absolute link generation (e.g. "https://example.com").
    #[serde(default = "default_url")]
    pub base_url: String,

    /// Metadata specific to the site identity (title, description, handles).
    #[serde(default)]
    pub site: SiteMetadata,

    /// Settings that control the export step (output mode, minification).
    #[serde(default)]
    pub build: BuildSettings,

    /// Settings consumed by the external styling tool.
    #[serde(default)]
    pub style: StyleSettings,
}

/// Metadata describing the website for SEO and social-preview purposes.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SiteMetadata {
    /// The site name, used in `<title>` suffixes and `og:site_name`.
    #[serde(default = "default_title")]
    pub title: String,

    /// A short description of the site for meta tags and social sharing.
    #[serde(default = "default_description")]
    pub description: String,

    /// Path to the site-wide social preview image.
    #[serde(default = "default_image")]
    pub image: String,

    /// The Twitter handle emitted as `twitter:site`. An empty string
    /// suppresses the tag.
    #[serde(default = "default_twitter")]
    pub twitter: String,

    /// Language code placed on the document root element.
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        SiteMetadata {
            title: default_title(),
            description: default_description(),
            image: default_image(),
            twitter: default_twitter(),
            lang: default_lang(),
        }
    }
}

/// The output mode of the build step. Only static export is implemented;
/// `server` is accepted by the parser so the rejection can name it.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Export,
    Server,
}

/// Flags and options that tune the export step.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BuildSettings {
    /// Output mode. A static export is the only supported value.
    #[serde(default = "default_output_mode")]
    pub output: OutputMode,

    /// Images are copied as-is. Must stay enabled: optimizing images
    /// requires a server runtime the exported site does not have.
    #[serde(default = "default_bool_true")]
    pub unoptimized_images: bool,

    /// If true, the output directory is wiped before every export.
    #[serde(default = "default_bool_true")]
    pub clean_output: bool,

    /// Attempt to minify the final HTML output to save bandwidth.
    #[serde(default = "default_bool_false")]
    pub minify_html: bool,

    /// Site-relative path of the stylesheet linked from every page. The
    /// file itself is produced by the external styling tool and copied
    /// from the static directory.
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        BuildSettings {
            output: default_output_mode(),
            unoptimized_images: default_bool_true(),
            clean_output: default_bool_true(),
            minify_html: default_bool_false(),
            stylesheet: default_stylesheet(),
        }
    }
}

/// Inputs for the external utility-class scanner. The engine carries these
/// paths so the whole site is configured in one file; it never compiles
/// CSS itself.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StyleSettings {
    /// Glob patterns naming every file the class scanner should read.
    /// Markup lives in Rust source here, so the defaults include `src/`.
    #[serde(default = "default_content_globs")]
    pub content: Vec<String>,
}

impl Default for StyleSettings {
    fn default() -> Self {
        StyleSettings {
            content: default_content_globs(),
        }
    }
}

impl Config {
    /// Reads and parses a `devlog.toml`, rebasing relative directories
    /// onto the file's parent so the engine can run from anywhere.
    pub fn load(path: &Path) -> Result<Config> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let mut config: Config = toml::from_str(&raw)
            .with_context(|| format!("could not parse {}", path.display()))?;
        if let Some(root) = path.parent() {
            config.rebase(root);
        }
        Ok(config)
    }

    fn rebase(&mut self, root: &Path) {
        for dir in [
            &mut self.pages_dir,
            &mut self.posts_dir,
            &mut self.static_dir,
            &mut self.output_dir,
        ] {
            if dir.is_relative() {
                *dir = root.join(&*dir);
            }
        }
    }
}

// --- Default value providers ---

fn default_theme_name() -> String { "blog".to_string() }
fn default_pages() -> PathBuf { PathBuf::from("./content") }
fn default_posts() -> PathBuf { PathBuf::from("./content/posts") }
fn default_static() -> PathBuf { PathBuf::from("./public") }
fn default_output() -> PathBuf { PathBuf::from("./out") }
fn default_url() -> String { "https://nickbeaulieu.dev".to_string() }
fn default_title() -> String { "nickbeaulieu.dev".to_string() }
fn default_description() -> String {
    "Hey 👋 I'm Nick! I'm sharing my experiences as a software developer, \
     and things I learn along the way. Currently, my work is focused on \
     Cloudflare, Solid, and Yjs."
        .to_string()
}
fn default_image() -> String { "/image/home.png".to_string() }
fn default_twitter() -> String { "@nickbeaulieu_".to_string() }
fn default_lang() -> String { "en".to_string() }
fn default_output_mode() -> OutputMode { OutputMode::Export }
fn default_stylesheet() -> String { "/styles.css".to_string() }
fn default_content_globs() -> Vec<String> {
    vec!["content/**/*.html".to_string(), "src/**/*.rs".to_string()]
}
fn default_bool_true() -> bool { true }
fn default_bool_false() -> bool { false }
