//! The document shell.
//!
//! Builds the full HTML document around an assembled page body: doctype,
//! root element, head mount, body mount. Invoked exactly once per exported
//! page. The head mount carries the site-wide tag sequence first and the
//! per-page sequence after it.

use crate::config::{BuildSettings, SiteMetadata};
use crate::head::{self, HeadTag};
use crate::theme::Theme;
use maud::{DOCTYPE, Markup, html};

pub fn document(
    site: &SiteMetadata,
    build: &BuildSettings,
    theme: &Theme,
    page_tags: &[HeadTag],
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(site.lang) class=[theme.dark_mode.then_some("dark")] {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (head::render_tags(&head::document_head(site)))
                (head::render_tags(page_tags))
                link rel="stylesheet" href=(build.stylesheet);
            }
            body {
                main { (body) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildSettings;
    use crate::theme;

    fn render(page_tags: &[HeadTag]) -> String {
        let site = SiteMetadata::default();
        let build = BuildSettings::default();
        let blog = theme::blog(&site);
        document(&site, &build, &blog, page_tags, html! { p { "hi" } }).into_string()
    }

    #[test]
    fn shell_wraps_body_in_a_complete_document() {
        let rendered = render(&[]);
        assert!(rendered.starts_with("<!DOCTYPE html>"));
        assert!(rendered.contains("<html lang=\"en\" class=\"dark\">"));
        assert!(rendered.contains("<meta charset=\"utf-8\">"));
        assert!(rendered.contains("<link rel=\"stylesheet\" href=\"/styles.css\">"));
        assert!(rendered.contains("<main><p>hi</p></main>"));
    }

    #[test]
    fn shell_emits_the_site_wide_head_once() {
        let rendered = render(&[]);
        assert_eq!(
            rendered
                .matches("<meta property=\"og:site_name\" content=\"nickbeaulieu.dev\">")
                .count(),
            1
        );
        assert!(rendered.contains("<meta name=\"robots\" content=\"follow, index\">"));
    }

    #[test]
    fn page_tags_follow_the_site_wide_group() {
        let rendered = render(&[HeadTag::Title("About | nickbeaulieu.dev".to_string())]);
        let global = rendered.find("og:site_name").unwrap();
        let page = rendered.find("<title>").unwrap();
        assert!(global < page);
    }

    #[test]
    fn dark_class_tracks_the_theme_flag() {
        let site = SiteMetadata::default();
        let build = BuildSettings::default();
        let mut blog = theme::blog(&site);
        blog.dark_mode = false;
        let rendered = document(&site, &build, &blog, &[], html! {}).into_string();
        assert!(rendered.contains("<html lang=\"en\">"));
        assert!(!rendered.contains("class=\"dark\""));
    }
}
