//! Presentational components.
//!
//! Pure markup builders with no state and no side effects. Class lists are
//! utility classes picked up by the external styling tool (the scanner
//! globs in `devlog.toml` cover this file).

use crate::models::{Page, PostRef};
use crate::theme::Nav;
use maud::{Markup, html};

/// One row of the post listing: title link on the left, display date in a
/// fixed-width right-hand span so dates align down the list. The link
/// value passes through unchecked.
pub fn post_item(title: &str, link: &str, date: &str) -> Markup {
    html! {
        div class="flex items-center justify-between mb-4" {
            a href=(link) { (title) }
            span class="ml-4 w-20" { (date) }
        }
    }
}

/// Header navigation. Entries render in input order, nothing more.
pub fn nav_links(navs: &[Nav]) -> Markup {
    html! {
        nav class="flex gap-4 mb-8" {
            @for nav in navs {
                a href=(nav.url) target="_blank" rel="noreferrer" { (nav.name) }
            }
        }
    }
}

/// The index listing: a PostItem per post, with the description and a
/// read-more link under entries that carry a description.
pub fn post_list(posts: &[Page], read_more: &str) -> Markup {
    html! {
        @for post in posts {
            @let entry = PostRef::from(post);
            (post_item(&entry.title, &entry.link, &entry.date))
            @if let Some(description) = post.context.meta.description.as_deref().filter(|d| !d.is_empty()) {
                p class="mb-2" { (description) }
                a class="block mb-8" href=(post.href) { (read_more) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PageContext, PageMeta};

    fn post_page(slug: &str, title: &str, date: &str, description: Option<&str>) -> Page {
        Page {
            slug: slug.to_string(),
            href: format!("/posts/{slug}.html"),
            context: PageContext::from_meta(PageMeta {
                title: Some(title.to_string()),
                date: Some(date.to_string()),
                description: description.map(str::to_string),
                ..PageMeta::default()
            }),
            body: String::new(),
        }
    }

    #[test]
    fn post_item_renders_link_then_date() {
        let rendered = post_item("Hello World", "/posts/hello", "2023-01-01").into_string();

        let link = rendered
            .find("<a href=\"/posts/hello\">Hello World</a>")
            .expect("title link missing");
        let date = rendered
            .find("<span class=\"ml-4 w-20\">2023-01-01</span>")
            .expect("date span missing");
        assert!(link < date, "title must precede date in document order");
    }

    #[test]
    fn nav_links_preserve_input_order() {
        let navs = vec![
            Nav {
                url: "https://docs.stashpad.com".to_string(),
                name: "Stashpad ↗".to_string(),
            },
            Nav {
                url: "https://example.com".to_string(),
                name: "Example".to_string(),
            },
        ];
        let rendered = nav_links(&navs).into_string();
        let first = rendered.find("Stashpad ↗").unwrap();
        let second = rendered.find("Example").unwrap();
        assert!(first < second);
        assert!(rendered.contains("href=\"https://docs.stashpad.com\""));
    }

    #[test]
    fn post_list_adds_read_more_only_with_description() {
        let posts = vec![
            post_page("hello", "Hello World", "2023-01-01", Some("An intro.")),
            post_page("quiet", "Quiet Post", "2023-02-02", None),
        ];
        let rendered = post_list(&posts, "Read More →").into_string();
        assert_eq!(rendered.matches("Read More →").count(), 1);
        assert!(rendered.contains("An intro."));
        assert!(rendered.contains("<a href=\"/posts/quiet.html\">Quiet Post</a>"));
    }
}
