//! End-to-end export tests against a scratch site.

use std::fs;
use std::path::Path;

use devlog::config::Config;
use devlog::export;

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Lays down a minimal site and returns its loaded configuration.
fn scratch_site(root: &Path) -> Config {
    write(&root.join("devlog.toml"), "");

    write(&root.join("content/index.html"), "<h1>Hey, I'm Nick</h1>");
    write(
        &root.join("content/index.toml"),
        "title = \"Home\"\ndescription = \"Posts and experiments.\"",
    );

    write(&root.join("content/about.html"), "<h1>About</h1>");
    write(
        &root.join("content/about.toml"),
        "title = \"About\"\nauthor = \"Nick\"",
    );

    write(
        &root.join("content/posts/hello.html"),
        "<p>First post body.</p>",
    );
    write(
        &root.join("content/posts/hello.toml"),
        concat!(
            "title = \"Hello World\"\n",
            "description = \"The obligatory first post.\"\n",
            "tag = \"meta, hello\"\n",
            "date = \"2023-01-01\"\n",
        ),
    );

    write(
        &root.join("content/posts/newer.html"),
        "<p>Second post body.</p>",
    );
    write(
        &root.join("content/posts/newer.toml"),
        "title = \"Newer Post\"\ndate = \"2024-05-05\"",
    );

    write(&root.join("public/styles.css"), "body{}");
    write(&root.join("public/image/home.png"), "png-bytes");

    Config::load(&root.join("devlog.toml")).unwrap()
}

#[test]
fn export_produces_the_deployable_tree() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_site(dir.path());

    let summary = export::perform_export(&config, false).unwrap();
    assert_eq!(summary.posts, 2);
    assert_eq!(summary.pages, 2); // about + index

    let out = dir.path().join("out");
    assert!(out.join("index.html").exists());
    assert!(out.join("about.html").exists());
    assert!(out.join("posts/hello.html").exists());
    assert!(out.join("posts/newer.html").exists());
    assert!(out.join("styles.css").exists());
    assert!(out.join("image/home.png").exists());
}

#[test]
fn index_lists_posts_newest_first_with_chrome() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_site(dir.path());
    export::perform_export(&config, false).unwrap();

    let index = fs::read_to_string(dir.path().join("out/index.html")).unwrap();

    // Intro fragment and the per-page title from the index sidecar.
    assert!(index.contains("<h1>Hey, I'm Nick</h1>"));
    assert!(index.contains("<title>Home | nickbeaulieu.dev</title>"));

    // PostItem rows, newest first.
    let newer = index
        .find("<a href=\"/posts/newer.html\">Newer Post</a>")
        .unwrap();
    let hello = index
        .find("<a href=\"/posts/hello.html\">Hello World</a>")
        .unwrap();
    assert!(newer < hello);
    assert!(index.contains("<span class=\"ml-4 w-20\">2023-01-01</span>"));

    // Read-more only under the described post.
    assert_eq!(index.matches("Read More →").count(), 1);
    assert!(index.contains("The obligatory first post."));

    // Theme chrome: the single nav entry and the footer link.
    assert_eq!(index.matches("https://docs.stashpad.com").count(), 1);
    assert!(index.contains("Stashpad ↗"));
    assert!(index.contains("https://github.com/nickbeaulieu"));
}

#[test]
fn post_pages_carry_their_metadata() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_site(dir.path());
    export::perform_export(&config, false).unwrap();

    let post = fs::read_to_string(dir.path().join("out/posts/hello.html")).unwrap();

    assert!(post.starts_with("<!DOCTYPE html>"));
    assert!(post.contains("<html lang=\"en\" class=\"dark\">"));
    assert!(post.contains("<title>Hello World | nickbeaulieu.dev</title>"));
    assert!(post.contains("<meta name=\"keywords\" content=\"meta, hello\">"));
    assert!(post.contains("<meta name=\"robots\" content=\"follow, index\">"));
    assert!(post.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
    assert!(post.contains("<meta property=\"og:title\" content=\"Hello World\">"));
    assert!(post.contains("<p>First post body.</p>"));
    assert!(post.contains("<link rel=\"stylesheet\" href=\"/styles.css\">"));
}

#[test]
fn pages_without_sidecars_omit_their_tags() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_site(dir.path());
    write(&dir.path().join("content/bare.html"), "<p>Bare.</p>");
    export::perform_export(&config, false).unwrap();

    let bare = fs::read_to_string(dir.path().join("out/bare.html")).unwrap();
    assert!(!bare.contains("<title>"));
    assert!(!bare.contains("og:title\" content=\"Bare"));
    // The site-wide group still carries the document head.
    assert!(bare.contains("<meta property=\"og:site_name\" content=\"nickbeaulieu.dev\">"));
}

#[test]
fn minified_export_still_contains_the_content() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = scratch_site(dir.path());
    config.build.minify_html = true;

    export::perform_export(&config, false).unwrap();
    let post = fs::read_to_string(dir.path().join("out/posts/hello.html")).unwrap();
    assert!(post.contains("First post body."));
    assert!(post.contains("Hello World | nickbeaulieu.dev"));
}

#[test]
fn rerunning_the_export_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let config = scratch_site(dir.path());

    export::perform_export(&config, false).unwrap();
    let first = fs::read_to_string(dir.path().join("out/posts/hello.html")).unwrap();
    export::perform_export(&config, false).unwrap();
    let second = fs::read_to_string(dir.path().join("out/posts/hello.html")).unwrap();
    assert_eq!(first, second);
}
