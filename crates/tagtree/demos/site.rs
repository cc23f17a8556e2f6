//! Generates a small static site: an HTML page, a stylesheet, a script, a JSON
//! API payload and an RSS-style XML feed.
//!
//! ```text
//! RUST_LOG=info cargo run -p tagtree --example site -- out/
//! ```

use serde_json::json;
use tagtree::tags::{a, body, br, div, h1, head, html, img, li, link, p, script, title, ul};
use tagtree::{Element, FileSink, Node, SiteWriter, Value};
use tracing_subscriber::EnvFilter;

const STYLES: &str = r#"
body {
    font-family: Arial, sans-serif;
    margin: 0;
    padding: 0;
    background-color: #f4f4f4;
}
.card {
    border: 1px solid #ddd;
    border-radius: 8px;
    padding: 16px;
    margin: 16px;
}
"#;

const SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', () => {
    document.querySelectorAll('.card').forEach(card => {
        card.addEventListener('click', () => alert('Card clicked'));
    });
});
"#;

fn card(heading: &str, text: &str, image: &str) -> Element {
    div(
        [
            img(image, &[("alt", heading), ("class_", "card-img")]),
            h1(heading, &[("class_", "card-title")]),
            p(text, &[("class_", "card-content")]),
        ],
        &[("class_", "card")],
    )
}

fn page() -> Element {
    html([
        head([
            title("Generated page"),
            link("styles.css", "stylesheet", &[]),
            script(None, Some("app.js"), &[]),
        ]),
        body([
            Node::from(h1("Hello, world!", &[("style", "color:blue;")])),
            Node::from(p("A paragraph.", &[("class_", "text")])),
            Node::from(div(
                [ul([li("Item 1", &[]), li("Item 2", &[]), li("Item 3", &[])], &[])],
                &[],
            )),
            Node::from(card("Card 1", "First card", "image1.jpg")),
            Node::from(card("Card 2", "Second card", "image2.jpg")),
            Node::from(a("Google", "https://www.google.com", &[("target", "_blank")])),
            Node::from(img("image.jpg", &[("alt", "Example"), ("width", "500")])),
            Node::from(br(&[])),
            Node::from(p("Paragraph after a line break.", &[])),
        ]),
    ])
}

fn main() -> tagtree::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "site".to_string());
    let mut writer = SiteWriter::new(FileSink::new(&out_dir));

    writer.save_html("index.html", &page())?;
    writer.write_css("styles.css", STYLES)?;
    writer.write_js("app.js", SCRIPT)?;

    let api = Value::from(json!({
        "status": "success",
        "data": {
            "users": [
                {"id": 1, "name": "Alice", "email": "alice@example.com"},
                {"id": 2, "name": "Bob", "email": "bob@example.com"}
            ]
        }
    }));
    writer.write_json("api.json", &api)?;

    let feed = Value::from(json!({
        "channel": {
            "title": "Site news",
            "link": "https://example.com",
            "description": "Latest news",
            "item": [
                {"title": "News 1", "link": "https://example.com/news1", "pubDate": "2024-12-01"},
                {"title": "News 2", "link": "https://example.com/news2", "pubDate": "2024-12-02"}
            ]
        }
    }));
    writer.write_xml("rss.xml", "rss", &feed)?;

    tracing::info!(dir = %out_dir, "site generated");
    Ok(())
}
