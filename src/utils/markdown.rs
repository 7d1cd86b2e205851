//! Markdown rendering for item descriptions.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown to HTML safe to inject with `inner_html`.
///
/// Raw HTML in the source is escaped by comrak, and the output is passed
/// through `ammonia` so only an allowlisted tag set survives.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.autolink = true;

    ammonia::clean(&render(markdown, &options))
}
