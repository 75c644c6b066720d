use pulldown_cmark::{html, Event, Options, Parser, TagEnd};
use yew::prelude::*;

fn parser_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Raw HTML in the source is emitted as escaped text.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Plain text of a markdown document, for meta descriptions.
pub fn remove_markdown(source: &str) -> String {
    let mut text = String::new();
    for event in Parser::new_ext(source, parser_options()) {
        match event {
            Event::Text(chunk) | Event::Code(chunk) => text.push_str(&chunk),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => text.push(' '),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Properties, PartialEq)]
pub struct MarkdownProps {
    pub content: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Markdown)]
pub fn markdown(props: &MarkdownProps) -> Html {
    let rendered = render_markdown(&props.content);
    html! {
        <div class={props.class.clone()}>
            { Html::from_html_unchecked(AttrValue::from(rendered)) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_links_and_emphasis() {
        let html = render_markdown("Learn [git](/q/git) *today*");
        assert!(html.contains(r#"<a href="/q/git">git</a>"#));
        assert!(html.contains("<em>today</em>"));
    }

    #[test]
    fn strips_markup_for_plain_text() {
        let text = remove_markdown(
            "# Intro\n\nBuild a **store** with [Stripe](https://stripe.com).\nUse `wrangler`.",
        );
        assert_eq!(text, "Intro Build a store with Stripe. Use wrangler.");
    }

    #[test]
    fn escapes_raw_html() {
        let html = render_markdown("Intro <img src=x onerror=alert(1)>\n\n<script>alert(2)</script>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;script&gt;alert(2)&lt;/script&gt;"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    }

    #[test]
    fn empty_input_gives_empty_text() {
        assert_eq!(remove_markdown(""), "");
        assert_eq!(render_markdown(""), "");
    }
}
