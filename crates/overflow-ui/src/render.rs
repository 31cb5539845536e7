//! Server-side rendering to HTML strings.

use dioxus::prelude::*;

/// Render a component with `props` to an HTML fragment.
///
/// The tree is built once; event handlers are attached but never run.
pub fn render_component<P: Clone + 'static>(component: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(component, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a component as the body of a complete HTML document.
pub fn render_document<P: Clone + 'static>(
    page_title: &str,
    component: fn(P) -> Element,
    props: P,
) -> String {
    let head_html = dioxus_ssr::render_element(rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{page_title}" }
        }
    });
    let body_html = render_component(component, props);
    format!("<!DOCTYPE html><html>{head_html}<body>{body_html}</body></html>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct GreetingProps {
        name: String,
    }

    #[component]
    fn Greeting(props: GreetingProps) -> Element {
        rsx! {
            p { class: "greeting", "Hello {props.name}" }
        }
    }

    #[test]
    fn test_component_renders_escaped_fragment() {
        let html = render_component(
            Greeting,
            GreetingProps {
                name: "<alice>".to_string(),
            },
        );

        assert_eq!(html, "<p class=\"greeting\">Hello &lt;alice&gt;</p>");
    }

    #[test]
    fn test_document_wraps_body_and_escapes_title() {
        let html = render_document(
            "Q & A",
            Greeting,
            GreetingProps {
                name: "bob".to_string(),
            },
        );

        assert!(html.starts_with("<!DOCTYPE html><html><head>"));
        assert!(html.contains("<title>Q &amp; A</title>"));
        assert!(html.ends_with("<body><p class=\"greeting\">Hello bob</p></body></html>"));
    }
}
