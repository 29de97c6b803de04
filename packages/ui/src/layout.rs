use dioxus::prelude::*;

const LAYOUT_CSS: Asset = asset!("/assets/layout.css");

/// Page frame shared by every view: a header with the page title and an
/// optional action area, followed by a content card.
#[component]
pub fn PageLayout(
    title: String,
    /// Actions rendered on the right side of the header.
    extra: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: LAYOUT_CSS }

        div {
            class: "page-layout",

            header {
                class: "page-layout__header",
                h1 { class: "page-layout__title", "{title}" }
                if let Some(extra) = extra {
                    div { class: "page-layout__extra", {extra} }
                }
            }

            section {
                class: "page-layout__content",
                {children}
            }
        }
    }
}
