use std::{rc::Rc, sync::Arc};

use dioxus::prelude::*;

use crate::common::{config::ProfileConfig, scroll::ScrollCoordinator, section::Section};

#[derive(Clone, PartialEq, Props)]
pub struct ContactSectionProps {
    scroll_signal: Signal<ScrollCoordinator<Rc<MountedData>>>,
}

// registers its container as the scroll target while it is on the page
#[component]
pub fn ContactSection(props: ContactSectionProps) -> Element {
    let profile = use_context::<Arc<ProfileConfig>>();
    let mut scroll_signal = props.scroll_signal;

    use_drop(move || {
        if let Ok(mut scroll) = scroll_signal.try_write() {
            scroll.detach();
        }
    });

    rsx! {
        div {
            id: Section::Contact.id(),
            "data-section": Section::Contact.id(),
            onmounted: move |event: MountedEvent| scroll_signal.write().attach(event.data()),
            h2 { class: "section-title", "Contact" }
            div { class: "contact-rows",
                p { class: "contact-row",
                    span { class: "contact-glyph", "aria-hidden": "true", "\u{2709}" }
                    a { href: "mailto:{profile.contact.email}", "{profile.contact.email}" }
                }
                p { class: "contact-row",
                    span { class: "contact-glyph", "aria-hidden": "true", "\u{2316}" }
                    "{profile.contact.location}"
                }
            }
        }
    }
}
