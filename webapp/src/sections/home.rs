use std::{rc::Rc, sync::Arc};

use dioxus::prelude::*;
use tracing::warn;

use crate::common::{config::ProfileConfig, scroll::ScrollCoordinator, section::Section};
use crate::page::on_contact_me;

#[derive(Clone, PartialEq, Props)]
pub struct HomeSectionProps {
    active_signal: Signal<Section>,
    scroll_signal: Signal<ScrollCoordinator<Rc<MountedData>>>,
}

#[component]
pub fn HomeSection(props: HomeSectionProps) -> Element {
    let profile = use_context::<Arc<ProfileConfig>>();

    let active_signal = props.active_signal;
    let scroll_signal = props.scroll_signal;

    rsx! {
        div { class: "hero", id: Section::Home.id(), "data-section": Section::Home.id(),
            div { class: "hero-text",
                h2 { class: "hero-title",
                    "Hi,"
                    br {}
                    "I'm "
                    span { class: "highlight", "{profile.name}" }
                    br {}
                    "{profile.headline}"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_contact_me(active_signal, scroll_signal),
                    "Contact Me"
                    span { "aria-hidden": "true", "\u{2192}" }
                }
            }
            Portrait {
                url: profile.portrait_url.clone(),
                name: profile.name.clone(),
                initials: profile.initials(),
            }
        }
    }
}

// falls back to the owner's initials if the image never loads
#[component]
fn Portrait(url: String, name: String, initials: String) -> Element {
    let mut failed_signal = use_signal(|| false);

    rsx! {
        div { class: "portrait-column",
            div { class: "portrait-frame",
                div { class: "portrait-tint" }
                if failed_signal() {
                    div { class: "portrait-initials", "{initials}" }
                } else {
                    img {
                        class: "portrait-image",
                        src: "{url}",
                        alt: "{name}'s portrait",
                        onerror: move |_| {
                            warn!("portrait failed to load, showing initials");
                            failed_signal.set(true);
                        },
                    }
                }
            }
        }
    }
}
