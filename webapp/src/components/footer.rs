use std::sync::Arc;

use dioxus::prelude::*;

use crate::common::config::ProfileConfig;

#[component]
pub fn Footer() -> Element {
    let profile = use_context::<Arc<ProfileConfig>>();

    rsx! {
        footer { class: "page-footer",
            div { class: "container footer-links",
                a {
                    href: "{profile.links.linkedin}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "aria-label": "LinkedIn profile",
                    "LinkedIn"
                }
                a {
                    href: "{profile.links.github}",
                    "aria-label": "GitHub profile",
                    "GitHub"
                }
            }
        }
    }
}
