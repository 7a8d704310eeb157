use std::sync::Arc;

use dioxus::prelude::*;

use crate::common::{config::ProfileConfig, section::Section};

// decorative only, the real links live in the footer
const SOCIAL_GLYPHS: [&str; 4] = ["\u{1D54F}", "f", "\u{25CE}", "\u{2630}"];

#[component]
pub fn AboutSection() -> Element {
    let profile = use_context::<Arc<ProfileConfig>>();
    let about = &profile.about;

    rsx! {
        div { class: "card", id: Section::About.id(), "data-section": Section::About.id(),
            div { class: "about-header",
                h2 { class: "about-index", "01" }
                div { class: "social-glyphs", "aria-hidden": "true",
                    for glyph in SOCIAL_GLYPHS {
                        span { "{glyph}" }
                    }
                }
            }
            h3 { class: "about-greeting", "{about.greeting}" }
            p { class: "about-text", "{about.summary}" }
            h4 { class: "about-subtitle", "Education" }
            p { class: "about-text", "{about.education}" }
            p { class: "about-text", "{about.specialization}" }
        }
    }
}
