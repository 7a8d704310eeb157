use std::sync::Arc;

use dioxus::prelude::*;

use crate::common::{config::ProfileConfig, section::Section};

#[component]
pub fn SkillsSection() -> Element {
    let profile = use_context::<Arc<ProfileConfig>>();

    rsx! {
        div { id: Section::Skills.id(), "data-section": Section::Skills.id(),
            h2 { class: "section-title", "Skills" }
            div { class: "skill-list",
                for (index, skill) in profile.skills.iter().enumerate() {
                    span { key: "{index}", class: "skill-badge", "{skill}" }
                }
            }
        }
    }
}
