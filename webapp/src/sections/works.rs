use std::sync::Arc;

use dioxus::prelude::*;

use crate::common::{
    config::{ProfileConfig, Project},
    section::Section,
};

#[derive(Clone, PartialEq, Props)]
struct ProjectCardProps {
    project: Project,
}

#[component]
fn ProjectCard(props: ProjectCardProps) -> Element {
    let project = props.project;

    rsx! {
        div { class: "card project-card",
            h3 { class: "project-title", "{project.title}" }
            p { class: "project-description", "{project.description}" }
            a { class: "project-link", href: "{project.link}", "Learn more" }
        }
    }
}

#[component]
pub fn WorksSection() -> Element {
    let profile = use_context::<Arc<ProfileConfig>>();

    rsx! {
        div { id: Section::Works.id(), "data-section": Section::Works.id(),
            h2 { class: "section-title", "Projects" }
            div { class: "project-grid",
                for (index, project) in profile.projects.iter().enumerate() {
                    ProjectCard { key: "{index}", project: project.clone() }
                }
            }
        }
    }
}
