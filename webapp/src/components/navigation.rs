use dioxus::prelude::*;
use tracing::debug;

use crate::common::{
    section::Section,
    theme::{Theme, ThemeController},
};

// nav item click handler
pub fn select_section(mut active_signal: Signal<Section>, section: Section) {
    active_signal.set(section);
}

// theme toggle click handler
pub fn toggle_theme(mut theme_signal: Signal<ThemeController>) -> Theme {
    let theme = theme_signal.write().toggle();
    debug!("theme switched to {}", theme.as_str());
    theme
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    section: Section,
    active_signal: Signal<Section>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let section = props.section;
    let active_signal = props.active_signal;

    rsx! {
        li {
            button {
                class: if active_signal() == section { "btn nav-link active" } else { "btn nav-link" },
                r#type: "button",
                "data-nav": section.id(),
                onclick: move |_| select_section(active_signal, section),
                "{section.label()}"
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct ThemeToggleProps {
    theme_signal: Signal<ThemeController>,
}

// sun while dark (switch to light), moon while light
#[component]
fn ThemeToggle(props: ThemeToggleProps) -> Element {
    let theme_signal = props.theme_signal;
    let theme = theme_signal.read().theme();

    let label = if theme.is_dark() { "Switch to light mode" } else { "Switch to dark mode" };


    rsx! {
        button {
            class: "btn btn-icon theme-toggle",
            r#type: "button",
            "aria-label": label,
            onclick: move |_| {
                toggle_theme(theme_signal);
            },
            if theme.is_dark() { "\u{2600}" } else { "\u{263E}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    owner: String,
    active_signal: Signal<Section>,
    theme_signal: Signal<ThemeController>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let active_signal = props.active_signal;

    rsx! {
        header { class: "app-header",
            div { class: "container nav-container",
                h1 { class: "owner-name", "{props.owner}" }

                nav { class: "nav",
                    ul { class: "nav-links",
                        for section in Section::ALL {
                            NavBarButton {
                                key: "{section}",
                                section: section,
                                active_signal: active_signal,
                            }
                        }
                    }
                    ThemeToggle { theme_signal: props.theme_signal }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn Harness(active: Section, theme: Theme) -> Element {
        let active_signal = use_signal(|| active);
        let theme_signal = use_signal(move || {
            let mut controller = ThemeController::default();
            controller.set(theme);
            controller
        });

        rsx! {
            NavBar {
                owner: "Owner".to_owned(),
                active_signal: active_signal,
                theme_signal: theme_signal,
            }
        }
    }

    fn render(active: Section, theme: Theme) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { active, theme });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn one_button_per_section_in_order() {
        let html = render(Section::Home, Theme::Light);

        let mut cursor = 0;
        for section in Section::ALL {
            let marker = format!("data-nav=\"{}\"", section.id());
            let found = html[cursor..]
                .find(&marker)
                .unwrap_or_else(|| panic!("{section} missing or out of order"));
            cursor += found + 1;
        }
        assert_eq!(html.matches("data-nav=").count(), Section::ALL.len());
    }

    #[test]
    fn only_active_section_is_highlighted() {
        for active in Section::ALL {
            let html = render(active, Theme::Light);

            assert_eq!(html.matches("nav-link active").count(), 1, "{active}");

            let highlighted = html
                .split("<button")
                .find(|button| button.contains("nav-link active"))
                .unwrap();
            assert!(
                highlighted.contains(&format!("data-nav=\"{}\"", active.id())),
                "{active}: {highlighted}"
            );
        }
    }

    #[test]
    fn toggle_glyph_follows_theme() {
        assert!(render(Section::Home, Theme::Light).contains("Switch to dark mode"));
        assert!(render(Section::Home, Theme::Dark).contains("Switch to light mode"));
    }
}
