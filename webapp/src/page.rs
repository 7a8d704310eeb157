use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::common::{
    config::ProfileConfig,
    scroll::{ScrollCoordinator, ScrollTarget},
    section::Section,
    storage::BrowserStore,
    theme::{PersistTheme, RootClass, ThemeController},
};
use crate::components::{footer::Footer, navigation::NavBar};
use crate::sections::*;

// "Contact Me": switch sections first, then ask for the scroll
//
// the contact container usually doesn't exist yet at this point, in which
// case the coordinator holds the request until the container mounts
pub fn contact_me<T: ScrollTarget>(active: &mut Section, scroll: &mut ScrollCoordinator<T>) {
    *active = Section::Contact;
    scroll.request();
}

// the CTA's click handler
pub fn on_contact_me(
    mut active_signal: Signal<Section>,
    mut scroll_signal: Signal<ScrollCoordinator<Rc<MountedData>>>,
) {
    contact_me(&mut active_signal.write(), &mut scroll_signal.write());
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionContentProps {
    active_signal: Signal<Section>,
    scroll_signal: Signal<ScrollCoordinator<Rc<MountedData>>>,
}

// exactly one content block, chosen by the active section
#[component]
pub fn SectionContent(props: SectionContentProps) -> Element {
    let active_signal = props.active_signal;
    let scroll_signal = props.scroll_signal;

    match active_signal() {
        Section::Home => rsx! {
            HomeSection { active_signal: active_signal, scroll_signal: scroll_signal }
        },
        Section::About => rsx! { AboutSection {} },
        Section::Skills => rsx! { SkillsSection {} },
        Section::Works => rsx! { WorksSection {} },
        Section::Contact => rsx! { ContactSection { scroll_signal: scroll_signal } },
    }
}

// wires the page to the browser: localStorage and the body class
#[component]
pub fn ProfilePage() -> Element {
    let active_signal = use_signal(Section::default);
    let scroll_signal = use_signal(ScrollCoordinator::<Rc<MountedData>>::default);
    let theme_signal = use_signal(|| {
        ThemeController::default()
            .observe(PersistTheme::new(BrowserStore))
            .observe(RootClass)
            .mount(&BrowserStore)
    });

    rsx! {
        ProfileView {
            active_signal: active_signal,
            scroll_signal: scroll_signal,
            theme_signal: theme_signal,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ProfileViewProps {
    active_signal: Signal<Section>,
    scroll_signal: Signal<ScrollCoordinator<Rc<MountedData>>>,
    theme_signal: Signal<ThemeController>,
}

#[component]
pub fn ProfileView(props: ProfileViewProps) -> Element {
    let profile = use_context::<Arc<ProfileConfig>>();

    let active_signal = props.active_signal;
    let scroll_signal = props.scroll_signal;
    let theme_signal = props.theme_signal;

    let theme = theme_signal.read().theme();

    rsx! {
        div { class: "page {theme.as_str()}",
            NavBar {
                owner: profile.name.clone(),
                active_signal: active_signal,
                theme_signal: theme_signal,
            }
            main { class: "container page-content",
                SectionContent { active_signal: active_signal, scroll_signal: scroll_signal }
            }
            Footer {}
        }
    }
}
