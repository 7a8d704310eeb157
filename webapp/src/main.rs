#![allow(non_snake_case)]
use std::sync::Arc;

use dioxus::prelude::*;

use tracing::{Level, info};

mod common;
use common::{config::ProfileConfig, style};

mod components;

mod page;
use page::ProfilePage;

mod sections;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");

    // the profile is compiled in, so a parse failure here is a broken build
    let profile = match ProfileConfig::embedded() {
        Ok(val) => val,
        Err(err) => panic!("failed to parse embedded profile: {err}"),
    };
    info!(
        "loaded profile for {} ({} skills, {} projects)",
        profile.name,
        profile.skills.len(),
        profile.projects.len()
    );

    dioxus::LaunchBuilder::new()
        .with_context(Arc::new(profile))
        .launch(App);
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{style::PORTFOLIO_STYLES}" }
        ProfilePage {}
    }
}
