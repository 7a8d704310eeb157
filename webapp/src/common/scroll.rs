use std::rc::Rc;

use dioxus::html::ScrollBehavior;
use dioxus::prelude::*;
use tracing::debug;

// something that can be brought into the viewport
//
// implementations fire and forget: there is no completion, cancellation, or
// error to report back to the caller
pub trait ScrollTarget {
    fn scroll_into_view(&self);
}

// smooth scroll aligned to the top of the viewport (the browser default for
// scrollIntoView's block option)
impl ScrollTarget for Rc<MountedData> {
    fn scroll_into_view(&self) {
        let mounted = self.clone();

        spawn(async move {
            if let Err(err) = mounted.scroll_to(ScrollBehavior::Smooth).await {
                debug!("scroll into view failed: {err:?}");
            }
        });
    }
}

// pairs a scroll request with the element it targets
//
// requests made before the element exists are held until it mounts, so a
// request issued in the same event as the section switch still lands once
// the new section renders
#[derive(Debug)]
pub struct ScrollCoordinator<T: ScrollTarget> {
    target: Option<T>,
    pending: bool,
}

impl<T: ScrollTarget> Default for ScrollCoordinator<T> {
    fn default() -> Self {
        ScrollCoordinator {
            target: None,
            pending: false,
        }
    }
}

impl<T: ScrollTarget> ScrollCoordinator<T> {
    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    // scrolls now if the target is mounted, otherwise waits for attach()
    pub fn request(&mut self) {
        match &self.target {
            Some(target) => {
                self.pending = false;
                target.scroll_into_view();
            }
            None => {
                debug!("scroll target not mounted yet, deferring");
                self.pending = true;
            }
        }
    }

    pub fn attach(&mut self, target: T) {
        if self.pending {
            self.pending = false;
            target.scroll_into_view();
        }

        self.target = Some(target);
    }

    // a request that never found its target is dropped along with it
    pub fn detach(&mut self) {
        self.target = None;
        self.pending = false;
    }
}
