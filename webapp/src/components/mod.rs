pub mod footer;
pub mod navigation;
