pub mod config;
pub mod scroll;
pub mod section;
pub mod storage;
pub mod style;
pub mod theme;
