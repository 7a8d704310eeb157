pub mod about;
pub mod contact;
pub mod home;
pub mod skills;
pub mod works;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use home::HomeSection;
pub use skills::SkillsSection;
pub use works::WorksSection;
