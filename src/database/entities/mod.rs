pub mod animators;
pub mod groups;
pub mod participants;
