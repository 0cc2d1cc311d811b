// Data models
pub mod member;
