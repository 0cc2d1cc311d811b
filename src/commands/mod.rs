// Slash commands
pub mod escada;
pub mod help;
pub mod insignias;
pub mod member_lookup;
pub mod niveis;
pub mod ranking;
