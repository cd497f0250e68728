pub mod position;
pub mod skill;
pub mod user;
