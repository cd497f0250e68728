pub mod assembler;
pub mod filters;
pub mod handlers;
pub mod seed;
