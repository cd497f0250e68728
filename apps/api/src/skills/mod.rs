pub mod extract;
pub mod handlers;
pub mod ingest;
pub mod normalize;
