pub mod confirm;
pub mod filter;
pub mod render;
pub mod source;
pub mod state;
