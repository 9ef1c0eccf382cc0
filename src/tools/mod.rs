// Modular tools
pub mod dom;
pub mod extract;
pub mod fetch;
