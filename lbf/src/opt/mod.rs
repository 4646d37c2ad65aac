pub mod engine;
pub mod score;
pub mod search;
pub mod selector;
