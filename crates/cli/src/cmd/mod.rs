pub mod export;
pub mod output;
