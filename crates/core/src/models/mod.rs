//! Data models for AllSafe

mod account;
mod product;
mod purchase;

pub use account::*;
pub use product::*;
pub use purchase::*;
