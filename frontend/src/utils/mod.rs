pub mod assets;
pub mod cookies;
pub mod pagination;
pub mod time;
