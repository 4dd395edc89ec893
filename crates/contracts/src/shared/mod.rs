pub mod config;
pub mod documents;
pub mod error;
pub mod lazy;
pub mod navigation;
pub mod refresh;
pub mod schema;
pub mod selection;
pub mod wizard;
