#[macro_use]
extern crate lazy_static;

pub mod annotate;
pub mod card;
pub mod error;
pub mod links;
pub mod models;
pub mod order;
pub mod page;
pub mod render;
pub mod source;
pub mod transforms;
