//! Thin persistence helpers over sea-orm. No validation happens here.

pub mod category;
pub mod menu_item;
pub mod user;
