//! Domain types for the project listing.

mod category;
mod item;

pub use category::Category;
pub use item::ProjectItem;
