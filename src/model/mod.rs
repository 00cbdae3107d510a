//! Strongly typed entities built by the converters and handed to
//! callers. Entities own all of their data; nothing in this layer is
//! shared or mutated after construction.

pub mod build;
pub mod common;
pub mod item;
pub mod map;
pub mod recipe;
pub mod skin;
pub mod world;

pub use build::Build;
pub use item::{Item, ItemDetails};
pub use map::Map;
pub use recipe::Recipe;
pub use skin::{Skin, SkinDetails};
pub use world::World;
