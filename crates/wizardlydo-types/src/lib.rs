pub mod models;
pub mod signup;
pub mod validate;

pub use models::{EquippedItems, Item, ItemSlot};
pub use signup::SignupState;
