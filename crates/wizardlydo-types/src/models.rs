use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Equip-slot categories the avatar can fill. The label set is closed:
/// anything outside these four is not a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemSlot {
    Outfit,
    Background,
    Accessory,
    Weapon,
}

impl ItemSlot {
    pub const ALL: [ItemSlot; 4] = [
        ItemSlot::Outfit,
        ItemSlot::Background,
        ItemSlot::Accessory,
        ItemSlot::Weapon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Outfit => "OUTFIT",
            Self::Background => "BACKGROUND",
            Self::Accessory => "ACCESSORY",
            Self::Weapon => "WEAPON",
        }
    }

    /// Membership test against the closed label set. Guards against
    /// malformed slot labels arriving from storage or the shell.
    pub fn is_valid(label: &str) -> bool {
        label.parse::<ItemSlot>().is_ok()
    }
}

impl fmt::Display for ItemSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label outside the closed slot set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSlot(pub String);

impl fmt::Display for UnknownSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown equip slot label: {:?}", self.0)
    }
}

impl std::error::Error for UnknownSlot {}

impl FromStr for ItemSlot {
    type Err = UnknownSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OUTFIT" => Ok(Self::Outfit),
            "BACKGROUND" => Ok(Self::Background),
            "ACCESSORY" => Ok(Self::Accessory),
            "WEAPON" => Ok(Self::Weapon),
            other => Err(UnknownSlot(other.to_string())),
        }
    }
}

/// An equippable cosmetic as it appears in the shop and inventory lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub slot: ItemSlot,
}

/// Which item currently occupies each equip slot.
///
/// A read-mostly projection handed to display code. The inventory's
/// per-item equipped flags stay the source of truth; this type never
/// writes back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquippedItems {
    pub outfit: Option<Item>,
    pub background: Option<Item>,
    pub accessory: Option<Item>,
    pub weapon: Option<Item>,
}

impl EquippedItems {
    pub fn get(&self, slot: ItemSlot) -> Option<&Item> {
        match slot {
            ItemSlot::Outfit => self.outfit.as_ref(),
            ItemSlot::Background => self.background.as_ref(),
            ItemSlot::Accessory => self.accessory.as_ref(),
            ItemSlot::Weapon => self.weapon.as_ref(),
        }
    }

    /// New projection with `item` occupying its own slot. Whatever held
    /// the slot before is dropped, so a slot never carries two items.
    pub fn with_equipped(mut self, item: Item) -> Self {
        match item.slot {
            ItemSlot::Outfit => self.outfit = Some(item),
            ItemSlot::Background => self.background = Some(item),
            ItemSlot::Accessory => self.accessory = Some(item),
            ItemSlot::Weapon => self.weapon = Some(item),
        }
        self
    }

    /// New projection with the slot emptied.
    pub fn with_cleared(mut self, slot: ItemSlot) -> Self {
        match slot {
            ItemSlot::Outfit => self.outfit = None,
            ItemSlot::Background => self.background = None,
            ItemSlot::Accessory => self.accessory = None,
            ItemSlot::Weapon => self.weapon = None,
        }
        self
    }
}
