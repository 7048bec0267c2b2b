//! The standard 14-type garden.
//!
//! Four elements pair with themselves and with salt; mors and vitae pair
//! with each other; quicksilver pairs with every metal except gold; the six
//! metals must be cleared in order, gold last and alone.

use super::definition::{PieceTypeDef, PieceTypeId};
use super::registry::Catalog;

pub const SALT: PieceTypeId = PieceTypeId::new(0);
pub const FIRE: PieceTypeId = PieceTypeId::new(1);
pub const WATER: PieceTypeId = PieceTypeId::new(2);
pub const EARTH: PieceTypeId = PieceTypeId::new(3);
pub const AIR: PieceTypeId = PieceTypeId::new(4);
pub const MORS: PieceTypeId = PieceTypeId::new(5);
pub const VITAE: PieceTypeId = PieceTypeId::new(6);
pub const QUICKSILVER: PieceTypeId = PieceTypeId::new(7);
pub const LEAD: PieceTypeId = PieceTypeId::new(8);
pub const TIN: PieceTypeId = PieceTypeId::new(9);
pub const IRON: PieceTypeId = PieceTypeId::new(10);
pub const COPPER: PieceTypeId = PieceTypeId::new(11);
pub const SILVER: PieceTypeId = PieceTypeId::new(12);
pub const GOLD: PieceTypeId = PieceTypeId::new(13);

/// Metals in chain order.
pub const METALS: [PieceTypeId; 6] = [LEAD, TIN, IRON, COPPER, SILVER, GOLD];

impl Catalog {
    /// The standard catalog: 14 types, 55 pieces.
    #[must_use]
    pub fn standard() -> Self {
        let element = |id: PieceTypeId, name: &str| {
            PieceTypeDef::new(id, name, 8).with_matches(&[id, SALT])
        };

        let mut types = vec![
            PieceTypeDef::new(SALT, "salt", 4).with_matches(&[SALT, FIRE, WATER, EARTH, AIR]),
            element(FIRE, "fire"),
            element(WATER, "water"),
            element(EARTH, "earth"),
            element(AIR, "air"),
            PieceTypeDef::new(MORS, "mors", 4).with_matches(&[VITAE]),
            PieceTypeDef::new(VITAE, "vitae", 4).with_matches(&[MORS]),
            PieceTypeDef::new(QUICKSILVER, "quicksilver", 5)
                .with_matches(&[LEAD, TIN, IRON, COPPER, SILVER]),
        ];

        let names = ["lead", "tin", "iron", "copper", "silver", "gold"];
        for (rank, (&metal, name)) in METALS.iter().zip(names).enumerate() {
            let def = PieceTypeDef::new(metal, name, 1).with_metal_rank(rank as u8);
            types.push(if metal == GOLD {
                def
            } else {
                def.with_matches(&[QUICKSILVER])
            });
        }

        Self::assemble(types)
    }
}
