//! The per-turn observation handed to a controller.

use crate::field::{CellType, FieldError, FieldView};
use crate::location::Location;

/// Health assigned to monsters decoded from ASCII levels.
pub const DEFAULT_MONSTER_HEALTH: u32 = 10;

/// Player state visible to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerView {
    pub location: Location,
    pub health: u32,
    /// Currently equipped item, if any. An empty slot counts as zero bonuses.
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped: Option<ItemView>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonsterView {
    pub location: Location,
    pub health: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemView {
    pub location: Location,
    pub attack_bonus: i32,
    pub defence_bonus: i32,
}

impl ItemView {
    /// True when both bonuses strictly exceed the equipped item's.
    pub fn is_upgrade_over(&self, equipped: Option<&ItemView>) -> bool {
        let (attack, defence) =
            equipped.map_or((0, 0), |item| (item.attack_bonus, item.defence_bonus));
        self.attack_bonus > attack && self.defence_bonus > defence
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HealthPackView {
    pub location: Location,
}

/// Everything the host reveals for one turn.
///
/// The view is rebuilt by the host every turn; controllers must not assume
/// anything carries over except what they remember themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelView {
    pub field: FieldView,
    pub player: PlayerView,
    #[cfg_attr(feature = "serde", serde(default))]
    pub monsters: Vec<MonsterView>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemView>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub health_packs: Vec<HealthPackView>,
}

impl LevelView {
    /// Decodes a level snapshot drawn in ASCII.
    ///
    /// Terrain uses the [`CellType`] glyphs. Entities stand on empty floor:
    /// `@` player, `M` monster ([`DEFAULT_MONSTER_HEALTH`]), `+` health pack,
    /// `$` item with +1/+1 bonuses. The player starts at full health (100) with
    /// nothing equipped; adjust the public fields for other setups.
    pub fn from_ascii<I, S>(rows: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut player = None;
        let mut duplicate = None;
        let mut monsters = Vec::new();
        let mut items = Vec::new();
        let mut health_packs = Vec::new();

        let field = FieldView::decode(rows, |glyph, location| {
            match glyph {
                '@' => {
                    if player.replace(location).is_some() {
                        duplicate.get_or_insert(location);
                    }
                }
                'M' => monsters.push(MonsterView {
                    location,
                    health: DEFAULT_MONSTER_HEALTH,
                }),
                '+' => health_packs.push(HealthPackView { location }),
                '$' => items.push(ItemView {
                    location,
                    attack_bonus: 1,
                    defence_bonus: 1,
                }),
                terrain => return CellType::from_glyph(terrain),
            }
            Some(CellType::Empty)
        })?;

        if let Some(location) = duplicate {
            return Err(FieldError::DuplicatePlayer { location });
        }
        let location = player.ok_or(FieldError::MissingPlayer)?;

        Ok(Self {
            field,
            player: PlayerView {
                location,
                health: 100,
                equipped: None,
            },
            monsters,
            items,
            health_packs,
        })
    }

    pub fn with_player_health(mut self, health: u32) -> Self {
        self.player.health = health;
        self
    }

    pub fn with_equipped(mut self, item: ItemView) -> Self {
        self.player.equipped = Some(item);
        self
    }

    /// Terrain at a location, or `None` outside the field.
    pub fn cell(&self, location: Location) -> Option<CellType> {
        self.field.get(location)
    }

    pub fn monster_at(&self, location: Location) -> Option<&MonsterView> {
        self.monsters.iter().find(|m| m.location == location)
    }

    pub fn item_at(&self, location: Location) -> Option<&ItemView> {
        self.items.iter().find(|i| i.location == location)
    }

    pub fn health_pack_at(&self, location: Location) -> Option<&HealthPackView> {
        self.health_packs.iter().find(|h| h.location == location)
    }

    /// True when `item` beats the equipped item on both bonuses.
    pub fn is_upgrade(&self, item: &ItemView) -> bool {
        item.is_upgrade_over(self.player.equipped.as_ref())
    }

    pub fn has_upgrade_item(&self) -> bool {
        self.items.iter().any(|item| self.is_upgrade(item))
    }

    /// Monsters on the eight cells around the player, the only ones an
    /// attack can reach.
    pub fn adjacent_monsters(&self) -> impl Iterator<Item = &MonsterView> + '_ {
        let player = self.player.location;
        self.monsters
            .iter()
            .filter(move |monster| monster.location.is_in_range(player, 1))
    }
}
