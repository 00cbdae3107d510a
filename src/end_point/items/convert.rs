//! Item composite conversion: one dispatch table entry per documented
//! item `type`, each reading its family's slice of the shared details
//! object.

use super::{InfixUpgradeDto, InfusionSlotDto, ItemDetailsDto, ItemDto};
use crate::convert::{self, dispatch};
use crate::model::item::{
    Armor, AttributeBonus, Back, Bag, Buff, Consumable, Container, GatheringTool, Gizmo,
    InfixUpgrade, InfusionSlot, Item, ItemDetails, MiniPet, Tool, Trinket, UpgradeComponent,
    Weapon,
};

static DETAIL_CONVERTERS: phf::Map<&'static str, fn(&ItemDetailsDto) -> ItemDetails> = phf::phf_map! {
    "Armor" => armor,
    "Back" => back,
    "Bag" => bag,
    "Consumable" => consumable,
    "Container" => container,
    "CraftingMaterial" => crafting_material,
    "Gathering" => gathering,
    "Gizmo" => gizmo,
    "MiniPet" => mini_pet,
    "Tool" => tool,
    "Trinket" => trinket,
    "Trophy" => trophy,
    "UpgradeComponent" => upgrade_component,
    "Weapon" => weapon,
};

pub(crate) fn item(dto: ItemDto) -> Item {
    let kind = dto.kind.unwrap_or_default();
    let details_dto = dto.details.unwrap_or_default();
    let details = dispatch(
        &DETAIL_CONVERTERS,
        |_| ItemDetails::Unknown(kind.clone()),
        &kind,
        &details_dto,
    );
    Item {
        id: dto.id,
        name: dto.name,
        description: dto.description,
        chat_link: dto.chat_link,
        icon: dto.icon,
        rarity: convert::enum_or_default(dto.rarity.as_deref().unwrap_or_default()),
        level: dto.level.unwrap_or_default(),
        vendor_value: dto.vendor_value.unwrap_or_default(),
        default_skin: dto.default_skin,
        flags: convert::flags(&dto.flags),
        game_types: convert::flags(&dto.game_types),
        restrictions: convert::enums(&dto.restrictions),
        details,
    }
}

fn armor(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Armor(Armor {
        slot: kind_of(details),
        weight_class: convert::enum_or_default(details.weight_class.as_deref().unwrap_or_default()),
        defense: details.defense.unwrap_or_default(),
        infusion_slots: infusion_slots(&details.infusion_slots),
        infix_upgrade: details.infix_upgrade.as_ref().map(infix_upgrade),
        suffix_item_id: details.suffix_item_id,
        secondary_suffix_item_id: secondary_suffix(details),
    })
}

fn back(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Back(Back {
        infusion_slots: infusion_slots(&details.infusion_slots),
        infix_upgrade: details.infix_upgrade.as_ref().map(infix_upgrade),
        suffix_item_id: details.suffix_item_id,
        secondary_suffix_item_id: secondary_suffix(details),
    })
}

fn bag(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Bag(Bag {
        size: details.size.unwrap_or_default(),
        no_sell_or_sort: details.no_sell_or_sort.unwrap_or_default(),
    })
}

fn consumable(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Consumable(Consumable {
        kind: kind_of(details),
        description: details.description.clone(),
        duration_ms: details.duration_ms,
        recipe_id: details.recipe_id,
        color_id: details.color_id,
    })
}

fn container(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Container(Container {
        kind: kind_of(details),
    })
}

fn crafting_material(_details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::CraftingMaterial
}

fn gathering(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Gathering(GatheringTool {
        kind: kind_of(details),
    })
}

fn gizmo(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Gizmo(Gizmo {
        kind: kind_of(details),
        guild_upgrade_id: details.guild_upgrade_id,
    })
}

fn mini_pet(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::MiniPet(MiniPet {
        minipet_id: details.minipet_id.unwrap_or_default(),
    })
}

fn tool(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Tool(Tool {
        charges: details.charges.unwrap_or_default(),
    })
}

fn trinket(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Trinket(Trinket {
        kind: kind_of(details),
        infusion_slots: infusion_slots(&details.infusion_slots),
        infix_upgrade: details.infix_upgrade.as_ref().map(infix_upgrade),
        suffix_item_id: details.suffix_item_id,
        secondary_suffix_item_id: secondary_suffix(details),
    })
}

fn trophy(_details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Trophy
}

fn upgrade_component(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::UpgradeComponent(UpgradeComponent {
        kind: kind_of(details),
        infusion_upgrade_flags: convert::flags(&details.infusion_upgrade_flags),
        suffix: details.suffix.clone().unwrap_or_default(),
        infix_upgrade: details.infix_upgrade.as_ref().map(infix_upgrade),
        bonuses: details.bonuses.clone(),
    })
}

fn weapon(details: &ItemDetailsDto) -> ItemDetails {
    ItemDetails::Weapon(Weapon {
        kind: kind_of(details),
        damage_type: convert::enum_or_default(details.damage_type.as_deref().unwrap_or_default()),
        min_power: details.min_power.unwrap_or_default(),
        max_power: details.max_power.unwrap_or_default(),
        defense: details.defense.unwrap_or_default(),
        infusion_slots: infusion_slots(&details.infusion_slots),
        infix_upgrade: details.infix_upgrade.as_ref().map(infix_upgrade),
        suffix_item_id: details.suffix_item_id,
        secondary_suffix_item_id: secondary_suffix(details),
    })
}

/// The nested `type` discriminator shared by several families (armor
/// slot, weapon kind, consumable kind, ...).
fn kind_of<T: std::str::FromStr + Default>(details: &ItemDetailsDto) -> T {
    convert::enum_or_default(details.kind.as_deref().unwrap_or_default())
}

fn secondary_suffix(details: &ItemDetailsDto) -> Option<u32> {
    details
        .secondary_suffix_item_id
        .as_deref()
        .and_then(convert::parse_id_str)
}

fn infusion_slots(dtos: &[InfusionSlotDto]) -> Vec<InfusionSlot> {
    dtos.iter()
        .map(|slot| InfusionSlot {
            flags: convert::flags(&slot.flags),
            item_id: slot.item_id,
        })
        .collect()
}

fn infix_upgrade(dto: &InfixUpgradeDto) -> InfixUpgrade {
    InfixUpgrade {
        id: dto.id.unwrap_or_default(),
        attributes: dto
            .attributes
            .iter()
            .map(|attribute| AttributeBonus {
                attribute: convert::enum_or_default(
                    attribute.attribute.as_deref().unwrap_or_default(),
                ),
                modifier: attribute.modifier.unwrap_or_default(),
            })
            .collect(),
        buff: dto.buff.as_ref().map(|buff| Buff {
            skill_id: buff.skill_id.unwrap_or_default(),
            description: buff.description.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::item;
    use crate::end_point::items::{AttributeDto, InfixUpgradeDto, ItemDetailsDto, ItemDto};
    use crate::model::common::{Attribute, ItemFlag, Rarity, WeightClass};
    use crate::model::item::{ArmorSlot, ConsumableKind, ItemDetails, TrinketKind, WeaponKind};

    fn dto(kind: &str, details: ItemDetailsDto) -> ItemDto {
        ItemDto {
            id: 100,
            kind: Some(kind.to_string()),
            details: Some(details),
            ..ItemDto::default()
        }
    }

    fn detail_kind(kind: &str) -> ItemDetailsDto {
        ItemDetailsDto {
            kind: Some(kind.to_string()),
            ..ItemDetailsDto::default()
        }
    }

    #[test]
    fn boots_come_out_as_boots() {
        let converted = item(dto("Armor", detail_kind("Boots")));
        match converted.details {
            ItemDetails::Armor(armor) => {
                assert_eq!(armor.slot, ArmorSlot::Boots);
                assert_eq!(armor.weight_class, WeightClass::Unknown);
            }
            other => panic!("expected armor details, got {other:?}"),
        }
    }

    #[rstest]
    #[case("Weapon", "Greatsword")]
    #[case("Trinket", "Ring")]
    #[case("Consumable", "Food")]
    fn nested_discriminators_dispatch(#[case] kind: &str, #[case] nested: &str) {
        let converted = item(dto(kind, detail_kind(nested)));
        match (kind, converted.details) {
            ("Weapon", ItemDetails::Weapon(weapon)) => {
                assert_eq!(weapon.kind, WeaponKind::Greatsword)
            }
            ("Trinket", ItemDetails::Trinket(trinket)) => {
                assert_eq!(trinket.kind, TrinketKind::Ring)
            }
            ("Consumable", ItemDetails::Consumable(consumable)) => {
                assert_eq!(consumable.kind, ConsumableKind::Food)
            }
            (_, other) => panic!("wrong details variant {other:?}"),
        }
    }

    #[rstest]
    #[case("")]
    #[case("Outfit")]
    #[case("armor")] // top-level dispatch is case-sensitive
    fn unrecognized_types_become_unknown(#[case] kind: &str) {
        let converted = item(dto(kind, ItemDetailsDto::default()));
        assert_eq!(converted.details, ItemDetails::Unknown(kind.to_string()));
    }

    #[test]
    fn empty_dto_converts_to_defaults() {
        let converted = item(ItemDto::default());
        assert_eq!(converted.id, 0);
        assert_eq!(converted.name, "");
        assert_eq!(converted.rarity, Rarity::Unknown);
        assert_eq!(converted.level, 0);
        assert_eq!(converted.vendor_value, 0);
        assert!(converted.flags.is_empty());
        assert!(converted.restrictions.is_empty());
        assert_eq!(converted.details, ItemDetails::Unknown(String::new()));
    }

    #[rstest]
    #[case(Some("289"), Some(289))]
    #[case(Some("not-an-id"), None)]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn secondary_suffix_parses_or_stays_unset(
        #[case] raw: Option<&str>,
        #[case] expected: Option<u32>,
    ) {
        let details = ItemDetailsDto {
            kind: Some("Coat".to_string()),
            secondary_suffix_item_id: raw.map(str::to_string),
            ..ItemDetailsDto::default()
        };
        let converted = item(dto("Armor", details));
        match converted.details {
            ItemDetails::Armor(armor) => {
                assert_eq!(armor.secondary_suffix_item_id, expected);
                assert_eq!(armor.slot, ArmorSlot::Coat);
            }
            other => panic!("expected armor details, got {other:?}"),
        }
    }

    #[test]
    fn flags_and_infix_convert() {
        let details = ItemDetailsDto {
            kind: Some("Staff".to_string()),
            min_power: Some(985),
            max_power: Some(1111),
            infix_upgrade: Some(InfixUpgradeDto {
                id: Some(141),
                attributes: vec![AttributeDto {
                    attribute: Some("Power".to_string()),
                    modifier: Some(120),
                }],
                buff: None,
            }),
            ..ItemDetailsDto::default()
        };
        let mut raw = dto("Weapon", details);
        raw.flags = vec!["SoulBindOnUse".to_string(), "NewFangledFlag".to_string()];
        let converted = item(raw);
        assert!(converted.flags.contains(ItemFlag::SoulBindOnUse));
        match converted.details {
            ItemDetails::Weapon(weapon) => {
                assert_eq!(weapon.min_power, 985);
                let infix = weapon.infix_upgrade.unwrap();
                assert_eq!(infix.attributes[0].attribute, Attribute::Power);
                assert_eq!(infix.attributes[0].modifier, 120);
            }
            other => panic!("expected weapon details, got {other:?}"),
        }
    }
}
