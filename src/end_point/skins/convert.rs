use super::{SkinDetailsDto, SkinDto};
use crate::convert::{self, dispatch};
use crate::model::skin::{ArmorSkin, GatheringSkin, Skin, SkinDetails, WeaponSkin};

static DETAIL_CONVERTERS: phf::Map<&'static str, fn(&SkinDetailsDto) -> SkinDetails> = phf::phf_map! {
    "Armor" => armor,
    "Back" => back,
    "Gathering" => gathering,
    "Weapon" => weapon,
};

pub(crate) fn skin(dto: SkinDto) -> Skin {
    let kind = dto.kind.unwrap_or_default();
    let details_dto = dto.details.unwrap_or_default();
    let details = dispatch(
        &DETAIL_CONVERTERS,
        |_| SkinDetails::Unknown(kind.clone()),
        &kind,
        &details_dto,
    );
    Skin {
        id: dto.id,
        name: dto.name,
        description: dto.description,
        icon: dto.icon,
        rarity: convert::enum_or_default(dto.rarity.as_deref().unwrap_or_default()),
        flags: convert::flags(&dto.flags),
        restrictions: convert::enums(&dto.restrictions),
        details,
    }
}

fn armor(details: &SkinDetailsDto) -> SkinDetails {
    SkinDetails::Armor(ArmorSkin {
        slot: convert::enum_or_default(details.kind.as_deref().unwrap_or_default()),
        weight_class: convert::enum_or_default(details.weight_class.as_deref().unwrap_or_default()),
    })
}

fn back(_details: &SkinDetailsDto) -> SkinDetails {
    SkinDetails::Back
}

fn gathering(details: &SkinDetailsDto) -> SkinDetails {
    SkinDetails::Gathering(GatheringSkin {
        kind: convert::enum_or_default(details.kind.as_deref().unwrap_or_default()),
    })
}

fn weapon(details: &SkinDetailsDto) -> SkinDetails {
    SkinDetails::Weapon(WeaponSkin {
        kind: convert::enum_or_default(details.kind.as_deref().unwrap_or_default()),
        damage_type: convert::enum_or_default(details.damage_type.as_deref().unwrap_or_default()),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::skin;
    use crate::end_point::skins::{SkinDetailsDto, SkinDto};
    use crate::model::common::WeightClass;
    use crate::model::item::ArmorSlot;
    use crate::model::skin::{SkinDetails, SkinFlag};

    fn dto(kind: &str, details: SkinDetailsDto) -> SkinDto {
        SkinDto {
            id: 7,
            kind: Some(kind.to_string()),
            details: Some(details),
            ..SkinDto::default()
        }
    }

    #[test]
    fn armor_skin_dispatches() {
        let converted = skin(dto(
            "Armor",
            SkinDetailsDto {
                kind: Some("Helm".to_string()),
                weight_class: Some("Heavy".to_string()),
                damage_type: None,
            },
        ));
        assert_eq!(
            converted.details,
            SkinDetails::Armor(crate::model::skin::ArmorSkin {
                slot: ArmorSlot::Helm,
                weight_class: WeightClass::Heavy,
            })
        );
    }

    #[rstest]
    #[case("")]
    #[case("Outfit")]
    fn unknown_skin_types_fall_back(#[case] kind: &str) {
        let converted = skin(dto(kind, SkinDetailsDto::default()));
        assert_eq!(converted.details, SkinDetails::Unknown(kind.to_string()));
    }

    #[test]
    fn wardrobe_flags_convert() {
        let mut raw = dto("Back", SkinDetailsDto::default());
        raw.flags = vec!["ShowInWardrobe".to_string(), "SomethingElse".to_string()];
        let converted = skin(raw);
        assert!(converted.flags.contains(SkinFlag::ShowInWardrobe));
        assert_eq!(converted.details, SkinDetails::Back);
    }
}
