//! The discriminated-conversion machinery shared by every endpoint
//! family: an immutable dispatch table from discriminator string to
//! converter fn, plus the leaf converters for the primitive JSON shapes
//! (coordinate arrays, string enums, string flag sets, int-in-string).
//!
//! Converters never fail. Unrecognized discriminators route to the
//! family's `Unknown` fallback, unparseable optional fields are skipped
//! and the domain field keeps its default.

use std::str::FromStr;

use enumflags2::{BitFlag, BitFlags};
use glam::DVec2;

use crate::model::common::Rect;
use crate::prelude::*;

/// Look up `tag` in a compile-time table of converter fns and delegate.
/// Lookup is a case-sensitive exact match; a miss goes to `fallback`,
/// which builds the family's `Unknown` variant.
pub(crate) fn dispatch<D, T>(
    table: &phf::Map<&'static str, fn(&D) -> T>,
    fallback: impl FnOnce(&D) -> T,
    tag: &str,
    dto: &D,
) -> T {
    match table.get(tag) {
        Some(convert) => convert(dto),
        None => {
            debug!(tag, "unrecognized discriminator, using the unknown fallback");
            fallback(dto)
        }
    }
}

/// A `[x, y]` coordinate array. Anything but exactly two components is
/// rejected here so call sites can simply skip the assignment.
pub(crate) fn point(raw: &[f64]) -> Option<DVec2> {
    match raw {
        &[x, y] => Some(DVec2::new(x, y)),
        _ => None,
    }
}

/// A `[[x1, y1], [x2, y2]]` rectangle.
pub(crate) fn rect(raw: &[Vec<f64>]) -> Option<Rect> {
    match raw {
        [min, max] => Some(Rect {
            min: point(min)?,
            max: point(max)?,
        }),
        _ => None,
    }
}

/// Case-insensitive enum parse; anything unparseable becomes the enum's
/// default (`Unknown`) member.
pub(crate) fn enum_or_default<T: FromStr + Default>(raw: &str) -> T {
    raw.parse().unwrap_or_default()
}

/// Parse each name into a flag, silently skipping names this crate does
/// not know about.
pub(crate) fn flags<F>(raw: &[String]) -> BitFlags<F>
where
    F: BitFlag + FromStr,
{
    let mut flags = BitFlags::empty();
    for name in raw {
        match name.parse::<F>() {
            Ok(flag) => flags |= flag,
            Err(_) => debug!(%name, "skipping unrecognized flag"),
        }
    }
    flags
}

/// Parse every name; unknown names come out as the enum's default member
/// rather than being dropped, so the element count is preserved.
pub(crate) fn enums<T: FromStr + Default>(raw: &[String]) -> Vec<T> {
    raw.iter().map(|name| enum_or_default(name)).collect()
}

/// The API encodes some ids as strings (the secondary suffix item id).
/// A failed parse yields `None` and the call site skips the assignment.
pub(crate) fn parse_id_str(raw: &str) -> Option<u32> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use rstest::rstest;

    use super::{enum_or_default, flags, parse_id_str, point, rect};
    use crate::model::common::{ItemFlag, Rarity};

    #[test]
    fn point_preserves_components() {
        assert_eq!(point(&[3.5, -2.0]), Some(DVec2::new(3.5, -2.0)));
    }

    #[rstest]
    #[case(&[])]
    #[case(&[1.0])]
    #[case(&[1.0, 2.0, 3.0])]
    fn point_rejects_wrong_lengths(#[case] raw: &[f64]) {
        assert_eq!(point(raw), None);
    }

    #[test]
    fn rect_requires_two_corners() {
        let full = rect(&[vec![0.0, 0.0], vec![32.0, 32.0]]).unwrap();
        assert_eq!(full.max, DVec2::new(32.0, 32.0));
        assert_eq!(rect(&[vec![0.0, 0.0]]), None);
        assert_eq!(rect(&[vec![0.0], vec![32.0, 32.0]]), None);
    }

    #[rstest]
    #[case("Exotic", Rarity::Exotic)]
    #[case("exotic", Rarity::Exotic)]
    #[case("EXOTIC", Rarity::Exotic)]
    #[case("NotARarity", Rarity::Unknown)]
    #[case("", Rarity::Unknown)]
    fn enum_parse_is_case_insensitive_with_fallback(#[case] raw: &str, #[case] expected: Rarity) {
        assert_eq!(enum_or_default::<Rarity>(raw), expected);
    }

    #[test]
    fn flags_skip_unknown_names() {
        let parsed = flags::<ItemFlag>(&[
            "NoSalvage".to_string(),
            "SomeFutureFlag".to_string(),
            "AccountBound".to_string(),
        ]);
        assert!(parsed.contains(ItemFlag::NoSalvage));
        assert!(parsed.contains(ItemFlag::AccountBound));
        assert_eq!(parsed.iter().count(), 2);
    }

    #[rstest]
    #[case("289", Some(289))]
    #[case("0", Some(0))]
    #[case("", None)]
    #[case("rune-of-holding", None)]
    #[case("12.5", None)]
    fn id_strings_parse_or_skip(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(parse_id_str(raw), expected);
    }
}
