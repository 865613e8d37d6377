//! Tests for tile codes, kind sets and the variant catalogue

#[cfg(test)]
mod tests {
    use shoreline::spatial::tiles::{KindSet, TileKind, Variant};

    // Tests that wire codes follow declaration order and decode back
    // Verified by swapping two variants in the enum declaration
    #[test]
    fn test_tile_codes_round_trip_in_declaration_order() {
        for (index, kind) in TileKind::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(kind.code()), index);
            assert_eq!(TileKind::from_code(i32::from(kind.code())), Some(kind));
        }

        assert_eq!(TileKind::Land.code(), 0);
        assert_eq!(TileKind::CoastalWater.code(), 1);
        assert_eq!(TileKind::Water.code(), 2);
        assert_eq!(TileKind::Grass.code(), 3);
        assert_eq!(TileKind::Forest.code(), 4);
    }

    // Tests rejection of codes outside the tile range, including the unset sentinel
    // Verified by adding a catch-all arm mapping to Land
    #[test]
    fn test_from_code_rejects_unknown_codes() {
        assert_eq!(TileKind::from_code(-1), None);
        assert_eq!(TileKind::from_code(5), None);
        assert_eq!(TileKind::from_code(i32::MAX), None);
    }

    // Tests kind set construction ignores duplicates and iterates in code order
    // Verified by iterating TileKind::ALL in reverse
    #[test]
    fn test_kind_set_membership_and_order() {
        let set = KindSet::of(&[TileKind::Grass, TileKind::Land, TileKind::Grass]);

        assert_eq!(set.len(), 2);
        assert!(set.contains(TileKind::Land));
        assert!(set.contains(TileKind::Grass));
        assert!(!set.contains(TileKind::Water));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![TileKind::Land, TileKind::Grass]
        );
        assert_eq!(set.nth(1), Some(TileKind::Grass));
        assert_eq!(set.nth(2), None);
    }

    // Tests empty set and incremental construction helpers
    #[test]
    fn test_kind_set_empty_and_builders() {
        assert!(KindSet::EMPTY.is_empty());
        assert_eq!(KindSet::EMPTY.len(), 0);
        assert_eq!(KindSet::EMPTY.nth(0), None);

        let built = KindSet::EMPTY.with(TileKind::Forest).with(TileKind::Water);
        let collected: KindSet = [TileKind::Water, TileKind::Forest].into_iter().collect();
        assert_eq!(built, collected);
        assert!(!built.is_empty());
    }

    // Tests that the standard variant excludes forest and the extended one uses every kind
    // Verified by adding Forest to the standard kind list
    #[test]
    fn test_variant_kind_sets() {
        let standard = Variant::Standard4.kinds();
        assert_eq!(standard.len(), 4);
        assert!(!standard.contains(TileKind::Forest));
        assert_eq!(
            standard.iter().collect::<Vec<_>>(),
            vec![
                TileKind::Land,
                TileKind::CoastalWater,
                TileKind::Water,
                TileKind::Grass
            ]
        );

        let extended = Variant::Extended5.kinds();
        assert_eq!(extended.len(), TileKind::COUNT);
        assert!(TileKind::ALL.into_iter().all(|kind| extended.contains(kind)));
    }

    // Tests variant defaults, names and JSON spelling
    // Verified by changing the serde rename rule to camelCase
    #[test]
    fn test_variant_names_and_serde() {
        assert_eq!(Variant::default(), Variant::Standard4);
        assert_eq!(Variant::Standard4.default_iterations(), 10);
        assert_eq!(Variant::Extended5.default_iterations(), 10);
        assert_eq!(Variant::Extended5.to_string(), "extended5");

        let encoded = serde_json::to_string(&Variant::Extended5).unwrap_or_default();
        assert_eq!(encoded, "\"extended5\"");

        let decoded: Option<Variant> = serde_json::from_str("\"standard4\"").ok();
        assert_eq!(decoded, Some(Variant::Standard4));
        assert!(serde_json::from_str::<Variant>("\"Standard4\"").is_err());
    }

    // Tests that only the extended variant honours a requested round count
    // Verified by returning the request for both variants
    #[test]
    fn test_rounds_for_request() {
        assert_eq!(Variant::Standard4.rounds_for(Some(3)), 10);
        assert_eq!(Variant::Standard4.rounds_for(None), 10);
        assert_eq!(Variant::Extended5.rounds_for(Some(0)), 0);
        assert_eq!(Variant::Extended5.rounds_for(Some(42)), 42);
        assert_eq!(Variant::Extended5.rounds_for(None), 10);
        assert!(!Variant::Standard4.honours_iterations());
        assert!(Variant::Extended5.honours_iterations());
    }

    // Tests human readable names used in messages
    #[test]
    fn test_tile_kind_display() {
        assert_eq!(TileKind::CoastalWater.to_string(), "coastal water");
        assert_eq!(TileKind::Forest.name(), "forest");
    }
}
