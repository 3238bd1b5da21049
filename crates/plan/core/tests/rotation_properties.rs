use plan_core::{CompassDirection, Rotation, rotate};
use proptest::prelude::*;

fn arb_direction() -> impl Strategy<Value = CompassDirection> {
    (0usize..CompassDirection::RING_LEN).prop_map(CompassDirection::from_index)
}

fn ring_names() -> Vec<String> {
    CompassDirection::RING.iter().map(|d| d.to_string()).collect()
}

#[test]
fn road_always_maps_to_south() {
    for road in ring_names() {
        assert_eq!(rotate(&road, &road), "South");
    }
}

#[test]
fn south_road_is_identity() {
    for dir in ring_names() {
        assert_eq!(rotate(&dir, "South"), dir);
        assert_eq!(rotate(&format!("{dir} wall"), "South"), format!("{dir} wall"));
    }
}

#[test]
fn every_pair_stays_on_ring() {
    let names = ring_names();
    for dir in &names {
        for road in &names {
            let rotated = rotate(dir, road);
            assert!(names.contains(&rotated), "{dir} with road {road} gave {rotated}");
        }
    }
}

proptest! {
    #[test]
    fn rotation_is_a_uniform_shift(dir in arb_direction(), road in arb_direction()) {
        let rotation = Rotation::new(road);
        let rotated = rotation.apply_direction(dir);
        let expected = (dir.index() as i32 + 4 - road.index() as i32).rem_euclid(8) as usize;
        prop_assert_eq!(rotated.index(), expected);
        prop_assert_eq!(rotate(dir.as_ref(), road.as_ref()), rotated.to_string());
    }

    #[test]
    fn rotation_preserves_ring_distance(a in arb_direction(), b in arb_direction(), road in arb_direction()) {
        let rotation = Rotation::new(road);
        let before = (b.index() as i32 - a.index() as i32).rem_euclid(8);
        let after = (rotation.apply_direction(b).index() as i32
            - rotation.apply_direction(a).index() as i32)
            .rem_euclid(8);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn suffix_survives_untouched(dir in arb_direction(), road in arb_direction(), suffix in "[a-z ]{0,12}") {
        let input = format!("{dir} {suffix}");
        let rotated = rotate(&input, road.as_ref());
        let expected_tail = format!(" {suffix}");
        prop_assert!(rotated.ends_with(&expected_tail));
        let base = &rotated[..rotated.len() - expected_tail.len()];
        let expected_base = Rotation::new(road).apply_direction(dir).to_string();
        prop_assert_eq!(base, expected_base.as_str());
    }

    #[test]
    fn non_ring_tokens_come_back_unchanged(token in "[XYZ][a-z]{0,8}( [a-z]{1,6})?", road in arb_direction()) {
        prop_assert_eq!(rotate(&token, road.as_ref()), token);
    }

    #[test]
    fn sentinels_ignore_any_road(road in ".{0,10}") {
        prop_assert_eq!(rotate("Center", &road), "Center");
        prop_assert_eq!(rotate("Attached", &road), "Attached");
    }
}
