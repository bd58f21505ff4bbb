use proptest::prelude::*;

use vecmath::prelude::*;

const RANGE: std::ops::Range<f32> = -1.0e3..1.0e3;

fn any_vec2() -> impl Strategy<Value = Vec2> {
    (RANGE, RANGE).prop_map(|(x, y)| Vec2::new(x, y))
}

fn any_vec3() -> impl Strategy<Value = Vec3> {
    (RANGE, RANGE, RANGE).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

proptest! {
    #[test]
    fn dot_is_commutative(v in any_vec3(), w in any_vec3()) {
        prop_assert_eq!(v.dot(&w), w.dot(&v));
    }

    #[test]
    fn cross_is_anticommutative(v in any_vec3(), w in any_vec3()) {
        prop_assert_eq!(v.cross(&w), -(w.cross(&v)));
    }

    #[test]
    fn cross_with_self_is_zero(v in any_vec3()) {
        prop_assert_eq!(v.cross(&v), Vec3::ZERO);
    }

    #[test]
    fn normalised_vec2_has_unit_length(v in any_vec2()) {
        prop_assume!(v.length() > 1.0e-3);
        prop_assert!((v.normalise().length() - 1.0).abs() < 1.0e-5);
    }

    #[test]
    fn normalised_vec3_has_unit_length(v in any_vec3()) {
        prop_assume!(v.length() > 1.0e-3);
        prop_assert!((v.normalise().length() - 1.0).abs() < 1.0e-5);
    }

    #[test]
    fn rotate_90_pair_is_identity(v in any_vec2()) {
        prop_assert_eq!(v.rotate_90_cw().rotate_90_ccw(), v);
        prop_assert_eq!(
            v.rotate_90_ccw().rotate_90_ccw().rotate_90_ccw().rotate_90_ccw(),
            v
        );
    }

    #[test]
    fn vec2_extend_truncate_round_trip(x in RANGE, y in RANGE, z in RANGE) {
        prop_assert_eq!(Vec2::new(x, y).extend(z).truncate(), Vec2::new(x, y));
    }

    #[test]
    fn vec3_extend_truncate_round_trip(v in any_vec3(), w in RANGE) {
        prop_assert_eq!(v.extend(w).truncate(), v);
    }

    #[test]
    fn display_parses_back(v in any_vec3(), w in RANGE) {
        let v4 = v.extend(w);

        prop_assert_eq!(v.to_string().parse::<Vec3>().ok(), Some(v));
        prop_assert_eq!(v4.to_string().parse::<Vec4>().ok(), Some(v4));
    }

    #[test]
    fn inverse_rotation_undoes_rotation(angles in any_vec3(), v in any_vec3()) {
        let angles = angles / 1.0e3 * std::f32::consts::PI;
        let back = angles.to_inverse_rotation_matrix() * (angles.to_rotation_matrix() * v);

        prop_assert!((back - v).length() <= 1.0e-3 * v.length().max(1.0));
    }
}
