/// Lennard-Jones-Devonshire cell potential of a guest displaced `r` from the centre of a
/// spherical cage of radius `cage_radius` with `coordination` host sites on its wall.
///
/// `sigma` and `cage_radius` share a length unit; `epsilon` is an energy (not ε/k) and the
/// result carries the same unit.
#[inline]
pub fn cell_potential(
    r: f64,
    sigma: f64,
    epsilon: f64,
    coordination: f64,
    cage_radius: f64,
) -> f64 {
    cell_potential_with_offset(r, sigma, epsilon, coordination, cage_radius, 0.0)
}

/// General LJD form with the host shell smeared at `cage_radius - offset`.
///
/// The centre of the cage (`r == 0`) is a removable singularity of the closed form and
/// returns 0.
#[inline]
pub fn cell_potential_with_offset(
    r: f64,
    sigma: f64,
    epsilon: f64,
    coordination: f64,
    cage_radius: f64,
    offset: f64,
) -> f64 {
    if r == 0.0 {
        return 0.0;
    }

    let delta = |n: i32| ljd_delta(n, r, cage_radius, offset);

    let repulsive = sigma.powi(12) / (cage_radius.powi(11) * r)
        * (delta(10) + offset * delta(11) / cage_radius);
    let attractive =
        sigma.powi(6) / (cage_radius.powi(5) * r) * (delta(4) + offset * delta(5) / cage_radius);

    2.0 * coordination * epsilon * (repulsive - attractive)
}

/// `δ(N) = [(1 - r/R - a/R)^-N - (1 + r/R - a/R)^-N] / N`, zero when either base is zero.
#[inline]
fn ljd_delta(n: i32, r: f64, cage_radius: f64, offset: f64) -> f64 {
    let inner = 1.0 - r / cage_radius - offset / cage_radius;
    let outer = 1.0 + r / cage_radius - offset / cage_radius;
    if inner == 0.0 || outer == 0.0 {
        return 0.0;
    }
    let exponent = -f64::from(n);
    (inner.powf(exponent) - outer.powf(exponent)) / f64::from(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    fn relative_equal(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs().max(a.abs())
    }

    // Methane/TIP4P-Ice in the pentagonal dodecahedron (5^12) cage.
    const SIGMA: f64 = 3.4624;
    const EPSILON: f64 = 125.56456506514886 * crate::core::constants::BOLTZMANN;
    const Z: f64 = 20.0;
    const R: f64 = 3.988;

    #[test]
    fn potential_at_cage_centre_is_zero() {
        assert_eq!(cell_potential(0.0, SIGMA, EPSILON, Z, R), 0.0);
        assert_eq!(
            cell_potential_with_offset(0.0, SIGMA, EPSILON, Z, R, 0.3),
            0.0
        );
    }

    #[test]
    fn potential_at_cage_wall_is_guarded() {
        let u = cell_potential(R, SIGMA, EPSILON, Z, R);
        assert!(u.is_finite());
        assert!(f64_approx_equal(u, 0.0));
    }

    #[test]
    fn potential_matches_reference_value_inside_cage() {
        let u = cell_potential(1.0, SIGMA, EPSILON, Z, R);
        assert!(relative_equal(u, 8.585481086906163e-21, 1e-9));
    }

    #[test]
    fn potential_is_symmetric_in_displacement_sign() {
        let plus = cell_potential(0.7, SIGMA, EPSILON, Z, R);
        let minus = cell_potential(-0.7, SIGMA, EPSILON, Z, R);
        assert!(relative_equal(plus, minus, 1e-12));
    }

    #[test]
    fn potential_rises_steeply_near_the_wall() {
        let mid = cell_potential(1.0, SIGMA, EPSILON, Z, R);
        let near_wall = cell_potential(0.9 * R, SIGMA, EPSILON, Z, R);
        assert!(near_wall > mid);
        assert!(near_wall > 0.0);
    }

    #[test]
    fn zero_offset_general_form_equals_fixed_form() {
        for r in [0.25, 1.0, 2.0, 3.0] {
            let fixed = cell_potential(r, SIGMA, EPSILON, Z, R);
            let general = cell_potential_with_offset(r, SIGMA, EPSILON, Z, R, 0.0);
            assert_eq!(fixed, general);
        }
    }

    #[test]
    fn potential_scales_linearly_with_epsilon_and_coordination() {
        let base = cell_potential(1.5, SIGMA, EPSILON, Z, R);
        let doubled_eps = cell_potential(1.5, SIGMA, 2.0 * EPSILON, Z, R);
        let doubled_z = cell_potential(1.5, SIGMA, EPSILON, 2.0 * Z, R);
        assert!(relative_equal(doubled_eps, 2.0 * base, 1e-12));
        assert!(relative_equal(doubled_z, 2.0 * base, 1e-12));
    }

    #[test]
    fn delta_is_zero_when_a_base_term_vanishes() {
        assert_eq!(ljd_delta(10, R, R, 0.0), 0.0);
        assert_eq!(ljd_delta(4, -R, R, 0.0), 0.0);
    }

    #[test]
    fn offset_changes_the_potential_but_stays_finite() {
        let plain = cell_potential(1.0, SIGMA, EPSILON, Z, R);
        let shifted = cell_potential_with_offset(1.0, SIGMA, EPSILON, Z, R, 0.5);
        assert!(shifted.is_finite());
        assert!(shifted != plain);
    }
}
