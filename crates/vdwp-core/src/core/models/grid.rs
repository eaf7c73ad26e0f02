use serde::Serialize;

/// Height of the unit equilateral triangle used for plotting, `√3/2` to six places.
pub const TRIANGLE_HEIGHT: f64 = 0.866025;

/// Sub-indices of one sample of the composition simplex, `i + j + k == resolution`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridIndex {
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

impl GridIndex {
    /// Mole fractions of the three species, ordered `[k, j, i] / resolution`.
    pub fn fractions(&self, resolution: usize) -> [f64; 3] {
        let n = resolution as f64;
        [self.k as f64 / n, self.j as f64 / n, self.i as f64 / n]
    }
}

/// Number of samples on a simplex grid of the given resolution, `(n+1)(n+2)/2`.
pub fn simplex_point_count(resolution: usize) -> usize {
    (resolution + 1) * (resolution + 2) / 2
}

/// The in-simplex cell of row `i`, column `j`, or `None` when `i + j > resolution`.
pub fn grid_cell(i: usize, j: usize, resolution: usize) -> Option<GridIndex> {
    let k = resolution.checked_sub(i + j)?;
    Some(GridIndex { i, j, k })
}

/// Every simplex sample, `i` ascending then `j` ascending.
pub fn simplex_indices(resolution: usize) -> impl Iterator<Item = GridIndex> {
    (0..=resolution).flat_map(move |i| {
        (0..=resolution - i).map(move |j| GridIndex {
            i,
            j,
            k: resolution - i - j,
        })
    })
}

/// Projects mole fractions onto the triangle with vertices (0, 0), (1, 0) and
/// (0.5, [`TRIANGLE_HEIGHT`]); the first species sits at the origin.
pub fn project(fractions: &[f64; 3]) -> (f64, f64) {
    let x = fractions[1] + 0.5 * fractions[2];
    let y = TRIANGLE_HEIGHT * fractions[2];
    (x, y)
}

/// One evaluated sample of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridPoint {
    pub index: GridIndex,
    pub fractions: [f64; 3],
    /// Chemical potential of structure A minus structure B, kJ/mol.
    pub delta_mu: f64,
    pub x: f64,
    pub y: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn point_count_is_triangular_number() {
        for n in 1..=12 {
            assert_eq!(simplex_indices(n).count(), simplex_point_count(n));
        }
        assert_eq!(simplex_point_count(60), 1891);
    }

    #[test]
    fn indices_are_enumerated_row_major() {
        let indices: Vec<_> = simplex_indices(2).map(|g| (g.i, g.j, g.k)).collect();
        assert_eq!(
            indices,
            vec![
                (0, 0, 2),
                (0, 1, 1),
                (0, 2, 0),
                (1, 0, 1),
                (1, 1, 0),
                (2, 0, 0)
            ]
        );
    }

    #[test]
    fn fractions_are_non_negative_and_sum_to_one() {
        for n in [1, 3, 7, 60] {
            for index in simplex_indices(n) {
                let fracs = index.fractions(n);
                assert!(fracs.iter().all(|&f| f >= 0.0));
                assert!((fracs.iter().sum::<f64>() - 1.0).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn fractions_follow_k_j_i_ordering() {
        let pure_first = GridIndex { i: 0, j: 0, k: 4 };
        assert_eq!(pure_first.fractions(4), [1.0, 0.0, 0.0]);
        let pure_third = GridIndex { i: 4, j: 0, k: 0 };
        assert_eq!(pure_third.fractions(4), [0.0, 0.0, 1.0]);
        let mixed = GridIndex { i: 1, j: 2, k: 1 };
        assert_eq!(mixed.fractions(4), [0.25, 0.5, 0.25]);
    }

    #[test]
    fn grid_cell_is_absent_outside_simplex() {
        assert_eq!(grid_cell(1, 1, 2), Some(GridIndex { i: 1, j: 1, k: 0 }));
        assert_eq!(grid_cell(2, 1, 2), None);
        assert_eq!(grid_cell(0, 3, 2), None);
    }

    #[test]
    fn projection_maps_pure_components_to_vertices() {
        assert_eq!(project(&[1.0, 0.0, 0.0]), (0.0, 0.0));
        assert_eq!(project(&[0.0, 1.0, 0.0]), (1.0, 0.0));
        assert_eq!(project(&[0.0, 0.0, 1.0]), (0.5, TRIANGLE_HEIGHT));
    }

    #[test]
    fn projection_stays_inside_the_triangle() {
        let n = 17;
        for index in simplex_indices(n) {
            let (x, y) = project(&index.fractions(n));
            assert!(y >= 0.0 && y <= TRIANGLE_HEIGHT + TOLERANCE);
            // Left edge y = 2h·x, right edge y = 2h·(1 - x).
            assert!(y <= 2.0 * TRIANGLE_HEIGHT * x + TOLERANCE);
            assert!(y <= 2.0 * TRIANGLE_HEIGHT * (1.0 - x) + TOLERANCE);
        }
    }
}
