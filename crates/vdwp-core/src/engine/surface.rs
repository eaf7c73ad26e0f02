use crate::core::models::grid::GridPoint;
use serde::Serialize;

/// One matrix row: column `j` holds the point `(i, j)` or `None` outside the simplex.
pub type SurfaceRow = Vec<Option<GridPoint>>;

/// Rectangular form: row `i`, column `j`; `None` marks cells outside the simplex.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SurfaceMatrix {
    pub x: Vec<Vec<Option<f64>>>,
    pub y: Vec<Vec<Option<f64>>>,
    pub z: Vec<Vec<Option<f64>>>,
}

/// Index-aligned sequences over the valid simplex points only, in enumeration order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SurfaceFlat {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

/// The chemical-potential difference surface over the composition simplex, in kJ/mol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergySurface {
    /// Species actually used for each slot, after fallback.
    pub species: [String; 3],
    pub resolution: usize,
    pub matrix: SurfaceMatrix,
    pub flat: SurfaceFlat,
    #[serde(skip)]
    points: Vec<GridPoint>,
}

impl EnergySurface {
    pub fn from_rows(species: [String; 3], resolution: usize, rows: Vec<SurfaceRow>) -> Self {
        let mut matrix = SurfaceMatrix::default();
        let mut flat = SurfaceFlat::default();
        let mut points = Vec::new();

        for row in rows {
            let mut x_row = Vec::with_capacity(row.len());
            let mut y_row = Vec::with_capacity(row.len());
            let mut z_row = Vec::with_capacity(row.len());
            for cell in row {
                x_row.push(cell.map(|p| p.x));
                y_row.push(cell.map(|p| p.y));
                z_row.push(cell.map(|p| p.delta_mu));
                if let Some(point) = cell {
                    flat.x.push(point.x);
                    flat.y.push(point.y);
                    flat.z.push(point.delta_mu);
                    points.push(point);
                }
            }
            matrix.x.push(x_row);
            matrix.y.push(y_row);
            matrix.z.push(z_row);
        }

        Self {
            species,
            resolution,
            matrix,
            flat,
            points,
        }
    }

    /// Valid grid points in enumeration order (`i` ascending, then `j`).
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    pub fn point(&self, i: usize, j: usize) -> Option<&GridPoint> {
        self.points
            .iter()
            .find(|p| p.index.i == i && p.index.j == j)
    }

    /// Lowest and highest Δμ over the valid points.
    pub fn z_range(&self) -> Option<(f64, f64)> {
        self.flat.z.iter().fold(None, |range, &z| match range {
            None => Some((z, z)),
            Some((lo, hi)) => Some((lo.min(z), hi.max(z))),
        })
    }
}
