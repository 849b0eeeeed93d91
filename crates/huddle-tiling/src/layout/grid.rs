//! Grid sizing: pick the rows x cols split that covers the most area.

use super::types::RatioBounds;

/// Two candidates whose covered area differs by less than this are a tie.
const AREA_EPSILON: f64 = 0.5;

/// Chosen grid shape and the uniform cell size for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDimensions {
    pub rows: usize,
    pub cols: usize,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GridDimensions {
    pub fn covered_area(&self, count: usize) -> f64 {
        self.cell_width * self.cell_height * count as f64
    }
}

/// Search every column count for `count` cells in a `width` x `height` region.
///
/// Rows are `ceil(count / cols)`, so no row or column is ever left empty.
/// Each cell is shrunk along one axis until its ratio fits `bounds`. The
/// candidate covering the most area wins; ties go to fewer rows. Returns
/// `None` when nothing fits (no cells, or a region under one pixel per cell).
pub fn best_dimensions(
    count: usize,
    width: f64,
    height: f64,
    bounds: RatioBounds,
) -> Option<GridDimensions> {
    if count == 0 || width <= 0.0 || height <= 0.0 {
        return None;
    }

    let mut best: Option<(GridDimensions, f64)> = None;

    for cols in 1..=count {
        let rows = count.div_ceil(cols);
        let mut cell_width = (width / cols as f64).floor();
        let mut cell_height = (height / rows as f64).floor();
        if cell_width < 1.0 || cell_height < 1.0 {
            continue;
        }

        let ratio = cell_height / cell_width;
        if ratio > bounds.max {
            cell_height = (cell_width * bounds.max).floor();
        } else if ratio < bounds.min {
            cell_width = (cell_height / bounds.min).floor();
        }
        if cell_width < 1.0 || cell_height < 1.0 {
            continue;
        }

        let candidate = GridDimensions {
            rows,
            cols,
            cell_width,
            cell_height,
        };
        let area = candidate.covered_area(count);

        let better = match best {
            None => true,
            Some((current, best_area)) => {
                area > best_area + AREA_EPSILON
                    || ((area - best_area).abs() <= AREA_EPSILON && rows < current.rows)
            }
        };
        if better {
            best = Some((candidate, area));
        }
    }

    best.map(|(dims, _)| dims)
}
