//! Layout calculation: tiles + container to placed rects.

use std::collections::HashMap;

use huddle_common::types::{Rect, TileId};

use super::grid::{best_dimensions, GridDimensions};
use super::types::{LayoutEngine, LayoutOptions, Placement, RatioBounds};
use crate::tile::Tile;

impl LayoutEngine {
    pub fn compute(&self, container: Rect, tiles: &[Tile]) -> Vec<Placement> {
        compute_layout(container, tiles, &self.options)
    }
}

/// Place every tile inside `container`.
///
/// With exactly one big tile among several, the container is split into a
/// big region and a region for the rest; otherwise all tiles share one grid.
/// Output follows input order. Tiles that cannot fit get a zero-size rect at
/// the origin of their region.
pub fn compute_layout(container: Rect, tiles: &[Tile], options: &LayoutOptions) -> Vec<Placement> {
    if tiles.is_empty() {
        return Vec::new();
    }

    let big: Vec<&Tile> = tiles.iter().filter(|t| t.big).collect();
    let mut rects: HashMap<TileId, Rect> = HashMap::with_capacity(tiles.len());

    match big.as_slice() {
        [only] if tiles.len() == 1 => {
            place_group(container, &[only.id], options.big_bounds(only.ratio()), &mut rects);
        }
        [big_tile] => {
            let small: Vec<&Tile> = tiles.iter().filter(|t| !t.big).collect();
            let (big_region, small_region) = split_container(container, big_tile.ratio(), options);

            place_group(
                big_region,
                &[big_tile.id],
                options.big_bounds(big_tile.ratio()),
                &mut rects,
            );

            let small_ids: Vec<TileId> = small.iter().map(|t| t.id).collect();
            let first_ratio = small.first().map(|t| t.ratio()).unwrap_or_default();
            place_group(small_region, &small_ids, options.small_bounds(first_ratio), &mut rects);
        }
        _ => {
            let ids: Vec<TileId> = tiles.iter().map(|t| t.id).collect();
            place_group(container, &ids, options.small_bounds(tiles[0].ratio()), &mut rects);
        }
    }

    tiles
        .iter()
        .map(|t| Placement {
            id: t.id,
            rect: rects
                .get(&t.id)
                .copied()
                .unwrap_or_else(|| Rect::new(container.x, container.y, 0.0, 0.0)),
        })
        .collect()
}

/// Divide the container into `(big_region, small_region)`.
///
/// A container narrower than the big tile (by height / width) stacks the
/// regions vertically; a wider one puts them side by side. `big_first`
/// puts the big region top/left.
pub fn split_container(container: Rect, big_ratio: f64, options: &LayoutOptions) -> (Rect, Rect) {
    let tall = container.ratio() > big_ratio;

    if tall {
        let big_height = (container.height * options.big_percentage).floor();
        let small_height = container.height - big_height;
        if options.big_first {
            (
                Rect::new(container.x, container.y, container.width, big_height),
                Rect::new(container.x, container.y + big_height, container.width, small_height),
            )
        } else {
            (
                Rect::new(container.x, container.y + small_height, container.width, big_height),
                Rect::new(container.x, container.y, container.width, small_height),
            )
        }
    } else {
        let big_width = (container.width * options.big_percentage).floor();
        let small_width = container.width - big_width;
        if options.big_first {
            (
                Rect::new(container.x, container.y, big_width, container.height),
                Rect::new(container.x + big_width, container.y, small_width, container.height),
            )
        } else {
            (
                Rect::new(container.x + small_width, container.y, big_width, container.height),
                Rect::new(container.x, container.y, small_width, container.height),
            )
        }
    }
}

fn place_group(region: Rect, ids: &[TileId], bounds: RatioBounds, out: &mut HashMap<TileId, Rect>) {
    if ids.is_empty() {
        return;
    }
    match best_dimensions(ids.len(), region.width, region.height, bounds) {
        Some(dims) => {
            for (id, rect) in ids.iter().zip(arrange(region, ids.len(), &dims)) {
                out.insert(*id, rect);
            }
        }
        None => {
            for id in ids {
                out.insert(*id, Rect::new(region.x, region.y, 0.0, 0.0));
            }
        }
    }
}

/// Lay `count` cells out row-major, centered in `region`. A partial last
/// row is centered on its own.
pub fn arrange(region: Rect, count: usize, dims: &GridDimensions) -> Vec<Rect> {
    let cw = dims.cell_width;
    let ch = dims.cell_height;
    let margin_top = ((region.height - dims.rows as f64 * ch) / 2.0).floor().max(0.0);
    let margin_left = ((region.width - dims.cols as f64 * cw) / 2.0).floor().max(0.0);

    let last_row = dims.rows - 1;
    let in_last_row = count - last_row * dims.cols;
    let last_row_shift = ((dims.cols - in_last_row) as f64 * cw / 2.0).floor();

    (0..count)
        .map(|i| {
            let row = i / dims.cols;
            let col = i % dims.cols;
            let shift = if row == last_row { last_row_shift } else { 0.0 };
            Rect::new(
                region.x + margin_left + shift + col as f64 * cw,
                region.y + margin_top + row as f64 * ch,
                cw,
                ch,
            )
        })
        .collect()
}
