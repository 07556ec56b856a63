use std::collections::BTreeSet;

use crate::model::Table;

use super::geometry::{CellWidths, declared_widths};

/// One column of the table grid (`w:gridCol`). Widths are whole twips; a
/// column without a width is written without `w:w`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridColumn {
    pub width: Option<u32>,
}

/// Width and grid span the emitter writes into a cell's `w:tcPr`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedCell {
    pub width: Option<f32>,
    pub span: u16,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedGrid {
    pub columns: Vec<GridColumn>,
    /// Parallel to the table's rows and cells.
    pub rows: Vec<Vec<ResolvedCell>>,
}

impl ResolvedGrid {
    /// Sum of all column widths, if every column has one and the sum fits
    /// in a `u32`.
    pub fn total_width(&self) -> Option<u32> {
        if self.columns.is_empty() {
            return None;
        }
        self.columns
            .iter()
            .try_fold(0u32, |total, c| total.checked_add(c.width?))
    }

    pub fn cell(&self, row: usize, cell: usize) -> Option<&ResolvedCell> {
        self.rows.get(row).and_then(|r| r.get(cell))
    }
}

// Ceiling rounding keeps a column from ending up a fraction of a twip
// narrower than a cell whose width came out of a division upstream.
fn ceil_units(w: f32) -> i64 {
    w.ceil() as i64
}

// Edges closer than this to a whole twip are float noise from an equal split.
const EDGE_SNAP: f64 = 0.01;

/// Ceil'd running right edge, clamped at the table's left edge.
fn ceil_edge(position: f64) -> i64 {
    let nearest = position.round();
    let edge = if (position - nearest).abs() < EDGE_SNAP {
        nearest
    } else {
        position.ceil()
    };
    (edge as i64).max(0)
}

/// Ceil'd right edge after each cell of a row.
fn right_edges(row: &[Option<f32>]) -> impl Iterator<Item = i64> + '_ {
    row.iter().scan(0f64, |position, w| {
        *position += f64::from(w.unwrap_or(0.0));
        Some(ceil_edge(*position))
    })
}

fn as_column_width(units: i64) -> u32 {
    u32::try_from(units.max(0)).unwrap_or(u32::MAX)
}

/// First row where every cell has a width, else the first row.
fn reference_row(widths: &CellWidths) -> Option<&Vec<Option<f32>>> {
    widths
        .iter()
        .find(|row| row.iter().all(Option::is_some))
        .or_else(|| widths.first())
}

/// Whether rows subdivide the table differently. A cell without a width
/// matches any width at its position.
pub fn has_different_cell_widths(widths: &CellWidths) -> bool {
    let Some(reference) = reference_row(widths) else {
        return false;
    };
    widths.iter().any(|row| {
        row.len() != reference.len()
            || row.iter().zip(reference).any(|(a, b)| match (a, b) {
                (Some(a), Some(b)) => ceil_units(*a) != ceil_units(*b),
                _ => false,
            })
    })
}

/// Resolve the table grid from the (possibly redistributed) cell widths.
///
/// Rows that agree with each other use the reference row's widths directly
/// and every span is 1. Otherwise the grid is the least common refinement of
/// every row's cell boundaries, and each cell spans the grid columns up to
/// its own right edge. Never fails: inconsistent input yields a
/// best-effort assignment.
pub fn resolve_grid(widths: &CellWidths) -> ResolvedGrid {
    if has_different_cell_widths(widths) {
        resolve_heterogeneous(widths)
    } else {
        resolve_uniform(widths)
    }
}

/// Grid column widths for a table, from its declared cell widths.
pub fn resolve_columns(table: &Table) -> Vec<GridColumn> {
    resolve_grid(&declared_widths(table)).columns
}

fn resolve_uniform(widths: &CellWidths) -> ResolvedGrid {
    let columns = reference_row(widths)
        .map(|row| {
            row.iter()
                .map(|w| GridColumn {
                    width: w.map(|w| as_column_width(ceil_units(w))),
                })
                .collect()
        })
        .unwrap_or_default();

    let rows = widths
        .iter()
        .map(|row| {
            row.iter()
                .map(|&width| ResolvedCell { width, span: 1 })
                .collect()
        })
        .collect();

    ResolvedGrid { columns, rows }
}

/// Distinct cumulative right edges of every row, ascending, starting at 0.
fn row_boundaries(widths: &CellWidths) -> Vec<i64> {
    let mut edges = BTreeSet::new();
    edges.insert(0i64);
    for row in widths {
        edges.extend(right_edges(row));
    }
    edges.into_iter().collect()
}

fn resolve_heterogeneous(widths: &CellWidths) -> ResolvedGrid {
    let boundaries = row_boundaries(widths);
    let grid: Vec<i64> = boundaries
        .windows(2)
        .map(|pair| pair[1] - pair[0])
        .collect();

    let rows = widths
        .iter()
        .enumerate()
        .map(|(ri, row)| assign_spans(ri, row, &grid))
        .collect();

    let columns = grid
        .iter()
        .map(|&w| GridColumn {
            width: Some(as_column_width(w)),
        })
        .collect();

    ResolvedGrid { columns, rows }
}

/// Greedy left-to-right walk over the grid for one row. `col` is the first
/// grid column not yet consumed by an earlier cell of the row and `edge` is
/// where that column starts. Each cell consumes columns up to its own ceil'd
/// right edge, which is one of the grid boundaries.
fn assign_spans(ri: usize, row: &[Option<f32>], grid: &[i64]) -> Vec<ResolvedCell> {
    let mut col = 0usize;
    let mut edge = 0i64;
    row.iter()
        .zip(right_edges(row))
        .enumerate()
        .map(|(ci, (&width, target))| {
            let first = col;
            let mut covered = 0i64;
            while col < grid.len() && edge + grid[col] <= target {
                edge += grid[col];
                covered += grid[col];
                col += 1;
            }

            let consumed = col - first;
            if consumed == 0 {
                log::warn!(
                    "GRID row={} cell={} width={:?} covers no grid column at {}; keeping span 1",
                    ri,
                    ci,
                    width,
                    first
                );
                return ResolvedCell { width, span: 1 };
            }
            ResolvedCell {
                width: Some(covered as f32),
                span: u16::try_from(consumed).unwrap_or(u16::MAX),
            }
        })
        .collect()
}
