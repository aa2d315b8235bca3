// https://leetcode.com/problems/minimum-path-sum/ (64)
//
// Walk from the top-left to the bottom-right cell moving only right or down;
// minimise the sum of the visited cells.
//
//   1 2 5        1 3 8
//   3 2 1   ->   4 5 6    answer: 6 (1 -> 2 -> 2 -> 1)
use crate::{Error, Result, Scanner, Writer};

pub fn solve(input: &mut Scanner, out: &mut Writer) -> Result<()> {
    let dims: Vec<usize> = input.parse_vec()?;
    let [rows, cols] = dims[..] else {
        return Err(Error::invalid("expected two initial inputs: rows and cols"));
    };

    let mut grid = Vec::with_capacity(rows);
    for row in 0..rows {
        let values: Vec<u64> = input.parse_vec()?;
        if values.len() != cols {
            return Err(Error::invalid(format!(
                "row {} has {} values, expected {}",
                row,
                values.len(),
                cols
            )));
        }
        grid.push(values);
    }

    out.println(min_path_sum_in_place(&mut grid)?);
    Ok(())
}

/// Minimum path sum computed by overwriting every cell with the cheapest
/// cumulative cost of reaching it. The grid is left in that state.
pub fn min_path_sum_in_place(grid: &mut [Vec<u64>]) -> Result<u64> {
    let cols = validate(grid)?;

    for row in 0..grid.len() {
        for col in 0..cols {
            let above = row.checked_sub(1).map(|r| grid[r][col]);
            let left = col.checked_sub(1).map(|c| grid[row][c]);
            // only the origin has neither neighbour
            if let Some(cheapest) = above.into_iter().chain(left).min() {
                grid[row][col] += cheapest;
            }
        }
    }

    Ok(grid[grid.len() - 1][cols - 1])
}

/// Same answer as [`min_path_sum_in_place`] without touching `grid`: only the
/// cumulative costs of the previous row are kept.
pub fn min_path_sum(grid: &[Vec<u64>]) -> Result<u64> {
    validate(grid)?;

    // first row is a prefix sum, it can only be entered from the left
    let mut tally: Vec<u64> = grid[0]
        .iter()
        .scan(0, |acc, &v| {
            *acc += v;
            Some(*acc)
        })
        .collect();

    for row in &grid[1..] {
        tally[0] += row[0];
        for col in 1..row.len() {
            tally[col] = tally[col].min(tally[col - 1]) + row[col];
        }
    }

    Ok(tally[tally.len() - 1])
}

// Returns the column count of a non-empty rectangular grid.
fn validate(grid: &[Vec<u64>]) -> Result<usize> {
    let Some(first) = grid.first() else {
        return Err(Error::invalid("grid has no rows"));
    };
    let cols = first.len();
    if cols == 0 {
        return Err(Error::invalid("grid has no columns"));
    }
    if let Some((row, values)) = grid.iter().enumerate().find(|(_, r)| r.len() != cols) {
        return Err(Error::invalid(format!(
            "grid is not rectangular: row {} has {} values, expected {}",
            row,
            values.len(),
            cols
        )));
    }
    Ok(cols)
}
