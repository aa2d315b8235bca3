// Dynamic Programming problems module
// Add problem modules here as they are implemented

pub mod decode_ways;
pub mod min_cost_tickets;
pub mod min_path_sum;

use crate::TaskGroup;

pub const CATEGORY: &str = "dynamic_programming";

pub fn tasks() -> TaskGroup {
    TaskGroup::new(CATEGORY)
        .add("decode_ways", decode_ways::solve)
        .add("min_cost_tickets", min_cost_tickets::solve)
        .add("min_path_sum", min_path_sum::solve)
}
