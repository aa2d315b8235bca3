// https://leetcode.com/problems/minimum-cost-for-tickets/ (983)
//
// Travel days are given as a sorted list within a year (1..=365). A pass is
// bought "on" the first day not yet covered and is valid for that day plus the
// following length-1 days. Find the cheapest set of passes covering all days.
//
//   days = [1, 4, 6, 7, 8, 20], costs = [2, 7, 15]
//
//   day 1   -> 1-day pass  $2
//   day 4   -> 7-day pass  $7   covers 4..=10 (4, 6, 7, 8)
//   day 20  -> 1-day pass  $2
//                         ---
//                         $11
use log::debug;

use crate::parse::parse_int_list;
use crate::{Error, Result, Scanner, Writer};

pub fn solve(input: &mut Scanner, out: &mut Writer) -> Result<()> {
    let days: Vec<u32> = parse_int_list(&input.next_line()?)?;
    let costs: Vec<u32> = parse_int_list(&input.next_line()?)?;

    let Ok(costs) = <[u32; 3]>::try_from(costs.as_slice()) else {
        return Err(Error::invalid(format!(
            "expected three pass costs, got {}",
            costs.len()
        )));
    };

    out.println(min_cost_tickets(&days, &costs)?);
    Ok(())
}

pub const FIRST_DAY: u32 = 1;
pub const LAST_DAY: u32 = 365;

/// The kinds of pass on sale. Each one indexes the cost table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Day,
    Week,
    Month,
}

impl Pass {
    /// Search order: the longest pass first finds a cheap bound early on
    /// inputs with dense travel.
    pub const SEARCH_ORDER: [Pass; 3] = [Pass::Month, Pass::Week, Pass::Day];

    /// Number of consecutive days the pass covers.
    pub const fn days(self) -> u32 {
        match self {
            Pass::Day => 1,
            Pass::Week => 7,
            Pass::Month => 30,
        }
    }

    pub const fn cost(self, costs: &[u32; 3]) -> u64 {
        let idx = match self {
            Pass::Day => 0,
            Pass::Week => 1,
            Pass::Month => 2,
        };
        costs[idx] as u64
    }
}

/// Minimum dollars needed to travel on every day in `days`.
///
/// `days` must be strictly increasing and lie within `1..=365`.
pub fn min_cost_tickets(days: &[u32], costs: &[u32; 3]) -> Result<u64> {
    validate_days(days)?;
    if days.is_empty() {
        return Ok(0);
    }

    let mut stats = SearchStats::default();
    let best = Pass::SEARCH_ORDER.iter().fold(u64::MAX, |best, &pass| {
        search(pass, days, costs, 0, best, &mut stats)
    });
    debug!(
        "min_cost_tickets: {} days, {} branches visited, {} pruned, best {}",
        days.len(),
        stats.visited,
        stats.pruned,
        best
    );
    Ok(best)
}

fn validate_days(days: &[u32]) -> Result<()> {
    if let Some(&day) = days
        .iter()
        .find(|&&d| !(FIRST_DAY..=LAST_DAY).contains(&d))
    {
        return Err(Error::invalid(format!(
            "travel day {} is outside {}..={}",
            day, FIRST_DAY, LAST_DAY
        )));
    }
    if let Some(pair) = days.windows(2).find(|w| w[0] >= w[1]) {
        return Err(Error::invalid(format!(
            "travel days must be strictly increasing, found {} before {}",
            pair[0], pair[1]
        )));
    }
    Ok(())
}

#[derive(Default)]
struct SearchStats {
    visited: u64,
    pruned: u64,
}

// Buys `pass` on the first remaining day and explores every continuation.
//
// `best` is the cheapest complete cover found anywhere in the search so far. It
// flows in and back out of every call so that a bound discovered deep in one
// branch prunes all branches explored after it. The return value is never
// greater than the incoming `best`.
fn search(
    pass: Pass,
    days: &[u32],
    costs: &[u32; 3],
    spent: u64,
    best: u64,
    stats: &mut SearchStats,
) -> u64 {
    stats.visited += 1;
    if spent >= best {
        stats.pruned += 1;
        return best;
    }
    let Some(&anchor) = days.first() else {
        return spent;
    };

    // days are sorted, so everything covered by the pass is a prefix
    let expires = anchor + pass.days();
    let remaining = &days[days.partition_point(|&d| d < expires)..];
    let spent = spent + pass.cost(costs);

    if remaining.is_empty() {
        return spent.min(best);
    }
    if spent >= best {
        stats.pruned += 1;
        return best;
    }

    Pass::SEARCH_ORDER.iter().fold(best, |best, &next| {
        search(next, remaining, costs, spent, best, stats)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::verify_all_tests;

    // Independent calendar DP: cheapest cover of everything up to day d.
    fn reference(days: &[u32], costs: &[u32; 3]) -> u64 {
        let mut tally = vec![0u64; LAST_DAY as usize + 1];
        for d in FIRST_DAY..=LAST_DAY {
            let d = d as usize;
            tally[d] = if days.contains(&(d as u32)) {
                [Pass::Day, Pass::Week, Pass::Month]
                    .iter()
                    .map(|&p| tally[d.saturating_sub(p.days() as usize)] + p.cost(costs))
                    .min()
                    .unwrap()
            } else {
                tally[d - 1]
            };
        }
        tally[LAST_DAY as usize]
    }

    // One month pass per 30 day window, opened greedily on the first uncovered day.
    fn monthly_upper_bound(days: &[u32], costs: &[u32; 3]) -> u64 {
        let mut windows = 0;
        let mut covered_until = 0;
        for &d in days {
            if d >= covered_until {
                windows += 1;
                covered_until = d + Pass::Month.days();
            }
        }
        windows * Pass::Month.cost(costs)
    }

    #[test]
    fn test_example() {
        assert_eq!(min_cost_tickets(&[1, 4, 6, 7, 8, 20], &[2, 7, 15]), Ok(11));
    }

    #[test]
    fn test_month_then_day() {
        let days = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 30, 31];
        assert_eq!(min_cost_tickets(&days, &[2, 7, 15]), Ok(17));
    }

    #[test]
    fn test_empty_and_single_day() {
        assert_eq!(min_cost_tickets(&[], &[2, 7, 15]), Ok(0));
        assert_eq!(min_cost_tickets(&[100], &[9, 4, 6]), Ok(4));
        assert_eq!(min_cost_tickets(&[365], &[3, 13, 45]), Ok(3));
        assert_eq!(min_cost_tickets(&[42], &[0, 0, 0]), Ok(0));
    }

    #[test]
    fn test_against_reference() {
        let test_cases: Vec<(Vec<u32>, [u32; 3], u64)> = vec![
            (
                vec![
                    1, 4, 6, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 20, 21, 22, 23, 27, 28,
                ],
                [3, 13, 45],
                44,
            ),
            (vec![1, 100, 200, 300, 365], [7, 2, 15], 10),
            ((1..=40).collect(), [2, 7, 15], 28),
            ((1..120).step_by(5).collect(), [1, 3, 20], 24),
        ];

        for (days, costs, expected) in test_cases {
            assert_eq!(reference(&days, &costs), expected, "reference for {:?}", days);
            assert_eq!(
                min_cost_tickets(&days, &costs),
                Ok(expected),
                "Failed for days: {:?} costs: {:?}",
                days,
                costs
            );
        }
    }

    #[test]
    fn test_upper_bounds() {
        let days: Vec<u32> = vec![3, 5, 40, 41, 42, 90, 150, 151, 152, 153, 200];
        for costs in [[2, 7, 15], [1, 50, 100], [30, 20, 10], [5, 5, 5]] {
            let best = min_cost_tickets(&days, &costs).unwrap();
            assert!(best <= monthly_upper_bound(&days, &costs));
            assert!(best <= days.len() as u64 * Pass::Day.cost(&costs));
            assert_eq!(best, reference(&days, &costs));
        }
    }

    #[test]
    fn test_large_inputs() {
        let days = [
            2, 3, 5, 6, 7, 8, 9, 10, 11, 17, 18, 19, 23, 26, 27, 29, 31, 32, 33, 34, 35, 36, 38,
            39, 40, 41, 42, 43, 44, 45, 47, 51, 54, 55, 57, 58, 64, 65, 67, 68, 72, 73, 74, 75,
            77, 78, 81, 86, 87, 88, 89, 91, 93, 94, 95, 96, 98, 99,
        ];
        assert_eq!(min_cost_tickets(&days, &[5, 24, 85]), Ok(246));
        assert_eq!(reference(&days, &[5, 24, 85]), 246);
    }

    #[test]
    fn test_invalid_days() {
        let costs = [2, 7, 15];
        assert!(matches!(
            min_cost_tickets(&[4, 1], &costs),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            min_cost_tickets(&[1, 1], &costs),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            min_cost_tickets(&[0, 3], &costs),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            min_cost_tickets(&[10, 366], &costs),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_solve_rejects_wrong_cost_count() {
        let group = crate::dynamic_programming::tasks();
        assert!(matches!(
            group.run_str("min_cost_tickets", "[1,2]\n[2,7]\n"),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_data() {
        verify_all_tests("dynamic_programming", "min_cost_tickets", solve);
    }
}
