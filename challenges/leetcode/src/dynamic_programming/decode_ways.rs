// https://www.spoj.com/problems/ACODE/
//
// Letters are encoded as A=1 .. Z=26 and concatenated without separators.
// Count how many messages decode to the given digit string.
//
//   "25114":  dp[i] = dp[i-1] (if digit i is 1..=9) + dp[i-2] (if digits i-1,i form 10..=26)
//
//   dp[0] = 1   (empty prefix)
//   dp[1] = 1   2
//   dp[2] = 2   2 5    | 25
//   dp[3] = 2   ..1
//   dp[4] = 4   ..1    | ..11
//   dp[5] = 6   ..4    | ..14
use log::debug;

use crate::{Error, Result, Scanner, Writer};

// A line holding only this value ends the input.
const TERMINATOR: &str = "0";

pub fn solve(input: &mut Scanner, out: &mut Writer) -> Result<()> {
    while let Some(line) = input.try_next_line()? {
        if line == TERMINATOR {
            break;
        }
        out.println(count_decodings(&line)?);
    }
    Ok(())
}

pub fn count_decodings(message: &str) -> Result<u64> {
    if message.is_empty() {
        return Err(Error::invalid("empty message"));
    }
    if let Some(c) = message.chars().find(|c| !c.is_ascii_digit()) {
        return Err(Error::invalid(format!(
            "message {:?} contains non-digit {:?}",
            message, c
        )));
    }

    let digits: Vec<u8> = message.bytes().map(|b| b - b'0').collect();

    // only the last two prefixes are needed: (dp[i-2], dp[i-1])
    let mut prev: u64 = 1;
    let mut cur: u64 = if digits[0] > 0 { 1 } else { 0 };

    for pair in digits.windows(2) {
        let single = if pair[1] > 0 { cur } else { 0 };
        let double = match pair[0] * 10 + pair[1] {
            10..=26 => prev,
            _ => 0,
        };
        prev = cur;
        cur = single + double;
    }

    debug!("{} decodings of {} digits", cur, digits.len());
    Ok(cur)
}
