// Helpers for turning problem statement literals such as "[1,4,6,7,8,20]" into values.
use std::num::ParseIntError;
use std::str::FromStr;

use crate::{Error, Result};

/// Parses a bracketed, comma separated list of integers.
///
/// Surrounding whitespace and any leading `[` / trailing `]` characters are
/// stripped before splitting, so `"[1, 2, 3]"` and `"1,2,3"` both yield
/// `[1, 2, 3]`. An empty list (`"[]"`) yields an empty vector.
pub fn parse_int_list<T>(text: &str) -> Result<Vec<T>>
where
    T: FromStr<Err = ParseIntError>,
{
    let body = text
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .trim();
    if body.is_empty() {
        return Ok(Vec::new());
    }

    body.split(',').map(|token| parse_token(token.trim())).collect()
}

pub(crate) fn parse_token<T>(token: &str) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    token.parse().map_err(|source| Error::Parse {
        token: token.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed() {
        assert_eq!(parse_int_list::<i64>("[1, 2, 3]"), Ok(vec![1, 2, 3]));
        assert_eq!(
            parse_int_list::<u32>("[1,4,6,7,8,20]"),
            Ok(vec![1, 4, 6, 7, 8, 20])
        );
    }

    #[test]
    fn test_unbracketed_and_negative() {
        assert_eq!(parse_int_list::<i32>(" -4,0,7 "), Ok(vec![-4, 0, 7]));
    }

    #[test]
    fn test_empty() {
        assert_eq!(parse_int_list::<u32>("[]"), Ok(vec![]));
        assert_eq!(parse_int_list::<u32>("   "), Ok(vec![]));
    }

    #[test]
    fn test_bad_token() {
        match parse_int_list::<i64>("[1,a,3]") {
            Err(Error::Parse { token, .. }) => assert_eq!(token, "a"),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_dangling_comma() {
        assert!(matches!(
            parse_int_list::<i64>("[1,2,]"),
            Err(Error::Parse { token, .. }) if token.is_empty()
        ));
    }
}
