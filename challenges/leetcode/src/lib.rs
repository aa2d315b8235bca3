use std::io::{BufRead, Cursor, Write};
use std::num::ParseIntError;
use std::str::FromStr;

use log::{debug, info};

pub mod dynamic_programming;
pub mod error;
pub mod parse;

pub use error::{Error, Result};

/// Line oriented input reader for the problem runners
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Next trimmed line, or `None` once the input is exhausted.
    pub fn try_next_line(&mut self) -> Result<Option<String>> {
        let mut input = String::new();
        let read = self
            .reader
            .read_line(&mut input)
            .map_err(|e| Error::invalid(format!("failed to read input: {}", e)))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    pub fn next_line(&mut self) -> Result<String> {
        self.try_next_line()?
            .ok_or_else(|| Error::invalid("unexpected end of input"))
    }

    /// Parses the next line as a single value.
    pub fn parse<T: FromStr<Err = ParseIntError>>(&mut self) -> Result<T> {
        parse::parse_token(&self.next_line()?)
    }

    /// Parses the next line as whitespace separated values.
    pub fn parse_vec<T: FromStr<Err = ParseIntError>>(&mut self) -> Result<Vec<T>> {
        self.next_line()?
            .split_whitespace()
            .map(parse::parse_token)
            .collect()
    }
}

/// Output writer for the problem runners (writes to memory buffer)
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) {
        // writing into a Vec<u8> cannot fail
        let _ = write!(self.0, "{}", value);
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        let _ = writeln!(self.0, "{}", value);
    }

    pub fn into_string(self) -> std::result::Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry point of a single problem: read the problem input, print the answer.
pub type Solver = fn(&mut Scanner, &mut Writer) -> Result<()>;

/// A named category of problems, e.g. "dynamic_programming".
pub struct TaskGroup {
    category: &'static str,
    tasks: Vec<(&'static str, Solver)>,
}

impl TaskGroup {
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            tasks: Vec::new(),
        }
    }

    pub fn add(mut self, name: &'static str, solve: Solver) -> Self {
        self.tasks.push((name, solve));
        self
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tasks.iter().map(|(name, _)| *name)
    }

    pub fn get(&self, name: &str) -> Result<Solver> {
        self.tasks
            .iter()
            .find(|(task, _)| *task == name)
            .map(|(_, solve)| *solve)
            .ok_or_else(|| {
                Error::invalid(format!(
                    "unknown problem {}/{}, expected one of: {}",
                    self.category,
                    name,
                    self.names().collect::<Vec<_>>().join(", ")
                ))
            })
    }

    /// Runs a problem against an in-memory reader and returns what it printed.
    pub fn run_with(&self, name: &str, reader: impl BufRead + 'static) -> Result<String> {
        let solve = self.get(name)?;
        let mut scanner = Scanner::new(reader);
        let mut writer = Writer::new();
        solve(&mut scanner, &mut writer)?;
        writer
            .into_string()
            .map_err(|e| Error::invalid(format!("output is not valid UTF-8: {}", e)))
    }

    /// Runs a problem reading stdin and printing to stdout.
    pub fn run(&self, name: &str) -> Result<()> {
        info!("running {}/{}", self.category, name);
        let output = self.run_with(name, std::io::stdin().lock())?;
        debug!("{}/{} produced {} bytes", self.category, name, output.len());
        print!("{}", output);
        Ok(())
    }

    /// Convenience for tests: runs a problem over a string input.
    pub fn run_str(&self, name: &str, input: &str) -> Result<String> {
        self.run_with(name, Cursor::new(input.to_string()))
    }
}

/// Test utilities for running and verifying test cases
pub mod testing {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Instant;

    /// Discover all test case numbers for a given problem
    pub fn discover_tests(category: &str, problem_name: &str) -> Vec<usize> {
        let test_dir = PathBuf::from("data").join(category).join(problem_name);

        let mut test_numbers: Vec<usize> = fs::read_dir(&test_dir)
            .into_iter()
            .flatten()
            .flatten()
            .filter_map(|entry| {
                entry
                    .file_name()
                    .to_str()?
                    .strip_suffix(".in")?
                    .parse::<usize>()
                    .ok()
            })
            .collect();

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single test case and return (expected, actual, duration) output
    pub fn run_test_case<F>(
        category: &str,
        problem_name: &str,
        test_num: usize,
        solve_fn: F,
    ) -> std::result::Result<(String, String, std::time::Duration), String>
    where
        F: FnOnce(&mut Scanner, &mut Writer) -> Result<()>,
    {
        let test_dir = PathBuf::from("data").join(category).join(problem_name);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        solve_fn(&mut scanner, &mut writer).map_err(|e| format!("Solver failed: {}", e))?;
        let duration = start.elapsed();

        let actual = writer
            .into_string()
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((
            expected.trim().to_string(),
            actual.trim().to_string(),
            duration,
        ))
    }

    /// Verify all test cases for a problem
    pub fn verify_all_tests<F>(category: &str, problem_name: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<()>,
    {
        let test_cases = discover_tests(category, problem_name);
        assert!(
            !test_cases.is_empty(),
            "No test cases found for {}/{}",
            category,
            problem_name
        );

        let mut total_duration = std::time::Duration::ZERO;

        for test_num in test_cases {
            match run_test_case(category, problem_name, test_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    assert_eq!(
                        actual, expected,
                        "Test case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                        test_num, secs, expected, actual
                    );
                }
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }

        println!("Total time: {:.2}s", total_duration.as_secs_f64());
    }

    /// Run all test cases and print results (for CLI usage). Returns the
    /// number of failed cases.
    pub fn run_all_tests<F>(category: &str, problem_name: &str, solve_fn: F) -> usize
    where
        F: Fn(&mut Scanner, &mut Writer) -> Result<()>,
    {
        let test_cases = discover_tests(category, problem_name);
        if test_cases.is_empty() {
            println!("No test cases found for {}/{}", category, problem_name);
            return 0;
        }

        println!(
            "Running {} test cases for {}/{}...",
            test_cases.len(),
            category,
            problem_name
        );

        let mut passed = 0;
        let mut failed = 0;
        let mut total_duration = std::time::Duration::ZERO;

        for test_num in &test_cases {
            match run_test_case(category, problem_name, *test_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let secs = duration.as_secs_f64();
                    if actual == expected {
                        println!("✓ Test case {}: PASSED ({:.2}s)", test_num, secs);
                        passed += 1;
                    } else {
                        println!("✗ Test case {}: FAILED ({:.2}s)", test_num, secs);
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                        failed += 1;
                    }
                }
                Err(e) => {
                    println!("✗ Test case {}: ERROR - {}", test_num, e);
                    failed += 1;
                }
            }
        }

        println!("\nResults: {} passed, {} failed", passed, failed);
        println!("Total time: {:.2}s", total_duration.as_secs_f64());
        failed
    }
}
