use std::io::{BufRead, Write};
use std::str::FromStr;

pub mod aggregate;
pub mod config;
pub mod convolution;
pub mod grid;
pub mod report;
pub mod row;
pub mod supersets;
pub mod table;

pub use aggregate::Summary;
pub use config::{BoardConfig, Signature};
pub use grid::Solver;
pub use report::ReportFormat;
pub use table::{DpTable, RowTable};

/// Line reader for board descriptions.
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    pub fn next_line(&mut self) -> String {
        let mut input = String::new();
        self.reader.read_line(&mut input).expect("Failed read");
        input.trim().to_string()
    }

    /// Whitespace separated values from the next line.
    pub fn parse_vec<T>(&mut self) -> Vec<T>
    where
        T: FromStr,
        T::Err: std::fmt::Debug,
    {
        self.next_line()
            .split_whitespace()
            .map(|token| token.parse().expect("Failed parse"))
            .collect()
    }
}

/// Report writer backed by a memory buffer.
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) {
        writeln!(self.0, "{}", value).expect("Failed write");
    }

    pub fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Test utilities for running and verifying golden reports
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::time::Instant;

    /// Discover all test case numbers for a given category
    pub fn discover_tests(category: &str) -> Vec<usize> {
        let test_dir = PathBuf::from("data").join(category);

        let mut test_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&test_dir) {
            for entry in entries.flatten() {
                if let Some(num) = entry
                    .file_name()
                    .to_str()
                    .and_then(|name| name.strip_suffix(".in"))
                    .and_then(|num| num.parse::<usize>().ok())
                {
                    test_numbers.push(num);
                }
            }
        }

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single test case and return (expected, actual, duration) output
    pub fn run_test_case<F>(
        category: &str,
        test_num: usize,
        solve_fn: F,
    ) -> Result<(String, String, std::time::Duration), String>
    where
        F: FnOnce(&mut Scanner, &mut Writer),
    {
        let test_dir = PathBuf::from("data").join(category);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        solve_fn(&mut scanner, &mut writer);
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

    /// Verify all test cases in a category
    pub fn verify_all_tests<F>(category: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer),
    {
        let test_cases = discover_tests(category);
        assert!(!test_cases.is_empty(), "No test cases found for {}", category);

        let mut total_duration = std::time::Duration::ZERO;

        for test_num in test_cases {
            match run_test_case(category, test_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    assert_eq!(
                        actual,
                        expected,
                        "Test case {} failed (took {:.2}s)\nExpected:\n{}\nActual:\n{}",
                        test_num,
                        duration.as_secs_f64(),
                        expected,
                        actual
                    );
                }
                Err(e) => panic!("Test case {} error: {}", test_num, e),
            }
        }

        println!("Total time: {:.2}s", total_duration.as_secs_f64());
    }

    /// Runs a board description through the full pipeline: one line of
    /// `columns rows max_fences` in, the spreadsheet report out.
    pub fn solve_board(input: &mut Scanner, out: &mut Writer) {
        let values: Vec<u32> = input.parse_vec();
        let [columns, rows, max_fences] = values[..] else {
            panic!("expected three values: columns, rows and max fences");
        };
        let config = BoardConfig::new(columns, rows, max_fences).expect("invalid board");
        let table = Solver::new(config)
            .compute_final_table()
            .expect("solver failed");
        crate::report::write_summary(
            &config,
            &Summary::from_table(&table),
            ReportFormat::Spreadsheet,
            out,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_scanner_parses_board() {
        let mut scanner = Scanner::new(Cursor::new("8 8 20\n"));
        assert_eq!(scanner.parse_vec::<u32>(), vec![8, 8, 20]);
    }

    #[test]
    fn test_solve_single_cell() {
        let mut scanner = Scanner::new(Cursor::new("1 1 1\n"));
        let mut writer = Writer::new();
        testing::solve_board(&mut scanner, &mut writer);
        assert!(writer.into_string().unwrap().ends_with("Total,=\"3\"\n"));
    }
}
