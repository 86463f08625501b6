use std::io::{self, BufRead, Write};

use log::{debug, info};

pub mod run_length;

/// Line reader over stdin, or any other buffered source in tests.
pub struct Scanner {
    reader: Box<dyn BufRead>,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
        }
    }

    /// Reads one line without its line terminator.
    ///
    /// Only the trailing `\n` (or `\r\n`) is removed, whitespace inside the
    /// line is kept. A stream that is already exhausted is an
    /// `UnexpectedEof` error.
    pub fn next_line(&mut self) -> io::Result<String> {
        let mut input = String::new();
        let read = self.reader.read_line(&mut input)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a line was available",
            ));
        }
        debug!("read {} bytes", read);

        if input.ends_with('\n') {
            input.pop();
            if input.ends_with('\r') {
                input.pop();
            }
        }
        Ok(input)
    }
}

/// Output writer that collects into a memory buffer until flushed.
pub struct Writer(Vec<u8>);

impl Writer {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) -> io::Result<()> {
        writeln!(self.0, "{}", value)
    }

    /// Writes everything buffered so far to `out`.
    pub fn flush_to(self, mut out: impl Write) -> io::Result<()> {
        out.write_all(&self.0)?;
        out.flush()
    }

    pub(crate) fn into_string(self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture runner for `data/<problem>/<n>.in` and `<n>.out` pairs.
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::time::{Duration, Instant};

    pub(crate) fn problem_dir(problem_name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("data")
            .join(problem_name)
    }

    /// Discover all test case numbers for a given problem
    pub fn discover_tests(problem_name: &str) -> Vec<usize> {
        let mut test_numbers: Vec<usize> = fs::read_dir(problem_dir(problem_name))
            .map(|entries| {
                entries
                    .flatten()
                    .filter_map(|entry| {
                        entry
                            .file_name()
                            .to_str()
                            .and_then(|name| name.strip_suffix(".in"))
                            .and_then(|num| num.parse().ok())
                    })
                    .collect()
            })
            .unwrap_or_default();

        test_numbers.sort_unstable();
        test_numbers
    }

    /// Run a single test case and return (expected, actual, duration)
    pub fn run_test_case<F>(
        problem_name: &str,
        test_num: usize,
        solve_fn: F,
    ) -> Result<(String, String, Duration), String>
    where
        F: FnOnce(&mut Scanner, &mut Writer) -> io::Result<()>,
    {
        let test_dir = problem_dir(problem_name);
        let in_file = test_dir.join(format!("{}.in", test_num));
        let out_file = test_dir.join(format!("{}.out", test_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::new();

        let start = Instant::now();
        solve_fn(&mut scanner, &mut writer)
            .map_err(|e| format!("Solver failed on {}: {}", in_file.display(), e))?;
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

    /// Assert every fixture for a problem passes
    pub fn verify_all_tests<F>(problem_name: &str, solve_fn: F)
    where
        F: Fn(&mut Scanner, &mut Writer) -> io::Result<()>,
    {
        let test_cases = discover_tests(problem_name);
        assert!(
            !test_cases.is_empty(),
            "No test cases found for {}",
            problem_name
        );

        for test_num in test_cases {
            match run_test_case(problem_name, test_num, &solve_fn) {
                Ok((expected, actual, duration)) => {
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
    }

    /// Run all fixtures, printing one line per case. Returns true when all pass.
    pub fn run_all_tests<F>(problem_name: &str, solve_fn: F) -> bool
    where
        F: Fn(&mut Scanner, &mut Writer) -> io::Result<()>,
    {
        let test_cases = discover_tests(problem_name);
        if test_cases.is_empty() {
            println!("No test cases found for {}", problem_name);
            return false;
        }
        info!("checking {} fixtures for {}", test_cases.len(), problem_name);

        let mut failed = 0;
        let mut total_duration = Duration::ZERO;

        for &test_num in &test_cases {
            let outcome = run_test_case(problem_name, test_num, &solve_fn);
            let ok = match outcome {
                Ok((expected, actual, duration)) => {
                    total_duration += duration;
                    let status = if actual == expected { "PASSED" } else { "FAILED" };
                    println!("Test case {}: {} ({:.2}s)", test_num, status, duration.as_secs_f64());
                    if actual != expected {
                        println!("  Expected: {}", expected);
                        println!("  Actual:   {}", actual);
                    }
                    actual == expected
                }
                Err(e) => {
                    println!("Test case {}: ERROR - {}", test_num, e);
                    false
                }
            };
            if !ok {
                failed += 1;
            }
        }

        info!(
            "{}: {} passed, {} failed in {:.2}s",
            problem_name,
            test_cases.len() - failed,
            failed,
            total_duration.as_secs_f64()
        );
        failed == 0
    }
}
