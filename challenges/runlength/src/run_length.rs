// Longest run of consecutive identical characters in one line.
use std::io;

use log::debug;

use crate::{Scanner, Writer};

/// Granularity at which adjacent elements are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unit {
    /// Unicode scalar values.
    #[default]
    Char,
    /// Raw UTF-8 code units.
    Byte,
}

pub fn solve(input: &mut Scanner, out: &mut Writer) -> io::Result<()> {
    solve_with(Unit::Char, input, out)
}

pub fn solve_with(unit: Unit, input: &mut Scanner, out: &mut Writer) -> io::Result<()> {
    let line = input.next_line()?;
    let longest = scan(&line, unit);
    debug!("longest run in {:?} mode: {}", unit, longest);
    out.println(longest)
}

/// Solver bound to `unit`, for harnesses that take a plain `solve` function.
pub fn solver(unit: Unit) -> impl Fn(&mut Scanner, &mut Writer) -> io::Result<()> {
    move |input: &mut Scanner, out: &mut Writer| solve_with(unit, input, out)
}

pub fn scan(s: &str, unit: Unit) -> usize {
    match unit {
        Unit::Char => longest_run(s.chars()),
        Unit::Byte => longest_run(s.bytes()),
    }
}

/// Length of the longest stretch of equal adjacent items, 0 when empty.
pub fn longest_run<I>(items: I) -> usize
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut items = items.into_iter();
    let Some(mut prev) = items.next() else {
        return 0;
    };

    let mut max_length = 1;
    let mut current_length = 1;

    for item in items {
        if item == prev {
            current_length += 1;
            if current_length > max_length {
                max_length = current_length;
            }
        } else {
            current_length = 1;
        }
        prev = item;
    }
    max_length
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(unit: Unit, input: &str) -> io::Result<String> {
        let mut scanner = Scanner::new(Cursor::new(input.to_string()));
        let mut writer = Writer::new();
        solve_with(unit, &mut scanner, &mut writer)?;
        Ok(writer.into_string().unwrap())
    }

    #[test]
    fn test_examples() {
        assert_eq!(3, scan("aaabbbccd", Unit::Char));
        assert_eq!(1, scan("a", Unit::Char));
        assert_eq!(0, scan("", Unit::Char));
        assert_eq!(1, scan("abcabc", Unit::Char));
        assert_eq!(4, scan("aabbbbcc", Unit::Char));
        assert_eq!(3, scan("ATTCGGGA", Unit::Char));
    }

    #[test]
    fn test_single_repeated_char() {
        for n in 1..=50 {
            let s = "z".repeat(n);
            assert_eq!(n, scan(&s, Unit::Char));
        }
    }

    #[test]
    fn test_no_adjacent_repeats() {
        assert_eq!(1, scan("abababab", Unit::Char));
        assert_eq!(1, scan("0123456789", Unit::Char));
    }

    #[test]
    fn test_run_at_the_end() {
        assert_eq!(5, scan("abccccc", Unit::Char));
    }

    #[test]
    fn test_whitespace_counts() {
        assert_eq!(2, scan("  x", Unit::Char));
    }

    #[test]
    fn test_same_result_twice() {
        let s = "xxyyyzz";
        assert_eq!(scan(s, Unit::Char), scan(s, Unit::Char));
    }

    #[test]
    fn test_multibyte_chars() {
        assert_eq!(2, scan("éé", Unit::Char));
        assert_eq!(1, scan("éé", Unit::Byte));
        assert_eq!(3, scan("日日日本", Unit::Char));
    }

    #[test]
    fn test_bytes() {
        assert_eq!(4, scan("aabbbbcc", Unit::Byte));
        assert_eq!(0, scan("", Unit::Byte));
    }

    #[test]
    fn test_generic_items() {
        assert_eq!(3, longest_run([1, 2, 2, 3, 3, 3, 1]));
        assert_eq!(0, longest_run(Vec::<u32>::new()));
    }

    #[test]
    fn test_solve_prints_result() {
        assert_eq!(run(Unit::Char, "aabbbbcc\n").unwrap(), "4\n");
        assert_eq!(run(Unit::Char, "aa\r\n").unwrap(), "2\n");
        assert_eq!(run(Unit::Char, "\n").unwrap(), "0\n");
        assert_eq!(run(Unit::Byte, "éé\n").unwrap(), "1\n");
    }

    #[test]
    fn test_solve_reads_only_first_line() {
        assert_eq!(run(Unit::Char, "ab\nccc\n").unwrap(), "1\n");
    }

    #[test]
    fn test_solve_closed_input() {
        let err = run(Unit::Char, "").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_fixtures() {
        crate::testing::verify_all_tests("run_length", solve);
    }

    #[test]
    fn test_solver_keeps_its_unit() {
        assert!(crate::testing::run_all_tests("run_length", solver(Unit::Char)));
        // fixture 9 has multibyte runs that only match per char
        assert!(!crate::testing::run_all_tests("run_length", solver(Unit::Byte)));
    }
}
