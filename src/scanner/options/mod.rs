//! One method per nmap command-line option, grouped the way `nmap -h` groups them.
//!
//! Flags without a value append one token, flags with a value append two,
//! and list-valued flags join their items with commas into a single value.

mod discovery;
mod evasion;
mod misc;
mod os;
mod output;
mod ports;
mod script;
mod target;
mod technique;
mod timing;
mod version;

use std::ops::RangeInclusive;

use crate::error::{NmapError, Result};

pub(crate) fn check_range<T>(option: &'static str, value: T, range: RangeInclusive<T>) -> Result<T>
where
    T: PartialOrd + std::fmt::Display,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(NmapError::invalid(
            option,
            format!("{} is outside {}..={}", value, range.start(), range.end()),
        ))
    }
}

/// Zero or one filename; none means stdout (`-`).
pub(crate) fn single_file<I, S>(option: &'static str, files: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut files = files.into_iter().map(Into::into);
    let first = files.next().unwrap_or_else(|| "-".to_string());
    if files.next().is_some() {
        return Err(NmapError::invalid(option, "fileName should be zero or one"));
    }
    Ok(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range_bounds_inclusive() {
        assert_eq!(check_range("-v", 1, 1..=9).unwrap(), 1);
        assert_eq!(check_range("-v", 9, 1..=9).unwrap(), 9);
        assert!(check_range("-v", 0, 1..=9).is_err());
        assert!(check_range("-v", 10, 1..=9).is_err());
    }

    #[test]
    fn test_single_file() {
        assert_eq!(single_file("-oN", Vec::<String>::new()).unwrap(), "-");
        assert_eq!(single_file("-oN", ["scan.txt"]).unwrap(), "scan.txt");
        assert!(single_file("-oN", ["a.txt", "b.txt"]).is_err());
    }
}
