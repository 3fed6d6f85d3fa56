use std::{fmt::Display, str::FromStr};

/// Upper bound accepted for `--jobs`.
pub const MAX_JOBS: usize = 4096;

/// Wrapper type to parse sizes with optional suffixes (e.g. 16K, 1MiB).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeArg(pub usize);

impl FromStr for SizeArg {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&lower);
        let num: usize = num_str
            .parse()
            .map_err(|_| format!("Invalid size number: {num_str}"))?;
        num.checked_mul(multiplier)
            .map(Self)
            .ok_or_else(|| format!("Size too large: {s}"))
    }
}

fn parse_with_suffix(s: &str) -> (&str, usize) {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const SUFFIXES: &[(&[&str], usize)] = &[(&["mib", "mb", "m"], MB), (&["kib", "kb", "k"], KB)];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s.strip_suffix('b').unwrap_or(s), 1)
}

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max {
        if value > max_bound {
            return Err(format!("value must be at most {max_bound}"));
        }
    }
    Ok(value)
}

/// Parse a worker count; `0` means one per CPU.
///
/// # Errors
/// Returns an error if the input is not a number or exceeds [`MAX_JOBS`].
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 0, Some(MAX_JOBS))
}
