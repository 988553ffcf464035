//! Line-oriented prompting with re-prompt on invalid input.

use realty_index::Rectangle;
use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a full line.
    pub fn say(&mut self, message: impl std::fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Read one line, without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Show `prompt` and return the raw reply.
    pub fn ask_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Show `prompt`, then keep showing `retry` until `parse` accepts a reply.
    pub fn ask<T>(
        &mut self,
        prompt: &str,
        retry: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> io::Result<Option<T>> {
        let mut message = prompt;
        loop {
            let Some(line) = self.ask_line(message)? else {
                return Ok(None);
            };
            if let Some(value) = parse(&line) {
                return Ok(Some(value));
            }
            log::debug!("re-prompting after invalid reply {:?}", line);
            message = retry;
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// A finite, non-negative real number.
pub fn non_negative(reply: &str) -> Option<f64> {
    reply
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// A non-negative, non-NaN real number; `inf` is accepted as "no limit".
pub fn ceiling(reply: &str) -> Option<f64> {
    reply
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan() && *value >= 0.0)
}

pub fn count(reply: &str) -> Option<u32> {
    reply.trim().parse::<u32>().ok()
}

fn reals<const N: usize>(reply: &str) -> Option<[f64; N]> {
    let mut values = [0.0; N];
    let mut tokens = reply.split_whitespace();
    for slot in &mut values {
        let value = tokens.next()?.parse::<f64>().ok()?;
        if !value.is_finite() {
            return None;
        }
        *slot = value;
    }
    tokens.next().is_none().then_some(values)
}

/// `x y`
pub fn point(reply: &str) -> Option<(f64, f64)> {
    reals::<2>(reply).map(|[x, y]| (x, y))
}

/// `x_min y_min x_max y_max` with both minima at most their maxima.
pub fn rectangle(reply: &str) -> Option<Rectangle> {
    reals::<4>(reply)
        .map(|[x_min, y_min, x_max, y_max]| Rectangle::new(x_min, y_min, x_max, y_max))
        .filter(Rectangle::is_well_formed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(" 12.5 "), Some(12.5));
        assert_eq!(non_negative("0"), Some(0.0));
        assert_eq!(non_negative("-1"), None);
        assert_eq!(non_negative("abc"), None);
        assert_eq!(non_negative("inf"), None);
    }

    #[test]
    fn test_ceiling_accepts_infinity() {
        assert_eq!(ceiling("inf"), Some(f64::INFINITY));
        assert_eq!(ceiling("100"), Some(100.0));
        assert_eq!(ceiling("-3"), None);
        assert_eq!(ceiling("NaN"), None);
    }

    #[test]
    fn test_count() {
        assert_eq!(count("3"), Some(3));
        assert_eq!(count("-1"), None);
        assert_eq!(count("2.5"), None);
    }

    #[test]
    fn test_rectangle() {
        assert_eq!(
            rectangle("0 0 10 5"),
            Some(Rectangle::new(0.0, 0.0, 10.0, 5.0))
        );
        assert_eq!(rectangle("10 0 0 5"), None);
        assert_eq!(rectangle("0 0 10"), None);
        assert_eq!(rectangle("0 0 10 5 6"), None);
        assert_eq!(rectangle("0 0 x 5"), None);
    }

    #[test]
    fn test_point() {
        assert_eq!(point("3 -4"), Some((3.0, -4.0)));
        assert_eq!(point("3"), None);
    }

    #[test]
    fn test_ask_reprompts_until_valid() {
        let input = Cursor::new("nope\n-2\n7\n");
        let mut prompter = Prompter::new(input, Vec::new());

        let value = prompter
            .ask("Price: ", "Try again: ", non_negative)
            .unwrap();
        assert_eq!(value, Some(7.0));

        let output = String::from_utf8(prompter.into_output()).unwrap();
        assert_eq!(output, "Price: Try again: Try again: ");
    }

    #[test]
    fn test_ask_returns_none_at_end_of_input() {
        let mut prompter = Prompter::new(Cursor::new("bad\n"), Vec::new());
        assert_eq!(prompter.ask("n: ", "again: ", count).unwrap(), None);
    }
}
