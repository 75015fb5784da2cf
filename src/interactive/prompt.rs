//! Line-oriented prompting
//!
//! Invalid input is reported and re-prompted until a valid value arrives.
//! Only end of input ends a prompt early, as an error.

use anyhow::{bail, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Reads answers from `input` and writes prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `prompt` and read one trimmed line
    pub fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line.trim().to_string())
    }

    /// Ask until the answer parses and passes `check`
    ///
    /// A blank answer returns `default` when one is given. `check` returns an
    /// error message for values it rejects.
    pub fn ask_parsed<T, F>(&mut self, prompt: &str, default: Option<T>, invalid: &str, check: F) -> Result<T>
    where
        T: FromStr + Clone,
        F: Fn(&T) -> Option<String>,
    {
        loop {
            let raw = self.ask(prompt)?;
            if raw.is_empty() {
                if let Some(ref value) = default {
                    return Ok(value.clone());
                }
            }
            match raw.parse::<T>() {
                Ok(value) => match check(&value) {
                    None => return Ok(value),
                    Some(message) => self.say(message)?,
                },
                Err(_) => self.say(invalid)?,
            }
        }
    }

    /// Integer with optional default and lower bound
    pub fn ask_int(&mut self, prompt: &str, default: Option<i64>, min: Option<i64>) -> Result<i64> {
        self.ask_parsed(prompt, default, "Please enter a valid integer.", |v| match min {
            Some(min) if *v < min => Some(format!("Please enter an integer >= {}", min)),
            _ => None,
        })
    }

    /// Float with optional default and lower bound
    pub fn ask_float(&mut self, prompt: &str, default: Option<f64>, min: Option<f64>) -> Result<f64> {
        self.ask_parsed(prompt, default, "Please enter a valid number.", |v: &f64| {
            if !v.is_finite() {
                return Some("Please enter a finite number.".to_string());
            }
            match min {
                Some(min) if *v < min => Some(format!("Please enter a value >= {}", min)),
                _ => None,
            }
        })
    }

    /// Unsigned integer, or `None` for a blank answer
    pub fn ask_optional_u64(&mut self, prompt: &str) -> Result<Option<u64>> {
        loop {
            let raw = self.ask(prompt)?;
            if raw.is_empty() {
                return Ok(None);
            }
            match raw.parse::<u64>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => self.say("Please enter a non-negative integer, or leave blank.")?,
            }
        }
    }

    /// Free text, or `None` for a blank answer
    pub fn ask_optional_text(&mut self, prompt: &str) -> Result<Option<String>> {
        let raw = self.ask(prompt)?;
        Ok(if raw.is_empty() { None } else { Some(raw) })
    }

    /// Consume the prompter, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_int_reprompts_until_valid() {
        let mut p = prompter("abc\n-3\n7\n");
        let value = p.ask_int("n: ", None, Some(0)).unwrap();
        assert_eq!(value, 7);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Please enter a valid integer."));
        assert!(out.contains("Please enter an integer >= 0"));
    }

    #[test]
    fn test_ask_int_blank_uses_default() {
        let mut p = prompter("\n");
        assert_eq!(p.ask_int("n: ", Some(1000), Some(1)).unwrap(), 1000);
    }

    #[test]
    fn test_ask_int_blank_without_default_reprompts() {
        let mut p = prompter("\n5\n");
        assert_eq!(p.ask_int("n: ", None, None).unwrap(), 5);
    }

    #[test]
    fn test_ask_float() {
        let mut p = prompter("x\ninf\n-1\n2.5\n");
        assert_eq!(p.ask_float("v: ", None, Some(0.0)).unwrap(), 2.5);
    }

    #[test]
    fn test_ask_optional_u64() {
        let mut p = prompter("\n");
        assert_eq!(p.ask_optional_u64("seed: ").unwrap(), None);

        let mut p = prompter("-1\n42\n");
        assert_eq!(p.ask_optional_u64("seed: ").unwrap(), Some(42));
    }

    #[test]
    fn test_eof_is_error() {
        let mut p = prompter("");
        assert!(p.ask_int("n: ", Some(1), None).is_err());
    }
}
