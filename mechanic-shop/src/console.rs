//! Line-oriented prompting over any reader/writer pair.
//!
//! The binary wraps stdin and stdout; tests feed a scripted `Cursor`.

use std::io::{BufRead, Write};

use crate::errors::{Result, ShopError};
use crate::validation::ValidationError;

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print one line.
    ///
    /// # Errors
    ///
    /// Fails if the output cannot be written.
    pub fn say(&mut self, line: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Print `prompt` and read one line without its line terminator.
    ///
    /// # Errors
    ///
    /// [`ShopError::InputClosed`] at end of input.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShopError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Keep prompting until `parse` accepts the input, printing each
    /// rejection.
    ///
    /// # Errors
    ///
    /// [`ShopError::InputClosed`] at end of input.
    pub fn prompt_with<T, F>(&mut self, prompt: &str, parse: F) -> Result<T>
    where
        F: Fn(&str) -> std::result::Result<T, ValidationError>,
    {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(err) => self.say(err)?,
            }
        }
    }

    /// Prompt until `check` accepts, returning the accepted text.
    ///
    /// # Errors
    ///
    /// [`ShopError::InputClosed`] at end of input.
    pub fn prompt_text<F>(&mut self, prompt: &str, check: F) -> Result<String>
    where
        F: Fn(&str) -> std::result::Result<(), ValidationError>,
    {
        self.prompt_with(prompt, |input| check(input).map(|()| input.to_string()))
    }

    /// Ask a yes/no question until answered with `y` or `n`.
    ///
    /// # Errors
    ///
    /// [`ShopError::InputClosed`] at end of input.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let prompt = format!("{question} (y/n): ");
        loop {
            match self.read_line(&prompt)?.trim() {
                "y" | "Y" | "yes" => return Ok(true),
                "n" | "N" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.")?,
            }
        }
    }

    /// Print a numbered list of `options` and return the zero-based index
    /// of the one chosen.
    ///
    /// # Errors
    ///
    /// [`ShopError::InputClosed`] at end of input.
    pub fn choose<S: AsRef<str>>(&mut self, prompt: &str, options: &[S]) -> Result<usize> {
        for (i, option) in options.iter().enumerate() {
            self.say(format_args!("{}. {}", i + 1, option.as_ref()))?;
        }
        let count = options.len();
        self.prompt_with(prompt, |input| match input.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
            _ => Err(ValidationError::new(
                "choice",
                format!("enter a number from 1 to {count}"),
            )),
        })
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validators;
    use std::io::Cursor;

    fn scripted(lines: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(lines.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn test_read_line_strips_terminator() {
        let mut console = scripted("Honda\r\nCivic\n");
        assert_eq!(console.read_line("Make: ").unwrap(), "Honda");
        assert_eq!(console.read_line("Model: ").unwrap(), "Civic");
        assert_eq!(printed(console), "Make: Model: ");
    }

    #[test]
    fn test_read_line_end_of_input() {
        let mut console = scripted("");
        assert!(matches!(
            console.read_line("Make: "),
            Err(ShopError::InputClosed)
        ));
    }

    #[test]
    fn test_prompt_with_reprompts_until_valid() {
        let mut console = scripted("951-123-4567\n(951)123-4567\n");
        let phone = console
            .prompt_text("Phone: ", validators::validate_phone)
            .unwrap();
        assert_eq!(phone, "(951)123-4567");

        let out = printed(console);
        assert_eq!(out.matches("Phone: ").count(), 2);
        assert!(out.contains("Invalid phone number"));
    }

    #[test]
    fn test_confirm() {
        let mut console = scripted("maybe\ny\nn\n");
        assert!(console.confirm("Retry?").unwrap());
        assert!(!console.confirm("Retry?").unwrap());
        assert!(printed(console).contains("Please answer y or n."));
    }

    #[test]
    fn test_choose_is_one_based() {
        let mut console = scripted("0\n3\n2\n");
        let picked = console.choose("Pick: ", &["first", "second"]).unwrap();
        assert_eq!(picked, 1);

        let out = printed(console);
        assert!(out.starts_with("1. first\n2. second\n"));
        assert_eq!(out.matches("Invalid choice").count(), 2);
    }
}
