use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

/// Reads the run inputs from a line-oriented console.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks for the interval bounds as two whitespace-separated numbers.
    pub fn interval(&mut self) -> Result<(f64, f64)> {
        let line = self.ask("Enter the interval boundaries separated by a space [a,b]:")?;
        parse_interval(&line)
    }

    /// Asks for a single tolerance value.
    pub fn tolerance(&mut self, question: &str) -> Result<f64> {
        let line = self.ask(question)?;
        parse_number(&line)
    }

    /// Blocks until a line (or end of input) is read.
    pub fn pause(&mut self) -> Result<()> {
        writeln!(self.output, "\nPress Enter to exit...")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("unexpected end of input");
        }
        Ok(line)
    }
}

/// Parses `a b`; anything after the second number is ignored.
fn parse_interval(line: &str) -> Result<(f64, f64)> {
    let mut values = line.split_whitespace();
    let (Some(lower), Some(upper)) = (values.next(), values.next()) else {
        bail!("expected two interval bounds, got {:?}", line.trim());
    };
    Ok((parse_number(lower)?, parse_number(upper)?))
}

fn parse_number(text: &str) -> Result<f64> {
    let text = text.trim();
    text.parse()
        .with_context(|| format!("{text:?} is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use approx::assert_relative_eq;

    fn console(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn reads_inputs_in_order() {
        let mut prompt = console("-6 2\n1e-4\n0.001\n");

        let (lower, upper) = prompt.interval().unwrap();
        let eps1 = prompt.tolerance("eps1?").unwrap();
        let eps2 = prompt.tolerance("eps2?").unwrap();

        assert_relative_eq!(lower, -6.0);
        assert_relative_eq!(upper, 2.0);
        assert_relative_eq!(eps1, 1e-4);
        assert_relative_eq!(eps2, 1e-3);

        let shown = String::from_utf8(prompt.output).unwrap();
        assert!(shown.starts_with("Enter the interval boundaries"));
        assert!(shown.contains("eps1?\neps2?\n"));
    }

    #[test]
    fn accepts_extra_whitespace() {
        let mut prompt = console("   -1.5\t\t3  \n");
        let (lower, upper) = prompt.interval().unwrap();
        assert_relative_eq!(lower, -1.5);
        assert_relative_eq!(upper, 3.0);
    }

    #[test]
    fn rejects_single_bound() {
        let mut prompt = console("4\n");
        assert!(prompt.interval().is_err());
    }

    #[test]
    fn rejects_malformed_number() {
        let mut prompt = console("1 two\n");
        let err = prompt.interval().unwrap_err();
        assert!(err.to_string().contains("\"two\""));

        let mut prompt = console("abc\n");
        assert!(prompt.tolerance("eps1?").is_err());
    }

    #[test]
    fn rejects_end_of_input() {
        let mut prompt = console("");
        assert!(prompt.interval().is_err());
    }

    #[test]
    fn pause_tolerates_end_of_input() {
        let mut prompt = console("");
        prompt.pause().unwrap();
    }
}
