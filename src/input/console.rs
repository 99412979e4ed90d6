use crate::core::reading::{RawReading, OBSERVATION_LABELS};
use crate::core::traits::ReadingSource;
use crate::engine::profile::EngineType;
use crate::error::{Result, RigError};
use ansi_term::Style;
use std::io::{BufRead, Write};
use tracing::warn;

/// Interactive observation table. Prompts on `output` and reads answers line by line from `input`.
///
/// Unparsable or non-finite answers are reported and asked again. End of input ends the
/// session with [`RigError::InputClosed`].
pub struct ConsoleSource<R, W> {
    input: R,
    output: W,
    total: usize,
    entered: usize,
    fuel_sample_volume: f64, // [cm³]
}

impl ConsoleSource<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        ConsoleSource::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleSource<R, W> {
    pub fn new(input: R, output: W) -> ConsoleSource<R, W> {
        ConsoleSource {
            input,
            output,
            total: 0,
            entered: 0,
            fuel_sample_volume: 10.0,
        }
    }

    /// Volume shown in the fuel timing prompt
    pub fn with_fuel_sample_volume(mut self, volume: f64) -> Self {
        self.fuel_sample_volume = volume;
        self
    }

    /// Engine menu. Choices other than 1 and 2 are refused and asked again.
    pub fn select_engine(&mut self) -> Result<EngineType> {
        writeln!(self.output, "{}", Style::new().bold().paint("Select Engine Type:"))?;
        writeln!(self.output, "1. Diesel Engine")?;
        writeln!(self.output, "2. Petrol Engine")?;
        loop {
            let answer = self.ask("Enter choice (1 or 2): ")?;
            let choice = match answer.parse::<i64>() {
                Ok(c) => c,
                Err(_) => {
                    self.complain(&format!("`{}` is not an integer", answer))?;
                    continue;
                }
            };
            match EngineType::from_choice(choice) {
                Ok(engine) => {
                    writeln!(self.output, "\nSelected Engine: {}", engine)?;
                    return Ok(engine);
                }
                Err(err) => self.complain(&err.to_string())?,
            }
        }
    }

    /// Asks how many readings follow and arms the source for that many
    pub fn ask_reading_count(&mut self) -> Result<usize> {
        loop {
            let answer = self.ask("\nEnter number of load readings: ")?;
            match answer.parse::<usize>() {
                Ok(n) if n > 0 => {
                    self.set_reading_count(n);
                    writeln!(self.output, "\n----- ENTER OBSERVATION DATA -----")?;
                    return Ok(n);
                }
                _ => self.complain(&RigError::InvalidReadingCount(answer).to_string())?,
            }
        }
    }

    pub fn set_reading_count(&mut self, total: usize) {
        self.total = total;
        self.entered = 0;
    }

    fn prompt_f64(&mut self, label: &str) -> Result<f64> {
        loop {
            let answer = self.ask(&format!("{}: ", label))?;
            match answer.parse::<f64>() {
                Ok(v) if v.is_finite() => return Ok(v),
                Ok(_) => self.complain(&format!("`{}` is not a finite number", answer))?,
                Err(_) => self.complain(&format!("`{}` is not a number", answer))?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RigError::InputClosed(prompt.trim().trim_end_matches(':').to_string()));
        }
        Ok(line.trim().to_string())
    }

    fn complain(&mut self, msg: &str) -> Result<()> {
        warn!("invalid operator input: {}", msg);
        writeln!(self.output, "{}, try again.", msg)?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> ReadingSource for ConsoleSource<R, W> {
    fn next_reading(&mut self) -> Result<Option<RawReading>> {
        if self.entered >= self.total {
            return Ok(None);
        }
        writeln!(self.output, "\n--- Reading {} ---", self.entered + 1)?;
        let mut values = [0.0; 11];
        for (i, label) in OBSERVATION_LABELS.iter().enumerate() {
            values[i] = if i == 4 {
                self.prompt_f64(&format!("Time for {}cc fuel (sec)", self.fuel_sample_volume))?
            } else {
                self.prompt_f64(label)?
            };
        }
        self.entered += 1;
        Ok(Some(RawReading::from_values(values)))
    }

    fn remaining(&self) -> Option<usize> {
        Some(self.total - self.entered)
    }
}
