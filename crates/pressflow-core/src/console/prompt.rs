//! Terminal implementation of the prompt trait

use std::io::{IsTerminal, Write};

use colored::Colorize;

use super::Interaction;
use crate::error::{CoreError, Result};

/// Prompts over stdin/stdout
pub struct TerminalPrompt {
    interactive: bool,
}

impl TerminalPrompt {
    /// Interactive when stdin is a terminal and the user did not pass
    /// --no-interaction
    pub fn new(no_interaction: bool) -> Self {
        Self {
            interactive: !no_interaction && std::io::stdin().is_terminal(),
        }
    }

    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        let bytes = std::io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            return Err(CoreError::InvalidInput(
                "input stream closed before the prompt was answered".to_string(),
            ));
        }
        Ok(line.trim().to_string())
    }

    fn print_options(&self, options: &[String]) {
        for (index, option) in options.iter().enumerate() {
            println!("  [{}] {}", index + 1, option.cyan());
        }
    }
}

impl Interaction for TerminalPrompt {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn ask(&self, question: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) => print!("{} [{}]: ", question, default.dimmed()),
            None => print!("{}: ", question),
        }
        std::io::stdout().flush()?;

        let answer = self.read_line()?;
        if answer.is_empty() {
            return Ok(default.unwrap_or_default().to_string());
        }
        Ok(answer)
    }

    fn ask_hidden(&self, question: &str) -> Result<String> {
        print!("{} (hidden): ", question);
        std::io::stdout().flush()?;

        let answer = read_without_echo()?;
        println!();
        Ok(answer)
    }

    fn confirm(&self, question: &str, default: bool) -> Result<bool> {
        if !self.interactive {
            return Ok(default);
        }

        let hint = if default { "[Y/n]" } else { "[y/N]" };
        print!("{} {}: ", question, hint.dimmed());
        std::io::stdout().flush()?;

        let answer = self.read_line()?;
        if answer.is_empty() {
            return Ok(default);
        }
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }

    fn choice(&self, question: &str, options: &[String]) -> Result<usize> {
        println!("{}", question);
        self.print_options(options);

        loop {
            print!("Select [1-{}]: ", options.len());
            std::io::stdout().flush()?;

            let answer = self.read_line()?;
            match answer.parse::<usize>() {
                Ok(number) if (1..=options.len()).contains(&number) => return Ok(number - 1),
                _ => println!("{}", "Please enter one of the listed numbers.".yellow()),
            }
        }
    }

    fn multichoice(&self, question: &str, options: &[String]) -> Result<Vec<usize>> {
        println!("{}", question);
        self.print_options(options);

        loop {
            print!("Select one or more, comma-separated [1-{}]: ", options.len());
            std::io::stdout().flush()?;

            let answer = self.read_line()?;
            let parsed: Option<Vec<usize>> = answer
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(|part| match part.parse::<usize>() {
                    Ok(number) if (1..=options.len()).contains(&number) => Some(number - 1),
                    _ => None,
                })
                .collect();

            match parsed {
                Some(indices) if !indices.is_empty() => return Ok(indices),
                _ => println!("{}", "Please enter numbers from the list.".yellow()),
            }
        }
    }
}

/// Read a line from the terminal without echoing the typed characters.
/// Falls back to a plain read when stdin is not a terminal (piped
/// input, tests).
fn read_without_echo() -> Result<String> {
    use crossterm::event::{Event, KeyCode, KeyModifiers, read};
    use crossterm::terminal;

    if !std::io::stdin().is_terminal() {
        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        return Ok(line.trim_end_matches(['\r', '\n']).to_string());
    }

    terminal::enable_raw_mode().map_err(std::io::Error::from)?;
    let mut secret = String::new();
    let result = loop {
        match read().map_err(std::io::Error::from) {
            Ok(Event::Key(key)) => match key.code {
                KeyCode::Enter => break Ok(secret.clone()),
                KeyCode::Backspace => {
                    secret.pop();
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    break Err(CoreError::Cancelled);
                }
                KeyCode::Char(c) => secret.push(c),
                _ => {}
            },
            Ok(_) => {}
            Err(e) => break Err(e.into()),
        }
    };
    terminal::disable_raw_mode().map_err(std::io::Error::from)?;

    result
}
