//! Interactive shell over a single local navigator.

use anyhow::{Result, anyhow};
use colored::*;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::sync::Arc;

use super::commands::{self, Command, CommandOutput};
use super::{Navigator, ShellCompleter};
use crate::print_line;

/// Shell state - owns the navigator the REPL drives
pub struct Shell {
    navigator: Arc<Navigator>,
}

impl Shell {
    /// Create a shell starting at `path`
    pub fn new(path: impl Into<String>) -> Self {
        Shell {
            navigator: Arc::new(Navigator::new(path)),
        }
    }

    /// Get the navigator
    pub fn navigator(&self) -> &Arc<Navigator> {
        &self.navigator
    }

    /// Execute a command line
    ///
    /// Returns `Err` with the message `exit` when the user asks to leave.
    pub fn execute(&self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(());
        }

        let parts = Self::parse_command_line(line)?;
        if parts.is_empty() {
            return Ok(());
        }

        let cmd_name = &parts[0];
        let args = &parts[1..];

        match cmd_name.as_str() {
            "exit" | "quit" => return Err(anyhow!("exit")),
            "help" => {
                self.print_help();
                return Ok(());
            }
            _ => {}
        }

        let command = Command::parse(cmd_name, args)?;
        match self.navigator.execute(&command)? {
            CommandOutput::Path(path) => print_line!("{path}"),
            CommandOutput::Listing(entries) => {
                for entry in &entries {
                    print_line!("{}", commands::ls::display_entry(entry));
                }
            }
            CommandOutput::Done => {}
        }
        Ok(())
    }

    /// Print help message
    fn print_help(&self) {
        println!("Available commands:");
        for name in Command::NAMES {
            if let Some(usage) = Command::usage(name) {
                println!("  {usage}");
            }
        }
        println!("  help           - Show this help");
        println!("  exit/quit      - Exit the shell");
    }

    /// Get the prompt string
    pub fn prompt(&self) -> String {
        format!("filesh:{} $ ", self.navigator.pwd())
    }

    /// Parse command line respecting quotes (both single and double)
    pub fn parse_command_line(line: &str) -> Result<Vec<String>> {
        let mut args = Vec::new();
        let mut current_arg = String::new();
        let mut in_single_quote = false;
        let mut in_double_quote = false;
        let mut escape_next = false;
        // Tracks `""` so an explicitly empty operand survives
        let mut quoted = false;

        for ch in line.chars() {
            if escape_next {
                current_arg.push(ch);
                escape_next = false;
                continue;
            }

            match ch {
                '\\' if !in_single_quote => {
                    escape_next = true;
                }
                '\'' if !in_double_quote => {
                    in_single_quote = !in_single_quote;
                    quoted = true;
                }
                '"' if !in_single_quote => {
                    in_double_quote = !in_double_quote;
                    quoted = true;
                }
                ' ' | '\t' if !in_single_quote && !in_double_quote => {
                    if !current_arg.is_empty() || quoted {
                        args.push(std::mem::take(&mut current_arg));
                        quoted = false;
                    }
                }
                _ => {
                    current_arg.push(ch);
                }
            }
        }

        if !current_arg.is_empty() || quoted {
            args.push(current_arg);
        }

        if in_single_quote {
            return Err(anyhow!("Unclosed single quote"));
        }
        if in_double_quote {
            return Err(anyhow!("Unclosed double quote"));
        }

        Ok(args)
    }
}

/// Run the read-eval-print loop until EOF or `exit`
pub fn run(shell: Shell) -> Result<()> {
    println!("{}", "=".repeat(60).cyan());
    println!("{}", "  filesh - local file shell".bold().cyan());
    println!("{}", "=".repeat(60).cyan());
    println!();
    println!("Type 'help' for available commands or 'exit' to quit");
    println!();

    let completer = ShellCompleter::new(Arc::clone(shell.navigator()));
    let mut rl: Editor<ShellCompleter, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(completer));

    let history_file = dirs::home_dir().map(|mut p| {
        p.push(".filesh_history");
        p
    });

    if let Some(path) = &history_file {
        let _ = rl.load_history(path);
    }

    loop {
        let prompt = shell.prompt();

        match rl.readline(&prompt) {
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());

                if let Err(e) = shell.execute(&line) {
                    if e.to_string() == "exit" {
                        break;
                    }
                    eprintln!("{} {}", "Error:".red().bold(), e);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("{} {:?}", "Error:".red().bold(), err);
                break;
            }
        }
    }

    if let Some(path) = &history_file {
        let _ = rl.save_history(path);
    }

    println!("Goodbye!");
    Ok(())
}
