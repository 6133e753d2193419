use rustyline::Context;
use rustyline::completion::{Completer, Pair};
use std::sync::Arc;

use super::Navigator;
use super::commands::Command;
use crate::vfs;

/// Tab completion helper for the shell
///
/// Entries are read fresh from the filesystem on every completion.
pub struct ShellCompleter {
    navigator: Arc<Navigator>,
    commands: Vec<String>,
}

impl ShellCompleter {
    pub fn new(navigator: Arc<Navigator>) -> Self {
        let mut commands: Vec<String> = Command::NAMES.iter().map(|s| s.to_string()).collect();
        commands.push("help".to_string());
        commands.push("exit".to_string());
        ShellCompleter {
            navigator,
            commands,
        }
    }

    /// Complete a command at the start of the line
    fn complete_command(&self, line: &str) -> Vec<Pair> {
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd.clone(),
            })
            .collect()
    }

    /// Complete a path (file or directory)
    ///
    /// Returns pairs whose replacement is the full word including any
    /// directory part already typed.
    fn complete_path(&self, path: &str, command: &str) -> Vec<Pair> {
        let (dir_part, file_prefix) = match path.rfind('/') {
            Some(last_slash) => (&path[..last_slash + 1], &path[last_slash + 1..]),
            None => ("", path),
        };

        let dir = self.navigator.resolve(dir_part);
        let show_hidden = file_prefix.starts_with('.');
        let Ok(entries) = vfs::list(&dir, show_hidden) else {
            return Vec::new();
        };

        entries
            .into_iter()
            // cd only shows directories
            .filter(|entry| command != "cd" || entry.is_dir())
            .filter(|entry| entry.name.starts_with(file_prefix))
            .map(|entry| {
                let suffix = if entry.is_dir() { "/" } else { "" };
                Pair {
                    display: format!("{}{suffix}", entry.name),
                    replacement: format!("{dir_part}{}{suffix}", entry.name),
                }
            })
            .collect()
    }
}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.trim().is_empty() {
            return Ok((0, Vec::new()));
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        let Some(command) = words.first().copied() else {
            return Ok((0, Vec::new()));
        };

        // On the first word, complete commands
        if words.len() == 1 && !line.ends_with(char::is_whitespace) {
            let start = line.len() - command.len();
            return Ok((start, self.complete_command(command)));
        }

        // Otherwise complete the word under the cursor as a path
        let word = if line.ends_with(char::is_whitespace) {
            ""
        } else {
            words.last().copied().unwrap_or("")
        };
        let start = pos - word.len();
        Ok((start, self.complete_path(word, command)))
    }
}

impl rustyline::Helper for ShellCompleter {}
impl rustyline::highlight::Highlighter for ShellCompleter {}
impl rustyline::hint::Hinter for ShellCompleter {
    type Hint = String;
}
impl rustyline::validate::Validator for ShellCompleter {}
