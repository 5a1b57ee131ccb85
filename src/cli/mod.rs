//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod env_parser;
pub mod gitignore;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use zeroize::Zeroizing;

use crate::config::PASSWORD_VAR;
use crate::errors::{DiarySealError, Result};

/// Minimum passphrase length, in characters, accepted by `setup`.
pub const MIN_PASSPHRASE_LEN: usize = 6;

/// DiarySeal CLI: encrypted static diary builder.
#[derive(Parser)]
#[command(
    name = "diaryseal",
    about = "Encrypt a markdown diary into a passphrase-gated static site archive",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project directory containing diary/, keys/ and public/
    #[arg(short = 'C', long, default_value = ".", global = true)]
    pub project_dir: PathBuf,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Choose the diary passphrase; writes the verification hash and prints the key
    Setup {
        /// Replace an existing verification hash
        #[arg(long)]
        force: bool,
    },

    /// Encrypt all diary entries into the site archive
    Build,

    /// Decrypt the published archive and show the entries
    Unlock {
        /// Print the decrypted entries as JSON
        #[arg(long)]
        json: bool,

        /// Print full entry bodies instead of a summary table
        #[arg(long, conflicts_with = "json")]
        full: bool,
    },

    /// Update the diary submodule, rebuild, commit and push
    Deploy {
        /// Remote to push to
        #[arg(long, default_value = "origin")]
        remote: String,

        /// Branch to push
        #[arg(long, default_value = "main")]
        branch: String,

        /// Submodule holding the diary entries
        #[arg(long, default_value = "diary")]
        submodule: String,

        /// Commit but do not push
        #[arg(long)]
        no_push: bool,
    },

    /// Show version and archive protocol details
    Version,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ---------------------------------------------------------------------------
// Passphrase input
// ---------------------------------------------------------------------------

/// Source of typed passphrases.
///
/// The terminal implementation wraps `dialoguer`; tests script the answers.
pub trait PassphrasePrompt {
    /// Ask for one hidden line of input.
    fn ask(&mut self, prompt: &str) -> Result<Zeroizing<String>>;

    /// Tell the user why the last answer was refused.
    fn reject(&mut self, reason: &str);
}

/// Interactive terminal prompt.
pub struct TerminalPrompt;

impl PassphrasePrompt for TerminalPrompt {
    fn ask(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        let pw = dialoguer::Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| DiarySealError::CommandFailed(format!("passphrase prompt: {e}")))?;
        Ok(Zeroizing::new(pw))
    }

    fn reject(&mut self, reason: &str) {
        output::warning(reason);
    }
}

/// Ask for a new passphrase plus confirmation until both rules hold:
/// at least `MIN_PASSPHRASE_LEN` characters, and both entries identical.
///
/// Either failure starts over from the first prompt.
pub fn choose_passphrase(prompt: &mut impl PassphrasePrompt) -> Result<Zeroizing<String>> {
    loop {
        let passphrase = prompt.ask("Choose diary passphrase")?;

        if passphrase.chars().count() < MIN_PASSPHRASE_LEN {
            prompt.reject(&format!(
                "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
            ));
            continue;
        }

        let confirmation = prompt.ask("Confirm passphrase")?;
        if *passphrase != *confirmation {
            prompt.reject("Passphrases do not match. Try again.");
            continue;
        }

        return Ok(passphrase);
    }
}

/// Get a new passphrase for `setup`.
///
/// `DIARY_PASSWORD` is honoured for scripted setups (still length-checked);
/// otherwise the user is prompted interactively.
pub fn new_passphrase() -> Result<Zeroizing<String>> {
    if let Some(pw) = passphrase_from_env() {
        if pw.chars().count() < MIN_PASSPHRASE_LEN {
            return Err(DiarySealError::ConfigError(format!(
                "{PASSWORD_VAR} must be at least {MIN_PASSPHRASE_LEN} characters"
            )));
        }
        return Ok(pw);
    }

    choose_passphrase(&mut TerminalPrompt)
}

/// Get the passphrase for `unlock`: `DIARY_PASSWORD`, else a prompt.
pub fn existing_passphrase() -> Result<Zeroizing<String>> {
    match passphrase_from_env() {
        Some(pw) => Ok(pw),
        None => TerminalPrompt.ask("Diary passphrase"),
    }
}

fn passphrase_from_env() -> Option<Zeroizing<String>> {
    std::env::var(PASSWORD_VAR)
        .ok()
        .filter(|pw| !pw.is_empty())
        .map(Zeroizing::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers and records every rejection.
    struct Scripted {
        answers: VecDeque<&'static str>,
        rejections: Vec<String>,
        asked: usize,
    }

    impl Scripted {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                rejections: Vec::new(),
                asked: 0,
            }
        }
    }

    impl PassphrasePrompt for Scripted {
        fn ask(&mut self, _prompt: &str) -> Result<Zeroizing<String>> {
            self.asked += 1;
            self.answers
                .pop_front()
                .map(|a| Zeroizing::new(a.to_string()))
                .ok_or_else(|| DiarySealError::CommandFailed("out of input".into()))
        }

        fn reject(&mut self, reason: &str) {
            self.rejections.push(reason.to_string());
        }
    }

    #[test]
    fn accepts_matching_passphrase_first_time() {
        let mut prompt = Scripted::new(&["correct-horse", "correct-horse"]);
        let pw = choose_passphrase(&mut prompt).unwrap();
        assert_eq!(pw.as_str(), "correct-horse");
        assert!(prompt.rejections.is_empty());
    }

    #[test]
    fn short_passphrase_is_reprompted_without_confirmation() {
        let mut prompt = Scripted::new(&["abc", "correct-horse", "correct-horse"]);
        let pw = choose_passphrase(&mut prompt).unwrap();
        assert_eq!(pw.as_str(), "correct-horse");
        assert_eq!(prompt.rejections.len(), 1);
        assert!(prompt.rejections[0].contains("at least 6"));
        assert_eq!(prompt.asked, 3);
    }

    #[test]
    fn mismatch_starts_over() {
        let mut prompt = Scripted::new(&[
            "correct-horse",
            "correct-horsE",
            "battery-staple",
            "battery-staple",
        ]);
        let pw = choose_passphrase(&mut prompt).unwrap();
        assert_eq!(pw.as_str(), "battery-staple");
        assert_eq!(prompt.rejections, ["Passphrases do not match. Try again."]);
    }

    #[test]
    fn repeated_failures_leave_no_state_behind() {
        let mut prompt = Scripted::new(&[
            "12345", "abcdef", "abcdeg", "x", "abcdef", "abcdef",
        ]);
        let pw = choose_passphrase(&mut prompt).unwrap();
        assert_eq!(pw.as_str(), "abcdef");
        assert_eq!(prompt.rejections.len(), 3);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Five characters, fifteen bytes.
        let mut prompt = Scripted::new(&["日記日記日", "日記日記日記", "日記日記日記"]);
        let pw = choose_passphrase(&mut prompt).unwrap();
        assert_eq!(pw.as_str(), "日記日記日記");
        assert_eq!(prompt.rejections.len(), 1);
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let mut prompt = Scripted::new(&["abc"]);
        assert!(choose_passphrase(&mut prompt).is_err());
    }
}
