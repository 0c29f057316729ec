//! Input source resolution.
//!
//! Every path the run needs may come from a flag. When one is missing and
//! stdin is an interactive terminal the user is asked for it; otherwise the
//! run fails before doing any work.

use super::error::InputError;
use crate::cli::Cli;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

/// Where the tree to scan comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Clone every repository in `repos` into `dest`, then scan `dest`.
    Clone { repos: PathBuf, dest: PathBuf },
    /// Scan an existing directory in place.
    Local { root: PathBuf },
}

/// Every input path of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInput {
    pub source: InputSource,
    pub keywords: PathBuf,
    pub output: PathBuf,
}

/// Asks the user for a value that was not given on the command line.
pub trait Prompter {
    /// Returns `Ok(None)` when no answer can be obtained.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>>;
}

/// Prompts on stdout and reads answers from stdin, only when stdin is a terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        let stdin = io::stdin();
        if !stdin.is_terminal() {
            return Ok(None);
        }

        print!("{}: ", question);
        io::stdout().flush()?;

        let mut answer = String::new();
        if stdin.lock().read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer))
    }
}

/// Resolves CLI flags, falling back to prompts, into a [`ResolvedInput`].
pub struct SourceResolver<P = TerminalPrompter> {
    prompter: P,
}

impl SourceResolver<TerminalPrompter> {
    pub fn new() -> Self {
        Self {
            prompter: TerminalPrompter,
        }
    }
}

impl Default for SourceResolver<TerminalPrompter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Prompter> SourceResolver<P> {
    pub fn with_prompter(prompter: P) -> Self {
        Self { prompter }
    }

    /// Resolve every input path, in the order the user would be asked for them.
    pub fn resolve(&mut self, cli: &Cli) -> Result<ResolvedInput, InputError> {
        if let Some(root) = &cli.root {
            let keywords = self.value(&cli.keywords, "keyword list file", "Keyword list")?;
            let output = self.value(&cli.output, "report output file", "Report file")?;
            return Ok(ResolvedInput {
                source: InputSource::Local { root: root.clone() },
                keywords,
                output,
            });
        }

        let repos = self.value(&cli.repos, "repository list file", "Repository list")?;
        let keywords = self.value(&cli.keywords, "keyword list file", "Keyword list")?;
        let dest = self.value(&cli.dest, "clone destination", "Clone destination")?;
        let output = self.value(&cli.output, "report output file", "Report file")?;
        Ok(ResolvedInput {
            source: InputSource::Clone { repos, dest },
            keywords,
            output,
        })
    }

    fn value(
        &mut self,
        flag: &Option<PathBuf>,
        name: &'static str,
        question: &str,
    ) -> Result<PathBuf, InputError> {
        if let Some(path) = flag {
            return Ok(path.clone());
        }

        let answer = self
            .prompter
            .ask(question)
            .map_err(|e| InputError::Prompt(name, e))?;

        match answer.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
            _ => Err(InputError::Missing(name)),
        }
    }
}
