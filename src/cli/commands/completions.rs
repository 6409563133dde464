//! Shell completion generation
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.
//!
//! # Usage
//!
//! ```bash
//! # Bash - add to ~/.bashrc
//! source <(lrt completions bash)
//!
//! # Zsh - add to ~/.zshrc
//! source <(lrt completions zsh)
//!
//! # Fish - add to ~/.config/fish/completions/lrt.fish
//! lrt completions fish > ~/.config/fish/completions/lrt.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use miette::Result;
use std::io;

use crate::cli::Cli;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "lrt", &mut io::stdout());
    Ok(())
}
