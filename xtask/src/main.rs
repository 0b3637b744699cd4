//! Build tasks for chapter-length: man pages and shell completions.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for chapter-length")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for the CLI and each subcommand
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Output directory
        #[arg(long, default_value = "target/completions")]
        out: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => gen_man(&out),
        Task::Completions { out } => gen_completions(&out),
    }
}

fn gen_man(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    let cmd = chapter_length::command();
    clap_mangen::generate_to(cmd, out)?;
    println!("man pages written to {}", out.display());
    Ok(())
}

fn gen_completions(out: &Path) -> io::Result<()> {
    fs::create_dir_all(out)?;
    for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell, Shell::Elvish] {
        let mut cmd = chapter_length::command();
        let path = clap_complete::generate_to(shell, &mut cmd, "chapter-length", out)?;
        println!("{shell} completions written to {}", path.display());
    }
    Ok(())
}
