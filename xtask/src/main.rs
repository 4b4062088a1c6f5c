//! Build-support tasks: man page and shell completion generation.
//!
//! Run via `cargo run -p xtask -- <task>`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Build support tasks", disable_version_flag = true)]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate roff man pages for the binary and every subcommand.
    Man {
        /// Output directory for the generated pages.
        #[arg(long, default_value = "target/dist/man")]
        out_dir: PathBuf,
    },
    /// Generate completion scripts for common shells.
    Completions {
        /// Output directory for the generated scripts.
        #[arg(long, default_value = "target/dist/completions")]
        out_dir: PathBuf,
    },
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => generate_man_pages(&out_dir),
        Task::Completions { out_dir } => generate_completions(&out_dir),
    }
}

/// Render `prosemeter.1` plus one page per subcommand.
fn generate_man_pages(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let mut cmd = prosemeter::command();
    cmd.build();

    let bin_name = cmd.get_name().to_string();
    render_page(&cmd, out_dir, &format!("{bin_name}.1"))?;

    for sub in cmd.get_subcommands() {
        if sub.is_hide_set() {
            continue;
        }
        let page_name = format!("{bin_name}-{}", sub.get_name());
        let sub_cmd = sub.clone().name(page_name.clone());
        render_page(&sub_cmd, out_dir, &format!("{page_name}.1"))?;
    }

    println!("man pages written to {}", out_dir.display());
    Ok(())
}

fn render_page(cmd: &clap::Command, out_dir: &Path, file_name: &str) -> io::Result<()> {
    let man = clap_mangen::Man::new(cmd.clone());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(out_dir.join(file_name), buffer)
}

/// Emit completion scripts for every shell clap_complete supports out of
/// the box.
fn generate_completions(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let mut cmd = prosemeter::command();
    cmd.build();
    let bin_name = cmd.get_name().to_string();

    for shell in [
        Shell::Bash,
        Shell::Elvish,
        Shell::Fish,
        Shell::PowerShell,
        Shell::Zsh,
    ] {
        let path = clap_complete::generate_to(shell, &mut cmd, bin_name.clone(), out_dir)?;
        println!("wrote {}", path.display());
    }

    Ok(())
}
