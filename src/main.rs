use anyhow::Result;
use bounded_stack::shell::Shell;
use bounded_stack::BoundedStack;
use clap::Parser;
use crossterm::{style::Print, ExecutableCommand};
use std::io::{self, BufRead, IsTerminal, Write};

/// Read stack commands from stdin, one per line, and print the replies.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Maximum number of values the stack may hold.
    #[arg(long, default_value_t = BoundedStack::<i64>::DEFAULT_LIMIT)]
    limit: usize,

    /// Don't print a prompt before each command.
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::info!("starting shell with limit {}", args.limit);

    let mut shell = Shell::new(args.limit);
    let mut stdout = io::stdout();
    let color = stdout.is_terminal();

    prompt(&mut stdout, args.quiet)?;
    for line in io::stdin().lock().lines() {
        let line = line?;

        if let Some(outcome) = shell.handle_line(&line) {
            outcome.write_to(&mut stdout, color)?;
        }

        prompt(&mut stdout, args.quiet)?;
    }

    if !args.quiet {
        // Leave the cursor on a fresh line after the last prompt.
        writeln!(stdout)?;
    }

    Ok(())
}

fn prompt(stdout: &mut io::Stdout, quiet: bool) -> Result<()> {
    if !quiet {
        stdout.execute(Print("> "))?;
    }
    Ok(())
}
