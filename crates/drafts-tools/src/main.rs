//! Drafts CLI - scaffold demo packages into a playground drafts workspace

use clap::Parser;
use colored::Colorize;
use drafts_core::tui::CreateArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drafts-tools")]
#[command(about = "Scaffold demo packages into a playground drafts workspace")]
#[command(version)]
struct Args {
    /// Local directory to use for templates instead of the installed set (for development use)
    #[arg(long = "template-dir")]
    template_dir: Option<PathBuf>,
}

fn main() {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C outside of a prompt gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    let result = drafts_core::run(CreateArgs {
        template_dir: args.template_dir,
    });

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    // One fallback path for every failure, cancellation included: print
    // the message and stop.
    if let Err(err) = result {
        println!("{}", err.to_string().red());
        std::process::exit(1);
    }
}
