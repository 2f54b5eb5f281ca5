mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "glowframe",
    version,
    about = "Soft glow borders and resize strips for Win32 windows"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Print the configuration in effect
    Config,
    /// Open a sample window decorated with a glow border
    Demo(commands::demo::DemoArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Config => commands::config::execute(),
        Commands::Demo(args) => commands::demo::execute(&args),
    }
}
