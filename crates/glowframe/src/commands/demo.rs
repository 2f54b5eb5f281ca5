use clap::Args;

/// Arguments for the `demo` subcommand.
#[derive(Args)]
pub struct DemoArgs {
    /// X position of the sample window in pixels
    #[arg(long, default_value_t = 100)]
    pub x: i32,
    /// Y position of the sample window in pixels
    #[arg(long, default_value_t = 100)]
    pub y: i32,
    /// Width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: i32,
    /// Height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: i32,
}

#[cfg(windows)]
pub fn execute(args: &DemoArgs) {
    let config = glowframe_core::config::load();
    glowframe_core::log::init(&config.logging);

    if let Err(e) = super::demo_host::run(args, &config.glow) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

#[cfg(not(windows))]
pub fn execute(args: &DemoArgs) {
    let _ = (args.x, args.y, args.width, args.height);
    eprintln!("Error: the demo needs a Windows desktop.");
    std::process::exit(1);
}
