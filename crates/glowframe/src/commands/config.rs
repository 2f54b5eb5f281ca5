use glowframe_core::config;

/// Prints where the config lives and the values in effect after
/// defaults and validation.
pub fn execute() {
    match config::config_path() {
        Some(path) if path.exists() => println!("# {}", path.display()),
        Some(path) => println!("# {} (not found, using defaults)", path.display()),
        None => println!("# no home directory, using defaults"),
    }

    match config::load().to_toml() {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
