/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `glowframe init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# glowframe configuration
# Location: ~/.config/glowframe/config.toml

[glow]
# Glow color while the host window is focused (#rrggbb).
active_color = "#ffff00"
# Glow color while the host window is in the background.
inactive_color = "#d3d3d3"
# Turn the glow strips into resize handles (directional cursors, press to resize).
resize = true
# Keep the glow above all non-topmost windows.
topmost = false

[logging]
# Enable file logging to ~/.config/glowframe/logs/glowframe.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}
