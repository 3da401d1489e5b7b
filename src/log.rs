use log::LevelFilter;

/// Initialize logging for crossfill.
///
/// # Behavior
/// - `Info` level by default, `Debug` when `debug_enabled` is true.
/// - `RUST_LOG`, if set, overrides both.
/// - Safe to call more than once; later calls are ignored.
pub fn init_logger(debug_enabled: bool) {
    use std::env;

    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("logger initialized at {level:?} level");
    }
}
