use env_logger::Env;

/// Set up `env_logger` for a binary.
///
/// `RUST_LOG` wins when set; otherwise each `-v` raises the level from
/// `warn` to `info` and then `debug`. Log lines go to stderr so they never
/// mix with prompts and results on stdout.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
