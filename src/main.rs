use vitrine::platform_winit;

fn main() {
    // Default to info-level logging; RUST_LOG still wins when set.
    let default = "info,vitrine=info";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();
    if let Err(e) = platform_winit::run() {
        eprintln!("error: {e}");
    }
}
