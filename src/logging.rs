use env_logger::Env;
use std::io::Write;

/// `LEVEL: message` lines on stderr, info level unless RUST_LOG says otherwise.
pub fn init() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();
}
