use env_logger::LogBuilder;
use std::env;

/// Installs a stderr logger filtered by `RUST_LOG`.
///
/// Calling it more than once is harmless, only the first logger stays
/// installed.
pub fn init() {
    let mut builder = LogBuilder::new();
    builder.format(|record| {
        format!("{}:{}: {}", record.level(), record.location().module_path(), record.args())
    });
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse(&filters);
    }
    let _ = builder.init();
}
