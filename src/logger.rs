// Logger module
// One informational startup line on stdout, timestamped error lines on
// stderr. Nothing is logged per request.

use chrono::Local;

/// Emitted once after a successful bind. The single informational line this
/// process produces on the happy path.
pub fn log_server_start(port: u16) {
    println!("Server listening on port {port}");
}

pub fn log_error(message: &str) {
    eprintln!("{} [ERROR] {message}", timestamp());
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("{} [ERROR] Failed to serve connection: {err:?}", timestamp());
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp();
        assert_eq!(ts.len(), 19);
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], " ");
        assert_eq!(&ts[13..14], ":");
    }
}
