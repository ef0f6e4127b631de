// Server module
// TCP listener construction and the accept loop. Each connection is served
// on its own task so a slow client never starves others.

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};

use crate::handler;
use crate::logger;

/// Create a `TcpListener` with `SO_REUSEPORT` and `SO_REUSEADDR` enabled.
///
/// A failed bind (port already in use, insufficient privileges) surfaces as
/// an `io::Error`; the caller lets it terminate the process.
pub fn create_reusable_listener(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_port(true)?;
    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

/// Accept connections until the process is terminated.
///
/// Accept errors (aborted handshakes, transient resource exhaustion) are
/// logged and the loop continues.
pub async fn run(listener: TcpListener) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        match listener.accept().await {
            Ok((stream, _peer_addr)) => {
                tokio::spawn(serve_connection(stream));
            }
            Err(e) => {
                logger::log_error(&format!("Failed to accept connection: {e}"));
            }
        }
    }
}

/// Serve a single HTTP/1.1 connection with keep-alive.
async fn serve_connection(stream: TcpStream) {
    let io = TokioIo::new(stream);

    let conn = http1::Builder::new()
        .keep_alive(true)
        .serve_connection(io, service_fn(handler::handle_request));

    if let Err(e) = conn.await {
        logger::log_connection_error(&e);
    }
}
