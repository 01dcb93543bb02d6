//! Logger module
//!
//! Plain prefixed stdout/stderr lines: start banner, access lines,
//! errors and warnings. No framework; the documents and the traffic
//! are both small enough that println is the right tool.

use std::net::SocketAddr;

use crate::config::Config;

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    println!("======================================");
    println!("Quiz API server started successfully");
    println!("Listening on: http://{addr}");
    println!("Data directory: {}", config.data.dir);
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    println!("Access log: {}", if config.logging.access_log { "on" } else { "off" });
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_api_request(method: &str, path: &str, status: u16) {
    println!("[API] {method} {path} - {status}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_shutdown() {
    println!("\n[SIGNAL] Shutdown signal received, stopping accept loop");
}
