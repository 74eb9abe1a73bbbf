//! TCP sensor feed
//!
//! Accepts any number of producers (e.g. a phone companion app) and publishes
//! every parsed line to the [`SensorHub`]. Uses tokio for async networking.
//!
//! Lines that are not valid UTF-8, not valid samples, or longer than
//! [`MAX_LINE_BYTES`] are logged and skipped; the connection stays open.

use std::io;
use std::net::SocketAddr;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tracing::{info, warn};

use crate::hub::{SensorHub, DEFAULT_BUFFER};
use crate::protocol::{decode_line, parse_line, MAX_LINE_BYTES};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 7878;

/// Sensor feed configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host name or IP address to bind.
    pub host: String,
    pub port: u16,
    /// Samples buffered per subscription.
    pub buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            buffer: DEFAULT_BUFFER,
        }
    }
}

impl ServerConfig {
    /// Create from any key/value source (environment, test fixtures).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("CHARADES_SENSOR_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("CHARADES_SENSOR_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        let buffer = lookup("CHARADES_SENSOR_BUFFER")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_BUFFER);

        Self { host, port, buffer }
    }

    /// Check if the feed is disabled in the given source
    pub fn disabled_in(lookup: impl Fn(&str) -> Option<String>) -> bool {
        lookup("CHARADES_SENSOR_DISABLED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }
}

/// Bind and serve until the listener fails.
///
/// `ready_tx` receives the bound address (useful with port 0).
pub async fn run_server(
    config: ServerConfig,
    hub: SensorHub,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("binding sensor feed on {}:{}", config.host, config.port))?;
    let bound = listener.local_addr()?;
    info!(%bound, "sensor feed listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let mut next_id = 0usize;
    loop {
        let (socket, peer) = listener.accept().await?;
        next_id += 1;
        let producer_id = next_id;
        info!(producer_id, %peer, "sensor producer connected");

        let hub = hub.clone();
        tokio::spawn(async move {
            match handle_producer(socket, producer_id, hub).await {
                Ok(accepted) => info!(producer_id, accepted, "sensor producer disconnected"),
                Err(e) => warn!(producer_id, error = %e, "sensor producer failed"),
            }
        });
    }
}

/// Read lines from one producer until EOF. Returns the number of valid samples.
async fn handle_producer(socket: TcpStream, producer_id: usize, hub: SensorHub) -> anyhow::Result<u64> {
    let mut reader = BufReader::new(socket);
    let mut buf = Vec::with_capacity(128);
    let mut accepted = 0u64;

    loop {
        match read_line_capped(&mut reader, &mut buf).await? {
            LineRead::Eof => break,
            LineRead::Oversized => {
                warn!(producer_id, limit = MAX_LINE_BYTES, "skipping oversized sensor line");
                continue;
            }
            LineRead::Line => {}
        }

        let line = match decode_line(&buf) {
            Ok(line) if line.is_empty() => continue,
            Ok(line) => line,
            Err(e) => {
                warn!(producer_id, error = %e, "skipping sensor line");
                continue;
            }
        };

        match parse_line(line) {
            Ok(sample) => {
                accepted += 1;
                hub.publish(sample);
            }
            Err(e) => {
                warn!(producer_id, error = %e, "skipping sensor line");
            }
        }
    }

    Ok(accepted)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineRead {
    /// `buf` holds one line, newline included when present.
    Line,
    /// The line exceeded [`MAX_LINE_BYTES`] and was discarded.
    Oversized,
    Eof,
}

/// Read one `\n`-terminated line into `buf`, buffering at most
/// `MAX_LINE_BYTES + 1` bytes of it.
async fn read_line_capped<R>(reader: &mut R, buf: &mut Vec<u8>) -> io::Result<LineRead>
where
    R: AsyncBufRead + Unpin,
{
    buf.clear();
    let limit = MAX_LINE_BYTES as u64 + 1;
    let n = (&mut *reader).take(limit).read_until(b'\n', buf).await?;
    if n == 0 {
        return Ok(LineRead::Eof);
    }
    if buf.last() == Some(&b'\n') || (n as u64) < limit {
        return Ok(LineRead::Line);
    }

    // Too long: drop everything up to and including the next newline.
    buf.clear();
    loop {
        let (used, done) = {
            let available = reader.fill_buf().await?;
            if available.is_empty() {
                return Ok(LineRead::Oversized);
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (available.len(), false),
            }
        };
        reader.consume(used);
        if done {
            return Ok(LineRead::Oversized);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7878);
        assert_eq!(config.buffer, DEFAULT_BUFFER);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = ServerConfig::from_lookup(|key| match key {
            "CHARADES_SENSOR_PORT" => Some("9000".to_string()),
            "CHARADES_SENSOR_BUFFER" => Some("not a number".to_string()),
            _ => None,
        });
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.port, 9000);
        assert_eq!(config.buffer, DEFAULT_BUFFER);
    }

    #[test]
    fn test_disabled_flag() {
        assert!(ServerConfig::disabled_in(|_| Some("TRUE".to_string())));
        assert!(ServerConfig::disabled_in(|_| Some("1".to_string())));
        assert!(!ServerConfig::disabled_in(|_| Some("0".to_string())));
        assert!(!ServerConfig::disabled_in(|_| None));
    }

    #[tokio::test]
    async fn test_binds_by_host_name() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            port: 0,
            ..ServerConfig::default()
        };
        let (tx, rx) = oneshot::channel();
        let server = tokio::spawn(run_server(config, SensorHub::default(), Some(tx)));

        let addr = rx.await.expect("server did not bind");
        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
        server.abort();
    }

    #[tokio::test]
    async fn test_capped_reader_splits_lines() {
        let mut reader: &[u8] = b"one\ntwo";
        let mut buf = Vec::new();

        assert_eq!(read_line_capped(&mut reader, &mut buf).await.unwrap(), LineRead::Line);
        assert_eq!(buf, b"one\n");
        assert_eq!(read_line_capped(&mut reader, &mut buf).await.unwrap(), LineRead::Line);
        assert_eq!(buf, b"two");
        assert_eq!(read_line_capped(&mut reader, &mut buf).await.unwrap(), LineRead::Eof);
    }

    #[tokio::test]
    async fn test_capped_reader_skips_oversized_line() {
        let mut data = vec![b'a'; MAX_LINE_BYTES * 3];
        data.extend_from_slice(b"\nok\n");
        let mut reader: &[u8] = &data;
        let mut buf = Vec::new();

        assert_eq!(
            read_line_capped(&mut reader, &mut buf).await.unwrap(),
            LineRead::Oversized
        );
        assert!(buf.is_empty());
        assert_eq!(read_line_capped(&mut reader, &mut buf).await.unwrap(), LineRead::Line);
        assert_eq!(buf, b"ok\n");
    }

    #[tokio::test]
    async fn test_capped_reader_accepts_line_at_limit() {
        let mut data = vec![b'a'; MAX_LINE_BYTES];
        data.push(b'\n');
        let mut reader: &[u8] = &data;
        let mut buf = Vec::new();

        assert_eq!(read_line_capped(&mut reader, &mut buf).await.unwrap(), LineRead::Line);
        assert_eq!(buf.len(), MAX_LINE_BYTES + 1);
    }
}
