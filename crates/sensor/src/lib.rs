//! Sensor module - accelerometer sample feed
//!
//! Gestures are recognized from a stream of `{x, y, z}` samples. This crate
//! moves those samples from their producers to the game screen:
//!
//! - [`hub`]: single-subscriber fan-in with RAII subscriptions
//! - [`protocol`]: line-delimited JSON wire format
//! - [`server`]: TCP listener for external producers (e.g. a phone)
//! - [`runtime`]: owns the tokio runtime the listener runs on
//!
//! # Environment Variables
//!
//! - `CHARADES_SENSOR_HOST`: Bind host name or IP (default: "127.0.0.1")
//! - `CHARADES_SENSOR_PORT`: Port number (default: 7878)
//! - `CHARADES_SENSOR_BUFFER`: Samples buffered per subscription (default: 64)
//! - `CHARADES_SENSOR_DISABLED`: Set to "1" or "true" to disable the feed
//!
//! # Testing
//!
//! Stream samples by hand with netcat while a card is showing:
//!
//! ```bash
//! nc 127.0.0.1 7878
//! {"type":"sample","x":0,"y":0,"z":0.0}
//! {"type":"sample","x":0,"y":0,"z":0.9}
//! ```

pub mod hub;
pub mod protocol;
pub mod runtime;
pub mod server;

pub use charades_types as types;

pub use hub::{SensorHub, SensorSubscription};
pub use protocol::{
    decode_line, encode_sample, parse_line, ProtocolError, SampleMessage, MAX_LINE_BYTES,
};
pub use runtime::SensorBridge;
pub use server::{run_server, ServerConfig};
