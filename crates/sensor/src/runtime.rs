//! Sensor runtime integration.
//!
//! Bridges the synchronous UI loop with the async TCP feed: the feed runs on
//! its own tokio runtime and talks to the UI only through the [`SensorHub`].

use std::net::SocketAddr;

use anyhow::Context;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use tracing::error;

use crate::hub::SensorHub;
use crate::server::{run_server, ServerConfig};

/// Running sensor feed. Dropping it shuts the runtime down.
pub struct SensorBridge {
    _rt: Runtime,
    addr: SocketAddr,
}

impl SensorBridge {
    /// Start the feed and wait until it is listening.
    ///
    /// Bind failures are returned here rather than only logged.
    pub fn start(config: ServerConfig, hub: SensorHub) -> anyhow::Result<Self> {
        let rt = Runtime::new()?;
        let (ready_tx, ready_rx) = oneshot::channel();
        let server = rt.spawn(run_server(config, hub, Some(ready_tx)));

        let addr = match rt.block_on(ready_rx) {
            Ok(addr) => addr,
            Err(_) => {
                // The listener exited before reporting an address.
                let result = rt.block_on(server).context("sensor feed task panicked")?;
                result?;
                anyhow::bail!("sensor feed stopped before listening");
            }
        };

        rt.spawn(async move {
            if let Ok(Err(e)) = server.await {
                error!(error = %e, "sensor feed stopped");
            }
        });

        Ok(Self { _rt: rt, addr })
    }

    /// Bound listen address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }
}
