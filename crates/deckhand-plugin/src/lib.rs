//! # deckhand-plugin
//!
//! **Purpose**: Backend lifecycle management for host-loaded plugins
//!
//! A plugin ships a long-running backend executable alongside its own
//! files. This crate starts the backend when the host loads the
//! plugin, keeps the load task resident for the plugin's lifetime, and
//! tears the backend down at unload: polite termination first, then a
//! forced kill once a bounded grace period runs out.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use deckhand_plugin::{Plugin, PluginEnv, StopPolicy};
//!
//! # async fn host_glue() -> Result<(), Box<dyn std::error::Error>> {
//! let env = PluginEnv::discover()?;
//! let plugin = Arc::new(Plugin::new(&env, StopPolicy::default()));
//!
//! // Host load hook: runs in its own task, does not return on its own.
//! let load = tokio::spawn({
//!     let plugin = Arc::clone(&plugin);
//!     async move { plugin.on_load().await }
//! });
//!
//! // ... plugin lifetime ...
//!
//! // Host unload hook: bounded by the stop policy's grace period.
//! load.abort();
//! plugin.on_unload().await;
//! # Ok(())
//! # }
//! ```

pub mod env;
pub mod error;
pub mod logging;
pub mod plugin;
pub mod supervisor;

pub use env::PluginEnv;
pub use error::{PluginError, Result};
pub use plugin::Plugin;
pub use supervisor::{BackendSupervisor, LifecycleState, StopPolicy, DEFAULT_GRACE_PERIOD};
