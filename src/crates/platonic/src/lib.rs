//! # Platonic - the Platonic Ideal registry
//!
//! A fixed catalog of consumer-product verdicts plus a consult flow that asks
//! an external oracle (see the [`oracle`] crate) to judge new products against
//! the same rulebook.
//!
//! ## Features
//!
//! - **Catalog** - 68 built-in records with status filtering, search and stats
//! - **Consult** - free-text queries judged by the oracle with bounded retries
//! - **Challenge** - pit a challenger against a declared item
//! - **Dual-Location Config** - user-level and project-level configuration
//! - **Latest-wins results** - stale replies never overwrite newer ones
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platonic::{load_config, Catalog, CategoryStatus};
//! use oracle::OracleClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let empty = Catalog::builtin().with_status(CategoryStatus::Empty);
//! println!("{} categories have no acceptable product", empty.len());
//!
//! let config = load_config(None).await?;
//! let client = OracleClient::new(config.oracle_config())?;
//! if let Some(verdict) = client.submit("Vitamix 5200").await? {
//!     println!("{:?}", verdict.status_kind());
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod session;

mod error;

pub use catalog::{Catalog, CatalogEntry, CatalogStats, CategoryStatus, Maintenance, StatusFilter};
pub use config::{load_config, ConfigLoader, PlatonicConfig};
pub use error::{PlatonicError, Result};
pub use session::{ResultSlot, Ticket};
