//! Exporting computed versions as pipeline environment variables
//!
//! The [Exporter] trait hides the pipeline's variable store. The concrete
//! implementations are:
//!
//! - [envman::EnvmanExporter]: hands each variable to the `envman` CLI
//! - [mock::MockExporter]: records exports in memory for testing

pub mod envman;
pub mod mock;

pub use envman::EnvmanExporter;
pub use mock::MockExporter;

use crate::error::Result;

/// Default key for the bumped `versionCode`
pub const VERSION_CODE_KEY: &str = "BUMP_VERSION_CODE";

/// Default key for the bumped `versionName`
pub const VERSION_NAME_KEY: &str = "BUMP_VERSION_NAME";

/// Publishes a key/value pair to later pipeline steps.
pub trait Exporter {
    /// Export `value` under `key`
    ///
    /// # Returns
    /// * `Ok(())` - The variable is visible to subsequent steps
    /// * `Err` - If the exporter could not store it
    fn export(&self, key: &str, value: &str) -> Result<()>;
}
