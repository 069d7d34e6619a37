//! Configuration keys named in spec.md §6.
//!
//! Both keys are plain booleans read from the environment (or passed
//! explicitly when embedding the catalog in another process), following
//! this retrieval pack's `clap`-with-`env` pattern for service
//! configuration (see `cooprefr-bettersys`'s `rust-backend` and
//! `nautilus_trader`'s CLI binaries). The library itself never reads the
//! environment directly — only the demo binary's [`EngineConfig::parse`]
//! does, keeping `Catalog::new` a pure function of its argument per
//! spec.md §9 ("configuration is injected at construction").

use clap::Parser;

/// The two configuration keys this system defines.
#[derive(Debug, Clone, Copy, Parser)]
pub struct EngineConfig {
    /// When true, instantiate the catalog in-process. When false, a
    /// wrapping transport is expected to collaborate through HTTP
    /// proxies instead — out of scope for this crate, which always
    /// behaves as though `local_test` were true.
    #[arg(long, env = "LOCAL_TEST", default_value_t = true)]
    pub local_test: bool,

    /// Selects variant S (`true`) vs. variant T (`false`).
    #[arg(long, env = "SINGLE_LOCK", default_value_t = false)]
    pub single_lock: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            local_test: true,
            single_lock: false,
        }
    }
}
