//! Host service contracts and an in-memory host.
//!
//! The game server owns trader storage, locale tables, image routes and its
//! config services. The plugin reaches them only through the traits below;
//! [`InMemoryHost`] implements all of them for tests and the development
//! harness.

mod error;
mod locale;
mod memory;
mod traits;

pub use error::HostError;
pub use locale::{LazyLocale, LocaleTransformer};
pub use memory::InMemoryHost;
pub use traits::{
    FleaMarketRegistry, ImageRouter, LocaleRegistry, RefreshWindow, ServerHost, TraderDatabase,
    TraderRefreshRegistry,
};
