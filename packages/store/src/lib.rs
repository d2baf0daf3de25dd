pub mod config;
pub mod session;
pub mod storage;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod browser;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use browser::BrowserStore;

pub use config::{ClientConfig, SubjectPolicy};
pub use session::{SessionStore, Tokens};
pub use storage::KeyValueStore;
