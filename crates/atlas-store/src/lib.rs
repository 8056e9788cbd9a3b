pub mod bus;
pub mod error;
pub mod kv;
pub mod session;

pub use bus::{ChangeBus, Subscription};
pub use error::{Result, StoreError};
pub use kv::{FAVORITES_KEY, HISTORY_KEY, KvStore, RECENT_KEY, default_data_dir};
pub use session::Session;
