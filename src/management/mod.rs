mod store;

pub use store::FileTokenStore;
pub use store::MemoryTokenStore;
pub use store::TokenStore;
