pub mod whitelist;

pub use whitelist::WhitelistService;
