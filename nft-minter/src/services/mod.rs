pub mod chain;
pub mod credential;
pub mod minter;
pub mod storage;
