pub mod ledger;
pub mod packer;
pub mod pool;
pub mod scorer;
pub mod session;
