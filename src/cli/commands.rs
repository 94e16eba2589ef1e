pub mod init_dataset;
pub mod serve;

pub use init_dataset::init_dataset;
pub use serve::serve;
