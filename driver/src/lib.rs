//! Host side of the posts client: real HTTP transport, configuration and the
//! console driver.

pub mod config;
pub mod sequence;
pub mod transport;

pub use config::DriverConfig;
pub use sequence::run;
pub use transport::UreqTransport;
