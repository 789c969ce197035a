pub mod aggregator;
pub mod coefficients;
pub mod upstream;

pub use aggregator::aggregate;
pub use coefficients::COEFFICIENTS;
pub use upstream::UpstreamClient;
