pub mod object;
pub mod request;
pub mod response;
pub mod statistics;
pub mod upstream;

pub use object::from_object_slice;
pub use request::*;
pub use response::*;
pub use statistics::*;
pub use upstream::*;
