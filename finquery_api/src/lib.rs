mod client;
mod endpoint;
mod errors;
mod params;
pub mod validate;

pub use self::client::{Client, Method};
pub use self::endpoint::{Auth, Endpoint, OperationStyle};
pub use self::errors::Error;
pub use self::params::{ParamValue, Params, Scalar};
