//! Request types

mod method;
mod query;
mod spec;

pub use method::HttpMethod;
pub use query::QueryParam;
pub use spec::RequestSpec;
