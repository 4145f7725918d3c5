pub(crate) mod config;
pub(crate) mod model;
