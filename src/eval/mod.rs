pub(crate) mod range;
pub(crate) mod resolver;
