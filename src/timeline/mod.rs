pub(crate) mod layers;
pub(crate) mod stagger;
