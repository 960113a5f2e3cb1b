pub(crate) mod anim;
pub(crate) mod ease;
pub(crate) mod ops;
pub(crate) mod resolve;
pub(crate) mod spec;
