pub(crate) mod classify;
pub(crate) mod filter;
pub(crate) mod selection;
