//! Data compiled into the crate rather than read from the provider.

pub(crate) mod blocks;

pub(crate) mod special_casing;
