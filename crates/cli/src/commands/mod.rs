pub(crate) mod chatter;
pub(crate) mod inspect;
#[cfg(all(feature = "sqlite", feature = "postgres"))]
pub(crate) mod migrate;
pub(crate) mod serve;
