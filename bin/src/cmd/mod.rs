//! CLI subcommand modules.

pub(crate) mod compute;
pub(crate) mod estimate;
pub(crate) mod spreads;
