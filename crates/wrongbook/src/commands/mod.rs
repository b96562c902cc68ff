//! CLI command implementations.

mod generate;

pub(crate) use generate::GenerateArgs;
