use thiserror::Error;

/// Errors emitted while reading the command line.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("usage: {program} <path-to-clang-ast.json>")]
    MissingDocumentPath { program: String },
}
