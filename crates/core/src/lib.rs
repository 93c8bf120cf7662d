//! kubectl-images core: list container images in use across a cluster.
//!
//! kubectl is run with a go-template that flattens pods into comma-separated
//! lines; those lines are parsed back into [`ImageRow`]s, filtered, optionally
//! deduplicated and rendered as a table, JSON or YAML.

#![forbid(unsafe_code)]

pub mod columns;
pub mod command;
pub mod counter;
pub mod error;
pub mod group;
pub mod lister;
pub mod parse;
pub mod render;
pub mod row;

pub use columns::{ColumnId, Selection};
pub use command::{build_args, CommandRunner, Kubectl, Parameters, DEFAULT_KUBECTL, GO_TEMPLATE};
pub use error::{ImagesError, ImagesResult};
pub use group::compile_pattern;
pub use lister::ImageLister;
pub use render::{OutputFormat, Summary, NO_MATCH};
pub use row::{ImageRecord, ImageRow};
