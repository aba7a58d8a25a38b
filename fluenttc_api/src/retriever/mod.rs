mod encoding;

mod builds;
pub use self::builds::{builds_path, BuildsRetriever};

mod project_parameters;
pub use self::project_parameters::ProjectPropertySetter;

#[cfg(test)]
pub(crate) mod testing;
