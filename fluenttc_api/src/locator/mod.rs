mod common;
pub use self::common::{Having, Locator};

mod build;
pub use self::build::BuildHaving;

mod queue;
pub use self::queue::QueueHaving;

mod project;
pub use self::project::ProjectHaving;

mod parameter;
pub use self::parameter::{ParameterHaving, ParameterValues};

mod count;
pub use self::count::CountBuilder;

mod include;
pub use self::include::BuildInclude;
