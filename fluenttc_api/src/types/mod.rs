mod build;
pub use self::build::{Build, BuildState, BuildStatus, TEAMCITY_DATE_FORMAT};

mod wrapper;
pub use self::wrapper::BuildWrapper;
