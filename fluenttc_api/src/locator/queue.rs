use super::common::{Having, Locator};

/// Filter criteria for `/app/rest/buildQueue`. The queue only understands a
/// project-scoped subset of the build dimensions.
#[derive(Clone, Debug, Default)]
pub struct QueueHaving {
    pub locator: Locator,
}

impl Having for QueueHaving {
    fn locator(&self) -> &Locator {
        &self.locator
    }
    fn locator_mut(&mut self) -> &mut Locator {
        &mut self.locator
    }
}

impl QueueHaving {
    pub fn with_project(mut self, project_id: &str) -> Self {
        self.locator.push("project", project_id);
        self
    }

    pub fn with_build_type(mut self, build_type_id: &str) -> Self {
        self.locator.push("buildType", build_type_id);
        self
    }
}
