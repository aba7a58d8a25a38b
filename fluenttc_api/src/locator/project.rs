use super::common::{Having, Locator};

/// Selects a project, rendered into the `/app/rest/projects/{locator}` path.
#[derive(Clone, Debug, Default)]
pub struct ProjectHaving {
    pub locator: Locator,
}

impl Having for ProjectHaving {
    fn locator(&self) -> &Locator {
        &self.locator
    }
    fn locator_mut(&mut self) -> &mut Locator {
        &mut self.locator
    }
}

impl ProjectHaving {
    pub fn with_id(mut self, project_id: &str) -> Self {
        self.locator.push("id", project_id);
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.locator.push("name", name);
        self
    }
}
