use chrono::{DateTime, FixedOffset};

use crate::types::{BuildStatus, TEAMCITY_DATE_FORMAT};

use super::common::{Having, Locator};

/// Filter criteria for `/app/rest/builds`.
#[derive(Clone, Debug, Default)]
pub struct BuildHaving {
    pub locator: Locator,
}

impl Having for BuildHaving {
    fn locator(&self) -> &Locator {
        &self.locator
    }
    fn locator_mut(&mut self) -> &mut Locator {
        &mut self.locator
    }
}

impl BuildHaving {
    pub fn with_id(mut self, id: i64) -> Self {
        self.locator.push("id", id);
        self
    }

    pub fn with_number(mut self, number: &str) -> Self {
        self.locator.push("number", number);
        self
    }

    pub fn with_status(mut self, status: BuildStatus) -> Self {
        self.locator.push("status", status);
        self
    }

    pub fn with_project(mut self, project_id: &str) -> Self {
        self.locator.push("project", project_id);
        self
    }

    pub fn with_build_type(mut self, build_type_id: &str) -> Self {
        self.locator.push("buildType", build_type_id);
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.locator.push("tag", tag);
        self
    }

    pub fn with_branch(mut self, branch: &str) -> Self {
        self.locator.push("branch", branch);
        self
    }

    /// Restricts to builds on the VCS root's default branch.
    pub fn default_branch(mut self) -> Self {
        self.locator.push("branch", "default:true");
        self
    }

    pub fn with_agent_name(mut self, agent_name: &str) -> Self {
        self.locator.push("agentName", agent_name);
        self
    }

    pub fn with_user(mut self, username: &str) -> Self {
        self.locator.push("user", username);
        self
    }

    /// Only builds started after the build with the given id.
    pub fn with_since_build(mut self, build_id: i64) -> Self {
        self.locator.push("sinceBuild", build_id);
        self
    }

    /// Only builds started after the given instant.
    pub fn with_since_date(mut self, since: DateTime<FixedOffset>) -> Self {
        self.locator
            .push("sinceDate", since.format(TEAMCITY_DATE_FORMAT));
        self
    }

    pub fn pinned(mut self) -> Self {
        self.locator.push("pinned", true);
        self
    }

    pub fn not_pinned(mut self) -> Self {
        self.locator.push("pinned", false);
        self
    }

    pub fn running(mut self) -> Self {
        self.locator.push("running", true);
        self
    }

    pub fn not_running(mut self) -> Self {
        self.locator.push("running", false);
        self
    }

    pub fn canceled(mut self) -> Self {
        self.locator.push("canceled", true);
        self
    }

    pub fn personal(mut self) -> Self {
        self.locator.push("personal", true);
        self
    }
}
