//! Writes and removes project-level configuration parameters.

use super::encoding::path_segment;
use crate::{
    locator::{Having, ParameterHaving, ParameterValues, ProjectHaving},
    Caller, Error,
};

fn parameter_path(project_locator: &str, parameter_name: &str) -> String {
    format!(
        "/app/rest/projects/{}/parameters/{}",
        path_segment(project_locator),
        path_segment(parameter_name)
    )
}

/// Mutates the parameters of a single project through a [`Caller`].
pub struct ProjectPropertySetter<'a, C> {
    caller: &'a C,
}

impl<'a, C: Caller> ProjectPropertySetter<'a, C> {
    pub fn new(caller: &'a C) -> Self {
        Self { caller }
    }

    /// Sets every parameter in `parameters` on the project, one PUT each, in
    /// the order supplied.
    ///
    /// Requests are independent: the first failure is returned and the
    /// parameters written before it stay written.
    pub async fn set_project_parameters(
        &self,
        having_project: &ProjectHaving,
        parameters: &ParameterValues,
    ) -> Result<(), Error> {
        let project_locator = having_project.get_locator();
        for (name, value) in parameters.parameters() {
            self.caller
                .put(value, "text/plain", &parameter_path(&project_locator, name))
                .await?;
        }
        Ok(())
    }

    /// Removes one parameter from the project.
    pub async fn delete_project_parameter(
        &self,
        having_project: &ProjectHaving,
        parameter_name: &ParameterHaving,
    ) -> Result<(), Error> {
        let path = parameter_path(&having_project.get_locator(), &parameter_name.get_locator());
        self.caller.delete(&path).await
    }
}
