/// Names a single project parameter.
///
/// Unlike the other builders this renders the bare name, because it ends up
/// as the last segment of `/app/rest/projects/{project}/parameters/{name}`.
#[derive(Clone, Debug, Default)]
pub struct ParameterHaving {
    pub name: Option<String>,
}

impl ParameterHaving {
    /// Sets the parameter name. A later call replaces an earlier one.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn get_locator(&self) -> String {
        self.name.clone().unwrap_or_default()
    }
}

/// Ordered `name = value` pairs to write onto a project.
#[derive(Clone, Debug, Default)]
pub struct ParameterValues {
    pub parameters: Vec<(String, String)>,
}

impl ParameterValues {
    pub fn with_parameter(mut self, name: &str, value: &str) -> Self {
        self.parameters.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_parameters(mut self, parameters: &[(String, String)]) -> Self {
        self.parameters.extend_from_slice(parameters);
        self
    }

    /// Pairs in the order they were supplied.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }
}
