//! Connection bootstrap and the facade exposing every operation.

use crate::{
    locator::{
        BuildHaving, BuildInclude, CountBuilder, ParameterHaving, ParameterValues, ProjectHaving,
        QueueHaving,
    },
    types::Build,
    BuildsRetriever, Caller, ConnectionConfig, Error, HttpClient, ProjectPropertySetter,
};

/// Entry point: turns connection settings into a [`ConnectedTc`].
pub struct RemoteTc;

impl RemoteTc {
    /// Resolves `config` and opens an HTTP connection to the server.
    pub fn connect(config: &ConnectionConfig) -> Result<ConnectedTc<HttpClient>, Error> {
        let client = HttpClient::new(config)?;
        tracing::debug!("Connected to {}", config.base_url()?);
        Ok(ConnectedTc::with_caller(client))
    }
}

/// A connected TeamCity server. Each call builds its retriever on the spot,
/// so nothing carries over between operations except the caller itself.
pub struct ConnectedTc<C> {
    caller: C,
}

impl<C: Caller> ConnectedTc<C> {
    /// Wires an arbitrary [`Caller`], e.g. a test double.
    pub fn with_caller(caller: C) -> Self {
        Self { caller }
    }

    pub async fn get_builds(
        &self,
        having: &BuildHaving,
        count: &CountBuilder,
        include: &BuildInclude,
    ) -> Result<Vec<Build>, Error> {
        BuildsRetriever::new(&self.caller)
            .get_builds(having, count, include)
            .await
    }

    pub async fn get_builds_queue(&self, having: Option<&QueueHaving>) -> Result<Vec<Build>, Error> {
        BuildsRetriever::new(&self.caller)
            .get_builds_queue(having)
            .await
    }

    pub async fn get_build(&self, build_id: i64) -> Result<Build, Error> {
        BuildsRetriever::new(&self.caller).get_build(build_id).await
    }

    pub async fn set_project_parameters(
        &self,
        having_project: &ProjectHaving,
        parameters: &ParameterValues,
    ) -> Result<(), Error> {
        ProjectPropertySetter::new(&self.caller)
            .set_project_parameters(having_project, parameters)
            .await
    }

    pub async fn delete_project_parameter(
        &self,
        having_project: &ProjectHaving,
        parameter_name: &ParameterHaving,
    ) -> Result<(), Error> {
        ProjectPropertySetter::new(&self.caller)
            .delete_project_parameter(having_project, parameter_name)
            .await
    }
}
