//! Finished builds, queued builds and single-build lookups.

use super::encoding::query_value;
use crate::{
    locator::{BuildHaving, BuildInclude, CountBuilder, Having, QueueHaving},
    types::{Build, BuildWrapper},
    Caller, Error,
};

/// Formats the `/app/rest/builds` path.
///
/// An empty `count` drops its segment entirely instead of leaving an empty
/// slot between the commas. Characters that would break the query string
/// (`#`, `&`, `+`, ...) are percent-encoded. Locator punctuation is not.
pub fn builds_path(locator: &str, count: &str, columns: &str) -> String {
    let locator = query_value(locator);
    let columns = query_value(columns);
    if count.is_empty() {
        format!(
            "/app/rest/builds?locator={},&fields=count,build({})",
            locator, columns
        )
    } else {
        format!(
            "/app/rest/builds?locator={},{},&fields=count,build({})",
            locator,
            query_value(count),
            columns
        )
    }
}

fn build_queue_path(locator: Option<&str>) -> String {
    match locator {
        Some(locator) => format!("/app/rest/buildQueue?locator={}", query_value(locator)),
        None => "/app/rest/buildQueue".to_string(),
    }
}

/// Resolves builds through a [`Caller`].
pub struct BuildsRetriever<'a, C> {
    caller: &'a C,
}

impl<'a, C: Caller> BuildsRetriever<'a, C> {
    pub fn new(caller: &'a C) -> Self {
        Self { caller }
    }

    /// Fetches builds matching `having`, limited by `count` and projected to
    /// the columns in `include`.
    pub async fn get_builds(
        &self,
        having: &BuildHaving,
        count: &CountBuilder,
        include: &BuildInclude,
    ) -> Result<Vec<Build>, Error> {
        let path = builds_path(
            &having.get_locator(),
            &count.get_count(),
            &include.get_columns(),
        );
        let wrapper = self.caller.get::<BuildWrapper>(&path).await?;
        unwrap_builds(wrapper)
    }

    /// Fetches the build queue, optionally narrowed by `having`.
    pub async fn get_builds_queue(&self, having: Option<&QueueHaving>) -> Result<Vec<Build>, Error> {
        let locator = having.map(|h| h.get_locator());
        let path = build_queue_path(locator.as_deref());
        let wrapper = self.caller.get::<BuildWrapper>(&path).await?;
        unwrap_builds(wrapper)
    }

    /// Fetches a single build by its numeric id.
    pub async fn get_build(&self, build_id: i64) -> Result<Build, Error> {
        self.caller
            .get::<Build>(&format!("/app/rest/builds/id:{}", build_id))
            .await
    }
}

/// The server-reported count decides whether the list is surfaced: a count
/// of zero yields nothing even if builds were sent along.
fn unwrap_builds(wrapper: BuildWrapper) -> Result<Vec<Build>, Error> {
    let count = wrapper.count.trim().parse::<i64>().map_err(|e| {
        tracing::error!("Server returned a non-numeric count {:?}: {}", wrapper.count, e);
        Error::InvalidCount(wrapper.count.clone())
    })?;
    if count > 0 {
        Ok(wrapper.build)
    } else {
        Ok(Vec::new())
    }
}
