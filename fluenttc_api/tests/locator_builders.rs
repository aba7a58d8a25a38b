use chrono::DateTime;
use fluenttc_api::types::BuildStatus;
use fluenttc_api::{
    builds_path, BuildHaving, BuildInclude, CountBuilder, Having, ParameterHaving, ProjectHaving,
    QueueHaving,
};

#[test]
fn build_having_renders_in_call_order() {
    let locator = BuildHaving::default()
        .with_project("MyProj")
        .with_status(BuildStatus::Failure)
        .running()
        .get_locator();
    assert_eq!(locator, "project:MyProj,status:FAILURE,running:true");

    let reversed = BuildHaving::default()
        .running()
        .with_status(BuildStatus::Failure)
        .with_project("MyProj")
        .get_locator();
    assert_eq!(reversed, "running:true,status:FAILURE,project:MyProj");
}

#[test]
fn repeated_setters_are_not_deduplicated() {
    let locator = BuildHaving::default()
        .with_tag("nightly")
        .with_tag("release")
        .get_locator();
    assert_eq!(locator, "tag:nightly,tag:release");
}

#[test]
fn one_segment_per_setter() {
    let having = BuildHaving::default()
        .with_id(1)
        .pinned()
        .with_branch("main")
        .with_criterion("affectedProject", "Root");
    assert_eq!(having.locator().len(), 4);
    assert_eq!(having.get_locator().split(',').count(), 4);
    assert!(having.get_locator().ends_with("affectedProject:Root"));
}

#[test]
fn since_date_keeps_offset() {
    let since = DateTime::parse_from_rfc3339("2024-01-31T23:59:00-05:00").unwrap();
    let locator = BuildHaving::default().with_since_date(since).get_locator();
    assert_eq!(locator, "sinceDate:20240131T235900-0500");
}

#[test]
fn queue_having_defaults_to_empty() {
    assert_eq!(QueueHaving::default().get_locator(), "");
    assert_eq!(
        QueueHaving::default().with_build_type("X").get_locator(),
        "buildType:X"
    );
}

#[test]
fn project_and_parameter_locators() {
    assert_eq!(
        ProjectHaving::default().with_id("Backend").get_locator(),
        "id:Backend"
    );
    assert_eq!(
        ParameterHaving::default().with_name("system.version").get_locator(),
        "system.version"
    );
}

#[test]
fn builds_path_from_builders() {
    let having = BuildHaving::default().with_status(BuildStatus::Success);
    let count = CountBuilder::default().with_count(50);
    let include = BuildInclude::default().with_column("id").with_column("status");
    assert_eq!(
        builds_path(&having.get_locator(), &count.get_count(), &include.get_columns()),
        "/app/rest/builds?locator=status:SUCCESS,count:50,&fields=count,build(id,status)"
    );
    assert_eq!(
        builds_path(
            &having.get_locator(),
            &CountBuilder::default().get_count(),
            &include.get_columns()
        ),
        "/app/rest/builds?locator=status:SUCCESS,&fields=count,build(id,status)"
    );
}

#[test]
fn literal_builds_paths() {
    assert_eq!(
        builds_path("status:SUCCESS", "50", "id,status"),
        "/app/rest/builds?locator=status:SUCCESS,50,&fields=count,build(id,status)"
    );
    assert_eq!(
        builds_path("status:SUCCESS", "", "id,status"),
        "/app/rest/builds?locator=status:SUCCESS,&fields=count,build(id,status)"
    );
}
