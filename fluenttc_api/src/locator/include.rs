/// Fields projected into each returned build (`fields=count,build(...)`).
#[derive(Clone, Debug, Default)]
pub struct BuildInclude {
    pub columns: Vec<String>,
}

const DEFAULT_COLUMNS: [&str; 7] = [
    "buildTypeId",
    "href",
    "id",
    "number",
    "state",
    "status",
    "webUrl",
];

impl BuildInclude {
    /// Adds the columns the server returns when no projection is given.
    pub fn include_defaults(self) -> Self {
        DEFAULT_COLUMNS
            .iter()
            .fold(self, |include, column| include.with_column(column))
    }

    pub fn include_start_date(self) -> Self {
        self.with_column("startDate")
    }

    pub fn include_finish_date(self) -> Self {
        self.with_column("finishDate")
    }

    pub fn include_queued_date(self) -> Self {
        self.with_column("queuedDate")
    }

    pub fn include_status_text(self) -> Self {
        self.with_column("statusText")
    }

    pub fn include_branch_name(self) -> Self {
        self.with_column("branchName")
    }

    /// Adds an arbitrary field. Fields already present are not repeated.
    pub fn with_column(mut self, column: &str) -> Self {
        if !self.columns.iter().any(|c| c == column) {
            self.columns.push(column.to_string());
        }
        self
    }

    pub fn get_columns(&self) -> String {
        self.columns.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::BuildInclude;

    #[test]
    fn test_build_include() {
        insta::assert_snapshot!(BuildInclude::default()
            .include_defaults()
            .include_start_date()
            .include_status_text()
            .get_columns(), @"buildTypeId,href,id,number,state,status,webUrl,startDate,statusText");
    }

    #[test]
    fn columns_are_not_repeated() {
        let include = BuildInclude::default()
            .with_column("id")
            .with_column("status")
            .include_defaults();
        assert_eq!(
            include.get_columns(),
            "id,status,buildTypeId,href,number,state,webUrl"
        );
    }

    #[test]
    fn empty_include_renders_nothing() {
        assert_eq!(BuildInclude::default().get_columns(), "");
    }
}
