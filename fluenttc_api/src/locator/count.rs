/// Paging controls appended to a build locator.
#[derive(Clone, Debug, Default)]
pub struct CountBuilder {
    pub parts: Vec<String>,
}

impl CountBuilder {
    /// Maximum number of results. Zero and negative values are sent as-is.
    pub fn with_count(mut self, count: i64) -> Self {
        self.parts.push(format!("count:{}", count));
        self
    }

    /// Offset of the first result.
    pub fn with_start(mut self, start: i64) -> Self {
        self.parts.push(format!("start:{}", start));
        self
    }

    /// Renders the paging segment, or an empty string for the server default.
    pub fn get_count(&self) -> String {
        self.parts.join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::CountBuilder;

    #[test]
    fn absent_count_is_empty() {
        assert_eq!(CountBuilder::default().get_count(), "");
    }

    #[test]
    fn count_and_start() {
        let count = CountBuilder::default().with_count(50).with_start(100);
        assert_eq!(count.get_count(), "count:50,start:100");
    }

    #[test]
    fn non_positive_count_passes_through() {
        assert_eq!(CountBuilder::default().with_count(0).get_count(), "count:0");
        assert_eq!(CountBuilder::default().with_count(-1).get_count(), "count:-1");
    }
}
