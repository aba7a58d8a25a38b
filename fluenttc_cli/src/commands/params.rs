use anyhow::{bail, Result};
use clap::Args;
use fluenttc_api::{ConnectedTc, HttpClient, ParameterHaving, ParameterValues, ProjectHaving};

#[derive(Args)]
pub struct SetParamArgs {
    /// Project id
    #[arg(long)]
    pub project: String,

    /// Parameters as NAME=VALUE, applied in the order given
    #[arg(required = true)]
    pub params: Vec<String>,
}

#[derive(Args)]
pub struct DeleteParamArgs {
    /// Project id
    #[arg(long)]
    pub project: String,

    /// Parameter name
    pub name: String,
}

/// Splits `NAME=VALUE` at the first `=`; the value may be empty or contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => bail!("Expected NAME=VALUE, got '{}'", raw),
    }
}

pub async fn run_set(args: &SetParamArgs, tc: &ConnectedTc<HttpClient>) -> Result<()> {
    let mut values = ParameterValues::default();
    for raw in &args.params {
        let (name, value) = parse_assignment(raw)?;
        values = values.with_parameter(&name, &value);
    }

    tc.set_project_parameters(&ProjectHaving::default().with_id(&args.project), &values)
        .await?;
    eprintln!(
        "Set {} parameter(s) on project {}",
        values.parameters().len(),
        args.project
    );
    Ok(())
}

pub async fn run_delete(args: &DeleteParamArgs, tc: &ConnectedTc<HttpClient>) -> Result<()> {
    tc.delete_project_parameter(
        &ProjectHaving::default().with_id(&args.project),
        &ParameterHaving::default().with_name(&args.name),
    )
    .await?;
    eprintln!("Deleted parameter {} from project {}", args.name, args.project);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_assignment;

    #[test]
    fn splits_on_first_equals() {
        assert_eq!(
            parse_assignment("env.URL=https://x?a=b").unwrap(),
            ("env.URL".to_string(), "https://x?a=b".to_string())
        );
    }

    #[test]
    fn empty_value_is_allowed() {
        assert_eq!(
            parse_assignment("env.EMPTY=").unwrap(),
            ("env.EMPTY".to_string(), String::new())
        );
    }

    #[test]
    fn missing_name_or_equals_is_rejected() {
        assert!(parse_assignment("=value").is_err());
        assert!(parse_assignment("novalue").is_err());
    }
}
