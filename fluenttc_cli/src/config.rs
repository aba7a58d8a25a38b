//! Merges command-line connection flags over the environment.

use clap::Args;
use fluenttc_api::ConnectionConfig;

#[derive(Args, Default)]
pub struct ConnectionArgs {
    /// TeamCity host, e.g. teamcity.example.com:8111 (env: TEAMCITY_HOST)
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Use https instead of http (env: TEAMCITY_USE_SSL)
    #[arg(long, global = true)]
    pub ssl: bool,

    /// Username for basic authentication (env: TEAMCITY_USERNAME)
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password for basic authentication (env: TEAMCITY_PASSWORD)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Access token, sent as a bearer header (env: TEAMCITY_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Connect anonymously, ignoring any configured credentials
    #[arg(long, global = true)]
    pub guest: bool,
}

/// Applies the flags that were given on top of `base`.
pub fn resolve(base: ConnectionConfig, args: &ConnectionArgs) -> ConnectionConfig {
    let mut config = base;
    if let Some(host) = &args.host {
        config = config.to_host(host);
    }
    if args.ssl {
        config = config.use_ssl();
    }
    if let (Some(username), Some(password)) = (&args.username, &args.password) {
        config = config.as_user(username, password);
    }
    if let Some(token) = &args.token {
        config = config.with_token(token);
    }
    if args.guest {
        config = config.as_guest();
    }
    config
}
