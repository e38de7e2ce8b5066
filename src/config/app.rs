const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
}

impl AppConfig {
    /// Read the configuration from the process environment.
    ///
    /// `DATABASE_URL` is required. `SERVER_PORT` falls back to 3000 when
    /// missing or unparsable.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = parse_port(std::env::var("SERVER_PORT").ok());

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|err| anyhow::anyhow!("cannot read `DATABASE_URL`: {:?}", err))?;

        Ok(AppConfig { port, database_url })
    }
}

fn parse_port(raw: Option<String>) -> u16 {
    let Some(raw) = raw else {
        tracing::warn!("cannot read `SERVER_PORT` defaulting to `3000`");

        return DEFAULT_PORT;
    };

    raw.parse().unwrap_or_else(|err| {
        tracing::error!("cannot parse `SERVER_PORT`. defaulting to 3000 {:?}", err);

        DEFAULT_PORT
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_port_falls_back_to_default() {
        assert_eq!(parse_port(None), DEFAULT_PORT);
    }

    #[test]
    fn malformed_port_falls_back_to_default() {
        assert_eq!(parse_port(Some("not-a-port".into())), DEFAULT_PORT);
        assert_eq!(parse_port(Some("70000".into())), DEFAULT_PORT);
    }

    #[test]
    fn valid_port_parses() {
        assert_eq!(parse_port(Some("8080".into())), 8080);
    }
}
