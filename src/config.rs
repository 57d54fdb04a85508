use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;

        let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        let run_migrations = match env::var("RUN_MIGRATIONS") {
            Ok(value) => Self::parse_flag(&value)?,
            Err(_) => true,
        };

        Ok(Config {
            database_url,
            server_host,
            server_port,
            run_migrations,
        })
    }

    fn parse_flag(value: &str) -> Result<bool, Box<dyn std::error::Error>> {
        match value.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            other => Err(format!("RUN_MIGRATIONS must be a boolean, got '{}'", other).into()),
        }
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
