use crate::core::{AppError, Result};

/// Server configuration for HTTP server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker count; actix picks one per physical core when unset
    pub workers: Option<usize>,
}

impl ServerConfig {
    pub(crate) fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .map_err(|_| AppError::configuration("Invalid PORT"))?;
        let workers = lookup("SERVER_WORKERS")
            .map(|raw| {
                raw.parse()
                    .map_err(|_| AppError::configuration("Invalid SERVER_WORKERS"))
            })
            .transpose()?;

        Ok(Self {
            host,
            port,
            workers,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
