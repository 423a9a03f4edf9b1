use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub supabase_url: String,
    pub supabase_key: String,
    pub host: IpAddr,
    pub port: u16,
    pub public_dir: PathBuf,
    pub max_body_size: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let supabase_url = env_required("SUPABASE_URL")?;
        let supabase_key = env_required("SUPABASE_KEY")?;

        let host: IpAddr = env_or("TOURLOG_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid TOURLOG_HOST: {e}"))?;

        let port: u16 = env_or("PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid PORT: {e}"))?;

        let public_dir = PathBuf::from(env_or("TOURLOG_PUBLIC_DIR", "public"));

        // Same cap as express.json() in front of the original log endpoint
        let max_body_size: usize = env_or("TOURLOG_MAX_BODY_SIZE", "102400")
            .parse()
            .map_err(|e| format!("Invalid TOURLOG_MAX_BODY_SIZE: {e}"))?;

        let log_level = env_or("TOURLOG_LOG_LEVEL", "info");

        Ok(Config {
            supabase_url,
            supabase_key,
            host,
            port,
            public_dir,
            max_body_size,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
