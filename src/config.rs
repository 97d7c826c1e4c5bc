use serde::Deserialize;

pub const DEFAULT_DB_PATH: &str = "trivia.db";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    pub db_path: String,
    pub bind_addr: String,
}

impl Settings {
    /// Reads `DB_PATH` and `BIND_ADDR` from the environment (and `.env`),
    /// falling back to defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::load(config::Environment::default())
    }

    fn load(env: config::Environment) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .set_default("db_path", DEFAULT_DB_PATH)?
            .set_default("bind_addr", DEFAULT_BIND_ADDR)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
