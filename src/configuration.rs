use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::clients::{OrdersClient, UserClient};

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub identity: IdentitySettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    timeout_milliseconds: u64,
}

impl ApiSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn parsed_base_url(&self) -> Result<reqwest::Url, String> {
        reqwest::Url::parse(&self.base_url)
            .map_err(|e| format!("{url} is not a valid base URL: {e}", url = self.base_url))
    }

    pub fn user_client(&self) -> Result<UserClient, String> {
        Ok(UserClient::new(self.parsed_base_url()?, self.timeout()))
    }

    pub fn orders_client(&self) -> Result<OrdersClient, String> {
        Ok(OrdersClient::new(self.parsed_base_url()?, self.timeout()))
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct IdentitySettings {
    /// Domain appended to every generated test e-mail.
    pub email_domain: String,
}

pub fn get_configuration() -> Result<Settings, figment::Error> {
    let base_path = std::env::current_dir()
        .map_err(|e| format!("Failed to determine the current directory: {e}"))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| String::from("local"))
        .try_into()?;
    let environment_filename = format!("{environment}.yaml", environment = environment.as_str());

    Figment::new()
        .merge(Yaml::file(configuration_directory.join("base.yaml")))
        .merge(Yaml::file(configuration_directory.join(environment_filename)))
        // Settings from env vars prefix `APP_<x>` E.g. `APP_API__BASE_URL=http://127.0.0.1:8000` sets `Settings.api.base_url`
        // Allows overriding whatever is in configuration file
        .merge(Env::prefixed("APP_").split("__"))
        .extract()
}

/// The possible runtime environment for the suite.
#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`.",
            )),
        }
    }
}
