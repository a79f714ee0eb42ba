pub mod api_response;
pub mod assertions;
pub mod clients;
pub mod configuration;
pub mod domain;
pub mod session;
pub mod telemetry;
