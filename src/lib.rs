use {
  anyhow::Context,
  reqwest::StatusCode,
  serde::{Deserialize, Serialize},
};

pub use {
  api_response::ApiResponse, auth_response::AuthResponse, client::Client,
  config::Config, credentials::Credentials, reply::Reply, story::Story,
};

mod api_response;
mod auth_response;
mod client;
mod config;
mod credentials;
mod reply;
mod story;

pub const CREATED_MESSAGE: &str = "Successfully created!";

pub const DELETED_MESSAGE: &str = "Deleted successfully!";

pub const EDITED_MESSAGE: &str = "Successfully edited";

pub const MISSING_SPOILER_MESSAGE: &str = "No spoilers";

pub const UNDELETABLE_MESSAGE: &str = "Unable to delete this story spoiler";

pub type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;
