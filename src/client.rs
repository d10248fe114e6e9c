use {super::*, anyhow::ensure, serde::de::DeserializeOwned};

#[derive(Debug)]
pub struct Client {
  base_url: String,
  http: reqwest::Client,
  token: String,
}

impl Client {
  pub async fn authenticate(config: &Config) -> Result<Self> {
    let http = reqwest::Client::new();

    let response = http
      .post(format!("{}/api/User/Authentication", config.base_url))
      .json(&Credentials::from(config))
      .send()
      .await
      .with_context(|| {
        format!("could not reach the login endpoint at {}", config.base_url)
      })?;

    let status = response.status();

    ensure!(
      status.is_success(),
      "login for user `{}` failed with status {status}",
      config.user_name
    );

    let token = response
      .json::<AuthResponse>()
      .await?
      .access_token
      .filter(|token| !token.is_empty())
      .context("login reply did not include an access token")?;

    Ok(Self {
      base_url: config.base_url.clone(),
      http,
      token,
    })
  }

  pub async fn create_story(
    &self,
    story: &Story,
  ) -> Result<Reply<ApiResponse>> {
    let response = self
      .http
      .post(format!("{}/api/Story/Create", self.base_url))
      .bearer_auth(&self.token)
      .json(story)
      .send()
      .await?;

    Self::read(response).await
  }

  pub async fn delete_story(&self, id: &str) -> Result<Reply<ApiResponse>> {
    let response = self
      .http
      .delete(format!("{}/api/Story/Delete/{id}", self.base_url))
      .bearer_auth(&self.token)
      .send()
      .await?;

    Self::read(response).await
  }

  pub async fn edit_story(
    &self,
    id: &str,
    story: &Story,
  ) -> Result<Reply<ApiResponse>> {
    let response = self
      .http
      .put(format!("{}/api/Story/Edit/{id}", self.base_url))
      .bearer_auth(&self.token)
      .json(story)
      .send()
      .await?;

    Self::read(response).await
  }

  pub async fn list_stories(&self) -> Result<Reply<Vec<Story>>> {
    let response = self
      .http
      .get(format!("{}/api/Story/All", self.base_url))
      .bearer_auth(&self.token)
      .send()
      .await?;

    Self::read(response).await
  }

  async fn read<T: DeserializeOwned>(
    response: reqwest::Response,
  ) -> Result<Reply<T>> {
    let status = response.status();

    let body = response.json().await.with_context(|| {
      format!("could not decode the reply body for status {status}")
    })?;

    Ok(Reply { body, status })
  }
}
