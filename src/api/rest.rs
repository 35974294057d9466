use crate::api::remote::{date_doc_id, RemoteDayRecord, RemoteStore};
use anyhow::{bail, Result};
use chrono::NaiveDate;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde::{Deserialize, Serialize};

const DAY_RECORDS_URL: &str = "day-records";

/// Connection settings for the remote account service.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestConfig {
    /// Base URL of the service, without a trailing slash.
    pub api_url: String,
    /// Bearer token of the signed-in session. Empty means not logged in.
    pub auth_token: String,
    pub user_id: String,
}

/// HTTP implementation of [`RemoteStore`] over a per-user namespace.
pub struct RestRemote {
    client: Client,
    config: RestConfig,
}

impl RestRemote {
    pub fn new(config: &RestConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn day_url(&self, user: &str, date: NaiveDate) -> String {
        format!("{}/users/{}/{}/{}", self.config.api_url, user, DAY_RECORDS_URL, date_doc_id(date))
    }

    fn collection_url(&self, user: &str) -> String {
        format!("{}/users/{}/{}", self.config.api_url, user, DAY_RECORDS_URL)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.config.auth_token)
    }
}

impl RemoteStore for RestRemote {
    fn user_id(&self) -> Option<String> {
        if self.config.auth_token.is_empty() {
            return None;
        }
        Some(self.config.user_id.clone())
    }

    async fn fetch_day(&self, user: &str, date: NaiveDate) -> Result<Option<RemoteDayRecord>> {
        let res = self
            .client
            .get(self.day_url(user, date))
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await?;
        match res.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(res.json().await?)),
            status => bail!("fetching day record failed with status {status}"),
        }
    }

    async fn store_day(&self, user: &str, record: &RemoteDayRecord) -> Result<()> {
        let res = self
            .client
            .put(self.day_url(user, record.date))
            .header(AUTHORIZATION, self.bearer())
            .json(record)
            .send()
            .await?;
        if !res.status().is_success() {
            bail!("storing day record failed with status {}", res.status());
        }
        Ok(())
    }

    async fn fetch_all(&self, user: &str) -> Result<Vec<RemoteDayRecord>> {
        let res = self
            .client
            .get(self.collection_url(user))
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await?;
        if !res.status().is_success() {
            bail!("fetching day records failed with status {}", res.status());
        }
        Ok(res.json().await?)
    }
}
