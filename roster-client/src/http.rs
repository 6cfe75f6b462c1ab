// roster-client/src/http.rs
// HTTP 客户端 - 网络通信

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Employee, EmployeeDraft, EmployeeUpdate, ErrorBody};

use crate::error::{ClientError, ClientResult};

/// Typed HTTP client for the roster server
#[derive(Debug, Clone)]
pub struct RosterClient {
    client: Client,
    base_url: String,
}

impl RosterClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the full employee list
    pub async fn list(&self) -> ClientResult<Vec<Employee>> {
        let url = format!("{}/employees", self.base_url);
        let response = self.client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Create an employee from a (possibly partial) draft
    pub async fn create(&self, draft: &EmployeeDraft) -> ClientResult<Employee> {
        let url = format!("{}/employees", self.base_url);
        let response = self.client.post(&url).json(draft).send().await?;
        self.handle_response(response).await
    }

    /// Apply the fields present in the patch to the record with this id
    pub async fn update(&self, id: u64, patch: &EmployeeUpdate) -> ClientResult<Employee> {
        let url = format!("{}/employees/{}", self.base_url, id);
        let response = self.client.put(&url).json(patch).send().await?;
        self.handle_response(response).await
    }

    /// Delete the record with this id
    pub async fn delete(&self, id: u64) -> ClientResult<()> {
        let url = format!("{}/employees/{}", self.base_url, id);
        let response = self.client.delete(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.error_from(status, response).await);
        }
        Ok(())
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(self.error_from(status, response).await);
        }
        Ok(response.json().await?)
    }

    async fn error_from(&self, status: StatusCode, response: reqwest::Response) -> ClientError {
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => return ClientError::Http(e),
        };

        // 尝试解析为统一错误响应，拿到可读 message
        let message = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.message,
            Err(_) => text,
        };

        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::BAD_REQUEST => ClientError::Validation(message),
            _ => ClientError::Internal(message),
        }
    }
}
