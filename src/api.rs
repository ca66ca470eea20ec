use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};

use crate::posting::JobPosting;

/// Outcome of a request that reached the server.
#[derive(Debug)]
pub enum ApiResponse<T> {
    Ok(T),
    Status(StatusCode),
}

/// Read access to the PlanUP backend.
pub trait JobApi {
    fn fetch_postings(
        &self,
        base_url: &str,
        user_id: &str,
        token: &str,
    ) -> Result<ApiResponse<Vec<JobPosting>>, reqwest::Error>;

    fn count_checklist(
        &self,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<ApiResponse<usize>, reqwest::Error>;

    fn count_todos(
        &self,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<ApiResponse<usize>, reqwest::Error>;
}

pub struct HttpApi {
    client: Client,
}

impl HttpApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn get(&self, url: &str, token: Option<&str>) -> RequestBuilder {
        let request = self.client.get(url);
        match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn count(&self, url: &str, token: Option<&str>) -> Result<ApiResponse<usize>, reqwest::Error> {
        tracing::debug!(url, "GET");
        let response = self.get(url, token).send()?;
        if response.status() != StatusCode::OK {
            return Ok(ApiResponse::Status(response.status()));
        }
        let items: Vec<serde_json::Value> = response.json()?;
        Ok(ApiResponse::Ok(items.len()))
    }
}

impl JobApi for HttpApi {
    fn fetch_postings(
        &self,
        base_url: &str,
        user_id: &str,
        token: &str,
    ) -> Result<ApiResponse<Vec<JobPosting>>, reqwest::Error> {
        let url = format!("{}/jobPostings/{}", base_url, user_id);
        tracing::debug!(url, "GET");
        let response = self.get(&url, Some(token)).send()?;
        if response.status() != StatusCode::OK {
            return Ok(ApiResponse::Status(response.status()));
        }
        Ok(ApiResponse::Ok(response.json()?))
    }

    fn count_checklist(
        &self,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<ApiResponse<usize>, reqwest::Error> {
        self.count(&format!("{}/checklist/userid", base_url), token)
    }

    fn count_todos(
        &self,
        base_url: &str,
        token: Option<&str>,
    ) -> Result<ApiResponse<usize>, reqwest::Error> {
        self.count(&format!("{}/list/userid", base_url), token)
    }
}
