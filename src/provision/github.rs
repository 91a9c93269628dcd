// vendor-sync: vendored submodule mirror synchronizer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! GitHub REST API host.
//!
//! ```text
//! repo_exists                 GET   /repos/{owner}/{repo}                     200 | 404
//! create_repo                 POST  /orgs/{owner}/repos                       201
//! disable_ci                  PUT   /repos/{owner}/{repo}/actions/permissions 204
//! disable_ancillary_features  PATCH /repos/{owner}/{repo}                     200
//! ```

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::json;
use tracing::debug;

use crate::error::{NetworkError, VendorResult};

use super::{OriginHost, ProvisionRequest, RepoSlug};

/// Default API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Client for the GitHub REST API, authenticated by token.
#[derive(Debug, Clone)]
pub struct GithubHost {
    client: Client,
    api_url: String,
    token: String,
}

impl GithubHost {
    /// Build a host for `api_url` (no trailing slash needed).
    ///
    /// # Errors
    ///
    /// Returns `NetworkError::MissingToken` if `token` is empty.
    pub fn new(api_url: &str, token: &str) -> VendorResult<Self> {
        if token.trim().is_empty() {
            return Err(NetworkError::MissingToken.into());
        }
        Ok(Self {
            client: Client::new(),
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.trim().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(
                "User-Agent",
                format!("vendor-sync/{}", env!("CARGO_PKG_VERSION")),
            )
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> VendorResult<Response> {
        let response = request.send().await.map_err(NetworkError::from)?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NetworkError::HttpError {
                status: status.as_u16(),
                url: format!("{url} (error: {body})"),
            }
            .into());
        }
        Ok(response)
    }
}

impl OriginHost for GithubHost {
    async fn repo_exists(&self, slug: &RepoSlug) -> VendorResult<bool> {
        let url = self.url(&format!("/repos/{}/{}", slug.owner, slug.name));
        debug!(repo = %slug, "checking origin repository");

        let response = self
            .request(Method::GET, &url)
            .send()
            .await
            .map_err(NetworkError::from)?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(NetworkError::HttpError {
                    status: status.as_u16(),
                    url: format!("{url} (error: {body})"),
                }
                .into())
            }
        }
    }

    async fn create_repo(&self, request: &ProvisionRequest) -> VendorResult<()> {
        let url = self.url(&format!("/orgs/{}/repos", request.slug.owner));
        let mut body = json!({
            "name": request.slug.name,
            "description": request.description,
            "visibility": request.visibility.as_str(),
            "private": request.visibility.as_str() != "public",
        });
        if let Some(homepage) = &request.homepage {
            body["homepage"] = json!(homepage);
        }

        debug!(repo = %request.slug, "creating origin repository");
        self.send(self.request(Method::POST, &url).json(&body), &url)
            .await?;
        Ok(())
    }

    async fn disable_ci(&self, slug: &RepoSlug) -> VendorResult<()> {
        let url = self.url(&format!(
            "/repos/{}/{}/actions/permissions",
            slug.owner, slug.name
        ));
        debug!(repo = %slug, "disabling actions");
        self.send(
            self.request(Method::PUT, &url)
                .json(&json!({ "enabled": false })),
            &url,
        )
        .await?;
        Ok(())
    }

    async fn disable_ancillary_features(&self, slug: &RepoSlug) -> VendorResult<()> {
        let url = self.url(&format!("/repos/{}/{}", slug.owner, slug.name));
        debug!(repo = %slug, "disabling issues, wiki, projects and discussions");
        self.send(
            self.request(Method::PATCH, &url).json(&json!({
                "has_issues": false,
                "has_wiki": false,
                "has_projects": false,
                "has_discussions": false,
            })),
            &url,
        )
        .await?;
        Ok(())
    }
}
