use reqwest::{Client, Url};

use crate::clients::endpoints::exercise_history::ExerciseHistory;
use crate::clients::endpoints::exercise_templates::ExerciseTemplates;
use crate::clients::endpoints::routine_folders::RoutineFolders;
use crate::clients::endpoints::routines::Routines;
use crate::clients::endpoints::workouts::Workouts;
use crate::clients::http::{
    HttpRequest, HttpResponse, content_type_json, default_headers, log_request, log_response,
    parse_base_url,
};
use crate::config::Config;
use crate::error::{HevyError, Result};

/// Async client for the Hevy API.
///
/// Operations only suspend while the HTTP exchange is in flight, so several
/// can run concurrently on one client. Dropping a pending future cancels the
/// request; a timeout surfaces as [`HevyError::Transport`].
///
/// Clones share the underlying connection pool. [`close`](Self::close)
/// releases this handle's reference to it.
#[derive(Debug, Clone)]
pub struct HevyClient {
    http: Option<Client>,
    base: Url,
}

impl HevyClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base = parse_base_url(&config.base_url)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers(&config.api_key)?)
            .build()?;

        tracing::debug!(base_url = %base, "hevy.client_created");

        Ok(Self {
            http: Some(http),
            base,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env()?)
    }

    pub fn workouts(&self) -> Workouts<'_> {
        Workouts { client: self }
    }

    pub fn routines(&self) -> Routines<'_> {
        Routines { client: self }
    }

    pub fn routine_folders(&self) -> RoutineFolders<'_> {
        RoutineFolders { client: self }
    }

    pub fn exercise_templates(&self) -> ExerciseTemplates<'_> {
        ExerciseTemplates { client: self }
    }

    pub fn exercise_history(&self) -> ExerciseHistory<'_> {
        ExerciseHistory { client: self }
    }

    /// Releases the connection pool. Calling it again is a no-op; any later
    /// operation fails with [`HevyError::Closed`].
    pub fn close(&mut self) {
        if self.http.take().is_some() {
            tracing::debug!("hevy.client_closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.http.is_none()
    }

    pub(crate) async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let http = self.http.as_ref().ok_or(HevyError::Closed)?;
        let url = request.url(&self.base)?;
        log_request(&request);

        let path = request.path();
        let method = request.method;

        let mut builder = http.request(method.into(), url);
        if let Some(body) = request.body {
            let (name, value) = content_type_json();
            builder = builder.header(name, value).body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        let response = HttpResponse { status, body };
        log_response(method, &path, &response);
        Ok(response)
    }
}
