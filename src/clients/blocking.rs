use reqwest::Url;
use reqwest::blocking::Client;

use crate::clients::endpoints::exercise_history::BlockingExerciseHistory;
use crate::clients::endpoints::exercise_templates::BlockingExerciseTemplates;
use crate::clients::endpoints::routine_folders::BlockingRoutineFolders;
use crate::clients::endpoints::routines::BlockingRoutines;
use crate::clients::endpoints::workouts::BlockingWorkouts;
use crate::clients::http::{
    HttpRequest, HttpResponse, content_type_json, default_headers, log_request, log_response,
    parse_base_url,
};
use crate::config::Config;
use crate::error::{HevyError, Result};

/// Blocking client for the Hevy API.
///
/// Every operation holds the calling thread until the exchange completes.
/// Like [`reqwest::blocking::Client`], it must not be created, used, or
/// dropped from inside an async runtime; use [`HevyClient`](crate::HevyClient)
/// there instead.
#[derive(Debug, Clone)]
pub struct BlockingHevyClient {
    http: Option<Client>,
    base: Url,
}

impl BlockingHevyClient {
    pub fn new(config: &Config) -> Result<Self> {
        let base = parse_base_url(&config.base_url)?;
        let http = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers(&config.api_key)?)
            .build()?;

        tracing::debug!(base_url = %base, "hevy.blocking_client_created");

        Ok(Self {
            http: Some(http),
            base,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(&Config::from_env()?)
    }

    pub fn workouts(&self) -> BlockingWorkouts<'_> {
        BlockingWorkouts { client: self }
    }

    pub fn routines(&self) -> BlockingRoutines<'_> {
        BlockingRoutines { client: self }
    }

    pub fn routine_folders(&self) -> BlockingRoutineFolders<'_> {
        BlockingRoutineFolders { client: self }
    }

    pub fn exercise_templates(&self) -> BlockingExerciseTemplates<'_> {
        BlockingExerciseTemplates { client: self }
    }

    pub fn exercise_history(&self) -> BlockingExerciseHistory<'_> {
        BlockingExerciseHistory { client: self }
    }

    /// Releases the connection pool; idempotent.
    pub fn close(&mut self) {
        if self.http.take().is_some() {
            tracing::debug!("hevy.blocking_client_closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.http.is_none()
    }

    pub(crate) fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
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

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        let response = HttpResponse { status, body };
        log_response(method, &path, &response);
        Ok(response)
    }
}
