use chrono::{DateTime, Utc};

use crate::clients::blocking::BlockingHevyClient;
use crate::clients::hevy::HevyClient;
use crate::clients::http::{HttpRequest, HttpResponse, format_timestamp, parse_json};
use crate::clients::models::responses::{ExerciseHistoryApiResponse, ExerciseHistoryEntry};
use crate::error::{Result, check_status};

/// Not paginated; the optional bounds narrow the range server-side.
pub fn history_request(
    exercise_template_id: &str,
    start_date: Option<&DateTime<Utc>>,
    end_date: Option<&DateTime<Utc>>,
) -> HttpRequest {
    HttpRequest::get(["v1", "exercise_history", exercise_template_id])
        .query_opt("start_date", start_date.map(format_timestamp))
        .query_opt("end_date", end_date.map(format_timestamp))
}

/// One entry per completed set, in the order the API returns them.
pub fn parse_history(response: HttpResponse) -> Result<Vec<ExerciseHistoryEntry>> {
    let response = check_status(response)?;
    let api_response: ExerciseHistoryApiResponse = parse_json("exercise history", &response.body)?;
    Ok(api_response.exercise_history)
}

#[derive(Debug, Clone, Copy)]
pub struct ExerciseHistory<'a> {
    pub(crate) client: &'a HevyClient,
}

impl ExerciseHistory<'_> {
    pub async fn get_exercise_history(
        self,
        exercise_template_id: &str,
        start_date: Option<&DateTime<Utc>>,
        end_date: Option<&DateTime<Utc>>,
    ) -> Result<Vec<ExerciseHistoryEntry>> {
        let request = history_request(exercise_template_id, start_date, end_date);
        parse_history(self.client.execute(request).await?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlockingExerciseHistory<'a> {
    pub(crate) client: &'a BlockingHevyClient,
}

impl BlockingExerciseHistory<'_> {
    pub fn get_exercise_history(
        &self,
        exercise_template_id: &str,
        start_date: Option<&DateTime<Utc>>,
        end_date: Option<&DateTime<Utc>>,
    ) -> Result<Vec<ExerciseHistoryEntry>> {
        let request = history_request(exercise_template_id, start_date, end_date);
        parse_history(self.client.execute(request)?)
    }
}
