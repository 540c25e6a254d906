use chrono::{DateTime, Utc};

use crate::clients::blocking::BlockingHevyClient;
use crate::clients::endpoints::first_element;
use crate::clients::hevy::HevyClient;
use crate::clients::http::{
    HttpMethod, HttpRequest, HttpResponse, format_timestamp, paged, parse_json,
};
use crate::clients::models::requests::{WorkoutInput, WorkoutRequest};
use crate::clients::models::responses::{
    Workout, WorkoutCountApiResponse, WorkoutEventsPage, WorkoutWriteApiResponse, WorkoutsPage,
};
use crate::error::{Result, check_status};

const WORKOUTS: [&str; 2] = ["v1", "workouts"];

pub fn list_request(page: u32, page_size: u32) -> Result<HttpRequest> {
    paged(&WORKOUTS, page, page_size)
}

pub fn parse_list(response: HttpResponse) -> Result<WorkoutsPage> {
    let response = check_status(response)?;
    parse_json("workouts list", &response.body)
}

pub fn get_request(workout_id: &str) -> HttpRequest {
    HttpRequest::get(["v1", "workouts", workout_id])
}

/// GET returns the workout without any wrapper.
pub fn parse_get(response: HttpResponse) -> Result<Workout> {
    let response = check_status(response)?;
    parse_json("workout", &response.body)
}

pub fn create_request(workout: &WorkoutInput) -> Result<HttpRequest> {
    HttpRequest::new(HttpMethod::Post, WORKOUTS).with_json(
        "create workout",
        &WorkoutRequest { workout },
    )
}

pub fn update_request(workout_id: &str, workout: &WorkoutInput) -> Result<HttpRequest> {
    HttpRequest::new(HttpMethod::Put, ["v1", "workouts", workout_id]).with_json(
        "update workout",
        &WorkoutRequest { workout },
    )
}

/// Create and update both answer `{"workout": [ {...} ]}`.
pub fn parse_write(response: HttpResponse) -> Result<Workout> {
    let response = check_status(response)?;
    let api_response: WorkoutWriteApiResponse = parse_json("workout write", &response.body)?;
    first_element("workout write", api_response.workout)
}

pub fn events_request(
    page: u32,
    page_size: u32,
    since: Option<&DateTime<Utc>>,
) -> Result<HttpRequest> {
    Ok(paged(&["v1", "workouts", "events"], page, page_size)?
        .query_opt("since", since.map(format_timestamp)))
}

pub fn parse_events(response: HttpResponse) -> Result<WorkoutEventsPage> {
    let response = check_status(response)?;
    parse_json("workout events", &response.body)
}

pub fn count_request() -> HttpRequest {
    HttpRequest::get(["v1", "workouts", "count"])
}

pub fn parse_count(response: HttpResponse) -> Result<u64> {
    let response = check_status(response)?;
    let api_response: WorkoutCountApiResponse = parse_json("workout count", &response.body)?;
    Ok(api_response.workout_count)
}

#[derive(Debug, Clone, Copy)]
pub struct Workouts<'a> {
    pub(crate) client: &'a HevyClient,
}

impl Workouts<'_> {
    pub async fn get_workouts(self, page: u32, page_size: u32) -> Result<WorkoutsPage> {
        let request = list_request(page, page_size)?;
        parse_list(self.client.execute(request).await?)
    }

    pub async fn get_workout(self, workout_id: &str) -> Result<Workout> {
        parse_get(self.client.execute(get_request(workout_id)).await?)
    }

    pub async fn create_workout(self, workout: &WorkoutInput) -> Result<Workout> {
        let request = create_request(workout)?;
        parse_write(self.client.execute(request).await?)
    }

    pub async fn update_workout(self, workout_id: &str, workout: &WorkoutInput) -> Result<Workout> {
        let request = update_request(workout_id, workout)?;
        parse_write(self.client.execute(request).await?)
    }

    /// Updates and deletions since `since` (all history when `None`).
    pub async fn get_events(
        self,
        page: u32,
        page_size: u32,
        since: Option<&DateTime<Utc>>,
    ) -> Result<WorkoutEventsPage> {
        let request = events_request(page, page_size, since)?;
        parse_events(self.client.execute(request).await?)
    }

    pub async fn get_count(self) -> Result<u64> {
        parse_count(self.client.execute(count_request()).await?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlockingWorkouts<'a> {
    pub(crate) client: &'a BlockingHevyClient,
}

impl BlockingWorkouts<'_> {
    pub fn get_workouts(&self, page: u32, page_size: u32) -> Result<WorkoutsPage> {
        let request = list_request(page, page_size)?;
        parse_list(self.client.execute(request)?)
    }

    pub fn get_workout(&self, workout_id: &str) -> Result<Workout> {
        parse_get(self.client.execute(get_request(workout_id))?)
    }

    pub fn create_workout(&self, workout: &WorkoutInput) -> Result<Workout> {
        let request = create_request(workout)?;
        parse_write(self.client.execute(request)?)
    }

    pub fn update_workout(&self, workout_id: &str, workout: &WorkoutInput) -> Result<Workout> {
        let request = update_request(workout_id, workout)?;
        parse_write(self.client.execute(request)?)
    }

    pub fn get_events(
        &self,
        page: u32,
        page_size: u32,
        since: Option<&DateTime<Utc>>,
    ) -> Result<WorkoutEventsPage> {
        let request = events_request(page, page_size, since)?;
        parse_events(self.client.execute(request)?)
    }

    pub fn get_count(&self) -> Result<u64> {
        parse_count(self.client.execute(count_request())?)
    }
}
