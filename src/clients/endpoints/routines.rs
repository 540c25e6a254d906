use crate::clients::blocking::BlockingHevyClient;
use crate::clients::endpoints::first_element;
use crate::clients::hevy::HevyClient;
use crate::clients::http::{HttpMethod, HttpRequest, HttpResponse, paged, parse_json};
use crate::clients::models::requests::{
    CreateRoutineRequest, RoutineCreate, RoutineUpdate, UpdateRoutineRequest,
};
use crate::clients::models::responses::{
    Routine, RoutineApiResponse, RoutineWriteApiResponse, RoutinesPage,
};
use crate::error::{Result, check_status};

const ROUTINES: [&str; 2] = ["v1", "routines"];

pub fn list_request(page: u32, page_size: u32) -> Result<HttpRequest> {
    paged(&ROUTINES, page, page_size)
}

pub fn parse_list(response: HttpResponse) -> Result<RoutinesPage> {
    let response = check_status(response)?;
    parse_json("routines list", &response.body)
}

pub fn get_request(routine_id: &str) -> HttpRequest {
    HttpRequest::get(["v1", "routines", routine_id])
}

/// GET wraps the routine in `{"routine": {...}}`.
pub fn parse_get(response: HttpResponse) -> Result<Routine> {
    let response = check_status(response)?;
    let api_response: RoutineApiResponse = parse_json("routine", &response.body)?;
    Ok(api_response.routine)
}

pub fn create_request(routine: &RoutineCreate) -> Result<HttpRequest> {
    HttpRequest::new(HttpMethod::Post, ROUTINES).with_json(
        "create routine",
        &CreateRoutineRequest { routine },
    )
}

pub fn update_request(routine_id: &str, routine: &RoutineUpdate) -> Result<HttpRequest> {
    HttpRequest::new(HttpMethod::Put, ["v1", "routines", routine_id]).with_json(
        "update routine",
        &UpdateRoutineRequest { routine },
    )
}

/// Create and update both answer `{"routine": [ {...} ]}`.
pub fn parse_write(response: HttpResponse) -> Result<Routine> {
    let response = check_status(response)?;
    let api_response: RoutineWriteApiResponse = parse_json("routine write", &response.body)?;
    first_element("routine write", api_response.routine)
}

#[derive(Debug, Clone, Copy)]
pub struct Routines<'a> {
    pub(crate) client: &'a HevyClient,
}

impl Routines<'_> {
    pub async fn get_routines(self, page: u32, page_size: u32) -> Result<RoutinesPage> {
        let request = list_request(page, page_size)?;
        parse_list(self.client.execute(request).await?)
    }

    pub async fn get_routine(self, routine_id: &str) -> Result<Routine> {
        parse_get(self.client.execute(get_request(routine_id)).await?)
    }

    pub async fn create_routine(self, routine: &RoutineCreate) -> Result<Routine> {
        let request = create_request(routine)?;
        parse_write(self.client.execute(request).await?)
    }

    pub async fn update_routine(self, routine_id: &str, routine: &RoutineUpdate) -> Result<Routine> {
        let request = update_request(routine_id, routine)?;
        parse_write(self.client.execute(request).await?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlockingRoutines<'a> {
    pub(crate) client: &'a BlockingHevyClient,
}

impl BlockingRoutines<'_> {
    pub fn get_routines(&self, page: u32, page_size: u32) -> Result<RoutinesPage> {
        let request = list_request(page, page_size)?;
        parse_list(self.client.execute(request)?)
    }

    pub fn get_routine(&self, routine_id: &str) -> Result<Routine> {
        parse_get(self.client.execute(get_request(routine_id))?)
    }

    pub fn create_routine(&self, routine: &RoutineCreate) -> Result<Routine> {
        let request = create_request(routine)?;
        parse_write(self.client.execute(request)?)
    }

    pub fn update_routine(&self, routine_id: &str, routine: &RoutineUpdate) -> Result<Routine> {
        let request = update_request(routine_id, routine)?;
        parse_write(self.client.execute(request)?)
    }
}
