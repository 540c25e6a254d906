use crate::clients::blocking::BlockingHevyClient;
use crate::clients::hevy::HevyClient;
use crate::clients::http::{HttpMethod, HttpRequest, HttpResponse, paged, parse_json};
use crate::clients::models::requests::{CreateCustomExerciseRequest, CustomExercise};
use crate::clients::models::responses::{
    CreatedExerciseTemplate, ExerciseTemplate, ExerciseTemplatesPage,
};
use crate::error::{Result, check_status};

const EXERCISE_TEMPLATES: [&str; 2] = ["v1", "exercise_templates"];

pub fn list_request(page: u32, page_size: u32) -> Result<HttpRequest> {
    paged(&EXERCISE_TEMPLATES, page, page_size)
}

pub fn parse_list(response: HttpResponse) -> Result<ExerciseTemplatesPage> {
    let response = check_status(response)?;
    parse_json("exercise templates list", &response.body)
}

pub fn get_request(template_id: &str) -> HttpRequest {
    HttpRequest::get(["v1", "exercise_templates", template_id])
}

pub fn parse_get(response: HttpResponse) -> Result<ExerciseTemplate> {
    let response = check_status(response)?;
    parse_json("exercise template", &response.body)
}

pub fn create_custom_request(exercise: &CustomExercise) -> Result<HttpRequest> {
    HttpRequest::new(HttpMethod::Post, EXERCISE_TEMPLATES).with_json(
        "create custom exercise",
        &CreateCustomExerciseRequest { exercise },
    )
}

/// The API answers `{"id": N}` only; fetch the template separately if needed.
pub fn parse_create_custom(response: HttpResponse) -> Result<CreatedExerciseTemplate> {
    let response = check_status(response)?;
    parse_json("create custom exercise", &response.body)
}

#[derive(Debug, Clone, Copy)]
pub struct ExerciseTemplates<'a> {
    pub(crate) client: &'a HevyClient,
}

impl ExerciseTemplates<'_> {
    pub async fn get_exercise_templates(
        self,
        page: u32,
        page_size: u32,
    ) -> Result<ExerciseTemplatesPage> {
        let request = list_request(page, page_size)?;
        parse_list(self.client.execute(request).await?)
    }

    pub async fn get_exercise_template(self, template_id: &str) -> Result<ExerciseTemplate> {
        parse_get(self.client.execute(get_request(template_id)).await?)
    }

    pub async fn create_custom_exercise(
        self,
        exercise: &CustomExercise,
    ) -> Result<CreatedExerciseTemplate> {
        let request = create_custom_request(exercise)?;
        parse_create_custom(self.client.execute(request).await?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlockingExerciseTemplates<'a> {
    pub(crate) client: &'a BlockingHevyClient,
}

impl BlockingExerciseTemplates<'_> {
    pub fn get_exercise_templates(&self, page: u32, page_size: u32) -> Result<ExerciseTemplatesPage> {
        let request = list_request(page, page_size)?;
        parse_list(self.client.execute(request)?)
    }

    pub fn get_exercise_template(&self, template_id: &str) -> Result<ExerciseTemplate> {
        parse_get(self.client.execute(get_request(template_id))?)
    }

    pub fn create_custom_exercise(&self, exercise: &CustomExercise) -> Result<CreatedExerciseTemplate> {
        let request = create_custom_request(exercise)?;
        parse_create_custom(self.client.execute(request)?)
    }
}
