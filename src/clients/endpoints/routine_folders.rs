use crate::clients::blocking::BlockingHevyClient;
use crate::clients::hevy::HevyClient;
use crate::clients::http::{HttpMethod, HttpRequest, HttpResponse, paged, parse_json};
use crate::clients::models::requests::{CreateRoutineFolderRequest, RoutineFolderCreate};
use crate::clients::models::responses::{RoutineFolder, RoutineFolderApiResponse, RoutineFoldersPage};
use crate::error::{Result, check_status};

const ROUTINE_FOLDERS: [&str; 2] = ["v1", "routine_folders"];

pub fn list_request(page: u32, page_size: u32) -> Result<HttpRequest> {
    paged(&ROUTINE_FOLDERS, page, page_size)
}

pub fn parse_list(response: HttpResponse) -> Result<RoutineFoldersPage> {
    let response = check_status(response)?;
    parse_json("routine folders list", &response.body)
}

pub fn get_request(folder_id: u64) -> HttpRequest {
    HttpRequest::get(["v1".to_string(), "routine_folders".to_string(), folder_id.to_string()])
}

pub fn parse_get(response: HttpResponse) -> Result<RoutineFolder> {
    let response = check_status(response)?;
    parse_json("routine folder", &response.body)
}

pub fn create_request(folder: &RoutineFolderCreate) -> Result<HttpRequest> {
    HttpRequest::new(HttpMethod::Post, ROUTINE_FOLDERS).with_json(
        "create routine folder",
        &CreateRoutineFolderRequest {
            routine_folder: folder,
        },
    )
}

/// Unlike routines, the created folder comes back as a bare object under
/// `routine_folder`, not inside an array.
pub fn parse_create(response: HttpResponse) -> Result<RoutineFolder> {
    let response = check_status(response)?;
    let api_response: RoutineFolderApiResponse =
        parse_json("create routine folder", &response.body)?;
    Ok(api_response.routine_folder)
}

#[derive(Debug, Clone, Copy)]
pub struct RoutineFolders<'a> {
    pub(crate) client: &'a HevyClient,
}

impl RoutineFolders<'_> {
    pub async fn get_routine_folders(self, page: u32, page_size: u32) -> Result<RoutineFoldersPage> {
        let request = list_request(page, page_size)?;
        parse_list(self.client.execute(request).await?)
    }

    pub async fn get_routine_folder(self, folder_id: u64) -> Result<RoutineFolder> {
        parse_get(self.client.execute(get_request(folder_id)).await?)
    }

    pub async fn create_routine_folder(self, folder: &RoutineFolderCreate) -> Result<RoutineFolder> {
        let request = create_request(folder)?;
        parse_create(self.client.execute(request).await?)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BlockingRoutineFolders<'a> {
    pub(crate) client: &'a BlockingHevyClient,
}

impl BlockingRoutineFolders<'_> {
    pub fn get_routine_folders(&self, page: u32, page_size: u32) -> Result<RoutineFoldersPage> {
        let request = list_request(page, page_size)?;
        parse_list(self.client.execute(request)?)
    }

    pub fn get_routine_folder(&self, folder_id: u64) -> Result<RoutineFolder> {
        parse_get(self.client.execute(get_request(folder_id))?)
    }

    pub fn create_routine_folder(&self, folder: &RoutineFolderCreate) -> Result<RoutineFolder> {
        let request = create_request(folder)?;
        parse_create(self.client.execute(request)?)
    }
}
