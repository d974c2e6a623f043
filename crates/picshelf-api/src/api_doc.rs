use picshelf_core::models::{FileResult, FileStatus, UploadRecord, UploadResponse};
use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "picshelf",
        description = "Image upload and gallery listing service"
    ),
    paths(
        handlers::image_upload::upload_images,
        handlers::image_list::list_images,
    ),
    components(schemas(UploadRecord, UploadResponse, FileResult, FileStatus, ErrorResponse)),
    tags((name = "images", description = "Image upload and listing"))
)]
pub struct ApiDoc;
