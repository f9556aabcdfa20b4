pub mod response;
pub mod state;
pub mod upload;

pub use response::{parse_generate_response, GenerateResponse, ResponseError};
pub use state::{GenPhase, GenState, RequestToken};
pub use upload::{allowed_file, ALLOWED_EXTENSIONS, FIELD_BASE_IMAGE, FIELD_PROMPT};
