mod blob;
mod session_api;

pub use blob::download_image_blob;
pub use session_api::{SessionApi, SessionCredentials};
