pub mod encoder;
pub mod file;

pub use encoder::{data_url_payload, to_data_url, AudioEncoder, EncodeError};
pub use file::{FileSource, SelectedFile};
