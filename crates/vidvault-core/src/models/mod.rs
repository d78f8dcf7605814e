pub mod video;

pub use video::{UploadReceipt, VideoRecord};
