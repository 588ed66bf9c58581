use rocket::request::FlashMessage;
use serde::Serialize;

pub mod movie_route;
pub mod ticket_route;
pub mod user_route;

/// One-shot status line rendered at the top of the next page only.
#[derive(Debug, Serialize)]
pub struct FlashNote {
    pub kind: String,
    pub message: String,
}

impl FlashNote {
    pub fn error(message: impl Into<String>) -> Self {
        FlashNote {
            kind: "error".to_string(),
            message: message.into(),
        }
    }
}

impl From<FlashMessage<'_>> for FlashNote {
    fn from(flash: FlashMessage<'_>) -> Self {
        FlashNote {
            kind: flash.kind().to_string(),
            message: flash.message().to_string(),
        }
    }
}
