use erased_serde::Serialize as EraSerialize;
use log::info;
use rocket::http::Status as HttpStatus;
use rocket::response::Responder;
use rocket::response::content::RawJson;
use serde::Serialize;

use crate::error::QuizError;

#[derive(Serialize)]
pub enum Status {
    Ok,
    Error(String),
}

#[derive(Serialize)]
#[serde(untagged)]
enum Data<'a> {
    Owned(Box<dyn EraSerialize + 'static>),
    Ref(&'a dyn EraSerialize),
}

#[derive(Serialize)]
pub struct JsonStatus<'a> {
    status: Status,
    data: Data<'a>,
    /// Not part of the body, only used for the response status line
    #[serde(skip)]
    http_status: HttpStatus,
}

impl From<JsonStatus<'_>> for RawJson<String> {
    fn from(status: JsonStatus) -> Self {
        let body = serde_json::to_string(&status).unwrap_or_else(|e| {
            format!(
                "{{\"status\":{{\"Error\":{:?}}},\"data\":[]}}",
                e.to_string()
            )
        });
        RawJson(body)
    }
}

impl From<QuizError> for JsonStatus<'static> {
    fn from(error: QuizError) -> Self {
        if error.is_client_error() {
            JsonStatus::error(error)
        } else {
            JsonStatus::server_error(error)
        }
    }
}

pub type JsonResult<'a> = Result<JsonStatus<'a>, JsonStatus<'static>>;

impl JsonStatus<'static> {
    pub fn new_owned(status: Status, data: impl EraSerialize + 'static) -> Self {
        let http_status = match status {
            Status::Ok => HttpStatus::Ok,
            Status::Error(_) => HttpStatus::BadRequest,
        };

        JsonStatus {
            status,
            data: Data::Owned(Box::new(data)),
            http_status,
        }
    }

    pub fn new_empty(status: Status) -> Self {
        JsonStatus::new_owned(status, Vec::<String>::new())
    }

    /// An error caused by the request, answered with 400
    pub fn error<T: ToString>(message: T) -> Self {
        info!("Error while running request: {}", message.to_string());
        JsonStatus::new_empty(Status::Error(message.to_string()))
    }

    /// An error on the server side, answered with 500
    pub fn server_error<T: ToString>(message: T) -> Self {
        info!("Server error while running request: {}", message.to_string());
        JsonStatus::new_empty(Status::Error(message.to_string()))
            .with_http_status(HttpStatus::InternalServerError)
    }

    pub fn ok<T: ToString>(message: Option<T>) -> Self {
        match message {
            Some(message) => JsonStatus::new_owned(Status::Ok, vec![message.to_string()]),
            None => JsonStatus::new_empty(Status::Ok),
        }
    }

    pub fn data_owned(data: impl EraSerialize + 'static) -> Self {
        JsonStatus::new_owned(Status::Ok, data)
    }
}

impl<'r, 'o: 'r, 'a: 'o> Responder<'r, 'o> for JsonStatus<'a> {
    fn respond_to(self, request: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let http_status = self.http_status();
        (http_status, RawJson::<String>::from(self)).respond_to(request)
    }
}

impl<'a> JsonStatus<'a> {
    pub fn new_ref(status: Status, data: &'a dyn EraSerialize) -> Self {
        JsonStatus {
            status,
            data: Data::Ref(data),
            http_status: HttpStatus::Ok,
        }
    }

    pub fn data_ref<T: EraSerialize>(data: &'a T) -> Self {
        JsonStatus::new_ref(Status::Ok, data)
    }

    /// Overrides the HTTP status the response is sent with
    pub fn with_http_status(mut self, http_status: HttpStatus) -> Self {
        self.http_status = http_status;
        self
    }

    pub fn http_status(&self) -> HttpStatus {
        self.http_status
    }
}
