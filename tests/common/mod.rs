#![allow(dead_code)]

use email_json_extract::{FetchError, Fetcher, HttpResponse};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

enum Route {
    Respond(HttpResponse),
    Status(u16),
}

/// In-memory fetcher; unknown URLs fail like an unresolvable host
#[derive(Default)]
pub struct FakeFetcher {
    routes: HashMap<String, Route>,
    calls: RefCell<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, content_type: Option<&str>, body: &str) -> Self {
        self.routes.insert(
            url.to_string(),
            Route::Respond(HttpResponse {
                status: 200,
                content_type: content_type.map(str::to_string),
                body: body.as_bytes().to_vec(),
            }),
        );
        self
    }

    pub fn json(self, url: &str, body: &str) -> Self {
        self.respond(url, Some("application/json; charset=utf-8"), body)
    }

    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.routes.insert(url.to_string(), Route::Status(status));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Fetcher for FakeFetcher {
    fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.calls.borrow_mut().push(url.to_string());

        match self.routes.get(url) {
            Some(Route::Respond(response)) => Ok(response.clone()),
            Some(Route::Status(status)) => Err(FetchError::Status(*status)),
            None => Err(FetchError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("failed to lookup address for {url}"),
            ))),
        }
    }
}

pub fn plain_email(body: &str) -> String {
    format!(
        "From: billing@shop.example\r\n\
         To: inbox@example.com\r\n\
         Subject: Your receipt\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         \r\n\
         {body}"
    )
}

pub fn html_email(body: &str) -> String {
    format!(
        "From: billing@shop.example\r\n\
         To: inbox@example.com\r\n\
         Subject: Your receipt\r\n\
         Content-Type: text/html; charset=utf-8\r\n\
         \r\n\
         {body}"
    )
}

pub fn email_with_attachment(body: &str, filename: &str, attachment: &str) -> String {
    format!(
        "From: billing@shop.example\r\n\
         To: inbox@example.com\r\n\
         Subject: Your receipt\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: multipart/mixed; boundary=\"BOUNDARY\"\r\n\
         \r\n\
         --BOUNDARY\r\n\
         Content-Type: text/plain; charset=utf-8\r\n\
         \r\n\
         {body}\r\n\
         --BOUNDARY\r\n\
         Content-Type: application/json\r\n\
         Content-Disposition: attachment; filename=\"{filename}\"\r\n\
         \r\n\
         {attachment}\r\n\
         --BOUNDARY--\r\n"
    )
}

pub fn headers_only_email() -> String {
    "From: billing@shop.example\r\n\
     To: inbox@example.com\r\n\
     Subject: Nothing here\r\n\
     \r\n"
        .to_string()
}
