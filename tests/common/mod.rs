#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use easternempire::http::{HttpResponse, Transport, TransportError};
use reqwest::Url;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

#[derive(Clone)]
pub enum Reply {
    Respond(u16, &'static str),
    Timeout,
    Unreachable,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Get(String),
    PostJson(String, Value),
    PostForm(String, Vec<(String, String)>),
}

/// Answers every request with the same reply and records what was asked.
pub struct ScriptedTransport {
    reply: Reply,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl ScriptedTransport {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn delayed(reply: Reply, delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::new(reply)
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, call: Call) -> Result<HttpResponse, TransportError> {
        self.calls.lock().unwrap().push(call);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.reply {
            Reply::Respond(status, body) => Ok(HttpResponse::new(*status, *body)),
            Reply::Timeout => Err(TransportError::Timeout),
            Reply::Unreachable => Err(TransportError::Request("connection refused".to_string())),
        }
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        self.answer(Call::Get(url.to_string())).await
    }

    async fn post_json(&self, url: &Url, body: &Value) -> Result<HttpResponse, TransportError> {
        self.answer(Call::PostJson(url.to_string(), body.clone()))
            .await
    }

    async fn post_form(
        &self,
        url: &Url,
        fields: &[(String, String)],
    ) -> Result<HttpResponse, TransportError> {
        self.answer(Call::PostForm(url.to_string(), fields.to_vec()))
            .await
    }
}

/// Serves the router on a free local port and returns its base URL.
pub async fn serve(router: Router) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}").parse().unwrap()
}

pub fn backend() -> Option<Url> {
    Some("https://api.easternempire.test".parse().unwrap())
}

pub const REMOTE_EVENTS: &str = r##"
[
  {
    "id": "remote-1",
    "title": "Sangeet Night",
    "venue": "Enmore Theatre",
    "address": "118-132 Enmore Road, Newtown NSW 2042",
    "date": "2026-11-20",
    "time": "8:00 PM",
    "ticketUrl": "https://enmoretheatre.com.au/"
  },
  {
    "id": "remote-2",
    "title": "Winter Warmer",
    "venue": "Factory Theatre",
    "address": "105 Victoria Road, Marrickville NSW 2204",
    "date": "2026-06-12",
    "time": "7:30 PM",
    "description": "Cosy night of strings and tabla."
  }
]"##;
