mod db;
pub mod macros;
pub mod prelude;
mod request;
mod response;

use coaching_backend::State;
use db::Database;
use dotenvy::dotenv;
use http::StatusCode;
use request::RequestBuilder;
use reqwest::{
    multipart::{Form, Part},
    Client,
};
use serde_json::Value;
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::Arc,
};
use tempfile::TempDir;
use tokio::{
    net::TcpListener,
    sync::{oneshot, OnceCell},
};
use uuid::Uuid;

/// Just enough bytes to pass for a PDF.
#[allow(unused)]
pub const SAMPLE_PDF: &[u8] =
    b"%PDF-1.4\n1 0 obj\n<< /Type /Catalog >>\nendobj\ntrailer\n<< /Root 1 0 R >>\n%%EOF\n";

#[derive(Debug)]
pub struct AppInner {
    addr: SocketAddr,
    db: Database,
    _upload_dir: TempDir,
}

#[derive(Clone, Debug)]
pub struct App {
    inner: Arc<AppInner>,
}

#[allow(unused)]
impl App {
    pub async fn new() -> Self {
        dotenv().ok();

        let (tx, rx) = oneshot::channel();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(async {
                tracing::trace!("setting up database");

                let conn = Database::setup().await;
                let upload_dir = TempDir::new().expect("failed to create upload directory");

                tracing::trace!("binding socket");

                let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
                let listener = TcpListener::bind(addr)
                    .await
                    .expect("failed to bind tcp listener");
                let state = State::with_database(conn.conn(), upload_dir.path().to_owned()).await;

                let inner = Arc::new(AppInner {
                    addr: listener.local_addr().unwrap(),
                    db: conn,
                    _upload_dir: upload_dir,
                });

                tx.send(inner).unwrap();

                tracing::trace!("starting app");

                coaching_backend::run(listener, state).await.unwrap();
            });
        });

        let app = App {
            inner: rx.await.unwrap(),
        };

        app.clean_database().await;

        app
    }

    pub async fn clean_database(&self) {
        self.inner.db.clean().await;
    }

    pub async fn upload_document(&self, title: &str, exam_type: &str) -> Value {
        let res = self
            .post("/api/admin/pdfs")
            .admin()
            .multipart(document_form(title, exam_type))
            .send()
            .await;

        assert_eq!(res.status(), StatusCode::CREATED);

        res.json().await
    }

    pub fn get(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().get(format!("http://{}{}", self.inner.addr, url)))
    }

    pub fn post(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().post(format!("http://{}{}", self.inner.addr, url)))
    }

    pub fn delete(&self, url: &str) -> RequestBuilder {
        RequestBuilder::new(Client::new().delete(format!("http://{}{}", self.inner.addr, url)))
    }
}

#[allow(unused)]
pub fn document_form(title: &str, exam_type: &str) -> Form {
    Form::new()
        .text("title", title.to_owned())
        .text("exam_type", exam_type.to_owned())
        .text("subject", "General Studies")
        .text("batch", "2026")
        .part(
            "file",
            Part::bytes(SAMPLE_PDF.to_vec())
                .file_name("notes.pdf")
                .mime_str("application/pdf")
                .expect("invalid mime type"),
        )
}

pub async fn get_cached_app() -> &'static App {
    static APP: OnceCell<App> = OnceCell::const_new();
    APP.get_or_init(App::new).await
}

#[allow(unused)]
pub fn uuid() -> String {
    Uuid::new_v4()
        .as_simple()
        .encode_lower(&mut Uuid::encode_buffer())
        .to_owned()
}
