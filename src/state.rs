use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn};
use std::{
    env,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::log::LevelFilter;
use uuid::Uuid;

const DEFAULT_UPLOAD_DIR: &str = "./uploads";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

pub trait StateTrait: Send + Sync + Clone + 'static {
    type Db: ConnectionTrait + Clone;

    fn db(&self) -> &Self::Db;
    fn upload_dir(&self) -> &Path;
    fn admin_password(&self) -> &str;

    /// Disk location of a stored document. Derived from the record id, so
    /// client-supplied filenames never reach the filesystem.
    fn document_path(&self, id: Uuid) -> PathBuf {
        self.upload_dir().join(format!("{id}.pdf"))
    }
}

pub struct State {
    database: DbConn,
    upload_dir: PathBuf,
    admin_password: String,
}

impl State {
    pub async fn new() -> Arc<Self> {
        let upload_dir = env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_UPLOAD_DIR));

        Self::with_database(Self::connect_database().await, upload_dir).await
    }

    pub async fn with_database(conn: DbConn, upload_dir: PathBuf) -> Arc<Self> {
        tokio::fs::create_dir_all(&upload_dir)
            .await
            .expect("failed to create upload directory");

        let admin_password =
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_owned());

        Arc::new(Self {
            database: conn,
            upload_dir,
            admin_password,
        })
    }

    async fn connect_database() -> DbConn {
        info!("Trying to connect to database");

        let url = env::var("DATABASE_URL").expect("DATABASE_URL is not set");
        let mut opts = ConnectOptions::new(url);
        opts.sqlx_logging_level(LevelFilter::Debug);

        let db = Database::connect(opts)
            .await
            .expect("failed to connect to database");

        info!("Connected to database");

        db
    }
}

impl StateTrait for Arc<State> {
    type Db = DbConn;

    fn db(&self) -> &Self::Db {
        &self.database
    }

    fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    fn admin_password(&self) -> &str {
        &self.admin_password
    }
}
