use contracts::domain::a001_shop::Shop;
use contracts::domain::a002_category::Category;
use contracts::domain::a003_product::Product;
use contracts::domain::common::AggregateRoot;
use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const DEFAULT_DB_FILE: &str = "target/db/shop_console.db";

const SHOP_COLUMNS: &str = r#"
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    in_vacations INTEGER NOT NULL DEFAULT 0,
    opening_hours TEXT NOT NULL DEFAULT '[]',
    is_deleted INTEGER NOT NULL DEFAULT 0,
    created_at TEXT,
    updated_at TEXT,
    version INTEGER NOT NULL DEFAULT 0
"#;

const CATEGORY_COLUMNS: &str = r#"
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    is_deleted INTEGER NOT NULL DEFAULT 0,
    created_at TEXT,
    updated_at TEXT,
    version INTEGER NOT NULL DEFAULT 0
"#;

const PRODUCT_COLUMNS: &str = r#"
    id TEXT PRIMARY KEY NOT NULL,
    price REAL NOT NULL DEFAULT 0,
    localized_products TEXT NOT NULL DEFAULT '[]',
    shop_id TEXT,
    category_ids TEXT NOT NULL DEFAULT '[]',
    is_deleted INTEGER NOT NULL DEFAULT 0,
    created_at TEXT,
    updated_at TEXT,
    version INTEGER NOT NULL DEFAULT 0
"#;

/// Tables bootstrapped at start-up, created when missing, named after
/// their aggregate
fn tables() -> [(String, &'static str); 3] {
    [
        (Shop::full_name(), SHOP_COLUMNS),
        (Category::full_name(), CATEGORY_COLUMNS),
        (Product::full_name(), PRODUCT_COLUMNS),
    ]
}

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let conn = connect(db_path.unwrap_or(DEFAULT_DB_FILE)).await?;
    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

async fn connect(db_file: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Opening database {}", normalized);
    Ok(Database::connect(&db_url).await?)
}

async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, columns) in tables() {
        let check_table = format!(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
            table
        );
        let existing = conn
            .query_all(Statement::from_string(DatabaseBackend::Sqlite, check_table))
            .await?;

        if existing.is_empty() {
            tracing::info!("Creating {} table", table);
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                format!("CREATE TABLE {} ({});", table, columns),
            ))
            .await?;
        }
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}
