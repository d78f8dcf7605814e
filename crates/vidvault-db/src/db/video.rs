use crate::traits::{MetadataError, MetadataResult, MetadataStore, ScanPage};
use crate::MetadataBackend;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres};
use vidvault_core::VideoRecord;

#[derive(Debug, FromRow)]
struct VideoRow {
    video_id: String,
    url: String,
    content_type: Option<String>,
    title: Option<String>,
}

impl From<VideoRow> for VideoRecord {
    fn from(row: VideoRow) -> Self {
        VideoRecord {
            video_id: row.video_id,
            url: row.url,
            content_type: row.content_type,
            title: row.title,
        }
    }
}

/// Metadata store backed by a Postgres table
///
/// The table name is configurable and interpolated into queries, so it is validated as a
/// plain identifier on construction.
#[derive(Clone)]
pub struct PostgresMetadataStore {
    pool: PgPool,
    table: String,
    page_size: u32,
}

impl PostgresMetadataStore {
    pub fn new(pool: PgPool, table: impl Into<String>, page_size: u32) -> MetadataResult<Self> {
        let table = table.into();
        validate_table_name(&table)?;

        Ok(Self {
            pool,
            table,
            page_size: page_size.max(1),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Create the video table if it does not exist yet
    #[tracing::instrument(skip(self), fields(db.table = %self.table, db.operation = "create"))]
    pub async fn ensure_schema(&self) -> MetadataResult<()> {
        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                video_id TEXT PRIMARY KEY,
                url TEXT NOT NULL,
                content_type TEXT,
                title TEXT,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            self.table
        );

        sqlx::query(&sql)
            .execute(&self.pool)
            .await
            .map_err(|e| MetadataError::Config(e.to_string()))?;

        tracing::info!(table = %self.table, "Metadata table ready");
        Ok(())
    }
}

/// Accept `[A-Za-z_][A-Za-z0-9_]*` up to Postgres' 63-byte identifier limit.
fn validate_table_name(name: &str) -> MetadataResult<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if valid_start && valid_rest && name.len() <= 63 {
        Ok(())
    } else {
        Err(MetadataError::Config(format!(
            "Invalid table name: {:?}",
            name
        )))
    }
}

#[async_trait]
impl MetadataStore for PostgresMetadataStore {
    #[tracing::instrument(
        skip(self, record),
        fields(db.table = %self.table, db.operation = "upsert", db.record_id = %record.video_id)
    )]
    async fn put(&self, record: &VideoRecord) -> MetadataResult<()> {
        let sql = format!(
            r#"
            INSERT INTO {} (video_id, url, content_type, title)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (video_id) DO UPDATE
            SET url = EXCLUDED.url,
                content_type = EXCLUDED.content_type,
                title = EXCLUDED.title
            "#,
            self.table
        );

        sqlx::query(&sql)
            .bind(&record.video_id)
            .bind(&record.url)
            .bind(&record.content_type)
            .bind(&record.title)
            .execute(&self.pool)
            .await
            .map_err(|e| MetadataError::Write(e.to_string()))?;

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(db.table = %self.table, db.operation = "select"))]
    async fn scan_page(&self, start_after: Option<&str>, limit: u32) -> MetadataResult<ScanPage> {
        let limit = limit.max(1);
        let sql = format!(
            r#"
            SELECT video_id, url, content_type, title
            FROM {}
            WHERE $1::TEXT IS NULL OR video_id > $1
            ORDER BY video_id ASC
            LIMIT $2
            "#,
            self.table
        );

        let rows = sqlx::query_as::<Postgres, VideoRow>(&sql)
            .bind(start_after)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| MetadataError::Read(e.to_string()))?;

        let records: Vec<VideoRecord> = rows.into_iter().map(VideoRecord::from).collect();
        let next_cursor = if records.len() == limit as usize {
            records.last().map(|record| record.video_id.clone())
        } else {
            None
        };

        Ok(ScanPage {
            records,
            next_cursor,
        })
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    async fn ping(&self) -> MetadataResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| MetadataError::Read(e.to_string()))
    }

    fn backend_type(&self) -> MetadataBackend {
        MetadataBackend::Postgres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_identifiers() {
        assert!(validate_table_name("videos").is_ok());
        assert!(validate_table_name("_video_metadata_2").is_ok());
    }

    #[test]
    fn rejects_injection_and_odd_names() {
        let too_long = "v".repeat(64);
        for name in [
            "",
            "1videos",
            "videos; DROP TABLE users",
            "public.videos",
            "vid-eos",
            too_long.as_str(),
        ] {
            assert!(
                matches!(validate_table_name(name), Err(MetadataError::Config(_))),
                "{name:?} should be rejected"
            );
        }
    }

    #[test]
    fn row_converts_to_record() {
        let row = VideoRow {
            video_id: "a.mp4".to_string(),
            url: "https://bucket.example/a.mp4".to_string(),
            content_type: None,
            title: Some("clip".to_string()),
        };
        let record = VideoRecord::from(row);
        assert_eq!(record.video_id, "a.mp4");
        assert_eq!(record.title.as_deref(), Some("clip"));
        assert!(record.content_type.is_none());
    }
}
