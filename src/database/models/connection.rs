use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(FromRow, Debug, Clone)]
pub struct Connection {
    pub connection_id: i64,
    pub connection_name: String, // integration name chosen by the operator (crm/billing)
    pub enabled: bool,
    pub sync_count: i64,
    pub last_synced_at: Option<NaiveDateTime>,
    pub connection_created_at: NaiveDateTime,
}
