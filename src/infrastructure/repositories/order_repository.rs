//! Order Repository Implementation
//!
//! PostgreSQL implementation of the OrderRepository trait.
//! Order lines are stored as a JSONB array on the order row.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{Order, OrderLine, OrderRepository, OrderStatus};
use crate::shared::error::AppError;

const ORDER_COLUMNS: &str = "id, user_id, business_id, lines, subtotal_cents, delivery_fee_cents, \
     total_cents, status, notes, created_at, updated_at";

/// Database row representation matching the orders table schema.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    user_id: Uuid,
    business_id: String,
    lines: Json<Vec<OrderLine>>,
    subtotal_cents: i64,
    delivery_fee_cents: i64,
    total_cents: i64,
    status: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    /// Convert database row to domain Order entity.
    fn into_order(self) -> Result<Order, AppError> {
        let status = OrderStatus::parse(&self.status).ok_or_else(|| {
            AppError::Internal(format!(
                "Order {} has unknown status '{}'",
                self.id, self.status
            ))
        })?;

        Ok(Order {
            id: self.id,
            user_id: self.user_id,
            business_id: self.business_id,
            lines: self.lines.0,
            subtotal_cents: self.subtotal_cents,
            delivery_fee_cents: self.delivery_fee_cents,
            total_cents: self.total_cents,
            status,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// PostgreSQL order repository implementation.
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new PgOrderRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, order: &Order) -> Result<Order, AppError> {
        let query = format!(
            r#"
            INSERT INTO orders ({ORDER_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, OrderRow>(&query)
            .bind(order.id)
            .bind(order.user_id)
            .bind(&order.business_id)
            .bind(Json(&order.lines))
            .bind(order.subtotal_cents)
            .bind(order.delivery_fee_cents)
            .bind(order.total_cents)
            .bind(order.status.as_str())
            .bind(&order.notes)
            .bind(order.created_at)
            .bind(order.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db) = &e {
                    if db.is_unique_violation() {
                        return AppError::Conflict(format!("Order {} already exists", order.id));
                    }
                }
                AppError::Database(e)
            })?;

        row.into_order()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, AppError> {
        let query = format!("SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1");

        let row = sqlx::query_as::<_, OrderRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(OrderRow::into_order).transpose()
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, AppError> {
        let query = format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );

        let rows = sqlx::query_as::<_, OrderRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(OrderRow::into_order).collect()
    }

    async fn update_status(
        &self,
        id: Uuid,
        from: OrderStatus,
        to: OrderStatus,
    ) -> Result<Option<Order>, AppError> {
        let query = format!(
            r#"
            UPDATE orders
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND status = $2
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, OrderRow>(&query)
            .bind(id)
            .bind(from.as_str())
            .bind(to.as_str())
            .fetch_optional(&self.pool)
            .await?;

        row.map(OrderRow::into_order).transpose()
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
