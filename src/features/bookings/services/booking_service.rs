use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::bookings::dtos::{
    AddItemDto, BookingDetailDto, BookingResponseDto, CreateBookingDto, ListBookingsQuery,
};
use crate::features::bookings::models::{
    confirm_total, line_subtotal, Booking, BookingItemWithName, BookingStatus, MutationRejection,
};

const BOOKING_COLUMNS: &str = "id, customer_id, caterer_id, event_name, event_date, event_time, \
     location, number_of_guests, special_requests, status, total_amount, created_at, updated_at";

/// Service for the booking lifecycle.
///
/// Every mutation runs in a transaction with the booking row locked,
/// so concurrent add-item/confirm/status calls serialize instead of
/// clobbering each other's derived totals.
pub struct BookingService {
    pool: PgPool,
}

impl BookingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a pending booking with no lines and a zero total
    pub async fn create(
        &self,
        customer_id: Uuid,
        dto: CreateBookingDto,
    ) -> Result<BookingResponseDto> {
        if dto.event_date < Utc::now().date_naive() {
            return Err(AppError::Validation(
                "Event date cannot be in the past".to_string(),
            ));
        }

        let caterer_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM caterer_profiles WHERE id = $1)",
        )
        .bind(dto.caterer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        if !caterer_exists {
            return Err(AppError::NotFound(format!(
                "Caterer '{}' not found",
                dto.caterer_id
            )));
        }

        let booking = sqlx::query_as::<_, Booking>(&format!(
            r#"
            INSERT INTO bookings (customer_id, caterer_id, event_name, event_date,
                                  event_time, location, number_of_guests, special_requests)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(customer_id)
        .bind(dto.caterer_id)
        .bind(&dto.event_name)
        .bind(dto.event_date)
        .bind(dto.event_time)
        .bind(&dto.location)
        .bind(dto.number_of_guests)
        .bind(&dto.special_requests)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create booking: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Booking created: id={}, customer={}, caterer={}",
            booking.id,
            customer_id,
            dto.caterer_id
        );

        Ok(booking.into())
    }

    /// Add a line to a pending booking, or increment the quantity of an
    /// existing line for the same menu item. The unit price is copied
    /// from the menu item on first insert and never rewritten.
    pub async fn add_item(
        &self,
        customer_id: Uuid,
        booking_id: Uuid,
        dto: AddItemDto,
    ) -> Result<BookingDetailDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let booking = self
            .lock_customer_pending(&mut tx, customer_id, booking_id)
            .await?;

        let menu_item = sqlx::query_as::<_, (Uuid, Decimal, bool)>(
            "SELECT caterer_id, price, is_available FROM menu_items WHERE id = $1",
        )
        .bind(dto.menu_item_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| {
            AppError::NotFound(format!("Menu item '{}' not found", dto.menu_item_id))
        })?;

        let (item_caterer_id, price, is_available) = menu_item;

        if item_caterer_id != booking.caterer_id {
            return Err(AppError::Validation(
                "Menu item does not belong to this booking's caterer".to_string(),
            ));
        }

        if !is_available {
            return Err(AppError::Validation(
                "Menu item is not available".to_string(),
            ));
        }

        sqlx::query(
            r#"
            INSERT INTO booking_items (booking_id, menu_item_id, quantity, unit_price, subtotal)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (booking_id, menu_item_id) DO UPDATE
            SET quantity = booking_items.quantity + EXCLUDED.quantity,
                subtotal = booking_items.unit_price
                           * (booking_items.quantity + EXCLUDED.quantity)
            "#,
        )
        .bind(booking_id)
        .bind(dto.menu_item_id)
        .bind(dto.quantity)
        .bind(price)
        .bind(line_subtotal(price, dto.quantity))
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to add booking item: {:?}", e);
            AppError::Database(e)
        })?;

        let booking = self.recompute_items_total(&mut tx, booking_id).await?;
        let items = Self::fetch_items(&mut *tx, booking_id).await?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(BookingDetailDto {
            booking: booking.into(),
            items: items.into_iter().map(|i| i.into()).collect(),
        })
    }

    /// Remove a line from a pending booking and recompute the total.
    /// Removing the last line leaves the total at zero.
    pub async fn remove_item(
        &self,
        customer_id: Uuid,
        booking_id: Uuid,
        item_id: Uuid,
    ) -> Result<BookingDetailDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        self.lock_customer_pending(&mut tx, customer_id, booking_id)
            .await?;

        let deleted = sqlx::query("DELETE FROM booking_items WHERE id = $1 AND booking_id = $2")
            .bind(item_id)
            .bind(booking_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        if deleted.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Booking item '{}' not found",
                item_id
            )));
        }

        let booking = self.recompute_items_total(&mut tx, booking_id).await?;
        let items = Self::fetch_items(&mut *tx, booking_id).await?;

        tx.commit().await.map_err(AppError::Database)?;

        Ok(BookingDetailDto {
            booking: booking.into(),
            items: items.into_iter().map(|i| i.into()).collect(),
        })
    }

    /// Customer confirm: price-lock the booking. Requires at least one
    /// line; the total becomes the item total scaled by the guest
    /// count, and the status moves to confirmed so the multiplier can
    /// never be applied twice.
    pub async fn confirm(&self, customer_id: Uuid, booking_id: Uuid) -> Result<BookingResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let booking = self
            .lock_customer_pending(&mut tx, customer_id, booking_id)
            .await?;

        let subtotals = sqlx::query_scalar::<_, Decimal>(
            "SELECT subtotal FROM booking_items WHERE booking_id = $1",
        )
        .bind(booking_id)
        .fetch_all(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let total = confirm_total(&subtotals, booking.number_of_guests).ok_or_else(|| {
            AppError::Conflict("Cannot confirm a booking with no items".to_string())
        })?;

        let updated = sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET status = 'confirmed', total_amount = $2, updated_at = now()
            WHERE id = $1
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(booking_id)
        .bind(total)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to confirm booking: {:?}", e);
            AppError::Database(e)
        })?;

        self.recompute_total_bookings(&mut tx, booking.caterer_id)
            .await?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Booking confirmed: id={}, total={}",
            booking_id,
            updated.total_amount
        );

        Ok(updated.into())
    }

    /// Customer cancel, pending bookings only
    pub async fn cancel(&self, customer_id: Uuid, booking_id: Uuid) -> Result<BookingResponseDto> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        self.lock_customer_pending(&mut tx, customer_id, booking_id)
            .await?;

        let updated = sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET status = 'cancelled', updated_at = now()
            WHERE id = $1
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(booking_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!("Booking cancelled: id={}", booking_id);

        Ok(updated.into())
    }

    /// Caterer-side lifecycle advance. The transition must be legal per
    /// the state machine; entering confirmed or completed recomputes
    /// the caterer's booking counter in the same transaction. Totals
    /// are never rescaled here.
    pub async fn update_status(
        &self,
        caterer_user_id: Uuid,
        booking_id: Uuid,
        new_status: BookingStatus,
    ) -> Result<BookingResponseDto> {
        let profile_id = self.profile_id_for_user(caterer_user_id).await?;

        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let booking = Self::lock_booking(&mut tx, booking_id).await?;

        if booking.caterer_id != profile_id {
            return Err(AppError::Forbidden(
                "You can only manage bookings for your own catering service".to_string(),
            ));
        }

        if booking.status.is_terminal() {
            return Err(AppError::Conflict(format!(
                "Booking is already {}",
                booking.status
            )));
        }

        if !booking.status.can_transition_to(new_status) {
            return Err(AppError::Conflict(format!(
                "Cannot change booking status from '{}' to '{}'",
                booking.status, new_status
            )));
        }

        let updated = sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET status = $2, updated_at = now()
            WHERE id = $1
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(booking_id)
        .bind(new_status)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update booking status: {:?}", e);
            AppError::Database(e)
        })?;

        if matches!(
            new_status,
            BookingStatus::Confirmed | BookingStatus::Completed
        ) {
            self.recompute_total_bookings(&mut tx, profile_id).await?;
        }

        tx.commit().await.map_err(AppError::Database)?;

        tracing::info!(
            "Booking status updated: id={}, status={}",
            booking_id,
            new_status
        );

        Ok(updated.into())
    }

    /// Customer's own bookings, newest first
    pub async fn list_for_customer(
        &self,
        customer_id: Uuid,
        query: &ListBookingsQuery,
    ) -> Result<Vec<BookingResponseDto>> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE customer_id = $1
              AND ($2::booking_status IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#
        ))
        .bind(customer_id)
        .bind(query.status)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(bookings.into_iter().map(|b| b.into()).collect())
    }

    /// Bookings placed with the calling caterer's profile, newest first
    pub async fn list_for_caterer(
        &self,
        caterer_user_id: Uuid,
        query: &ListBookingsQuery,
    ) -> Result<Vec<BookingResponseDto>> {
        let profile_id = self.profile_id_for_user(caterer_user_id).await?;

        let bookings = sqlx::query_as::<_, Booking>(&format!(
            r#"
            SELECT {BOOKING_COLUMNS}
            FROM bookings
            WHERE caterer_id = $1
              AND ($2::booking_status IS NULL OR status = $2)
            ORDER BY created_at DESC
            "#
        ))
        .bind(profile_id)
        .bind(query.status)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(bookings.into_iter().map(|b| b.into()).collect())
    }

    /// Detail with line items, readable by the owning customer, the
    /// owning caterer, or an admin
    pub async fn get_detail(
        &self,
        user: &AuthenticatedUser,
        booking_id: Uuid,
    ) -> Result<BookingDetailDto> {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1"
        ))
        .bind(booking_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Booking '{}' not found", booking_id)))?;

        let allowed = user.is_admin()
            || booking.customer_id == user.id
            || (user.is_caterer() && self.owns_profile(user.id, booking.caterer_id).await?);

        if !allowed {
            return Err(AppError::Forbidden(
                "You do not have access to this booking".to_string(),
            ));
        }

        let items = Self::fetch_items(&self.pool, booking_id).await?;

        Ok(BookingDetailDto {
            booking: booking.into(),
            items: items.into_iter().map(|i| i.into()).collect(),
        })
    }

    async fn lock_booking(
        tx: &mut Transaction<'_, Postgres>,
        booking_id: Uuid,
    ) -> Result<Booking> {
        sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1 FOR UPDATE"
        ))
        .bind(booking_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound(format!("Booking '{}' not found", booking_id)))
    }

    /// Lock the booking row and check the two preconditions shared by
    /// all customer-side mutations: ownership and pending status.
    async fn lock_customer_pending(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer_id: Uuid,
        booking_id: Uuid,
    ) -> Result<Booking> {
        let booking = Self::lock_booking(tx, booking_id).await?;

        match booking.check_customer_mutation(customer_id) {
            Err(MutationRejection::NotOwner) => Err(AppError::Forbidden(
                "You can only modify your own bookings".to_string(),
            )),
            Err(MutationRejection::NotPending(status)) => Err(AppError::Conflict(format!(
                "Booking is {} and can no longer be modified",
                status
            ))),
            Ok(()) => Ok(booking),
        }
    }

    /// While pending, total_amount tracks the plain sum of line
    /// subtotals. The per-guest multiplier only applies at confirm.
    async fn recompute_items_total(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        booking_id: Uuid,
    ) -> Result<Booking> {
        sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET total_amount = (SELECT COALESCE(SUM(subtotal), 0)
                                FROM booking_items WHERE booking_id = $1),
                updated_at = now()
            WHERE id = $1
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(booking_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to recompute booking total: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn recompute_total_bookings(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        caterer_id: Uuid,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE caterer_profiles
            SET total_bookings = (SELECT COUNT(*) FROM bookings
                                  WHERE caterer_id = $1
                                    AND status IN ('confirmed', 'completed'))
            WHERE id = $1
            "#,
        )
        .bind(caterer_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            tracing::error!("Failed to recompute total bookings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(())
    }

    async fn fetch_items<'e, E>(executor: E, booking_id: Uuid) -> Result<Vec<BookingItemWithName>>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query_as::<_, BookingItemWithName>(
            r#"
            SELECT bi.id, bi.booking_id, bi.menu_item_id, mi.name AS menu_item_name,
                   bi.quantity, bi.unit_price, bi.subtotal
            FROM booking_items bi
            JOIN menu_items mi ON mi.id = bi.menu_item_id
            WHERE bi.booking_id = $1
            ORDER BY mi.name ASC
            "#,
        )
        .bind(booking_id)
        .fetch_all(executor)
        .await
        .map_err(AppError::Database)
    }

    async fn profile_id_for_user(&self, user_id: Uuid) -> Result<Uuid> {
        sqlx::query_scalar::<_, Uuid>("SELECT id FROM caterer_profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(|| AppError::NotFound("Caterer profile not found".to_string()))
    }

    async fn owns_profile(&self, user_id: Uuid, caterer_id: Uuid) -> Result<bool> {
        let owns = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM caterer_profiles WHERE id = $1 AND user_id = $2)",
        )
        .bind(caterer_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(owns)
    }
}
