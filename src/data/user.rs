//! User repository: lazy provisioning, usage recording, resets and bans.
//!
//! Usage writes go through [`UserRepository::record_usage`], which performs a
//! compare-and-set on the usage count inside a transaction so two concurrent
//! dispenses for the same user cannot both pass the quota check.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use crate::{error::AppError, model::user::DispenseUser, util::parse::count_to_db};

pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the user's usage state, creating a zeroed record if none exists.
    ///
    /// The server must already exist (see `ServerRepository::ensure`).
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    ///
    /// # Returns
    /// - `Ok(DispenseUser)` - Existing or newly created user with their dedupe set
    /// - `Err(AppError::DbErr)` - Database error during insert or read
    pub async fn ensure(&self, server_id: u64, user_id: u64) -> Result<DispenseUser, AppError> {
        if let Some(user) = self.find(server_id, user_id).await? {
            return Ok(user);
        }

        tracing::debug!(
            "User doesn't exist, creating user for {} in {}",
            user_id,
            server_id
        );

        let inserted = entity::server_user::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            user_id: ActiveValue::Set(user_id.to_string()),
            usage_count: ActiveValue::Set(0),
            banned: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await;

        match inserted {
            Ok(entity) => DispenseUser::from_entity(entity, Vec::new()),
            // A concurrent request created the row first; read the winner's record.
            Err(err) => self.find(server_id, user_id).await?.ok_or(AppError::from(err)),
        }
    }

    /// Finds a user and their dedupe set without creating them.
    pub async fn find(
        &self,
        server_id: u64,
        user_id: u64,
    ) -> Result<Option<DispenseUser>, AppError> {
        let Some(entity) = find_entity(self.db, server_id, user_id).await? else {
            return Ok(None);
        };

        let used = entity::prelude::UsedDomain::find()
            .filter(entity::used_domain::Column::ServerUserId.eq(entity.id))
            .order_by_asc(entity::used_domain::Column::Id)
            .all(self.db)
            .await?;

        DispenseUser::from_entity(entity, used).map(Some)
    }

    /// Records a dispensed domain and increments the user's usage count.
    ///
    /// The new count is derived from `observed_count`, the value the caller read when it
    /// checked the quota. The update only applies while the stored count still equals
    /// that value; otherwise another dispense committed in between and the whole write is
    /// rolled back.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID
    /// - `user_id` - Discord user ID
    /// - `observed_count` - Usage count read during the eligibility check
    /// - `domain` - Raw stored domain name to append to the dedupe set
    ///
    /// # Returns
    /// - `Ok(u32)` - The new usage count (`observed_count + 1`)
    /// - `Err(AppError::UsageConflict)` - The stored count no longer matched
    /// - `Err(AppError::NotFound)` - The user record does not exist
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn record_usage(
        &self,
        server_id: u64,
        user_id: u64,
        observed_count: u32,
        domain: &str,
    ) -> Result<u32, AppError> {
        let new_count = observed_count + 1;
        let txn = self.db.begin().await?;

        let Some(user) = find_entity(&txn, server_id, user_id).await? else {
            return Err(AppError::NotFound(format!(
                "User {} doesn't exist in server {}.",
                user_id, server_id
            )));
        };

        let result = entity::prelude::ServerUser::update_many()
            .col_expr(
                entity::server_user::Column::UsageCount,
                Expr::value(count_to_db(new_count)),
            )
            .filter(entity::server_user::Column::Id.eq(user.id))
            .filter(entity::server_user::Column::UsageCount.eq(count_to_db(observed_count)))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::UsageConflict { server_id, user_id });
        }

        entity::used_domain::ActiveModel {
            server_user_id: ActiveValue::Set(user.id),
            domain_name: ActiveValue::Set(domain.to_string()),
            used_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(new_count)
    }

    /// Zeroes one user's usage count, optionally clearing their dedupe set.
    ///
    /// # Returns
    /// - `Ok(true)` - The user existed and was reset
    /// - `Ok(false)` - No record exists for the user; nothing to reset
    pub async fn reset_user(
        &self,
        server_id: u64,
        user_id: u64,
        reset_dupes: bool,
    ) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(user) = find_entity(&txn, server_id, user_id).await? else {
            return Ok(false);
        };

        entity::prelude::ServerUser::update_many()
            .col_expr(entity::server_user::Column::UsageCount, Expr::value(0))
            .filter(entity::server_user::Column::Id.eq(user.id))
            .exec(&txn)
            .await?;

        if reset_dupes {
            entity::prelude::UsedDomain::delete_many()
                .filter(entity::used_domain::Column::ServerUserId.eq(user.id))
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Zeroes every user's usage count in a server, optionally clearing dedupe sets.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of user records reset
    pub async fn reset_all(&self, server_id: u64, reset_dupes: bool) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::ServerUser::update_many()
            .col_expr(entity::server_user::Column::UsageCount, Expr::value(0))
            .filter(entity::server_user::Column::ServerId.eq(server_id.to_string()))
            .exec(&txn)
            .await?;

        if reset_dupes {
            let user_ids: Vec<i32> = entity::prelude::ServerUser::find()
                .select_only()
                .column(entity::server_user::Column::Id)
                .filter(entity::server_user::Column::ServerId.eq(server_id.to_string()))
                .into_tuple()
                .all(&txn)
                .await?;

            if !user_ids.is_empty() {
                entity::prelude::UsedDomain::delete_many()
                    .filter(entity::used_domain::Column::ServerUserId.is_in(user_ids))
                    .exec(&txn)
                    .await?;
            }
        }

        txn.commit().await?;

        Ok(result.rows_affected)
    }

    /// Sets the banned flag on an existing user.
    pub async fn set_banned(
        &self,
        server_id: u64,
        user_id: u64,
        banned: bool,
    ) -> Result<(), AppError> {
        entity::prelude::ServerUser::update_many()
            .col_expr(entity::server_user::Column::Banned, Expr::value(banned))
            .filter(entity::server_user::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::server_user::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }
}

async fn find_entity<C: ConnectionTrait>(
    db: &C,
    server_id: u64,
    user_id: u64,
) -> Result<Option<entity::server_user::Model>, DbErr> {
    entity::prelude::ServerUser::find()
        .filter(entity::server_user::Column::ServerId.eq(server_id.to_string()))
        .filter(entity::server_user::Column::UserId.eq(user_id.to_string()))
        .one(db)
        .await
}
