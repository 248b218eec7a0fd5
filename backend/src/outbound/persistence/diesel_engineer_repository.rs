//! PostgreSQL-backed `EngineerRepository` implementation using Diesel ORM.
//!
//! This adapter translates between Diesel rows and domain engineers. It holds
//! no business rules: not-found handling and the empty-collection policy live
//! in the domain service.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{EngineerRepository, EngineerRepositoryError};
use crate::domain::{Engineer, EngineerDraft, EngineerId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{EngineerRow, EngineerRowWithId, EngineerUpdate, NewEngineerRow};
use super::pool::{DbPool, PoolError};
use super::schema::software_engineer;

/// Diesel-backed implementation of the `EngineerRepository` port.
#[derive(Clone)]
pub struct DieselEngineerRepository {
    pool: DbPool,
}

impl DieselEngineerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EngineerRepositoryError {
    map_basic_pool_error(error, EngineerRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EngineerRepositoryError {
    map_basic_diesel_error(
        error,
        EngineerRepositoryError::query,
        EngineerRepositoryError::connection,
    )
}

#[async_trait]
impl EngineerRepository for DieselEngineerRepository {
    async fn find_all(&self) -> Result<Vec<Engineer>, EngineerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<EngineerRow> = software_engineer::table
            .order(software_engineer::id.asc())
            .select(EngineerRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Engineer::from).collect())
    }

    async fn find_by_id(
        &self,
        id: EngineerId,
    ) -> Result<Option<Engineer>, EngineerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<EngineerRow> = software_engineer::table
            .filter(software_engineer::id.eq(id.get()))
            .select(EngineerRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Engineer::from))
    }

    async fn exists_by_id(&self, id: EngineerId) -> Result<bool, EngineerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(exists(
            software_engineer::table.filter(software_engineer::id.eq(id.get())),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn save(&self, draft: EngineerDraft) -> Result<Engineer, EngineerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: EngineerRow = match draft.id {
            None => {
                diesel::insert_into(software_engineer::table)
                    .values(NewEngineerRow {
                        name: &draft.name,
                        tech_stack: &draft.tech_stack,
                    })
                    .returning(EngineerRow::as_returning())
                    .get_result(&mut conn)
                    .await
            }
            Some(id) => {
                diesel::insert_into(software_engineer::table)
                    .values(EngineerRowWithId {
                        id: id.get(),
                        name: &draft.name,
                        tech_stack: &draft.tech_stack,
                    })
                    .on_conflict(software_engineer::id)
                    .do_update()
                    .set(EngineerUpdate {
                        name: &draft.name,
                        tech_stack: &draft.tech_stack,
                    })
                    .returning(EngineerRow::as_returning())
                    .get_result(&mut conn)
                    .await
            }
        }
        .map_err(map_diesel_error)?;
        Ok(row.into())
    }

    async fn delete_by_id(&self, id: EngineerId) -> Result<(), EngineerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(software_engineer::table.filter(software_engineer::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete_all(&self) -> Result<usize, EngineerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(software_engineer::table)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
