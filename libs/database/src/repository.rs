//! Shared repository building blocks for SeaORM-backed domain repositories.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, TransactionTrait,
};
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

enum UowState {
    /// Mutations run inside a database transaction.
    Transaction(DatabaseTransaction),
    /// No transaction backing; mutations are only counted. Used by in-memory
    /// repositories and tests.
    Detached,
}

/// A single-commit handle for a batch of mutations.
///
/// Obtained from [`UnitOfWork::begin`] (or [`UnitOfWork::detached`] for
/// non-transactional stores). Repositories stage mutations against it and the
/// caller finishes with [`UnitOfWork::complete`], which commits and returns
/// the number of affected rows. Dropping an uncompleted unit of work rolls
/// the transaction back.
pub struct UnitOfWork {
    state: UowState,
    rows: AtomicU64,
}

impl UnitOfWork {
    /// Open a transactional unit of work on the given connection.
    pub async fn begin(db: &DatabaseConnection) -> Result<Self, DbErr> {
        let txn = db.begin().await?;
        Ok(Self {
            state: UowState::Transaction(txn),
            rows: AtomicU64::new(0),
        })
    }

    /// A unit of work with no transaction backing it.
    pub fn detached() -> Self {
        Self {
            state: UowState::Detached,
            rows: AtomicU64::new(0),
        }
    }

    /// The backing transaction, if any.
    pub fn transaction(&self) -> Option<&DatabaseTransaction> {
        match &self.state {
            UowState::Transaction(txn) => Some(txn),
            UowState::Detached => None,
        }
    }

    /// Record rows affected by a staged mutation.
    pub fn track(&self, rows: u64) {
        self.rows.fetch_add(rows, Ordering::Relaxed);
    }

    /// Commit the transaction and return the total affected row count.
    pub async fn complete(self) -> Result<u64, DbErr> {
        if let UowState::Transaction(txn) = self.state {
            txn.commit().await?;
        }
        Ok(self.rows.into_inner())
    }
}

/// Shared SeaORM access helpers for Postgres repository implementations.
///
/// Holds the pooled connection and routes staged mutations through a
/// [`UnitOfWork`], so every repository commits the same way.
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// The underlying connection, for read queries.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Open a unit of work for a batch of mutations.
    pub async fn begin(&self) -> Result<UnitOfWork, DbErr> {
        UnitOfWork::begin(&self.db).await
    }

    /// Stage an insert inside the unit of work.
    pub async fn insert<A>(&self, uow: &UnitOfWork, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let inserted = match uow.transaction() {
            Some(txn) => model.insert(txn).await?,
            None => model.insert(&self.db).await?,
        };
        uow.track(1);
        Ok(inserted)
    }

    /// Stage an update inside the unit of work.
    pub async fn update<A>(&self, uow: &UnitOfWork, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        let updated = match uow.transaction() {
            Some(txn) => model.update(txn).await?,
            None => model.update(&self.db).await?,
        };
        uow.track(1);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_detached_unit_of_work_counts_rows() {
        let uow = UnitOfWork::detached();
        uow.track(1);
        uow.track(2);
        let affected = uow.complete().await.unwrap();
        assert_eq!(affected, 3);
    }

    #[tokio::test]
    async fn test_detached_unit_of_work_has_no_transaction() {
        let uow = UnitOfWork::detached();
        assert!(uow.transaction().is_none());
        assert_eq!(uow.complete().await.unwrap(), 0);
    }
}
