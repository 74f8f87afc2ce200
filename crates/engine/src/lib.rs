use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};

pub use entry::{DEFAULT_TAX_RATE, Entry, NewEntry, tax_amount};
pub use error::EngineError;
pub use totals::{Totals, totals};

pub mod entry;
mod error;
mod totals;
mod util;
pub mod validation;

type ResultEngine<T> = Result<T, EngineError>;

/// The ledger store.
///
/// Holds a pooled database connection; every operation is a single
/// statement, so the database serializes concurrent writers and assigns
/// distinct ids.
#[derive(Debug, Clone)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Round the inputs, derive the tax and persist a new entry.
    ///
    /// Amounts are not validated here; see [`validation`].
    pub async fn create(&self, new: NewEntry) -> ResultEngine<Entry> {
        let model = entry::ActiveModel::from(&new)
            .insert(&self.database)
            .await?;
        tracing::debug!("created entry {}", model.id);
        Ok(model.into())
    }

    /// Return every entry ordered by id.
    pub async fn list_all(&self) -> ResultEngine<Vec<Entry>> {
        let models = entry::Entity::find()
            .order_by_asc(entry::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Entry::from).collect())
    }

    pub async fn get(&self, id: i32) -> ResultEngine<Option<Entry>> {
        let model = entry::Entity::find_by_id(id).one(&self.database).await?;
        Ok(model.map(Entry::from))
    }

    /// Delete the entry with `id`.
    ///
    /// Returns `false` when no such entry exists; that is not an error.
    pub async fn delete(&self, id: i32) -> ResultEngine<bool> {
        let res = entry::Entity::delete_by_id(id)
            .exec(&self.database)
            .await?;
        Ok(res.rows_affected > 0)
    }

    /// Delete every entry, returning how many were removed.
    pub async fn clear(&self) -> ResultEngine<u64> {
        let res = entry::Entity::delete_many().exec(&self.database).await?;
        Ok(res.rows_affected)
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
