//! Manufacturer Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use validator::Validate;

use super::{BaseRepository, RepoError, RepoResult, Repository, make_thing};
use crate::db::models::{Manufacturer, ManufacturerCreate, ManufacturerUpdate};

const TABLE: &str = "manufacturer";

#[derive(Clone)]
pub struct ManufacturerRepository {
    base: BaseRepository,
}

impl ManufacturerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

impl Repository<Manufacturer, ManufacturerCreate, ManufacturerUpdate> for ManufacturerRepository {
    async fn find_all(&self) -> RepoResult<Vec<Manufacturer>> {
        let manufacturers: Vec<Manufacturer> = self
            .base
            .db()
            .query("SELECT * FROM manufacturer")
            .await?
            .take(0)?;
        Ok(manufacturers)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Manufacturer>> {
        let manufacturer: Option<Manufacturer> = self.base.db().select((TABLE, id)).await?;
        Ok(manufacturer)
    }

    /// Create a manufacturer. `created` is stamped here and never refreshed.
    async fn create(&self, data: ManufacturerCreate) -> RepoResult<Manufacturer> {
        data.validate()
            .map_err(|e| RepoError::Validation(e.to_string()))?;

        let id = self.base.next_id(TABLE).await?;
        let manufacturer = Manufacturer {
            id: None,
            name: data.name,
            website: data.website,
            contact_email: data.contact_email,
            created: Utc::now().date_naive(),
            description: data.description.unwrap_or_default(),
        };

        let created: Option<Manufacturer> = self
            .base
            .db()
            .create((TABLE, id))
            .content(manufacturer)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create manufacturer".to_string()))
    }

    /// Partial update; `created` is left untouched.
    async fn update(&self, id: i64, data: ManufacturerUpdate) -> RepoResult<Manufacturer> {
        let thing = make_thing(TABLE, id);

        let mut set_parts: Vec<&str> = Vec::new();
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.website.is_some() {
            set_parts.push("website = $website");
        }
        if data.contact_email.is_some() {
            set_parts.push("contact_email = $contact_email");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }

        if set_parts.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Manufacturer {id} not found")));
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(query_str).bind(("thing", thing));
        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.website {
            query = query.bind(("website", v));
        }
        if let Some(v) = data.contact_email {
            query = query.bind(("contact_email", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }

        let mut result = query.await?;
        let manufacturers: Vec<Manufacturer> = result.take(0)?;
        manufacturers
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Manufacturer {id} not found")))
    }

    /// Delete a manufacturer and cascade to its dependent candies.
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let thing = make_thing(TABLE, id);

        // Dependent candies go first
        self.base
            .db()
            .query("DELETE candy WHERE manufacturer = $manufacturer")
            .bind(("manufacturer", thing))
            .await?;

        let deleted: Option<Manufacturer> = self.base.db().delete((TABLE, id)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Manufacturer {id} not found")));
        }
        Ok(())
    }
}
