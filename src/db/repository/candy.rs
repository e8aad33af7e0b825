//! Candy Repository

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use surrealdb::sql::Thing;

use super::{BaseRepository, RepoError, RepoResult, Repository, make_thing};
use crate::db::models::{Candy, CandyCreate, CandyUpdate};

const TABLE: &str = "candy";
const MANUFACTURER_TABLE: &str = "manufacturer";

#[derive(Clone)]
pub struct CandyRepository {
    base: BaseRepository,
}

impl CandyRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find candies for the admin browse view: optional case-insensitive
    /// substring match on name or brand, optional manufacturer filter.
    /// No ordering guarantee.
    pub async fn search(
        &self,
        text: Option<&str>,
        manufacturer: Option<i64>,
    ) -> RepoResult<Vec<Candy>> {
        let mut conditions: Vec<&str> = Vec::new();
        if text.is_some() {
            conditions.push(
                "(string::lowercase(name) CONTAINS string::lowercase($q) \
                 OR string::lowercase(brand) CONTAINS string::lowercase($q))",
            );
        }
        if manufacturer.is_some() {
            conditions.push("manufacturer = $manufacturer");
        }

        let query_str = if conditions.is_empty() {
            "SELECT * FROM candy".to_string()
        } else {
            format!("SELECT * FROM candy WHERE {}", conditions.join(" AND "))
        };

        let mut query = self.base.db().query(query_str);
        if let Some(q) = text {
            query = query.bind(("q", q.to_string()));
        }
        if let Some(m) = manufacturer {
            query = query.bind(("manufacturer", make_thing(MANUFACTURER_TABLE, m)));
        }

        let candies: Vec<Candy> = query.await?.take(0)?;
        Ok(candies)
    }

    /// Set `weight = 1000` on every selected record in one statement and
    /// return the affected count.
    ///
    /// This bypasses the save path on purpose: no form-level range check is
    /// re-applied and `created` is not refreshed.
    pub async fn reset_weight(&self, ids: &[i64]) -> RepoResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }
        let things: Vec<Thing> = ids.iter().map(|id| make_thing(TABLE, *id)).collect();
        let mut result = self
            .base
            .db()
            .query("UPDATE candy SET weight = 1000 WHERE id IN $ids RETURN AFTER")
            .bind(("ids", things))
            .await?;
        let updated: Vec<Candy> = result.take(0)?;

        tracing::info!(updated = updated.len(), "Bulk weight reset completed");
        Ok(updated.len())
    }
}

impl Repository<Candy, CandyCreate, CandyUpdate> for CandyRepository {
    async fn find_all(&self) -> RepoResult<Vec<Candy>> {
        let candies: Vec<Candy> = self.base.db().query("SELECT * FROM candy").await?.take(0)?;
        Ok(candies)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Candy>> {
        let candy: Option<Candy> = self.base.db().select((TABLE, id)).await?;
        Ok(candy)
    }

    /// Create a new candy. Range constraints are the creation form's
    /// responsibility; this path stores whatever it is given.
    async fn create(&self, data: CandyCreate) -> RepoResult<Candy> {
        let id = self.base.next_id(TABLE).await?;
        let candy = Candy {
            id: None,
            name: data.name,
            brand: data.brand,
            flavor: data.flavor,
            price: data.price.unwrap_or(0.0),
            weight: data.weight.unwrap_or(0),
            created: Utc::now().date_naive(),
            manufacturer: data.manufacturer.map(|m| make_thing(MANUFACTURER_TABLE, m)),
        };

        let created: Option<Candy> = self.base.db().create((TABLE, id)).content(candy).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create candy".to_string()))
    }

    /// Partial update. Mirrors a model save: `created` is refreshed along
    /// with the changed fields.
    async fn update(&self, id: i64, data: CandyUpdate) -> RepoResult<Candy> {
        let thing = make_thing(TABLE, id);

        let mut set_parts: Vec<&str> = vec!["created = $created"];
        if data.name.is_some() {
            set_parts.push("name = $name");
        }
        if data.brand.is_some() {
            set_parts.push("brand = $brand");
        }
        if data.flavor.is_some() {
            set_parts.push("flavor = $flavor");
        }
        if data.price.is_some() {
            set_parts.push("price = $price");
        }
        if data.weight.is_some() {
            set_parts.push("weight = $weight");
        }
        if data.manufacturer.is_some() {
            set_parts.push("manufacturer = $manufacturer");
        }

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self
            .base
            .db()
            .query(query_str)
            .bind(("thing", thing))
            .bind(("created", Utc::now().date_naive()));
        if let Some(v) = data.name {
            query = query.bind(("name", v));
        }
        if let Some(v) = data.brand {
            query = query.bind(("brand", v));
        }
        if let Some(v) = data.flavor {
            query = query.bind(("flavor", v));
        }
        if let Some(v) = data.price {
            query = query.bind(("price", v));
        }
        if let Some(v) = data.weight {
            query = query.bind(("weight", v));
        }
        if let Some(v) = data.manufacturer {
            query = query.bind(("manufacturer", make_thing(MANUFACTURER_TABLE, v)));
        }

        let mut result = query.await?;
        let candies: Vec<Candy> = result.take(0)?;
        candies
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound(format!("Candy {id} not found")))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let deleted: Option<Candy> = self.base.db().delete((TABLE, id)).await?;
        if deleted.is_none() {
            return Err(RepoError::NotFound(format!("Candy {id} not found")));
        }
        Ok(())
    }
}
