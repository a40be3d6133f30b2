//! In-memory storage - used when no database is configured, and in tests.
//!
//! Mirrors the relational schema closely enough for the API to behave the
//! same: ids are sequential per table, user references are checked on every
//! write, and deleting a user removes the rows that point at it.
//! Note: Data is lost on process restart.

use std::collections::BTreeMap;
use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use vitae_core::Resource;
use vitae_core::domain::{AcademicTraining, Message, Post, Skill, User};
use vitae_core::error::RepoError;
use vitae_core::ports::Repository;

/// A stored row without its id.
#[derive(Debug, Clone)]
pub struct Row<F> {
    pub fields: F,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One table: rows keyed by id, plus the identity counter.
pub struct Table<F> {
    rows: BTreeMap<i32, Row<F>>,
    last_id: i32,
}

impl<F> Default for Table<F> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

/// Every table in the store.
#[derive(Default)]
pub struct Tables {
    users: Table<<User as Resource>::Fields>,
    posts: Table<<Post as Resource>::Fields>,
    messages: Table<<Message as Resource>::Fields>,
    skills: Table<<Skill as Resource>::Fields>,
    academic_trainings: Table<<AcademicTraining as Resource>::Fields>,
}

/// A resource the in-memory store knows how to keep.
pub trait StoredResource: Resource {
    const TABLE: &'static str;

    fn table(tables: &Tables) -> &Table<Self::Fields>;

    fn table_mut(tables: &mut Tables) -> &mut Table<Self::Fields>;

    fn assemble(id: i32, row: &Row<Self::Fields>) -> Self;

    /// User ids this row points at.
    fn user_refs(_fields: &Self::Fields) -> Vec<i32> {
        Vec::new()
    }

    /// Remove dependent rows after row `id` is deleted.
    fn cascade(_tables: &mut Tables, _id: i32) {}
}

/// All tables behind one async lock; each write holds the write lock for its
/// whole check-and-mutate.
#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn repository<R: StoredResource>(self: &Arc<Self>) -> InMemoryRepository<R> {
        InMemoryRepository::new(Arc::clone(self))
    }
}

/// In-memory repository for one resource type.
pub struct InMemoryRepository<R> {
    store: Arc<InMemoryStore>,
    _resource: PhantomData<fn() -> R>,
}

impl<R> InMemoryRepository<R> {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            store,
            _resource: PhantomData,
        }
    }
}

#[async_trait]
impl<R: StoredResource> Repository<R> for InMemoryRepository<R> {
    async fn find_all(&self) -> Result<Vec<R>, RepoError> {
        let tables = self.store.tables.read().await;

        Ok(R::table(&tables)
            .rows
            .iter()
            .map(|(id, row)| R::assemble(*id, row))
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<R>, RepoError> {
        let tables = self.store.tables.read().await;

        Ok(R::table(&tables)
            .rows
            .get(&id)
            .map(|row| R::assemble(id, row)))
    }

    async fn insert(&self, fields: R::Fields) -> Result<R, RepoError> {
        let mut tables = self.store.tables.write().await;
        check_user_refs::<R>(&tables, &fields)?;

        let table = R::table_mut(&mut tables);
        table.last_id += 1;
        let id = table.last_id;

        let now = Utc::now();
        let row = Row {
            fields,
            created_at: now,
            updated_at: now,
        };
        let record = R::assemble(id, &row);
        table.rows.insert(id, row);

        tracing::debug!(table = R::TABLE, id, "Row inserted");
        Ok(record)
    }

    async fn update(&self, id: i32, fields: R::Fields) -> Result<Option<R>, RepoError> {
        let mut tables = self.store.tables.write().await;
        if !R::table(&tables).rows.contains_key(&id) {
            return Ok(None);
        }
        check_user_refs::<R>(&tables, &fields)?;

        let Some(row) = R::table_mut(&mut tables).rows.get_mut(&id) else {
            return Ok(None);
        };
        row.fields = fields;
        row.updated_at = advance(row.updated_at);

        tracing::debug!(table = R::TABLE, id, "Row updated");
        Ok(Some(R::assemble(id, row)))
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if R::table_mut(&mut tables).rows.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        R::cascade(&mut tables, id);

        tracing::debug!(table = R::TABLE, id, "Row deleted");
        Ok(())
    }
}

fn check_user_refs<R: StoredResource>(tables: &Tables, fields: &R::Fields) -> Result<(), RepoError> {
    match R::user_refs(fields)
        .into_iter()
        .find(|user_id| !tables.users.rows.contains_key(user_id))
    {
        Some(user_id) => Err(RepoError::Constraint(format!(
            "insert or update on table \"{}\" violates foreign key constraint: key (user id)=({}) is not present in table \"users\"",
            R::TABLE,
            user_id
        ))),
        None => Ok(()),
    }
}

/// `updated_at` must move forward even if the clock has not.
fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    Utc::now().max(previous + Duration::microseconds(1))
}

impl StoredResource for User {
    const TABLE: &'static str = "users";

    fn table(tables: &Tables) -> &Table<Self::Fields> {
        &tables.users
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self::Fields> {
        &mut tables.users
    }

    fn assemble(id: i32, row: &Row<Self::Fields>) -> Self {
        let fields = row.fields.clone();
        Self {
            id,
            full_name: fields.full_name,
            birth_date: fields.birth_date,
            short_description: fields.short_description,
            address: fields.address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn cascade(tables: &mut Tables, id: i32) {
        tables.posts.rows.retain(|_, row| row.fields.user_id != id);
        tables.skills.rows.retain(|_, row| row.fields.user_id != id);
        tables
            .academic_trainings
            .rows
            .retain(|_, row| row.fields.user_id != id);
        tables
            .messages
            .rows
            .retain(|_, row| row.fields.to_user != id && row.fields.from_user != id);
    }
}

impl StoredResource for Post {
    const TABLE: &'static str = "posts";

    fn table(tables: &Tables) -> &Table<Self::Fields> {
        &tables.posts
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self::Fields> {
        &mut tables.posts
    }

    fn assemble(id: i32, row: &Row<Self::Fields>) -> Self {
        let fields = row.fields.clone();
        Self {
            id,
            user_id: fields.user_id,
            title: fields.title,
            content: fields.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn user_refs(fields: &Self::Fields) -> Vec<i32> {
        vec![fields.user_id]
    }
}

impl StoredResource for Message {
    const TABLE: &'static str = "messages";

    fn table(tables: &Tables) -> &Table<Self::Fields> {
        &tables.messages
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self::Fields> {
        &mut tables.messages
    }

    fn assemble(id: i32, row: &Row<Self::Fields>) -> Self {
        let fields = row.fields.clone();
        Self {
            id,
            to_user: fields.to_user,
            from_user: fields.from_user,
            content: fields.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn user_refs(fields: &Self::Fields) -> Vec<i32> {
        vec![fields.to_user, fields.from_user]
    }
}

impl StoredResource for Skill {
    const TABLE: &'static str = "skills";

    fn table(tables: &Tables) -> &Table<Self::Fields> {
        &tables.skills
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self::Fields> {
        &mut tables.skills
    }

    fn assemble(id: i32, row: &Row<Self::Fields>) -> Self {
        let fields = row.fields.clone();
        Self {
            id,
            user_id: fields.user_id,
            content: fields.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn user_refs(fields: &Self::Fields) -> Vec<i32> {
        vec![fields.user_id]
    }
}

impl StoredResource for AcademicTraining {
    const TABLE: &'static str = "academic_trainings";

    fn table(tables: &Tables) -> &Table<Self::Fields> {
        &tables.academic_trainings
    }

    fn table_mut(tables: &mut Tables) -> &mut Table<Self::Fields> {
        &mut tables.academic_trainings
    }

    fn assemble(id: i32, row: &Row<Self::Fields>) -> Self {
        let fields = row.fields.clone();
        Self {
            id,
            user_id: fields.user_id,
            title: fields.title,
            institution: fields.institution,
            completed: fields.completed,
            start_year: fields.start_year,
            end_year: Some(fields.end_year),
            certificate_url: fields.certificate_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    fn user_refs(fields: &Self::Fields) -> Vec<i32> {
        vec![fields.user_id]
    }
}
