use crate::data_model::availability::Availability;
use crate::data_model::mentorship_request::{MentorshipRequest, RequestStatus};
use crate::data_model::session::Session;
use crate::data_model::user::{Role, User};
use crate::data_model::{unset_id, Entity};
use crate::state::store::{Store, StoreError};
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::{doc, Document};
use mongodb::options::{FindOneOptions, IndexOptions, ReplaceOptions};
use mongodb::{Client, Collection, IndexModel};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// MongoDB-backed store: one collection per entity, records addressed by a
/// numeric `id` field. Id high-water marks are tracked in memory and seeded
/// from the database at connect time.
#[derive(Debug, Clone)]
pub struct StoreMongo {
    url: String,
    db_name: String,
    counters: HashMap<&'static str, u64>,
    client: Option<Client>,
}

impl StoreMongo {
    pub fn new(url: &str, db_name: &str) -> Self {
        Self {
            url: url.to_string(),
            db_name: db_name.to_string(),
            counters: HashMap::new(),
            client: None,
        }
    }

    fn coll<T>(&self) -> Result<Collection<T>, StoreError>
    where
        T: Entity,
    {
        let client = self.client.as_ref().ok_or(StoreError::NotConnected)?;
        Ok(client.database(&self.db_name).collection(T::COLLECTION))
    }

    async fn prepare<T>(&mut self) -> Result<(), StoreError>
    where
        T: Entity + Serialize + DeserializeOwned + Unpin + Send + Sync,
    {
        let coll = self.coll::<T>()?;
        let index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        coll.create_index(index, None).await?;

        let opts = FindOneOptions::builder().sort(doc! { "id": -1 }).build();
        let top = coll.find_one(None, opts).await?;
        let count = top.map(|itm| itm.id()).unwrap_or(0);
        self.counters.insert(T::COLLECTION, count);
        info!("Collection {}: {} ids in use", T::COLLECTION, count);
        Ok(())
    }

    fn next_id(&mut self, collection: &'static str) -> u64 {
        let cnt = self.counters.entry(collection).or_insert(0);
        *cnt += 1;
        *cnt
    }

    async fn find_one_doc<T>(&self, filter: Document) -> Result<Option<T>, StoreError>
    where
        T: Entity + Serialize + DeserializeOwned + Unpin + Send + Sync,
    {
        Ok(self.coll::<T>()?.find_one(filter, None).await?)
    }

    async fn find_docs<T>(&self, filter: Document) -> Result<Vec<T>, StoreError>
    where
        T: Entity + Serialize + DeserializeOwned + Unpin + Send + Sync,
    {
        let mut cursor = self.coll::<T>()?.find(filter, None).await?;
        let mut res: Vec<T> = Vec::new();
        while let Some(itm) = cursor.try_next().await? {
            res.push(itm);
        }
        Ok(res)
    }

    async fn put_doc<T>(&mut self, itm: &T) -> Result<u64, StoreError>
    where
        T: Entity + Clone + Serialize + DeserializeOwned + Unpin + Send + Sync,
    {
        let mut itm = itm.clone();
        if itm.id() == unset_id() {
            itm.set_id(self.next_id(T::COLLECTION));
        } else if let Some(cnt) = self.counters.get_mut(T::COLLECTION) {
            *cnt = std::cmp::max(*cnt, itm.id());
        }

        let filter = doc! { "id": itm.id() as i64 };
        let opts = ReplaceOptions::builder().upsert(true).build();
        self.coll::<T>()?.replace_one(filter, &itm, opts).await?;
        Ok(itm.id())
    }
}

#[async_trait]
impl Store for StoreMongo {
    async fn connect(&mut self) -> Result<(), StoreError> {
        let client = Client::with_uri_str(&self.url).await?;
        self.client = Some(client);

        self.prepare::<User>().await?;
        self.prepare::<MentorshipRequest>().await?;
        self.prepare::<Session>().await?;
        self.prepare::<Availability>().await?;
        info!("Connected to {}", self.db_name);
        Ok(())
    }

    async fn get_user(&self, id: u64) -> Result<Option<User>, StoreError> {
        self.find_one_doc(doc! { "id": id as i64 }).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.find_one_doc(doc! { "email": email }).await
    }

    async fn get_users(&self) -> Result<Vec<User>, StoreError> {
        self.find_docs(doc! {}).await
    }

    async fn get_mentors_by_skills(&self, skills: &[String]) -> Result<Vec<User>, StoreError> {
        let filter = if skills.is_empty() {
            doc! { "role": Role::Mentor.to_string() }
        } else {
            doc! {
                "role": Role::Mentor.to_string(),
                "skills": { "$in": skills.to_vec() },
            }
        };
        self.find_docs(filter).await
    }

    async fn put_user(&mut self, usr: &User) -> Result<u64, StoreError> {
        self.put_doc(usr).await
    }

    async fn get_request(&self, id: u64) -> Result<Option<MentorshipRequest>, StoreError> {
        self.find_one_doc(doc! { "id": id as i64 }).await
    }

    async fn get_requests_by_mentee(
        &self,
        mentee_id: u64,
    ) -> Result<Vec<MentorshipRequest>, StoreError> {
        self.find_docs(doc! { "mentee_id": mentee_id as i64 }).await
    }

    async fn get_requests_by_mentor(
        &self,
        mentor_id: u64,
    ) -> Result<Vec<MentorshipRequest>, StoreError> {
        self.find_docs(doc! { "mentor_id": mentor_id as i64 }).await
    }

    async fn get_accepted_requests(&self) -> Result<Vec<MentorshipRequest>, StoreError> {
        self.find_docs(doc! { "status": RequestStatus::Accepted.to_string() })
            .await
    }

    async fn put_request(&mut self, req: &MentorshipRequest) -> Result<u64, StoreError> {
        self.put_doc(req).await
    }

    async fn get_session(&self, id: u64) -> Result<Option<Session>, StoreError> {
        self.find_one_doc(doc! { "id": id as i64 }).await
    }

    async fn get_sessions_by_mentor(&self, mentor_id: u64) -> Result<Vec<Session>, StoreError> {
        self.find_docs(doc! { "mentor_id": mentor_id as i64 }).await
    }

    async fn get_sessions_by_mentee(&self, mentee_id: u64) -> Result<Vec<Session>, StoreError> {
        self.find_docs(doc! { "mentee_id": mentee_id as i64 }).await
    }

    async fn get_sessions(&self) -> Result<Vec<Session>, StoreError> {
        self.find_docs(doc! {}).await
    }

    async fn put_session(&mut self, sess: &Session) -> Result<u64, StoreError> {
        self.put_doc(sess).await
    }

    async fn get_availability_by_mentor(
        &self,
        mentor_id: u64,
    ) -> Result<Vec<Availability>, StoreError> {
        self.find_docs(doc! { "mentor_id": mentor_id as i64 }).await
    }

    async fn has_availability(&self, mentor_id: u64) -> Result<bool, StoreError> {
        let slot: Option<Availability> = self
            .find_one_doc(doc! { "mentor_id": mentor_id as i64 })
            .await?;
        Ok(slot.is_some())
    }

    async fn put_availability(&mut self, slot: &Availability) -> Result<u64, StoreError> {
        self.put_doc(slot).await
    }
}
