use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::filter::HomeFilter;
use super::model::{Home, NewHome, UpdateHome};
use super::Homes;
use crate::query::{Direction, OrderSpec, PageSpec};
use crate::store::{Resolver, Store, StoreError};

/// In-memory home store backing the dev server and the integration tests.
///
/// Query and count take the lock separately, so a concurrent writer can make
/// the returned page and the total disagree; callers get the same weak
/// guarantee a paired query/count against a live database would.
#[derive(Default)]
pub struct HomeStore {
    homes: RwLock<HashMap<Uuid, Home>>,
}

impl HomeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sort(homes: &mut [Home], order: &OrderSpec) {
        homes.sort_by(|a, b| {
            let ordering = match order.field {
                "name" => a.name.cmp(&b.name),
                "type" => a.home_type.as_str().cmp(b.home_type.as_str()),
                "date_created" => a.date_created.cmp(&b.date_created),
                _ => a.id.cmp(&b.id),
            };
            match order.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            }
        });
    }
}

#[async_trait]
impl Store<Homes> for HomeStore {
    async fn create(&self, new: NewHome) -> Result<Home, StoreError> {
        let mut homes = self.homes.write().await;

        if homes
            .values()
            .any(|h| h.name.eq_ignore_ascii_case(&new.name))
        {
            return Err(StoreError::Conflict(format!(
                "home name {:?} is already in use",
                new.name
            )));
        }

        let now = Utc::now();
        let home = Home {
            id: Uuid::new_v4(),
            name: new.name,
            home_type: new.home_type,
            address: new.address,
            date_created: now,
            date_updated: now,
        };
        homes.insert(home.id, home.clone());

        Ok(home)
    }

    async fn update(&self, entity: Home, update: UpdateHome) -> Result<Home, StoreError> {
        let mut homes = self.homes.write().await;

        if let Some(name) = &update.name {
            let taken = homes
                .values()
                .any(|h| h.id != entity.id && h.name.eq_ignore_ascii_case(name));
            if taken {
                return Err(StoreError::Conflict(format!(
                    "home name {:?} is already in use",
                    name
                )));
            }
        }

        // The resolved entity may be stale if the record was removed after
        // resolution; the patch applies against the current row or fails.
        let home = homes.get_mut(&entity.id).ok_or(StoreError::NotFound)?;

        if let Some(name) = update.name {
            home.name = name;
        }
        if let Some(home_type) = update.home_type {
            home.home_type = home_type;
        }
        if let Some(address) = update.address {
            home.address = address;
        }
        home.date_updated = Utc::now();

        Ok(home.clone())
    }

    async fn delete(&self, entity: Home) -> Result<(), StoreError> {
        let mut homes = self.homes.write().await;
        homes
            .remove(&entity.id)
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }

    async fn query(
        &self,
        filter: &HomeFilter,
        order: &OrderSpec,
        page: &PageSpec,
    ) -> Result<Vec<Home>, StoreError> {
        let homes = self.homes.read().await;
        let mut matched: Vec<Home> = homes.values().filter(|h| filter.matches(h)).cloned().collect();
        drop(homes);

        Self::sort(&mut matched, order);

        let offset = page.number.saturating_sub(1) as usize * page.rows_per_page as usize;
        Ok(matched
            .into_iter()
            .skip(offset)
            .take(page.rows_per_page as usize)
            .collect())
    }

    async fn count(&self, filter: &HomeFilter) -> Result<u64, StoreError> {
        let homes = self.homes.read().await;
        Ok(homes.values().filter(|h| filter.matches(h)).count() as u64)
    }
}

#[async_trait]
impl Resolver<Home> for HomeStore {
    async fn resolve(&self, id: Uuid) -> Result<Home, StoreError> {
        let homes = self.homes.read().await;
        homes.get(&id).cloned().ok_or(StoreError::NotFound)
    }
}
