use super::backend::{DayRecord, StorageBackend, TemplateRecord};
use super::{stored_day, stored_template, WorkoutStore};
use crate::analytics;
use crate::error::{PhxError, Result};
use crate::model::{Analytics, RecordId, Template, WorkoutDay};
use chrono::{Local, Utc};
use std::cmp::Reverse;
use tracing::{debug, info};
use uuid::Uuid;

pub struct LogStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    tracked_lifts: Vec<String>,
}

impl<B: StorageBackend> LogStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            tracked_lifts: analytics::default_tracked_lifts(),
        }
    }

    /// Lifts reported in `last_working_weights`.
    pub fn with_tracked_lifts(mut self, lifts: Vec<String>) -> Self {
        self.tracked_lifts = lifts;
        self
    }

    /// All records, newest first.
    fn records_newest_first(&self) -> Result<Vec<DayRecord>> {
        let mut records: Vec<DayRecord> = self.backend.load_days()?.into_values().collect();
        records.sort_by_key(|r| Reverse((r.day.date, r.updated_at)));
        Ok(records)
    }
}

/// Local records are keyed by UUID; any other id cannot name one of them.
fn local_key(id: &RecordId) -> Result<Uuid> {
    id.as_uuid().ok_or(PhxError::NotFound(*id))
}

fn matches_query(day: &WorkoutDay, needle: &str) -> Result<bool> {
    let haystack = serde_json::to_string(&day.blocks)?.to_lowercase();
    Ok(haystack.contains(needle))
}

impl<B: StorageBackend> WorkoutStore for LogStore<B> {
    fn get_day(&self, id: &RecordId) -> Result<WorkoutDay> {
        let key = local_key(id)?;
        let days = self.backend.load_days()?;
        days.get(&key)
            .map(|record| record.day.clone())
            .ok_or(PhxError::NotFound(*id))
    }

    fn recent_days(&self, limit: usize) -> Result<Vec<WorkoutDay>> {
        Ok(self
            .records_newest_first()?
            .into_iter()
            .take(limit)
            .map(|r| r.day)
            .collect())
    }

    fn create_day(&mut self, day: &WorkoutDay) -> Result<WorkoutDay> {
        let key = Uuid::new_v4();
        let id = RecordId::from(key);
        let now = Utc::now();
        let stored = stored_day(day.clone(), id);

        let mut days = self.backend.load_days()?;
        days.insert(
            key,
            DayRecord {
                day: stored.clone(),
                created_at: now,
                updated_at: now,
            },
        );
        self.backend.save_days(&days)?;

        info!(day_id = %id, date = %stored.date, scenario = %stored.scenario_type, "workout day created");
        Ok(stored)
    }

    fn update_day(&mut self, id: &RecordId, day: &WorkoutDay) -> Result<WorkoutDay> {
        let key = local_key(id)?;
        let mut days = self.backend.load_days()?;
        let record = days.get_mut(&key).ok_or(PhxError::NotFound(*id))?;
        let stored = stored_day(day.clone(), *id);
        record.day = stored.clone();
        record.updated_at = Utc::now();
        self.backend.save_days(&days)?;

        debug!(day_id = %id, blocks = stored.blocks.len(), "workout day updated");
        Ok(stored)
    }

    fn delete_day(&mut self, id: &RecordId) -> Result<()> {
        let key = local_key(id)?;
        let mut days = self.backend.load_days()?;
        if days.remove(&key).is_none() {
            return Err(PhxError::NotFound(*id));
        }
        self.backend.save_days(&days)?;

        info!(day_id = %id, "workout day deleted");
        Ok(())
    }

    fn list_templates(&self) -> Result<Vec<Template>> {
        let mut records: Vec<TemplateRecord> =
            self.backend.load_templates()?.into_values().collect();
        records.sort_by_key(|r| Reverse(r.created_at));
        Ok(records.into_iter().map(|r| r.template).collect())
    }

    fn create_template(&mut self, template: &Template) -> Result<Template> {
        let key = Uuid::new_v4();
        let id = RecordId::from(key);
        let stored = stored_template(template.clone(), id);

        let mut templates = self.backend.load_templates()?;
        templates.insert(
            key,
            TemplateRecord {
                template: stored.clone(),
                created_at: Utc::now(),
            },
        );
        self.backend.save_templates(&templates)?;

        info!(template_id = %id, name = %stored.name, "template created");
        Ok(stored)
    }

    fn search_days(&self, query: &str, limit: usize) -> Result<Vec<WorkoutDay>> {
        let needle = query.trim().to_lowercase();
        let mut found = Vec::new();
        for record in self.records_newest_first()? {
            if found.len() == limit {
                break;
            }
            if matches_query(&record.day, &needle)? {
                found.push(record.day);
            }
        }
        debug!(query = %query, hits = found.len(), "searched workout days");
        Ok(found)
    }

    fn analytics(&self, days: u32) -> Result<Analytics> {
        let mut records = self.records_newest_first()?;
        records.reverse();
        let ordered: Vec<WorkoutDay> = records.into_iter().map(|r| r.day).collect();
        Ok(analytics::compute(
            &ordered,
            days,
            Local::now().date_naive(),
            &self.tracked_lifts,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, StrengthSet};
    use crate::model::ScenarioType;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_create_assigns_id_and_persists() {
        let mut store = InMemoryStore::new();
        let day = WorkoutDay::new(date("2024-04-01"), ScenarioType::Gtg);
        let saved = store.create_day(&day).unwrap();
        let id = saved.id().expect("id assigned");
        assert_eq!(store.get_day(&id).unwrap(), saved);
        assert!(!day.is_saved());
    }

    #[test]
    fn test_update_keeps_id() {
        let mut store = InMemoryStore::new();
        let saved = store
            .create_day(&WorkoutDay::new(date("2024-04-01"), ScenarioType::Gtg))
            .unwrap();
        let id = saved.id().unwrap();

        let mut changed = saved.clone();
        changed.comment = "тяжело".into();
        let updated = store.update_day(&id, &changed).unwrap();
        assert_eq!(updated.id(), Some(id));
        assert_eq!(store.get_day(&id).unwrap().comment, "тяжело");
        assert_eq!(store.recent_days(10).unwrap().len(), 1);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let mut store = InMemoryStore::new();
        let id = RecordId::generate();
        let day = WorkoutDay::new(date("2024-04-01"), ScenarioType::Rest);
        match store.update_day(&id, &day) {
            Err(PhxError::NotFound(missing)) => assert_eq!(missing, id),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_id_is_not_a_local_record() {
        let mut store = InMemoryStore::new();
        store
            .create_day(&WorkoutDay::new(date("2024-04-01"), ScenarioType::Rest))
            .unwrap();
        let id = RecordId::Number(1);
        let day = WorkoutDay::new(date("2024-04-01"), ScenarioType::Rest);
        assert!(matches!(store.get_day(&id), Err(PhxError::NotFound(RecordId::Number(1)))));
        assert!(matches!(store.update_day(&id, &day), Err(PhxError::NotFound(_))));
        assert!(matches!(store.delete_day(&id), Err(PhxError::NotFound(_))));
        assert_eq!(store.recent_days(10).unwrap().len(), 1);
    }

    #[test]
    fn test_local_ids_are_uuids() {
        let mut store = InMemoryStore::new();
        let saved = store
            .create_day(&WorkoutDay::new(date("2024-04-01"), ScenarioType::Gtg))
            .unwrap();
        assert!(saved.id().unwrap().as_uuid().is_some());
    }

    #[test]
    fn test_recent_is_newest_first_and_bounded() {
        let mut store = InMemoryStore::new();
        for d in ["2024-04-02", "2024-04-05", "2024-04-01", "2024-04-03"] {
            store
                .create_day(&WorkoutDay::new(date(d), ScenarioType::Activity))
                .unwrap();
        }
        let dates: Vec<NaiveDate> = store
            .recent_days(3)
            .unwrap()
            .into_iter()
            .map(|d| d.date)
            .collect();
        assert_eq!(
            dates,
            vec![date("2024-04-05"), date("2024-04-03"), date("2024-04-02")]
        );
    }

    #[test]
    fn test_same_date_last_write_first() {
        let mut store = InMemoryStore::new();
        let first = store
            .create_day(&WorkoutDay::new(date("2024-04-01"), ScenarioType::Gtg))
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = store
            .create_day(&WorkoutDay::new(date("2024-04-01"), ScenarioType::Rest))
            .unwrap();
        assert_eq!(store.recent_days(1).unwrap()[0].id(), second.id());

        std::thread::sleep(std::time::Duration::from_millis(2));
        store.update_day(&first.id().unwrap(), &first).unwrap();
        assert_eq!(store.recent_days(1).unwrap()[0].id(), first.id());
    }

    #[test]
    fn test_delete_removes_day() {
        let mut store = InMemoryStore::new();
        let saved = store
            .create_day(&WorkoutDay::new(date("2024-04-01"), ScenarioType::Gtg))
            .unwrap();
        let id = saved.id().unwrap();
        store.delete_day(&id).unwrap();
        assert!(matches!(store.get_day(&id), Err(PhxError::NotFound(_))));
        assert!(matches!(store.delete_day(&id), Err(PhxError::NotFound(_))));
    }

    #[test]
    fn test_search_matches_block_content_case_insensitively() {
        let mut store = InMemoryStore::new();
        store
            .create_day(&WorkoutDay::new(date("2024-04-01"), ScenarioType::Strength))
            .unwrap();
        store
            .create_day(&WorkoutDay::new(date("2024-04-02"), ScenarioType::Kettlebell))
            .unwrap();
        let mut with_comment = WorkoutDay::new(date("2024-04-03"), ScenarioType::Rest);
        with_comment.comment = "присед отменил".into();
        store.create_day(&with_comment).unwrap();

        let hits = store.search_days("ПРИСЕД", 50).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].scenario_type, ScenarioType::Strength);

        assert_eq!(store.search_days("свинг", 50).unwrap().len(), 1);
        assert_eq!(store.search_days("", 2).unwrap().len(), 2);
    }

    #[test]
    fn test_templates_newest_first() {
        let mut store = InMemoryStore::new();
        let blocks = vec![Block::strength("Тяга", vec![StrengthSet::new(100, 3)])];
        for name in ["A", "B"] {
            let template = Template {
                id: None,
                name: name.into(),
                scenario_type: ScenarioType::Strength,
                blocks: blocks.clone(),
            };
            let saved = store.create_template(&template).unwrap();
            assert!(saved.id().is_some());
            std::thread::sleep(std::time::Duration::from_millis(2));
        }
        let names: Vec<String> = store
            .list_templates()
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_analytics_uses_tracked_lifts() {
        let today = Local::now().date_naive();
        let mut store = InMemoryStore::new().with_tracked_lifts(vec!["тяга".into()]);
        store
            .create_day(&WorkoutDay::with_blocks(
                today,
                ScenarioType::Strength,
                vec![Block::strength("Тяга", vec![StrengthSet::new(120, 3)])],
            ))
            .unwrap();
        let stats = store.analytics(14).unwrap();
        assert_eq!(stats.training_days, 1);
        assert_eq!(stats.last_working_weights.len(), 1);
        assert_eq!(stats.last_working_weights["тяга"], Some(120.0));
    }
}
