//! # Student Service
//!
//! The five CRUD operations over a `RecordStore`. Nothing is cached: every
//! call starts from `read_all`. Mutations hold `write_lock` for the whole
//! read-modify-write cycle so two of them never interleave in one process.

use std::sync::{Mutex, MutexGuard};

use crate::store::{position_of, IdProvider, RecordStore, Student, TimestampIds};

use super::errors::{ApiError, ApiResult};
use super::payload::{NewStudent, StudentPatch};

/// CRUD operations over the student collection
#[derive(Debug)]
pub struct StudentService {
    store: Box<dyn RecordStore>,
    ids: Box<dyn IdProvider>,
    write_lock: Mutex<()>,
}

impl StudentService {
    /// Service over `store` with timestamp ids
    pub fn new(store: impl RecordStore + 'static) -> Self {
        Self::with_ids(store, TimestampIds::new())
    }

    /// Service over `store` with a chosen id provider
    pub fn with_ids(store: impl RecordStore + 'static, ids: impl IdProvider + 'static) -> Self {
        Self {
            store: Box::new(store),
            ids: Box::new(ids),
            write_lock: Mutex::new(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded value is (), so a poisoned lock carries no broken state.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All students in insertion order
    pub fn list(&self) -> ApiResult<Vec<Student>> {
        Ok(self.store.read_all()?)
    }

    /// First student whose id renders as `id`
    pub fn get(&self, id: &str) -> ApiResult<Student> {
        self.store
            .read_all()?
            .into_iter()
            .find(|s| s.matches_id(id))
            .ok_or(ApiError::NotFound)
    }

    /// Append a new student and persist
    pub fn create(&self, new: NewStudent) -> ApiResult<Student> {
        let _guard = self.lock();
        let mut students = self.store.read_all()?;

        let mut id = self.ids.next_id();
        while students.iter().any(|s| s.id == id) {
            id = self.ids.next_id();
        }

        let student = new.into_student(id);
        students.push(student.clone());
        self.store.write_all(&students)?;

        tracing::info!(id = student.id, "student created");
        Ok(student)
    }

    /// Overwrite the fields present in `patch` and persist
    pub fn update(&self, id: &str, patch: StudentPatch) -> ApiResult<Student> {
        let _guard = self.lock();
        let mut students = self.store.read_all()?;
        let idx = position_of(&students, id).ok_or(ApiError::NotFound)?;

        patch.apply(&mut students[idx]);
        self.store.write_all(&students)?;

        tracing::info!(id = students[idx].id, "student updated");
        Ok(students.swap_remove(idx))
    }

    /// Remove a student and persist, returning the removed record
    pub fn delete(&self, id: &str) -> ApiResult<Student> {
        let _guard = self.lock();
        let mut students = self.store.read_all()?;
        let idx = position_of(&students, id).ok_or(ApiError::NotFound)?;

        let removed = students.remove(idx);
        self.store.write_all(&students)?;

        tracing::info!(id = removed.id, "student deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, SequentialIds, StoreError};

    fn service() -> StudentService {
        StudentService::with_ids(MemoryStore::new(), SequentialIds::starting_at(100))
    }

    fn new_student(name: &str) -> NewStudent {
        NewStudent {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            course: "Cyber Security".to_string(),
        }
    }

    #[test]
    fn test_list_empty() {
        assert!(service().list().unwrap().is_empty());
    }

    #[test]
    fn test_create_then_get() {
        let svc = service();
        let created = svc.create(new_student("Meena")).unwrap();
        assert_eq!(created.id, 100);
        assert_eq!(svc.get("100").unwrap(), created);
    }

    #[test]
    fn test_create_preserves_insertion_order() {
        let svc = service();
        svc.create(new_student("A")).unwrap();
        svc.create(new_student("B")).unwrap();
        svc.create(new_student("C")).unwrap();

        let names: Vec<_> = svc.list().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_create_skips_colliding_id() {
        let store = MemoryStore::with_raw(r#"[{"id":1,"name":"a","email":"b","course":"c"}]"#);
        let svc = StudentService::with_ids(store, SequentialIds::starting_at(1));
        let created = svc.create(new_student("New")).unwrap();
        assert_eq!(created.id, 2);
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        assert!(matches!(service().get("999999"), Err(ApiError::NotFound)));
    }

    #[test]
    fn test_update_partial() {
        let svc = service();
        let created = svc.create(new_student("Meena")).unwrap();
        let patch = StudentPatch {
            course: Some("DevOps".to_string()),
            ..Default::default()
        };

        let updated = svc.update("100", patch).unwrap();
        assert_eq!(updated.course, "DevOps");
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.email, created.email);
        assert_eq!(svc.get("100").unwrap(), updated);
    }

    #[test]
    fn test_update_keeps_position() {
        let svc = service();
        svc.create(new_student("A")).unwrap();
        svc.create(new_student("B")).unwrap();
        svc.create(new_student("C")).unwrap();

        let patch = StudentPatch {
            name: Some("A2".to_string()),
            ..Default::default()
        };
        svc.update("100", patch).unwrap();

        let names: Vec<_> = svc.list().unwrap().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["A2", "B", "C"]);
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let result = service().update("1", StudentPatch::default());
        assert!(matches!(result, Err(ApiError::NotFound)));
    }

    #[test]
    fn test_delete() {
        let svc = service();
        let a = svc.create(new_student("A")).unwrap();
        let b = svc.create(new_student("B")).unwrap();

        let removed = svc.delete(&a.id.to_string()).unwrap();
        assert_eq!(removed, a);
        assert_eq!(svc.list().unwrap(), vec![b]);
        assert!(matches!(svc.delete(&a.id.to_string()), Err(ApiError::NotFound)));
    }

    #[test]
    fn test_malformed_store_propagates() {
        let svc = StudentService::new(MemoryStore::with_raw("{oops"));
        assert!(matches!(
            svc.list(),
            Err(ApiError::Store(StoreError::Malformed { .. }))
        ));
        assert!(matches!(
            svc.create(new_student("A")),
            Err(ApiError::Store(StoreError::Malformed { .. }))
        ));
    }

    #[test]
    fn test_concurrent_creates_are_not_lost() {
        use std::sync::Arc;

        let svc = Arc::new(StudentService::new(MemoryStore::new()));
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let svc = Arc::clone(&svc);
                std::thread::spawn(move || {
                    for j in 0..10 {
                        svc.create(new_student(&format!("S{i}-{j}"))).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let students = svc.list().unwrap();
        assert_eq!(students.len(), 80);
        let mut ids: Vec<_> = students.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 80);
    }
}
