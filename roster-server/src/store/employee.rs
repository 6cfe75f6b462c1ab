//! Employee Record Store
//!
//! 单个 JSON 数组文件支持的持久化员工集合。
//!
//! # Durability
//!
//! Every mutation runs as one serialized read-modify-write unit under the
//! write lock: clone the in-memory arena, apply the change, flush the clone
//! to a temp file in the same directory, rename it over the data file, then
//! commit the clone. A failed flush leaves both the in-memory arena and the
//! on-disk file at the prior state, and a rename can never be observed as a
//! torn write.
//!
//! # Id allocation
//!
//! | 情形 | 分配结果 |
//! |------|----------|
//! | 空集合 | 1 |
//! | 进程内连续创建 | 高水位 + 1，删除不回收 |
//! | 重新打开文件 | 高水位重置为 max(现有 id) |

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use shared::{Employee, EmployeeDraft, EmployeeUpdate};
use tempfile::NamedTempFile;
use tokio::sync::RwLock;

use super::{StoreError, StoreResult};

/// In-memory arena: insertion-ordered records plus the id high-water mark
#[derive(Debug, Clone, Default)]
struct Arena {
    records: IndexMap<u64, Employee>,
    /// Next id to allocate; never decreases while the process runs
    next_id: u64,
}

/// JSON-array-backed employee collection with serialized mutations
#[derive(Debug)]
pub struct EmployeeStore {
    path: PathBuf,
    arena: RwLock<Arena>,
}

impl EmployeeStore {
    /// Open the store, creating an empty backing file if none exists
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let records: IndexMap<u64, Employee> = if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            let list: Vec<Employee> = serde_json::from_str(&content)?;
            list.into_iter().map(|e| (e.id, e)).collect()
        } else {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let empty = IndexMap::new();
            flush(&path, &empty)?;
            empty
        };

        let next_id = records.keys().max().copied().unwrap_or(0) + 1;
        Ok(Self {
            path,
            arena: RwLock::new(Arena { records, next_id }),
        })
    }

    /// Number of records
    pub async fn len(&self) -> usize {
        self.arena.read().await.records.len()
    }

    /// All records in collection order
    ///
    /// 读锁下的一致快照；并发 list 互不阻塞
    pub async fn list(&self) -> Vec<Employee> {
        self.arena.read().await.records.values().cloned().collect()
    }

    /// Create a record, allocating the next id
    pub async fn create(&self, draft: EmployeeDraft) -> StoreResult<Employee> {
        let mut arena = self.arena.write().await;
        let employee = draft.into_employee(arena.next_id);

        let mut next = arena.clone();
        next.records.insert(employee.id, employee.clone());
        next.next_id = employee.id + 1;
        flush(&self.path, &next.records)?;
        *arena = next;

        Ok(employee)
    }

    /// Apply the supplied fields to an existing record
    ///
    /// Fields absent from the patch keep their prior values; the id never
    /// changes. Fails with [`StoreError::NotFound`] without mutating
    /// anything when no record matches.
    pub async fn update(&self, raw_id: &str, patch: EmployeeUpdate) -> StoreResult<Employee> {
        let mut arena = self.arena.write().await;
        let id = resolve_id(&arena.records, raw_id)
            .ok_or_else(|| StoreError::NotFound(format!("Employee {raw_id} not found")))?;

        let mut next = arena.clone();
        let employee = next.records.get_mut(&id).expect("resolved id present");
        patch.apply_to(employee);
        let updated = employee.clone();
        flush(&self.path, &next.records)?;
        *arena = next;

        Ok(updated)
    }

    /// Remove a record, preserving the order of the remainder
    pub async fn delete(&self, raw_id: &str) -> StoreResult<()> {
        let mut arena = self.arena.write().await;
        let id = resolve_id(&arena.records, raw_id)
            .ok_or_else(|| StoreError::NotFound(format!("Employee {raw_id} not found")))?;

        let mut next = arena.clone();
        next.records.shift_remove(&id);
        flush(&self.path, &next.records)?;
        *arena = next;

        Ok(())
    }
}

/// Loose id match: the stringified stored id must equal the raw path segment
/// ("7" matches 7, "07" does not)
fn resolve_id(records: &IndexMap<u64, Employee>, raw: &str) -> Option<u64> {
    records.keys().copied().find(|id| id.to_string() == raw)
}

/// Write the collection as a pretty-printed JSON array, temp-file-then-rename
fn flush(path: &Path, records: &IndexMap<u64, Employee>) -> StoreResult<()> {
    let list: Vec<&Employee> = records.values().collect();
    let content = serde_json::to_string_pretty(&list)?;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let tmp = NamedTempFile::new_in(dir)?;
    std::fs::write(tmp.path(), content)?;
    tmp.persist(path).map_err(|e| StoreError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn draft(name: &str) -> EmployeeDraft {
        EmployeeDraft {
            full_name: Some(name.to_string()),
            role: Some("Engineer".to_string()),
            department: Some("R&D".to_string()),
            email: Some(format!("{}@x.com", name.to_lowercase().replace(' ', "."))),
            salary: Some(json!(90_000)),
            hire_date: Some("2024-01-01".to_string()),
        }
    }

    async fn open_store(dir: &TempDir) -> EmployeeStore {
        EmployeeStore::open(dir.path().join("employees.json"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn open_creates_empty_backing_file() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        assert!(dir.path().join("employees.json").exists());
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        let a = store.create(draft("Ann Lee")).await.unwrap();
        let b = store.create(draft("Bob Roe")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[tokio::test]
    async fn ids_are_never_reused_after_delete() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        store.create(draft("Ann Lee")).await.unwrap();
        let b = store.create(draft("Bob Roe")).await.unwrap();
        store.delete(&b.id.to_string()).await.unwrap();

        let c = store.create(draft("Cid Day")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn list_without_mutation_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.create(draft("Ann Lee")).await.unwrap();
        store.create(draft("Bob Roe")).await.unwrap();

        assert_eq!(store.list().await, store.list().await);
    }

    #[tokio::test]
    async fn create_normalizes_missing_fields() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        let employee = store.create(EmployeeDraft::default()).await.unwrap();

        assert_eq!(employee.id, 1);
        assert_eq!(employee.full_name, "");
        assert_eq!(employee.role, "");
        assert_eq!(employee.salary, 0.0);
        // hire date defaults to the current date
        assert_eq!(employee.hire_date.len(), 10);
    }

    #[tokio::test]
    async fn create_coerces_string_salary() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;

        let mut d = draft("Ann Lee");
        d.salary = Some(json!("120000"));
        let employee = store.create(d).await.unwrap();

        assert_eq!(employee.salary, 120_000.0);
    }

    #[tokio::test]
    async fn update_changes_only_supplied_fields() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        let created = store.create(draft("Ann Lee")).await.unwrap();

        let patch = EmployeeUpdate {
            salary: Some(json!(5_000)),
            ..Default::default()
        };
        let updated = store.update("1", patch).await.unwrap();

        assert_eq!(updated.salary, 5_000.0);
        assert_eq!(updated.full_name, created.full_name);
        assert_eq!(updated.role, created.role);
        assert_eq!(updated.department, created.department);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.hire_date, created.hire_date);
    }

    #[tokio::test]
    async fn update_unknown_id_fails_without_mutating() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.create(draft("Ann Lee")).await.unwrap();
        let before = store.list().await;

        let patch = EmployeeUpdate {
            salary: Some(json!(1)),
            ..Default::default()
        };
        let err = store.update("999", patch).await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn delete_unknown_id_fails_without_mutating() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.create(draft("Ann Lee")).await.unwrap();

        let err = store.delete("999").await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn id_match_is_exact_on_the_stringified_id() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.create(draft("Ann Lee")).await.unwrap();

        // "1" matches id 1, "01" does not
        assert!(store.update("1", EmployeeUpdate::default()).await.is_ok());
        let err = store
            .update("01", EmployeeUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_preserves_order_of_remaining_records() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.create(draft("Ann Lee")).await.unwrap();
        store.create(draft("Bob Roe")).await.unwrap();
        store.create(draft("Cid Day")).await.unwrap();

        store.delete("2").await.unwrap();

        let names: Vec<String> = store
            .list()
            .await
            .into_iter()
            .map(|e| e.full_name)
            .collect();
        assert_eq!(names, vec!["Ann Lee", "Cid Day"]);
    }

    #[tokio::test]
    async fn reopen_rehydrates_from_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("employees.json");

        let store = EmployeeStore::open(&path).await.unwrap();
        store.create(draft("Ann Lee")).await.unwrap();
        store.create(draft("Bob Roe")).await.unwrap();
        let before = store.list().await;
        drop(store);

        let reopened = EmployeeStore::open(&path).await.unwrap();
        assert_eq!(reopened.list().await, before);

        // allocation continues past the persisted ids
        let c = reopened.create(draft("Cid Day")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn persisted_file_is_a_pretty_printed_array() {
        let dir = TempDir::new().unwrap();
        let store = open_store(&dir).await;
        store.create(draft("Ann Lee")).await.unwrap();

        let content = std::fs::read_to_string(dir.path().join("employees.json")).unwrap();
        assert!(content.starts_with('['));
        assert!(content.contains("\n"));
        assert!(content.contains("\"fullName\": \"Ann Lee\""));
    }

    #[tokio::test]
    async fn concurrent_creates_never_share_an_id() {
        let dir = TempDir::new().unwrap();
        let store = std::sync::Arc::new(open_store(&dir).await);

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(draft(&format!("Employee {i}"))).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }
}
