pub mod reconcile;

use std::{
  any::{Any, TypeId},
  collections::{BTreeMap, HashMap},
  fmt,
};

use parking_lot::RwLock;

/// A locally persisted row. At most one row exists per key.
pub trait Record: Clone + fmt::Debug + Send + Sync + 'static {
  type Key: Clone + Ord + fmt::Debug + Send + Sync + 'static;

  fn key(&self) -> Self::Key;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upserted {
  Inserted,
  Updated,
}

type Table<T> = BTreeMap<<T as Record>::Key, T>;

/// One ordered table per record type.
#[derive(Default)]
pub struct Tables {
  tables: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl fmt::Debug for Tables {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Tables").field("types", &self.tables.len()).finish()
  }
}

impl Tables {
  fn table<T: Record>(&self) -> Option<&Table<T>> {
    self.tables.get(&TypeId::of::<T>()).and_then(|table| table.downcast_ref::<Table<T>>())
  }

  fn table_mut<T: Record>(&mut self) -> &mut Table<T> {
    self
      .tables
      .entry(TypeId::of::<T>())
      .or_insert_with(|| Box::new(Table::<T>::new()))
      .downcast_mut::<Table<T>>()
      .expect("tables are keyed by the TypeId of their rows")
  }

  /// Inserts a new row. Returns `false`, leaving the stored row untouched,
  /// when the key is already taken.
  pub fn insert<T: Record>(&mut self, row: T) -> bool {
    let table = self.table_mut::<T>();
    let key = row.key();
    if table.contains_key(&key) {
      return false;
    }
    table.insert(key, row);
    true
  }

  /// Applies `f` to the row stored under `key`. Returns `false` if absent.
  pub fn update<T: Record>(&mut self, key: &T::Key, f: impl FnOnce(&mut T)) -> bool {
    match self.table_mut::<T>().get_mut(key) {
      Some(row) => {
        f(row);
        true
      }
      None => false,
    }
  }

  /// Overwrites the row with the same key in place, or inserts it.
  pub fn upsert<T: Record>(&mut self, row: T) -> Upserted {
    let key = row.key();
    match self.table_mut::<T>().insert(key, row) {
      Some(_) => Upserted::Updated,
      None => Upserted::Inserted,
    }
  }

  pub fn delete<T: Record>(&mut self, key: &T::Key) -> Option<T> {
    self.table_mut::<T>().remove(key)
  }

  pub fn delete_matching<T: Record>(&mut self, predicate: impl Fn(&T) -> bool) -> usize {
    let table = self.table_mut::<T>();
    let before = table.len();
    table.retain(|_, row| !predicate(row));
    before - table.len()
  }

  pub fn delete_all<T: Record>(&mut self) -> usize {
    self.tables.remove(&TypeId::of::<T>()).map_or(0, |table| {
      table.downcast_ref::<Table<T>>().map_or(0, |table| table.len())
    })
  }

  pub fn load<T: Record>(&self, key: &T::Key) -> Option<&T> {
    self.table::<T>()?.get(key)
  }

  pub fn first<T: Record>(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
    self.table::<T>()?.values().find(|row| predicate(row))
  }

  pub fn all<T: Record>(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
    self
      .table::<T>()
      .map(|table| table.values().filter(|row| predicate(row)).cloned().collect())
      .unwrap_or_default()
  }

  pub fn count<T: Record>(&self, predicate: impl Fn(&T) -> bool) -> usize {
    self.table::<T>().map_or(0, |table| table.values().filter(|row| predicate(row)).count())
  }
}

/// In-memory row store shared by every store. All writes go through a single
/// lock, so one reconcile call never interleaves with another.
#[derive(Debug, Default)]
pub struct Cache {
  tables: RwLock<Tables>,
}

impl Cache {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn read<R>(&self, f: impl FnOnce(&Tables) -> R) -> R {
    f(&self.tables.read())
  }

  pub fn write<R>(&self, f: impl FnOnce(&mut Tables) -> R) -> R {
    f(&mut self.tables.write())
  }

  pub fn load<T: Record>(&self, key: &T::Key) -> Option<T> {
    self.read(|tables| tables.load::<T>(key).cloned())
  }

  pub fn first<T: Record>(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
    self.read(|tables| tables.first(predicate).cloned())
  }

  pub fn all<T: Record>(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
    self.read(|tables| tables.all(predicate))
  }

  pub fn count<T: Record>(&self, predicate: impl Fn(&T) -> bool) -> usize {
    self.read(|tables| tables.count(predicate))
  }

  pub fn count_all<T: Record>(&self) -> usize {
    self.count::<T>(|_| true)
  }

  pub fn upsert<T: Record>(&self, row: T) -> Upserted {
    self.write(|tables| tables.upsert(row))
  }

  pub fn delete<T: Record>(&self, key: &T::Key) -> Option<T> {
    self.write(|tables| tables.delete(key))
  }

  pub fn delete_all<T: Record>(&self) -> usize {
    self.write(|tables| tables.delete_all::<T>())
  }
}
