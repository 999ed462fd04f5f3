//! Process-wide schema cache
//!
//! Schemas are pure data derived from a record type, so they are built once
//! per type and shared. The cache is keyed by [`TypeId`]; entries are
//! immutable after insertion and safe for concurrent readers.

use std::any::{Any, TypeId};
use std::sync::{Arc, RwLock};

use ahash::AHashMap;
use log::debug;
use once_cell::sync::Lazy;

use crate::error::SchemaError;
use crate::schema::SheetSchema;

/// A record type with a canonical export schema
///
/// Implementing this is the Rust counterpart of annotating a DTO: the type
/// declares, once, how its instances become rows.
pub trait RecordSchema: Sized + 'static {
    /// Declare the schema for this record type
    fn schema() -> Result<SheetSchema<Self>, SchemaError>;
}

static SCHEMA_CACHE: Lazy<RwLock<AHashMap<TypeId, Arc<dyn Any + Send + Sync>>>> =
    Lazy::new(|| RwLock::new(AHashMap::new()));

fn lookup<T: 'static>() -> Option<Arc<SheetSchema<T>>> {
    let guard = SCHEMA_CACHE.read().ok()?;
    let entry = guard.get(&TypeId::of::<T>())?.clone();
    entry.downcast::<SheetSchema<T>>().ok()
}

/// Get the cached schema for a record type, building it on first use
///
/// Concurrent first calls may build the schema more than once, but all
/// callers converge on the single cached instance.
pub fn schema_of<T: RecordSchema>() -> Result<Arc<SheetSchema<T>>, SchemaError> {
    if let Some(hit) = lookup::<T>() {
        debug!("schema cache hit for {}", std::any::type_name::<T>());
        return Ok(hit);
    }

    debug!("schema cache miss for {}", std::any::type_name::<T>());
    let built = Arc::new(T::schema()?);

    if let Ok(mut guard) = SCHEMA_CACHE.write() {
        let entry = guard
            .entry(TypeId::of::<T>())
            .or_insert_with(|| built.clone())
            .clone();
        if let Ok(stored) = entry.downcast::<SheetSchema<T>>() {
            return Ok(stored);
        }
    }
    // Lock poisoned; fall back to the freshly built schema
    Ok(built)
}
