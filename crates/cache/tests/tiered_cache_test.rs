//! Integration tests for the two-tier cache API
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tiercache::{
    CacheConfig, CacheError, CacheInstance, Codec, DiskBackend, InstanceRegistry, Result, Tier,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Profile {
    id: u64,
    name: String,
    tags: Vec<String>,
}

fn registry(temp_dir: &TempDir) -> InstanceRegistry {
    InstanceRegistry::new(CacheConfig::new(temp_dir.path()))
}

#[test]
fn test_write_then_read_returns_value() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let cache = registry(&temp_dir).instance_with_name("profiles");
    let profile = Profile {
        id: 7,
        name: "ada".to_string(),
        tags: vec!["admin".to_string()],
    };

    cache.set_object(profile.clone(), "user:7")?;

    assert_eq!(cache.object_for_key::<Profile>("user:7").as_deref(), Some(&profile));
    Ok(())
}

#[test]
fn test_disk_copy_survives_memory_clear() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let images = registry(&temp_dir).instance_with_name("images");

    images.set_object(b"bytes123".to_vec(), "cat.png")?;
    images.remove_all_objects_in_memory();

    assert_eq!(
        images.object_for_key_on_disk::<Vec<u8>>("cat.png").as_deref(),
        Some(&b"bytes123".to_vec())
    );
    Ok(())
}

#[test]
fn test_first_combined_read_promotes() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let cache = registry(&temp_dir).instance_with_name("images");

    cache.set_object_on_disk("v".to_string(), "k")?;
    assert!(cache.object_for_key_in_memory::<String>("k").is_none());

    assert!(cache.object_for_key::<String>("k").is_some());
    assert!(cache.object_for_key_in_memory::<String>("k").is_some());
    Ok(())
}

#[test]
fn test_removal_clears_every_existence_check() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let cache = registry(&temp_dir).instance_with_name("images");

    cache.set_object(1u8, "k")?;
    cache.remove_object_for_key("k")?;

    assert!(!cache.object_exists_for_key("k"));
    assert!(!cache.object_exists_for_key_in_memory("k"));
    assert!(!cache.object_exists_for_key_on_disk("k")?);
    Ok(())
}

#[test]
fn test_registry_returns_same_instances() {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry(&temp_dir);

    assert!(registry.shared_instance().ptr_eq(&registry.shared_instance()));
    assert!(registry
        .instance_with_name("images")
        .ptr_eq(&registry.instance_with_name("images")));
}

#[test]
fn test_async_miss_invokes_callback_once() {
    let temp_dir = TempDir::new().unwrap();
    let cache = registry(&temp_dir).instance_with_name("empty");
    let (tx, rx) = mpsc::channel();

    cache.object_for_key_with::<Vec<u8>, _>("missing", Tier::Combined, move |value| {
        tx.send(value.is_none()).unwrap();
    });

    assert!(rx.recv_timeout(Duration::from_secs(5)).unwrap());
    assert!(rx.recv_timeout(Duration::from_millis(100)).is_err());
}

#[test]
fn test_values_persist_across_registries() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();

    {
        let cache = registry(&temp_dir).instance_with_name("images");
        cache.set_object(vec![1u32, 2, 3], "list")?;
    }

    // A fresh registry over the same root starts with an empty memory tier
    let cache = registry(&temp_dir).instance_with_name("images");
    assert_eq!(cache.memory_len(), 0);
    assert_eq!(
        cache.object_for_key::<Vec<u32>>("list").as_deref(),
        Some(&vec![1, 2, 3])
    );
    assert_eq!(cache.stats().promotions, 1);
    Ok(())
}

#[test]
fn test_remove_all_only_affects_own_namespace() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry = registry(&temp_dir);
    let images = registry.instance_with_name("images");
    let thumbs = registry.instance_with_name("thumbs");

    images.set_object(1u8, "k")?;
    thumbs.set_object(2u8, "k")?;

    images.remove_all_objects()?;

    assert!(!images.object_exists_for_key("k"));
    assert_eq!(thumbs.object_for_key_on_disk::<u8>("k").as_deref(), Some(&2));
    Ok(())
}

#[test]
fn test_json_codec_round_trip() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let registry =
        InstanceRegistry::new(CacheConfig::new(temp_dir.path()).with_codec(Codec::Json));
    let cache = registry.instance_with_name("json");

    let mut map = HashMap::new();
    map.insert("a".to_string(), 1i32);
    cache.set_object_on_disk(map.clone(), "map")?;

    assert_eq!(
        cache.object_for_key::<HashMap<String, i32>>("map").as_deref(),
        Some(&map)
    );
    Ok(())
}

/// Backend keeping records in a map, to check the disk tier only relies on
/// the trait
#[derive(Debug, Default)]
struct MapBackend {
    records: Mutex<HashMap<(String, String), Vec<u8>>>,
}

impl DiskBackend for MapBackend {
    fn read(&self, namespace: &str, key: &str) -> Result<Option<Vec<u8>>> {
        let records = self.records.lock().unwrap();
        Ok(records.get(&(namespace.to_string(), key.to_string())).cloned())
    }

    fn write(&self, namespace: &str, key: &str, bytes: &[u8]) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        records.insert((namespace.to_string(), key.to_string()), bytes.to_vec());
        Ok(())
    }

    fn exists(&self, namespace: &str, key: &str) -> Result<bool> {
        let records = self.records.lock().unwrap();
        Ok(records.contains_key(&(namespace.to_string(), key.to_string())))
    }

    fn delete(&self, namespace: &str, key: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        records.remove(&(namespace.to_string(), key.to_string()));
        Ok(())
    }

    fn delete_all(&self, namespace: &str) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        records.retain(|(ns, _), _| ns != namespace);
        Ok(())
    }
}

#[test]
fn test_custom_backend() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let backend = Arc::new(MapBackend::default());
    let registry =
        InstanceRegistry::with_backend(CacheConfig::new(temp_dir.path()), backend.clone());
    let cache: CacheInstance = registry.instance_with_name("mapped");

    cache.set_object("stored".to_string(), "k")?;
    assert!(backend.exists("mapped", "k")?);

    cache.remove_all_objects_in_memory();
    assert_eq!(
        cache.object_for_key::<String>("k").as_deref().map(String::as_str),
        Some("stored")
    );

    // Nothing was written to the configured root
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    Ok(())
}

#[test]
fn test_unencodable_value_stays_in_memory() {
    let temp_dir = TempDir::new().unwrap();
    let registry =
        InstanceRegistry::new(CacheConfig::new(temp_dir.path()).with_codec(Codec::Json));
    let cache = registry.instance_with_name("json");

    // JSON object keys must be strings
    let mut map = HashMap::new();
    map.insert(vec![1u8], 1u8);

    let err = cache.set_object(map.clone(), "bad").unwrap_err();
    assert!(err.is_memory_only());
    assert!(matches!(
        err,
        CacheError::MemoryOnly { ref source, .. } if matches!(**source, CacheError::Serialization { .. })
    ));

    assert_eq!(
        cache.object_for_key_in_memory::<HashMap<Vec<u8>, u8>>("bad").as_deref(),
        Some(&map)
    );
    assert!(!cache.object_exists_for_key_on_disk("bad").unwrap());
}
