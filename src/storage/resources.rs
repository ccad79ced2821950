// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 TechRover Solutions

//! Named content resources with transparent sealing.
//!
//! A resource file on disk is either plaintext JSON (legacy content that
//! predates sealing) or the envelope `{"data": "<sealed string>"}`. Reads
//! detect the shape and unseal when needed; writes through the protected
//! path always seal. A sealed payload that no longer unseals degrades to
//! an empty collection instead of failing the read.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{ContentStorage, StorageError, StorageResult};
use crate::crypto::ContentCipher;

/// Maximum length of a resource name.
const MAX_NAME_LEN: usize = 64;

/// A validated content resource name.
///
/// Names map directly to file stems on disk, so anything outside
/// `[A-Za-z0-9_-]{1,64}` is rejected before it can become a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceName(String);

impl ResourceName {
    /// Parse and validate a resource name.
    pub fn parse(name: &str) -> Result<Self, InvalidResourceName> {
        if name.is_empty() || name.len() > MAX_NAME_LEN {
            return Err(InvalidResourceName);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(InvalidResourceName);
        }
        Ok(Self(name.to_string()))
    }

    /// The validated name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rejection for names that are not valid resource names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidResourceName;

/// On-disk envelope for a sealed resource.
///
/// The same shape travels over the wire on protected writes.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SealedResource {
    /// The sealed payload
    pub data: String,
}

/// Repository for named content resources.
pub struct ContentRepository<'a> {
    storage: &'a ContentStorage,
    cipher: &'a ContentCipher,
}

impl<'a> ContentRepository<'a> {
    /// Create a new ContentRepository.
    pub fn new(storage: &'a ContentStorage, cipher: &'a ContentCipher) -> Self {
        Self { storage, cipher }
    }

    /// Check if a resource exists.
    pub fn exists(&self, name: &ResourceName) -> bool {
        self.storage.exists(self.storage.paths().resource(name.as_str()))
    }

    /// Read a resource, unsealing it when stored in the sealed envelope.
    ///
    /// A sealed payload that fails to unseal yields an empty array rather
    /// than an error; plaintext files are returned verbatim.
    pub fn read(&self, name: &ResourceName) -> StorageResult<Value> {
        let path = self.storage.paths().resource(name.as_str());
        if !self.storage.exists(&path) {
            return Err(StorageError::NotFound(format!("resource {name}")));
        }

        let value: Value = self.storage.read_json(path)?;

        match sealed_payload(&value) {
            Some(sealed) => Ok(self
                .cipher
                .unseal(sealed)
                .unwrap_or_else(|| Value::Array(Vec::new()))),
            None => Ok(value),
        }
    }

    /// Seal a payload and persist it as the new resource contents.
    ///
    /// Fully overwrites prior content; no merge, no versioning.
    pub fn write_sealed(&self, name: &ResourceName, payload: &Value) -> StorageResult<()> {
        let data = self
            .cipher
            .seal(payload)
            .map_err(|e| StorageError::Sealing(e.to_string()))?;

        self.storage
            .write_json(self.storage.paths().resource(name.as_str()), &SealedResource { data })
    }

    /// Persist a payload as plaintext JSON, bypassing sealing.
    ///
    /// Used for content that is not sensitive and for seeding.
    pub fn write_plain(&self, name: &ResourceName, payload: &Value) -> StorageResult<()> {
        self.storage
            .write_json(self.storage.paths().resource(name.as_str()), payload)
    }

    /// List the names of all stored resources.
    pub fn list(&self) -> StorageResult<Vec<String>> {
        self.storage
            .list_files(self.storage.paths().content_dir(), "json")
    }
}

/// Detect the sealed envelope shape: an object with a string `data` field.
fn sealed_payload(value: &Value) -> Option<&str> {
    value.as_object()?.get("data")?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StoragePaths;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_repo() -> (ContentStorage, ContentCipher, TempDir) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut storage = ContentStorage::new(StoragePaths::new(dir.path()));
        storage.initialize().expect("failed to initialize storage");
        (storage, ContentCipher::new("test-passphrase"), dir)
    }

    fn name(s: &str) -> ResourceName {
        ResourceName::parse(s).unwrap()
    }

    #[test]
    fn resource_name_accepts_expected_forms() {
        for ok in ["reviews", "portfolio-items", "team_2025", "A1"] {
            assert!(ResourceName::parse(ok).is_ok(), "{ok} should parse");
        }
    }

    #[test]
    fn resource_name_rejects_path_like_input() {
        for bad in ["", "../etc/passwd", "a/b", "a.b", "name with spaces", "café"] {
            assert!(ResourceName::parse(bad).is_err(), "{bad} should be rejected");
        }
        assert!(ResourceName::parse(&"x".repeat(65)).is_err());
    }

    #[test]
    fn sealed_write_then_read_round_trips() {
        let (storage, cipher, _dir) = test_repo();
        let repo = ContentRepository::new(&storage, &cipher);

        let payload = json!({
            "items": [{"title": "CRM rollout", "year": 2025}, {"title": "ERP migration"}],
            "empty_list": [],
            "empty_obj": {}
        });

        repo.write_sealed(&name("portfolio"), &payload).unwrap();
        assert_eq!(repo.read(&name("portfolio")).unwrap(), payload);
    }

    #[test]
    fn sealed_envelope_is_what_lands_on_disk() {
        let (storage, cipher, _dir) = test_repo();
        let repo = ContentRepository::new(&storage, &cipher);
        let payload = json!([{"client": "Acme"}]);

        repo.write_sealed(&name("clients"), &payload).unwrap();

        // Raw file contents are the envelope, not the payload.
        let raw: Value = storage.read_json(storage.paths().resource("clients")).unwrap();
        let sealed = raw["data"].as_str().expect("data field is a string");
        assert_eq!(cipher.unseal(sealed), Some(payload));
    }

    #[test]
    fn plaintext_resource_is_returned_verbatim() {
        let (storage, cipher, _dir) = test_repo();
        let repo = ContentRepository::new(&storage, &cipher);

        let legacy = json!([{"service": "Cloud Consulting", "price": "from $5k"}]);
        repo.write_plain(&name("pricing"), &legacy).unwrap();

        assert_eq!(repo.read(&name("pricing")).unwrap(), legacy);
    }

    #[test]
    fn plaintext_object_with_non_string_data_is_verbatim() {
        let (storage, cipher, _dir) = test_repo();
        let repo = ContentRepository::new(&storage, &cipher);

        // `data` exists but is not a string, so this is not the envelope.
        let value = json!({"data": [1, 2, 3]});
        repo.write_plain(&name("stats"), &value).unwrap();

        assert_eq!(repo.read(&name("stats")).unwrap(), value);
    }

    #[test]
    fn undecryptable_envelope_degrades_to_empty_array() {
        let (storage, cipher, _dir) = test_repo();
        let repo = ContentRepository::new(&storage, &cipher);

        repo.write_plain(&name("reviews"), &json!({"data": "not-a-sealed-string"}))
            .unwrap();

        assert_eq!(repo.read(&name("reviews")).unwrap(), json!([]));
    }

    #[test]
    fn envelope_sealed_under_other_passphrase_degrades_to_empty_array() {
        let (storage, cipher, _dir) = test_repo();
        let foreign = ContentCipher::new("other-passphrase");
        let sealed = foreign.seal(&json!(["secret"])).unwrap();

        let repo = ContentRepository::new(&storage, &cipher);
        repo.write_plain(&name("reviews"), &json!({"data": sealed}))
            .unwrap();

        assert_eq!(repo.read(&name("reviews")).unwrap(), json!([]));
    }

    #[test]
    fn missing_resource_is_not_found() {
        let (storage, cipher, _dir) = test_repo();
        let repo = ContentRepository::new(&storage, &cipher);

        let result = repo.read(&name("missing"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn last_write_wins() {
        let (storage, cipher, _dir) = test_repo();
        let repo = ContentRepository::new(&storage, &cipher);

        let first = json!([{"v": 1}]);
        let second = json!([{"v": 2}]);

        repo.write_sealed(&name("campaigns"), &first).unwrap();
        repo.write_sealed(&name("campaigns"), &second).unwrap();

        // No merge: the stored state equals the second payload alone.
        assert_eq!(repo.read(&name("campaigns")).unwrap(), second);
    }

    #[test]
    fn list_returns_all_resources() {
        let (storage, cipher, _dir) = test_repo();
        let repo = ContentRepository::new(&storage, &cipher);

        repo.write_sealed(&name("reviews"), &json!([])).unwrap();
        repo.write_plain(&name("pricing"), &json!([])).unwrap();

        let mut names = repo.list().unwrap();
        names.sort();
        assert_eq!(names, vec!["pricing", "reviews"]);
    }
}
