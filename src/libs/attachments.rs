//! Attachment file storage.
//!
//! The document store records metadata only; this module is the collaborator
//! that owns the bytes. Files live in an `attachments` directory under the
//! application data path, each under an opaque generated name that keeps the
//! original extension. The original client filename is never used as a path
//! component.
//!
//! Ordering contract with the document store: bytes are written and flushed
//! to disk before the metadata row is created, and on deletion the metadata
//! row goes first and the file second. A crash between the two deletion steps
//! can leave an orphaned file, which is accepted.

use crate::libs::config::AttachmentsConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::StoreError;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_debug};
use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const ATTACHMENTS_DIR_NAME: &str = "attachments";

pub struct AttachmentStorage {
    dir: PathBuf,
    config: AttachmentsConfig,
}

impl AttachmentStorage {
    pub fn new(config: AttachmentsConfig) -> Result<Self> {
        let dir = DataStorage::new().get_dir(ATTACHMENTS_DIR_NAME)?;
        Ok(Self { dir, config })
    }

    /// Generates a collision-resistant stored name for `original_name`,
    /// preserving its extension so downloads keep a usable content type.
    pub fn stored_name_for(original_name: &str) -> String {
        let id = Uuid::new_v4().simple().to_string();
        match Path::new(original_name).extension() {
            Some(ext) => format!("{}.{}", id, ext.to_string_lossy()),
            None => id,
        }
    }

    pub fn path_of(&self, stored_name: &str) -> PathBuf {
        self.dir.join(stored_name)
    }

    pub fn exists(&self, stored_name: &str) -> bool {
        self.path_of(stored_name).is_file()
    }

    /// Validates the upload policy for a source file before any bytes move.
    ///
    /// Size cap and extension whitelist come from the configuration; both
    /// must pass before the caller writes the file or touches the metadata
    /// store.
    pub fn check_policy(&self, source: &Path) -> Result<()> {
        let meta = fs::metadata(source)?;
        if !meta.is_file() {
            msg_bail_anyhow!(Message::AttachmentNotAFile(source.display().to_string()));
        }

        let max_bytes = self.config.max_file_size_mb * 1024 * 1024;
        if meta.len() > max_bytes {
            msg_bail_anyhow!(Message::AttachmentTooLarge(self.config.max_file_size_mb));
        }

        if let Some(allowed) = &self.config.allowed_extensions {
            let ext = source
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if !allowed.iter().any(|a| a.to_lowercase() == ext) {
                msg_bail_anyhow!(Message::AttachmentExtensionRejected(ext));
            }
        }

        Ok(())
    }

    /// Copies `source` into the attachment directory under `stored_name` and
    /// flushes it to disk. Returns the byte count actually written, which is
    /// what the metadata row records.
    pub fn store(&self, source: &Path, stored_name: &str) -> Result<u64> {
        let target = self.path_of(stored_name);
        let mut reader = File::open(source)?;
        let mut writer = File::create(&target)?;
        let size = io::copy(&mut reader, &mut writer)?;
        writer.sync_all()?;

        msg_debug!(format!("Stored attachment {} ({} bytes)", stored_name, size));
        Ok(size)
    }

    /// Copies a stored attachment to `destination`.
    ///
    /// A missing file is reported as `StoreError::FileMissing`, distinct from
    /// the document-not-found case the metadata store raises.
    pub fn retrieve(&self, stored_name: &str, destination: &Path) -> Result<u64> {
        let source = self.path_of(stored_name);
        if !source.is_file() {
            return Err(StoreError::FileMissing(stored_name.to_string()).into());
        }
        Ok(fs::copy(source, destination)?)
    }

    /// Removes the stored bytes. Missing files are ignored: the metadata row
    /// is already gone by the time this runs, and an orphan-less disk is all
    /// that is left to ensure.
    pub fn remove(&self, stored_name: &str) -> Result<()> {
        let path = self.path_of(stored_name);
        if path.is_file() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}
