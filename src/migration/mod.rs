//! Versioned migrations for persisted story documents.
//!
//! A document is migrated by running, in ascending order, every step whose
//! version is above the document's own. Steps work on raw JSON and repair
//! odd legacy data instead of failing; only a missing `pages` array or a
//! version from the future stops a migration.

mod steps;
mod visit;

use serde_json::{Map, Value};

use crate::error::{MigrationError, MigrationResult};

/// Version written by this engine
pub const CURRENT_VERSION: u32 = 13;

type Step = fn(&mut Map<String, Value>);

/// Every schema change, in the order it shipped
const STEPS: &[(u32, &str, Step)] = &[
    (1, "initial_version", steps::v0001_initial_version::migrate),
    (2, "shape_types", steps::v0002_shape_types::migrate),
    (3, "fullbleed_to_background", steps::v0003_fullbleed_to_background::migrate),
    (4, "rotation_angle", steps::v0004_rotation_angle::migrate),
    (5, "font_objects", steps::v0005_font_objects::migrate),
    (6, "padding_objects", steps::v0006_padding_objects::migrate),
    (7, "color_objects", steps::v0007_color_objects::migrate),
    (8, "background_overlay_paint", steps::v0008_background_overlay_paint::migrate),
    (9, "remove_link_type", steps::v0009_remove_link_type::migrate),
    (10, "inline_text_formatting", steps::v0010_inline_text_formatting::migrate),
    (11, "default_background_element", steps::v0011_default_background_element::migrate),
    (12, "animation_targets", steps::v0012_animation_targets::migrate),
    (13, "element_groups", steps::v0013_element_groups::migrate),
];

/// Migrates `document`, persisted at `from_version`, to [`CURRENT_VERSION`].
///
/// A document already at the current version is returned unchanged.
pub fn migrate(mut document: Value, from_version: u32) -> MigrationResult<Value> {
    let root = document
        .as_object_mut()
        .ok_or_else(|| MigrationError::InvalidDocument {
            reason: "document root must be a JSON object".into(),
        })?;
    if !root.get("pages").is_some_and(Value::is_array) {
        return Err(MigrationError::InvalidDocument {
            reason: "document must have a pages array".into(),
        });
    }
    if from_version > CURRENT_VERSION {
        return Err(MigrationError::UnsupportedVersion {
            version: from_version,
        });
    }

    let mut pending = STEPS
        .iter()
        .filter(|(version, _, _)| *version > from_version)
        .peekable();
    if pending.peek().is_none() {
        log::debug!("Document is at version {from_version}, no migration needed");
        return Ok(document);
    }

    for (version, name, step) in pending {
        log::debug!("Running migration v{version:04} {name}");
        step(root);
    }
    root.insert("version".to_string(), Value::from(CURRENT_VERSION));

    log::info!("Migrated document from version {from_version} to {CURRENT_VERSION}");
    Ok(document)
}

/// Migrates a document using the version it declares
pub fn migrate_document(document: Value) -> MigrationResult<Value> {
    let version = document_version(&document)?;
    migrate(document, version)
}

/// Reads a document's `version`. Documents from before versioning have
/// none and count as version 0.
pub fn document_version(document: &Value) -> MigrationResult<u32> {
    let invalid = |reason: String| MigrationError::InvalidDocument { reason };
    match document.get("version") {
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|version| u32::try_from(version).ok())
            .ok_or_else(|| invalid(format!("version must be a non-negative integer, got {n}"))),
        Some(Value::String(s)) => s
            .trim()
            .parse::<u32>()
            .map_err(|_| invalid(format!("cannot parse version string: {s}"))),
        None | Some(Value::Null) => {
            log::warn!("Document has no version, assuming version 0");
            Ok(0)
        }
        Some(_) => Err(invalid("version field has unexpected type".into())),
    }
}
