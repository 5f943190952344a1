//! Configuration key vocabulary for item metadata
//!
//! Each resolvable attribute has a `.field` key naming a value-map entry and
//! a `.defaultValue` key carrying a literal.

/// Prefix shared by every item metadata key
pub const PREFIX: &str = "itemMetadata.";

pub const OBJECT_TYPE: &str = "itemMetadata.objectType";

pub const TITLE_FIELD: &str = "itemMetadata.title.field";
pub const TITLE_VALUE: &str = "itemMetadata.title.defaultValue";

pub const SOURCE_REPOSITORY_URL_FIELD: &str = "itemMetadata.sourceRepositoryUrl.field";
pub const SOURCE_REPOSITORY_URL_VALUE: &str = "itemMetadata.sourceRepositoryUrl.defaultValue";

pub const CONTENT_LANGUAGE_FIELD: &str = "itemMetadata.contentLanguage.field";
pub const CONTENT_LANGUAGE_VALUE: &str = "itemMetadata.contentLanguage.defaultValue";

pub const UPDATE_TIME_FIELD: &str = "itemMetadata.updateTime.field";
pub const UPDATE_TIME_VALUE: &str = "itemMetadata.updateTime.defaultValue";

pub const CREATE_TIME_FIELD: &str = "itemMetadata.createTime.field";
pub const CREATE_TIME_VALUE: &str = "itemMetadata.createTime.defaultValue";

pub const MIME_TYPE_FIELD: &str = "itemMetadata.mimeType.field";
pub const MIME_TYPE_VALUE: &str = "itemMetadata.mimeType.defaultValue";

pub const HASH_FIELD: &str = "itemMetadata.hash.field";
pub const HASH_VALUE: &str = "itemMetadata.hash.defaultValue";

pub const CONTAINER_NAME_FIELD: &str = "itemMetadata.containerName.field";
pub const CONTAINER_NAME_VALUE: &str = "itemMetadata.containerName.defaultValue";

/// Every recognized key, in documentation order
pub const ALL: &[&str] = &[
    OBJECT_TYPE,
    TITLE_FIELD,
    TITLE_VALUE,
    SOURCE_REPOSITORY_URL_FIELD,
    SOURCE_REPOSITORY_URL_VALUE,
    CONTENT_LANGUAGE_FIELD,
    CONTENT_LANGUAGE_VALUE,
    UPDATE_TIME_FIELD,
    UPDATE_TIME_VALUE,
    CREATE_TIME_FIELD,
    CREATE_TIME_VALUE,
    MIME_TYPE_FIELD,
    MIME_TYPE_VALUE,
    HASH_FIELD,
    HASH_VALUE,
    CONTAINER_NAME_FIELD,
    CONTAINER_NAME_VALUE,
];

pub fn is_known(key: &str) -> bool {
    ALL.contains(&key)
}
