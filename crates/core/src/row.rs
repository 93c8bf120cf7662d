#![forbid(unsafe_code)]

use serde::Serialize;

use crate::columns::{ColumnId, Selection};

/// One container of one pod. Absent values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRow {
    pub namespace: String,
    pub pod: String,
    pub container: String,
    pub image: String,
    pub pull_policy: String,
}

impl ImageRow {
    pub fn new(namespace: &str, pod: &str, container: &str, image: &str, pull_policy: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            pod: pod.to_string(),
            container: container.to_string(),
            image: image.to_string(),
            pull_policy: pull_policy.to_string(),
        }
    }

    pub fn field(&self, col: ColumnId) -> &str {
        match col {
            ColumnId::Namespace => &self.namespace,
            ColumnId::Pod => &self.pod,
            ColumnId::Container => &self.container,
            ColumnId::Image => &self.image,
            ColumnId::ImagePullPolicy => &self.pull_policy,
        }
    }

    /// Cell values in selection order.
    pub fn select(&self, selection: &Selection) -> Vec<&str> {
        selection.columns().iter().map(|c| self.field(*c)).collect()
    }

    /// Copy restricted to the selected columns, for structured output.
    pub fn record(&self, selection: &Selection) -> ImageRecord<'_> {
        let pick = |col: ColumnId| selection.contains(col).then(|| self.field(col));
        ImageRecord {
            namespace: pick(ColumnId::Namespace),
            pod: pick(ColumnId::Pod),
            container: pick(ColumnId::Container),
            image: pick(ColumnId::Image),
            image_pull_policy: pick(ColumnId::ImagePullPolicy),
        }
    }
}

/// Serializable view of a row; unselected fields are left out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pod: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_pull_policy: Option<&'a str>,
}
