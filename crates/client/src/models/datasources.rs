//! Data source models for the dashboard data source API.

use grafana_config::{DataSourceSpec, DataSourceType};
use serde::{Deserialize, Serialize};

/// Server-side data source, as returned by `GET /api/datasources/name/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct DataSourceRecord {
    pub id: u64,
    #[serde(default)]
    pub uid: Option<String>,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Lookup probe: only the `name` field decides whether the data source exists.
#[derive(Debug, Deserialize)]
pub(crate) struct DataSourceName {
    #[serde(default)]
    pub name: Option<String>,
}

/// Body of `POST /api/datasources`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateDataSourceRequest<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: DataSourceType,
    pub access: &'static str,
    pub url: &'a str,
    pub basic_auth: bool,
    pub is_default: bool,
}

impl<'a> From<&'a DataSourceSpec> for CreateDataSourceRequest<'a> {
    fn from(spec: &'a DataSourceSpec) -> Self {
        Self {
            name: &spec.name,
            kind: spec.kind,
            access: "proxy",
            url: &spec.url,
            basic_auth: false,
            is_default: false,
        }
    }
}

/// Body of `GET /api/datasources/{id}/health`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataSourceHealth {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_wire_format() {
        let spec = DataSourceSpec::new("Loki", DataSourceType::Loki, "http://loki:3100");
        let body = serde_json::to_value(CreateDataSourceRequest::from(&spec)).unwrap();

        assert_eq!(
            body,
            json!({
                "name": "Loki",
                "type": "loki",
                "access": "proxy",
                "url": "http://loki:3100",
                "basicAuth": false,
                "isDefault": false
            })
        );
    }

    #[test]
    fn test_deserialize_record_ignores_extra_fields() {
        let record: DataSourceRecord = serde_json::from_value(json!({
            "id": 7,
            "uid": "P1809F7CD0C75ACF3",
            "orgId": 1,
            "name": "Prometheus",
            "type": "prometheus",
            "access": "proxy",
            "url": "http://prometheus:9090",
            "jsonData": {}
        }))
        .unwrap();

        assert_eq!(record.id, 7);
        assert_eq!(record.uid.as_deref(), Some("P1809F7CD0C75ACF3"));
        assert_eq!(record.kind.as_deref(), Some("prometheus"));
    }

    #[test]
    fn test_name_probe_tolerates_missing_name() {
        let probe: DataSourceName =
            serde_json::from_value(json!({"message": "Data source not found"})).unwrap();
        assert!(probe.name.is_none());
    }
}
