//! Sensor tree model and path search.

use serde::Deserialize;

/// One node of the LibreHardwareMonitor sensor tree.
///
/// The remote serves the whole hardware hierarchy as nested nodes; only
/// the three fields we read are modeled, everything else in the payload is
/// ignored. Values are strings carrying unit suffixes (`"42,5 °C"`,
/// `"12,3 %"`) with a comma decimal separator.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SensorNode {
    /// Slash-delimited sensor path, e.g. `/amdcpu/0/temperature/2`
    #[serde(rename = "SensorId", default)]
    pub sensor_id: String,
    /// Raw textual reading, possibly unit-suffixed
    #[serde(rename = "Value", default)]
    pub value: String,
    /// Child nodes (absent on leaves)
    #[serde(rename = "Children", default)]
    pub children: Vec<SensorNode>,
}

/// Find a sensor by its path and parse its reading as a number.
///
/// Pre-order depth-first search, exact case-sensitive match, first hit
/// wins. A matching node whose value does not parse is treated as "no
/// match here" and the search continues into its children and siblings.
/// Returns `None` when nothing in the subtree yields a usable reading.
pub fn find_sensor(node: &SensorNode, sensor_id: &str) -> Option<f64> {
    if node.sensor_id == sensor_id {
        if let Some(value) = parse_sensor_value(&node.value) {
            return Some(value);
        }
    }

    node.children
        .iter()
        .find_map(|child| find_sensor(child, sensor_id))
}

/// Strip known unit suffixes and normalize the decimal separator.
fn parse_sensor_value(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }

    let cleaned = raw
        .replace("°C", "")
        .replace('%', "")
        .replace("GB", "")
        .replace(',', ".");

    cleaned.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(sensor_id: &str, value: &str) -> SensorNode {
        SensorNode {
            sensor_id: sensor_id.to_string(),
            value: value.to_string(),
            children: Vec::new(),
        }
    }

    fn branch(sensor_id: &str, children: Vec<SensorNode>) -> SensorNode {
        SensorNode {
            sensor_id: sensor_id.to_string(),
            value: String::new(),
            children,
        }
    }

    #[test]
    fn test_find_nested_sensor() {
        let tree = branch(
            "",
            vec![
                branch("/amdcpu/0", vec![leaf("/amdcpu/0/temperature/2", "55,3 °C")]),
                branch("/nvme/0", vec![leaf("/nvme/0/temperature/0", "42,5°C")]),
            ],
        );

        assert_eq!(find_sensor(&tree, "/amdcpu/0/temperature/2"), Some(55.3));
        assert_eq!(find_sensor(&tree, "/nvme/0/temperature/0"), Some(42.5));
    }

    #[test]
    fn test_find_missing_sensor() {
        let tree = branch("", vec![leaf("/amdcpu/0/temperature/2", "55,3 °C")]);
        assert_eq!(find_sensor(&tree, "/intelcpu/0/temperature/0"), None);
    }

    #[test]
    fn test_first_match_wins_preorder() {
        let tree = branch(
            "",
            vec![
                leaf("/lpc/nct6687d/0/temperature/0", "38,0 °C"),
                leaf("/lpc/nct6687d/0/temperature/0", "99,0 °C"),
            ],
        );
        assert_eq!(find_sensor(&tree, "/lpc/nct6687d/0/temperature/0"), Some(38.0));
    }

    #[test]
    fn test_unparsable_value_continues_search() {
        // Same id appears twice; the first carries no numeric reading.
        let tree = branch(
            "",
            vec![branch(
                "/nvme/0/temperature/0",
                vec![leaf("/nvme/0/temperature/0", "41,0 °C")],
            )],
        );
        assert_eq!(find_sensor(&tree, "/nvme/0/temperature/0"), Some(41.0));
    }

    #[test]
    fn test_unit_stripping() {
        assert_eq!(parse_sensor_value("42,5°C"), Some(42.5));
        assert_eq!(parse_sensor_value("87,1 %"), Some(87.1));
        assert_eq!(parse_sensor_value("931 GB"), Some(931.0));
        assert_eq!(parse_sensor_value("  12.0  "), Some(12.0));
        assert_eq!(parse_sensor_value(""), None);
        assert_eq!(parse_sensor_value("n/a"), None);
    }

    #[test]
    fn test_deserialize_remote_shape() {
        let json = r#"{
            "SensorId": "/nvme/0/temperature/0",
            "Value": "42,5°C",
            "Children": []
        }"#;
        let node: SensorNode = serde_json::from_str(json).unwrap();
        assert_eq!(find_sensor(&node, "/nvme/0/temperature/0"), Some(42.5));
    }

    #[test]
    fn test_deserialize_tolerates_missing_fields() {
        let node: SensorNode = serde_json::from_str(r#"{"Text": "Sensor"}"#).unwrap();
        assert!(node.sensor_id.is_empty());
        assert!(node.children.is_empty());
    }
}
