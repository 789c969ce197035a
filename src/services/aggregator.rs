use crate::models::{
    AggregatedStatistics, Metrics, StatisticsEntry, UpstreamItem, UpstreamPayload, UserSummary,
};
use crate::services::coefficients::COEFFICIENTS;
use std::collections::BTreeMap;

/// Turns the statistics API payload into the per-user listing and results.
///
/// Items without a user id or full name are skipped. When ids repeat, every
/// occurrence is listed in `users_list` but the last one wins in
/// `statistics`. The listing is sorted by full name (stable, code point
/// order).
pub fn aggregate(payload: &UpstreamPayload) -> AggregatedStatistics {
    let mut users_list = Vec::with_capacity(payload.items.len());
    let mut statistics = BTreeMap::new();
    let mut skipped = 0usize;

    for item in &payload.items {
        let Some((id, full_name)) = item
            .user
            .as_ref()
            .and_then(|user| Some((user.id.as_ref()?, user.full_name.as_deref()?)))
            .filter(|(id, full_name)| id.is_present() && !full_name.is_empty())
        else {
            skipped += 1;
            continue;
        };

        users_list.push(UserSummary {
            id: id.clone(),
            full_name: full_name.to_string(),
        });

        let raw = raw_metrics(item);
        let calculated = raw.weighted(&COEFFICIENTS);

        statistics.insert(
            id.to_string(),
            StatisticsEntry {
                full_name: full_name.to_string(),
                raw,
                calculated,
                total_result: calculated.total(),
            },
        );
    }

    users_list.sort_by(|a, b| a.full_name.cmp(&b.full_name));

    if skipped > 0 {
        tracing::debug!("Skipped {} items without user id or name", skipped);
    }

    AggregatedStatistics {
        users_list,
        statistics,
    }
}

fn raw_metrics(item: &UpstreamItem) -> Metrics {
    Metrics {
        dc_collected: item.collected_ds,
        store_collected: item.collected_shop,
        dc_moved: item.transfer_ds,
        placed: item.placement,
        weight_placement: item.placement_weight,
        packing_order: item.packed_item_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Identifier;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> UpstreamPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn sorts_users_and_weighs_counters() {
        let result = aggregate(&payload(json!({
            "items": [
                {"user": {"id": "u1", "fullName": "B"}, "collectedDs": 10, "collectedShop": 0,
                 "transferDs": 0, "placement": 0, "placementWeight": 0, "packedItemCount": 0},
                {"user": {"id": "u2", "fullName": "A"}, "collectedDs": 0, "collectedShop": 0,
                 "transferDs": 0, "placement": 0, "placementWeight": 0, "packedItemCount": 0}
            ]
        })));

        let names: Vec<_> = result.users_list.iter().map(|u| u.full_name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(result.users_list[0].id, Identifier::from("u2"));

        let u1 = &result.statistics["u1"];
        assert_eq!(u1.raw.dc_collected, 10.0);
        assert_eq!(u1.calculated.dc_collected, 14.0);
        assert_eq!(u1.total_result, 14.0);
        assert_eq!(result.statistics["u2"].total_result, 0.0);
    }

    #[test]
    fn total_is_sum_of_calculated() {
        let result = aggregate(&payload(json!({
            "items": [{
                "user": {"id": 7, "fullName": "Olena"},
                "collectedDs": 3, "collectedShop": 5, "transferDs": 2,
                "placement": 11, "placementWeight": 120.5, "packedItemCount": 9
            }]
        })));

        let entry = &result.statistics["7"];
        let c = entry.calculated;
        assert_eq!(c.dc_collected, 3.0 * 1.40);
        assert_eq!(c.store_collected, 5.0 * 2.80);
        assert_eq!(c.dc_moved, 2.0 * 3.45);
        assert_eq!(c.placed, 11.0 * 1.59);
        assert_eq!(c.weight_placement, 120.5 * 0.14);
        assert_eq!(c.packing_order, 9.0 * 0.28);
        assert_eq!(
            entry.total_result,
            c.dc_collected
                + c.store_collected
                + c.dc_moved
                + c.placed
                + c.weight_placement
                + c.packing_order
        );
    }

    #[test]
    fn missing_counters_default_to_zero() {
        let result = aggregate(&payload(json!({
            "items": [{"user": {"id": "u1", "fullName": "Ivan"}, "placement": 2}]
        })));

        let entry = &result.statistics["u1"];
        assert_eq!(entry.raw.dc_collected, 0.0);
        assert_eq!(entry.raw.packing_order, 0.0);
        assert_eq!(entry.raw.placed, 2.0);
        assert_eq!(entry.total_result, 2.0 * 1.59);
    }

    #[test]
    fn skips_items_without_user_identity() {
        let result = aggregate(&payload(json!({
            "items": [
                {"collectedDs": 4},
                {"user": {"fullName": "No Id"}},
                {"user": {"id": "u3"}},
                {"user": {"id": "", "fullName": "Blank"}},
                {"user": {"id": "u4", "fullName": ""}},
                {"user": {"id": "u5", "fullName": "Kept"}}
            ]
        })));

        assert_eq!(result.users_list.len(), 1);
        assert_eq!(result.statistics.len(), 1);
        assert!(result.statistics.contains_key("u5"));
    }

    #[test]
    fn duplicate_ids_last_write_wins() {
        let result = aggregate(&payload(json!({
            "items": [
                {"user": {"id": "u1", "fullName": "Petro"}, "collectedDs": 1},
                {"user": {"id": "u1", "fullName": "Petro"}, "collectedDs": 5}
            ]
        })));

        assert_eq!(result.statistics.len(), 1);
        assert_eq!(result.statistics["u1"].raw.dc_collected, 5.0);
        assert_eq!(result.users_list.len(), 2);
    }

    #[test]
    fn ordering_is_case_sensitive_code_point_order() {
        let result = aggregate(&payload(json!({
            "items": [
                {"user": {"id": "1", "fullName": "bohdan"}},
                {"user": {"id": "2", "fullName": "Anna"}},
                {"user": {"id": "3", "fullName": "Яна"}},
                {"user": {"id": "4", "fullName": "Zoe"}}
            ]
        })));

        let names: Vec<_> = result.users_list.iter().map(|u| u.full_name.as_str()).collect();
        assert_eq!(names, ["Anna", "Zoe", "bohdan", "Яна"]);
    }

    #[test]
    fn absent_items_yield_empty_result() {
        let result = aggregate(&payload(json!({})));
        assert!(result.users_list.is_empty());
        assert!(result.statistics.is_empty());

        let body = serde_json::to_value(&result).unwrap();
        assert_eq!(body, json!({"usersList": [], "statistics": {}}));
    }

    #[test]
    fn serializes_wire_shape() {
        let result = aggregate(&payload(json!({
            "items": [{"user": {"id": "u1", "fullName": "B"}, "collectedDs": 10}]
        })));

        let body = serde_json::to_value(&result).unwrap();
        assert_eq!(body["usersList"][0], json!({"id": "u1", "fullName": "B"}));
        let entry = &body["statistics"]["u1"];
        assert_eq!(entry["fullName"], "B");
        assert_eq!(entry["raw"]["dcCollected"], 10.0);
        assert_eq!(entry["calculated"]["dcCollected"], 14.0);
        assert_eq!(entry["calculated"]["packingOrder"], 0.0);
        assert_eq!(entry["totalResult"], 14.0);
    }
}
