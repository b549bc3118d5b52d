use super::Report;
use crate::core::Result;

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdvisorConfig;
    use crate::core::{AdvisorInput, MonetizationModel};
    use serde_json::Value;

    #[test]
    fn test_json_report_structure() {
        let input = AdvisorInput {
            monthly_budget: 1_000.0,
            channel_count: 1,
            ios_share: 60,
            monetization_model: MonetizationModel::NoMonetization,
            ..Default::default()
        };
        let report = Report::build(input, &AdvisorConfig::default()).unwrap();
        let json: Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();

        let assessment = &json["assessment"];
        assert_eq!(assessment["effective_budget_threshold"], 800.0);
        assert_eq!(assessment["effective_ios_budget"], 600.0);
        assert_eq!(assessment["mmp_category"], "gray_zone_risk");
        assert_eq!(assessment["skan_relevance"], "medium");
        assert_eq!(assessment["no_monetization_flag"], true);
        assert_eq!(assessment["monetization_skan_boost_applied"], false);

        assert_eq!(json["currency"], "eur");
        assert_eq!(json["mode"], "two-axis");
        assert_eq!(json["matrix"]["channel_boundary"], 1.5);
        assert!(json["recommendation"]["sections"].is_array());
        assert_eq!(json["input"]["monetization_model"], "no_monetization");
    }
}
