/// Human-readable label for a stage filter button.
///
/// Catalog stages titled "Stage N" are labelled by the school years they
/// cover; anything else is a single year.
pub fn stage_label(stage_id: &str, stage_title: &str) -> String {
    if stage_title.contains("Stage") {
        let years = match stage_id {
            "4" => "7-8",
            "5" => "9-10",
            _   => "11-12",
        };
        format!("Years {years}")
    } else {
        format!("Year {stage_id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_titles_map_to_year_ranges() {
        assert_eq!(stage_label("4", "Stage 4"), "Years 7-8");
        assert_eq!(stage_label("5", "Stage 5"), "Years 9-10");
        assert_eq!(stage_label("6", "Stage 6"), "Years 11-12");
    }

    #[test]
    fn test_plain_titles_are_single_years() {
        assert_eq!(stage_label("11", "Year 11"), "Year 11");
    }
}
