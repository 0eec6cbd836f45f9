//! Text rendering of series listings and calculation results.

use std::fmt;

use hinge_core::{BoringResult, HingeSeries, SeriesCatalogue, TableRounding};

/// One line per registered key with the series it resolves to.
struct SeriesListing<'a>(&'a SeriesCatalogue);

impl fmt::Display for SeriesListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.0.sorted_keys() {
            if let Ok(series) = self.0.resolve(&key) {
                writeln!(
                    f,
                    "{:<24} {} | T {} | K {} | {}°",
                    key,
                    series.display_name,
                    series.thickness_range_label(),
                    series.k_range_label(),
                    series.opening_angle_deg
                )?;
            }
        }
        Ok(())
    }
}

/// Full result block, warnings last.
struct ResultReport<'a>(&'a BoringResult);

impl fmt::Display for ResultReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        writeln!(f, "═══════════════════════════════════════")?;
        writeln!(f, "  HINGE BORING RESULTS")?;
        writeln!(f, "═══════════════════════════════════════")?;
        writeln!(f, "Hinge series:       {}", result.series_code)?;
        writeln!(f, "Door thickness:     {:.1} mm", result.thickness_mm)?;
        writeln!(f, "Door height:        {}", mm_or_na(result.height_mm))?;
        writeln!(f, "Chosen K:           {:.1} mm", result.k_mm)?;
        writeln!(f, "A (inner clear):    {}", mm_or_na(result.a_mm))?;
        writeln!(f, "L (outer clear):    {}", mm_or_na(result.l_mm))?;
        writeln!(f, "C (max moulding):   {}", mm_or_na(result.c_mm))?;
        match result.recommended_hinge_count {
            Some(count) => writeln!(f, "Recommended hinges: {}", count)?,
            None => writeln!(f, "Recommended hinges: N/A (no hinge-count curve defined)")?,
        }

        if result.has_warnings() {
            writeln!(f)?;
            writeln!(f, "Warnings:")?;
            for message in result.warning_messages() {
                writeln!(f, " - {}", message)?;
            }
        }
        Ok(())
    }
}

pub fn series_listing(catalogue: &SeriesCatalogue) -> String {
    SeriesListing(catalogue).to_string()
}

/// Header describing the series in use.
pub fn series_summary(series: &HingeSeries) -> String {
    format!(
        "Using hinge series: {}\nSupported door thickness range: {}\nAllowed K range: {}\n",
        series.display_name,
        series.thickness_range_label(),
        series.k_range_label()
    )
}

pub fn result_report(result: &BoringResult) -> String {
    ResultReport(result).to_string()
}

/// Keys the user can pass to `--series`, shown before interactive prompts.
pub fn available_series(catalogue: &SeriesCatalogue) -> String {
    format!("Available hinge series: {}", catalogue.sorted_keys().join(", "))
}

/// Line naming the table rounding, only when settings override the default.
pub fn rounding_note(rounding: TableRounding) -> Option<String> {
    (rounding != TableRounding::default())
        .then(|| format!("Table rounding: {}", rounding.display_name()))
}

fn mm_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1} mm", v),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hinge_core::{calculate, DoorSpec};

    #[test]
    fn test_report_lists_values_and_warnings() {
        let series = SeriesCatalogue::standard().resolve("100").unwrap();
        let result = calculate(&series, &DoorSpec::new(18.0));
        let report = result_report(&result);

        assert!(report.contains("salice_silentia_100"));
        assert!(report.contains("A (inner clear):    1.4 mm"));
        assert!(report.contains("Door height:        1000.0 mm"));
        assert!(report.contains("Recommended hinges: 2"));
        assert!(report.contains("Warnings:"));
        assert!(report.contains("default K = 3mm"));
    }

    #[test]
    fn test_report_missing_values() {
        let series = SeriesCatalogue::standard().resolve("100").unwrap();
        let result = calculate(&series, &DoorSpec::new(14.0).with_k(3.0).with_height(800.0));
        let report = result_report(&result);
        assert!(report.contains("C (max moulding):   N/A"));
        assert!(report.contains("extend the tables"));
    }

    #[test]
    fn test_report_for_untabulated_series() {
        let series = SeriesCatalogue::standard().resolve("200-94").unwrap();
        let result = calculate(&series, &DoorSpec::new(22.0).with_k(5.0));
        let report = result_report(&result);

        assert!(report.contains("Door height:        N/A"));
        assert!(report.contains("A (inner clear):    N/A"));
        assert!(report.contains("Recommended hinges: N/A"));
        assert!(report.contains("No A/L table entry for T=22mm and K=5mm"));
        assert!(report.ends_with('\n'));
    }

    #[test]
    fn test_listing_has_every_key() {
        let catalogue = SeriesCatalogue::standard();
        let listing = series_listing(&catalogue);
        assert_eq!(listing.lines().count(), catalogue.len());
        assert!(listing.lines().next().unwrap().starts_with("100 "));
        assert!(listing.contains("19-35 mm"));
    }

    #[test]
    fn test_series_summary() {
        let series = SeriesCatalogue::standard().resolve("200-94").unwrap();
        let summary = series_summary(&series);
        assert!(summary.contains("Supported door thickness range: 19-35 mm"));
        assert!(summary.contains("Allowed K range: 3-9 mm"));
    }

    #[test]
    fn test_available_series_is_sorted() {
        let line = available_series(&SeriesCatalogue::standard());
        assert!(line.starts_with("Available hinge series: 100, 200-94, salice_100"));
        assert!(line.contains("salice_silentia_200_94"));
    }

    #[test]
    fn test_rounding_note_only_for_overrides() {
        assert_eq!(rounding_note(TableRounding::HalfEven), None);
        assert_eq!(
            rounding_note(TableRounding::Floor).as_deref(),
            Some("Table rounding: round down")
        );
    }
}
