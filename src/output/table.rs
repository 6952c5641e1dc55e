use std::fmt::Write;

use crate::record::Catalog;

/// Display widths per canonical column. Truncation here is presentation
/// only; the stored values are untouched.
const WIDTHS: [usize; 6] = [20, 44, 40, 7, 6, 16];

/// Renders the catalog as a fixed-column text table with a count footer.
/// Never fails: every field is already a renderable string or sentinel.
pub fn render(catalog: &Catalog) -> String {
    let headers = catalog.headers();
    let widths = &WIDTHS[..headers.len()];

    let mut out = String::new();
    let _ = writeln!(out, "{}", format_row(headers.iter().map(|h| h.to_string()), widths));
    let total: usize = widths.iter().sum::<usize>() + 3 * (widths.len() - 1);
    let _ = writeln!(out, "{}", "-".repeat(total));

    for record in catalog.records() {
        let cells = record
            .field_values()
            .into_iter()
            .zip(widths)
            .map(|(value, width)| truncate(&value, *width));
        let _ = writeln!(out, "{}", format_row(cells, widths));
    }

    let _ = writeln!(out, "\n{} courses", catalog.len());
    out
}

fn format_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<w$}", cell, w = *width))
        .collect();
    padded.join(" | ").trim_end().to_string()
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{
        Catalog, CourseRecord, Description, Duration, FieldShape, ModuleCount, ModuleStats,
        StudyMode, StudyOptions, TopicCount,
    };

    fn sample() -> Catalog {
        Catalog::new(
            FieldShape::FULL,
            vec![CourseRecord {
                name: "Frontend".into(),
                description: Description::Text("Вивчай фронтенд".into()),
                study_options: StudyOptions::Modes(vec![StudyMode::FullTime]),
                module_stats: Some(ModuleStats {
                    modules: ModuleCount::Counted(3),
                    topics: TopicCount::Total(20),
                    duration: Duration::Text("10 місяців".into()),
                }),
            }],
        )
    }

    #[test]
    fn header_row_carries_every_canonical_column() {
        let rendered = render(&sample());
        let header = rendered.lines().next().unwrap();
        for name in FieldShape::FULL.headers() {
            assert!(header.contains(name), "missing column {name}: {header}");
        }
    }

    #[test]
    fn rows_and_footer_reflect_the_records() {
        let rendered = render(&sample());
        assert!(rendered.contains("Frontend"));
        assert!(rendered.contains("10 місяців"));
        assert!(rendered.ends_with("1 courses\n"));
    }

    #[test]
    fn long_cells_are_truncated_for_display_only() {
        let mut catalog = sample();
        let long = "о".repeat(100);
        catalog = Catalog::new(
            FieldShape::FULL,
            vec![CourseRecord {
                description: Description::Text(long.clone()),
                ..catalog.records()[0].clone()
            }],
        );
        let rendered = render(&catalog);
        assert!(!rendered.contains(&long));
        assert!(rendered.contains("..."));
    }

    #[test]
    fn basic_shape_renders_three_columns() {
        let catalog = Catalog::new(
            FieldShape::BASIC,
            vec![CourseRecord {
                name: "QA".into(),
                description: Description::NotFound,
                study_options: StudyOptions::Modes(vec![]),
                module_stats: None,
            }],
        );
        let rendered = render(&catalog);
        let header = rendered.lines().next().unwrap();
        assert!(header.contains("Study Options"));
        assert!(!header.contains("Modules"));
        assert!(rendered.contains("No study options available"));
    }
}
